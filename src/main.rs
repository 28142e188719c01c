use anyhow::Context;
use job_features::{FeatureBuilder, FeatureConfig};
use log::info;
use std::time::Instant;

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = FeatureConfig::default();
    info!("{config}");

    let start = Instant::now();
    FeatureBuilder::new()
        .with_config(config)
        .run()
        .context("Failed to generate job features")?;
    info!("Feature generation completed in {:?}", start.elapsed());

    println!("Processed data files saved.");
    Ok(())
}
