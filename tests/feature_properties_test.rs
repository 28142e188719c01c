//! Randomized checks of the feature invariants over generated extracts

use std::collections::{HashMap, HashSet};

use job_features::algorithm::features::job_category::reduce_job_types;
use job_features::algorithm::features::{EducationCategory, FeatureBuilder};
use job_features::models::{
    AgeRecord, EducationRecord, GenderRecord, JobHistoryRecord, JobRecord, JobTypeRecord,
};
use job_features::FeatureInputs;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate extracts where every respondent holds one job per year
fn generate_inputs(rng: &mut StdRng, respondents: i64) -> FeatureInputs {
    let mut inputs = FeatureInputs::default();

    for person_id in 1..=respondents {
        let first_year: i64 = rng.random_range(1990..2010);
        let years: i64 = rng.random_range(1..8);
        let total_jobs = f64::from(rng.random_range(1..4_i32));

        for year in first_year..first_year + years {
            inputs.jobs.push(JobRecord {
                person_id,
                calendar_year: year,
                total_jobs: Some(total_jobs),
                switch_job_1: Some(f64::from(u8::from(rng.random_bool(0.2)))),
                switch_job_2: None,
            });
            if rng.random_bool(0.8) {
                inputs.ages.push(AgeRecord {
                    person_id,
                    calendar_year: year,
                    age: Some(f64::from(rng.random_range(18..65_i32))),
                });
            }

            // Each year gets its own job id so categories never share a year
            let job_id = year;
            inputs.job_history.push(JobHistoryRecord {
                person_id,
                job_id,
                calendar_year: year,
            });
            for _ in 0..rng.random_range(0..3) {
                inputs.job_types.push(JobTypeRecord {
                    person_id,
                    job_id,
                    job_type: rng
                        .random_bool(0.9)
                        .then(|| f64::from(rng.random_range(1..7_i32))),
                });
            }
        }

        if rng.random_bool(0.95) {
            inputs.gender.push(GenderRecord {
                person_id,
                gender: Some(f64::from(rng.random_range(1..3_i32))),
            });
        }
        if rng.random_bool(0.95) {
            inputs.education.push(EducationRecord {
                person_id,
                max_education: Some(f64::from(rng.random_range(6..22_i32))),
            });
        }
    }

    inputs
}

#[test]
fn test_feature_invariants_hold_for_random_extracts() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let inputs = generate_inputs(&mut rng, 50);
        let outputs = FeatureBuilder::new().build(&inputs);

        let mut job_rows: HashMap<i64, i64> = HashMap::new();
        for job in &inputs.jobs {
            *job_rows.entry(job.person_id).or_default() += 1;
        }

        assert_eq!(outputs.jobs_unique.len(), 50, "seed {seed}");
        assert_eq!(outputs.jobs_switch.len(), inputs.jobs.len(), "seed {seed}");

        let labels: HashSet<&str> = EducationCategory::all().iter().map(|c| c.as_str()).collect();

        for row in &outputs.jobs_unique {
            assert_eq!(row.years_job_history, job_rows[&row.person_id]);

            match (row.female, row.gender.as_deref()) {
                (Some(0), Some("Male")) | (Some(1), Some("Female")) | (None, None) => {}
                other => panic!("inconsistent gender columns {other:?} (seed {seed})"),
            }

            if let Some(category) = row.education_ctg.as_deref() {
                assert!(labels.contains(category));
            }

            let fractions = [row.frac_years_pvt, row.frac_years_gvt, row.frac_years_self];
            let total: i64 = fractions.iter().map(|f| f.expect("history present")).sum();
            assert!((98..=102).contains(&total), "fractions sum to {total} (seed {seed})");
        }
    }
}

#[test]
fn test_reduction_yields_unique_jobs() {
    let mut rng = StdRng::seed_from_u64(7);
    let inputs = generate_inputs(&mut rng, 100);

    let reduced = reduce_job_types(&inputs.job_types);
    let keys: HashSet<(i64, i64)> = reduced.iter().map(|r| (r.person_id, r.job_id)).collect();
    assert_eq!(keys.len(), reduced.len());

    for job in &reduced {
        let max_code = inputs
            .job_types
            .iter()
            .filter(|t| t.person_id == job.person_id && t.job_id == job.job_id)
            .filter_map(|t| t.job_type)
            .reduce(f64::max);
        assert_eq!(job.job_type, max_code);
    }
}
