#![allow(dead_code)]

use std::fs;
use std::path::Path;

use job_features::Result;

/// Header rows of the six extracts
pub const JOBS_HEADER: &str = "Person_Id,Calendar_Year,Total_Jobs,Switch_Job_1,Switch_Job_2";
pub const GENDER_HEADER: &str = "Person_Id,Gender";
pub const EDUCATION_HEADER: &str = "Person_Id,Max_Education";
pub const JOB_TYPE_HEADER: &str = "Person_Id,Job_ID,Job_Type";
pub const JOB_HISTORY_HEADER: &str = "Person_Id,Job_ID,Calendar_Year";
pub const AGE_HEADER: &str = "Person_Id,Calendar_Year,Age";

/// CSV text of every extract, one field per file
#[derive(Debug, Clone, Default)]
pub struct ExtractFixture {
    pub jobs: Vec<String>,
    pub gender: Vec<String>,
    pub education: Vec<String>,
    pub job_types: Vec<String>,
    pub job_history: Vec<String>,
    pub ages: Vec<String>,
}

fn write_extract(dir: &Path, name: &str, header: &str, rows: &[String]) -> Result<()> {
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(dir.join(format!("{name}.csv")), content)?;
    Ok(())
}

impl ExtractFixture {
    /// Write all six extract files into `dir`
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        write_extract(dir, "jobs_data", JOBS_HEADER, &self.jobs)?;
        write_extract(dir, "gender_data", GENDER_HEADER, &self.gender)?;
        write_extract(
            dir,
            "highest_grade_completed_data",
            EDUCATION_HEADER,
            &self.education,
        )?;
        write_extract(dir, "job_type_data", JOB_TYPE_HEADER, &self.job_types)?;
        write_extract(dir, "job_history_data", JOB_HISTORY_HEADER, &self.job_history)?;
        write_extract(dir, "age_data", AGE_HEADER, &self.ages)?;
        Ok(())
    }
}

/// Parse an output CSV into a header and rows of cells
pub fn read_output(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let content = fs::read_to_string(path)?;
    let mut lines = content.lines();
    let header = lines
        .next()
        .map(|h| h.split(',').map(str::to_string).collect())
        .unwrap_or_default();
    let rows = lines
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect();
    Ok((header, rows))
}

/// Parse a numeric cell; empty cells are missing
pub fn number(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        None
    } else {
        cell.parse().ok()
    }
}
