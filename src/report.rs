use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tracing::warn;

use crate::runner::CaseReport;

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn from_results(started_at: DateTime<Utc>, results: Vec<CaseReport>) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        SuiteReport {
            started_at,
            completed_at: Utc::now(),
            total: results.len(),
            passed,
            failed: results.len() - passed,
            results,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

pub fn save_report(path: &Path, report: &SuiteReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                warn!("Failed to write report to {:?}: {}", path, e);
            }
        }
        Err(e) => {
            warn!("Failed to serialize report: {}", e);
        }
    }
}
