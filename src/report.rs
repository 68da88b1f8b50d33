use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::test_case::TestResult;

const RULE_WIDTH: usize = 60;

/// Aggregate of one full run, as persisted to the results file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub tests_run: usize,
    pub tests_passed: usize,
    pub success_rate: String,
    #[serde(rename = "test_results")]
    pub results: Vec<TestResult>,
    pub timestamp: String,
}

impl RunSummary {
    pub fn new(tests_run: usize, tests_passed: usize, results: Vec<TestResult>) -> Self {
        RunSummary {
            tests_run,
            tests_passed,
            success_rate: success_rate(tests_passed, tests_run),
            results,
            timestamp: chrono::Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.tests_passed == self.tests_run
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|result| !result.success)
    }

    pub fn print_stats(&self) {
        println!("\n{}", "=".repeat(RULE_WIDTH));
        println!(
            "📊 FINAL RESULTS: {}/{} tests passed",
            self.tests_passed, self.tests_run
        );
        println!("{}", "=".repeat(RULE_WIDTH));

        if self.all_passed() {
            println!("{}", "\n✅ All backend API tests passed!".green());
            return;
        }

        println!("{}", "\n❌ Some tests failed:".red());
        for result in self.failures() {
            println!(
                "  - {}: {}",
                result.test_name,
                result.error.as_deref().unwrap_or("Unknown error")
            );
        }
    }

    /// Writes the summary as pretty json, replacing any previous file.
    pub fn persist(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serializing test results")?;
        fs::write(path, json)
            .with_context(|| format!("writing test results to {}", path.display()))?;
        tracing::info!(path = %path.display(), "test results saved");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading test results from {}", path.display()))?;
        serde_json::from_str(&contents).context("parsing test results")
    }
}

/// Percentage of passed tests with one decimal, e.g. `"80.0%"`. A run with no
/// tests reports `"0.0%"`.
pub fn success_rate(passed: usize, run: usize) -> String {
    if run == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", passed as f64 / run as f64 * 100.0)
}
