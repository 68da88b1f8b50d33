use colored::Colorize;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::TestFailure;
use crate::report::RunSummary;
use crate::test_case::{response_preview, ProgressDisplay, TestCase, TestResult};
use crate::test_context::{parse_body, TestCtx};

/// Runs test cases one after another and keeps the tally.
pub struct TestSuite {
    test_cases: Vec<TestCase>,
    ctx: TestCtx,
    base_url: String,
    verbose: bool,

    // stats
    tests_run: usize,
    tests_passed: usize,
    results: Vec<TestResult>,
}

impl TestSuite {
    pub fn new(test_cases: Vec<TestCase>, config: &Config) -> anyhow::Result<Self> {
        Ok(TestSuite {
            test_cases,
            ctx: TestCtx::new(config)?,
            base_url: config.base_url.clone(),
            verbose: config.verbose,
            tests_run: 0,
            tests_passed: 0,
            results: Vec::new(),
        })
    }

    /// Runs every test case in order. A failing case never stops the ones after it.
    pub fn run(&mut self) -> RunSummary {
        println!("\n🚀 Starting backend API tests...");

        let test_cases = std::mem::take(&mut self.test_cases);
        for test_case in &test_cases {
            self.run_test(test_case);
        }
        self.test_cases = test_cases;

        RunSummary::new(self.tests_run, self.tests_passed, self.results.clone())
    }

    /// Executes a single test case and records its outcome. Returns whether it
    /// passed along with the parsed response body (an empty object unless it passed).
    pub fn run_test(&mut self, test_case: &TestCase) -> (bool, Value) {
        let url = test_case.url(&self.base_url);
        let headers = test_case.effective_headers();

        self.tests_run += 1;
        println!("\n🔍 Testing {}...", test_case.name);
        println!("URL: {}", url);
        if self.verbose {
            test_case.print_request_info(&url);
        }

        let progress = ProgressDisplay::start(&url);
        let outcome = self
            .ctx
            .exec(test_case.method, &url, test_case.payload.as_ref(), &headers);
        progress.stop();

        let response = match outcome {
            Ok(response) => response,
            Err(failure) => {
                let result = TestResult::without_response(test_case, failure.to_string());
                return self.record_failure(result);
            }
        };

        println!("Response Status: {}", response.status);
        println!("Response: {}", response_preview(&response.body));
        if self.verbose {
            println!("{}", format!("Elapsed: {:?}", self.ctx.exec_duration()).yellow());
        }

        let mut result = TestResult::with_response(test_case, response.status, &response.body);
        if !result.success {
            let failure = TestFailure::StatusMismatch {
                expected: test_case.expected_status,
                actual: response.status,
            };
            result.error = Some(failure.to_string());
            return self.record_failure(result);
        }

        self.tests_passed += 1;
        println!("{}", format!("✅ Passed - Status: {}", response.status).green());
        let data = parse_body(&response.body);
        result.response_data = Some(data.clone());
        tracing::debug!(test = %test_case.name, "passed");
        self.results.push(result);
        (true, data)
    }

    fn record_failure(&mut self, result: TestResult) -> (bool, Value) {
        let error = result.error.clone().unwrap_or_default();
        println!("{}", format!("❌ Failed - {}", error).red());
        tracing::debug!(test = %result.test_name, %error, "failed");
        self.results.push(result);
        (false, Value::Object(Map::new()))
    }

    pub fn tests_run(&self) -> usize {
        self.tests_run
    }

    pub fn tests_passed(&self) -> usize {
        self.tests_passed
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_case::HttpMethod;

    fn unreachable_config() -> Config {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        Config {
            base_url: format!("http://127.0.0.1:{}/api", port),
            timeout_secs: 2,
            ..Config::default()
        }
    }

    #[test]
    fn test_empty_suite() {
        let mut suite = TestSuite::new(Vec::new(), &unreachable_config()).unwrap();
        let summary = suite.run();
        assert_eq!(summary.tests_run, 0);
        assert_eq!(summary.tests_passed, 0);
        assert_eq!(summary.success_rate, "0.0%");
        assert!(summary.all_passed());
    }

    #[test]
    fn test_transport_failure_is_recorded_and_run_continues() {
        let test_cases = vec![
            TestCase::new("Health Check", HttpMethod::Get, "health", 200),
            TestCase::new("Get Status Checks", HttpMethod::Get, "status", 200),
        ];
        let mut suite = TestSuite::new(test_cases, &unreachable_config()).unwrap();
        let summary = suite.run();

        assert_eq!(suite.tests_run(), 2);
        assert_eq!(suite.tests_passed(), 0);
        assert_eq!(suite.results().len(), 2);
        for result in suite.results() {
            assert!(!result.success);
            assert_eq!(result.actual_status, None);
            assert!(result.error.as_ref().unwrap().starts_with("Error: "));
        }
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn test_run_test_returns_empty_object_on_failure() {
        let mut suite = TestSuite::new(Vec::new(), &unreachable_config()).unwrap();
        let test_case = TestCase::new("Root API Endpoint", HttpMethod::Get, "", 200);
        let (success, data) = suite.run_test(&test_case);
        assert!(!success);
        assert_eq!(data, Value::Object(Map::new()));
        assert_eq!(suite.tests_run(), 1);
    }
}
