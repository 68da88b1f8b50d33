use crate::test_case::{HttpMethod, TestCase};
use serde_json::json;

/// The backend scenarios, in execution order.
pub fn default_test_cases() -> Vec<TestCase> {
    vec![
        TestCase::new("Root API Endpoint", HttpMethod::Get, "", 200),
        TestCase::new("Health Check", HttpMethod::Get, "health", 200),
        TestCase::new("Create Status Check", HttpMethod::Post, "status", 200)
            .with_payload(json!({ "client_name": "test_client" })),
        TestCase::new("Get Status Checks", HttpMethod::Get, "status", 200),
        TestCase::new("Chat Endpoint", HttpMethod::Post, "chat", 200)
            .with_payload(json!({ "job_id": "job-001", "message": "Test chat message" })),
    ]
}
