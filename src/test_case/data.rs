use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Maximum number of characters of the response body kept in a result record.
pub const RESPONSE_TEXT_LIMIT: usize = 500;

/// The http methods a scenario may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_reqwest(&self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// A single named scenario against the API under test.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub name: String,                         // human readable name for the test case.
    pub method: HttpMethod,                   // http method for the request.
    pub path: String,                         // path below the base url; empty for the root.
    pub expected_status: u16,                 // status that makes the test pass.
    pub payload: Option<Map<String, Value>>,  // json body, if any.
    pub headers: Option<Vec<(String, String)>>, // replaces the default headers when set.
}

impl TestCase {
    pub fn new(name: &str, method: HttpMethod, path: &str, expected_status: u16) -> Self {
        TestCase {
            name: name.to_string(),
            method,
            path: path.to_string(),
            expected_status,
            payload: None,
            headers: None,
        }
    }

    /// Attaches a json object as the request body. Anything other than an
    /// object is ignored, as payloads are key-value mappings.
    pub fn with_payload(mut self, payload: Value) -> Self {
        if let Value::Object(map) = payload {
            self.payload = Some(map);
        }
        self
    }

    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// The headers sent with the request.
    pub fn effective_headers(&self) -> Vec<(String, String)> {
        match &self.headers {
            Some(headers) => headers.clone(),
            None => vec![("Content-Type".to_string(), "application/json".to_string())],
        }
    }

    /// Joins the base url and the path: `<base>/<path>`, or `<base>/` for the root.
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        if self.path.is_empty() {
            format!("{}/", base)
        } else {
            format!("{}/{}", base, self.path.trim_start_matches('/'))
        }
    }
}

/// Outcome of one executed scenario, as written to the results file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub test_name: String,
    pub method: HttpMethod,
    pub endpoint: String,
    pub expected_status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_status: Option<u16>,
    pub success: bool,
    #[serde(default)]
    pub response_text: String,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub response_data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TestResult {
    /// A result for a request that got no usable response.
    pub fn without_response(test_case: &TestCase, error: String) -> Self {
        TestResult {
            test_name: test_case.name.clone(),
            method: test_case.method,
            endpoint: test_case.path.clone(),
            expected_status: test_case.expected_status,
            actual_status: None,
            success: false,
            response_text: String::new(),
            response_data: None,
            error: Some(error),
        }
    }

    /// A result for a request that got a response, whatever its status.
    pub fn with_response(test_case: &TestCase, status: u16, body: &str) -> Self {
        TestResult {
            test_name: test_case.name.clone(),
            method: test_case.method,
            endpoint: test_case.path.clone(),
            expected_status: test_case.expected_status,
            actual_status: Some(status),
            success: status == test_case.expected_status,
            response_text: truncate_chars(body, RESPONSE_TEXT_LIMIT),
            response_data: None,
            error: None,
        }
    }
}

// A present `response_data` is kept even when it is the json literal `null`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Returns at most `limit` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
