use std::error::Error as StdError;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::{config::Config, error::TestFailure, test_case::HttpMethod};

/// Status and body of a response that arrived within the timeout.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

// Owns the http client and the per-request settings shared by every test case.
#[derive(Debug)]
pub struct TestCtx {
    pub client: reqwest::blocking::Client,
    timeout_secs: u64,
    accept_invalid_certs: bool,

    exec_duration: Duration,
}

impl TestCtx {
    pub fn new(config: &Config) -> Result<Self> {
        if config.insecure {
            tracing::warn!("tls certificate verification is disabled");
        }
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(config.insecure)
            .timeout(config.timeout())
            .build()
            .context("Failed to create reqwest client")?;

        Ok(TestCtx {
            client,
            timeout_secs: config.timeout_secs,
            accept_invalid_certs: config.insecure,
            exec_duration: Duration::ZERO,
        })
    }

    /// Sends one request and reads the whole body. Every failure to obtain a
    /// complete response is mapped to a `TestFailure`.
    pub fn exec(
        &mut self,
        method: HttpMethod,
        url: &str,
        payload: Option<&Map<String, Value>>,
        headers: &[(String, String)],
    ) -> Result<HttpResponse, TestFailure> {
        let mut request = self.client.request(method.as_reqwest(), url);
        for (key, value) in headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let start = Instant::now();
        let result = request
            .send()
            .and_then(|response| {
                let status = response.status().as_u16();
                response.text().map(|body| HttpResponse { status, body })
            })
            .map_err(|e| self.classify(e));
        self.exec_duration = start.elapsed();

        tracing::debug!(%method, url, elapsed = ?self.exec_duration, ok = result.is_ok(), "request finished");
        result
    }

    pub fn exec_duration(&self) -> Duration {
        self.exec_duration
    }

    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    fn classify(&self, e: reqwest::Error) -> TestFailure {
        if e.is_timeout() {
            TestFailure::Timeout(self.timeout_secs)
        } else {
            TestFailure::Transport(describe(&e))
        }
    }
}

/// Parses a response body, falling back to an empty object when it is not json.
pub fn parse_body(body: &str) -> Value {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json,
        Err(e) => {
            tracing::debug!(error = %e, "response body is not json");
            Value::Object(Map::new())
        }
    }
}

// reqwest keeps the useful detail (refused, dns, ...) in the source chain.
fn describe(e: &reqwest::Error) -> String {
    let mut description = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !description.contains(&cause_text) {
            description.push_str(": ");
            description.push_str(&cause_text);
        }
        source = cause.source();
    }
    description
}
