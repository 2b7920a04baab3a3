// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use bytes::Bytes;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub static DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub static DEFAULT_RETRY_INTERVAL_MILLIS: u64 = 1000;

/// Decoration applied to requests whose URL starts with `base_url`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HttpRule {
    pub base_url: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl HttpRule {
    pub fn new(base_url: &str, query: &str, headers: &[(&str, &str)]) -> Self {
        Self {
            base_url: base_url.to_string(),
            query: query.to_string(),
            headers: headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    pub fn matches(&self, url: &str) -> bool {
        !self.base_url.is_empty() && url.starts_with(self.base_url.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Put => f.write_str("PUT"),
        }
    }
}

/// Request built for a single send attempt. Never reused across attempts.
///
/// `url` carries the rule decorations and may hold credentials, so anything
/// reported back to callers or logs refers to `target` instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuledRequest {
    pub target: String,
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<Bytes>,
}

impl RuledRequest {
    pub fn new(url: String, method: HttpMethod) -> Self {
        Self {
            target: url.clone(),
            url,
            method,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl Display for RuledRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} {}", self.method, self.target))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            interval,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_ATTEMPTS,
            Duration::from_millis(DEFAULT_RETRY_INTERVAL_MILLIS),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::models::{HttpRule, RetryPolicy};
    use assertor::{BooleanAssertion, EqualityAssertion};
    use std::time::Duration;

    #[test]
    fn should_match_urls_starting_with_base_url() {
        let rule = HttpRule::new("https://api.example.com/", "?token=abc", &[]);

        assertor::assert_that!(rule.matches("https://api.example.com/v1/items")).is_true();
        assertor::assert_that!(rule.matches("https://other.example.com/v1/items")).is_false();
    }

    #[test]
    fn should_never_match_with_empty_base_url() {
        let rule = HttpRule::new("", "?token=abc", &[]);

        assertor::assert_that!(rule.matches("https://api.example.com")).is_false();
        assertor::assert_that!(rule.matches("")).is_false();
    }

    #[test]
    fn should_match_prefixes_case_sensitively() {
        let rule = HttpRule::new("https://API.example.com", "", &[]);

        assertor::assert_that!(rule.matches("https://api.example.com/v1")).is_false();
    }

    #[test]
    fn should_parse_rules_with_optional_fields() {
        let payload = r#"
            [
              {
                "base_url": "https://api.example.com",
                "query": "?sig=123",
                "headers": { "Authorization": "Bearer abc" }
              },
              {
                "base_url": "https://cdn.example.com"
              }
            ]
        "#;

        let rules = serde_json::from_str::<Vec<HttpRule>>(payload).unwrap();

        let expected = vec![
            HttpRule::new("https://api.example.com", "?sig=123", &[("Authorization", "Bearer abc")]),
            HttpRule::new("https://cdn.example.com", "", &[]),
        ];
        assertor::assert_that!(rules).is_equal_to(expected);
    }

    #[test]
    fn should_keep_at_least_one_attempt() {
        let policy = RetryPolicy::new(0, Duration::from_millis(10));

        assertor::assert_that!(policy.max_attempts).is_equal_to(1);
    }

    #[test]
    fn should_default_to_three_attempts_spaced_by_one_second() {
        let policy = RetryPolicy::default();

        assertor::assert_that!(policy.max_attempts).is_equal_to(3);
        assertor::assert_that!(policy.interval).is_equal_to(Duration::from_secs(1));
    }
}
