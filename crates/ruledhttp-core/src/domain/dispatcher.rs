// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::domain::errors::DispatchError;
use crate::domain::interfaces::RequestTransport;
use crate::domain::models::{HttpMethod, HttpRule, RetryPolicy, RuledRequest};
use crate::domain::transports::HttpTransport;
use bytes::Bytes;
use reqwest::Response;
use tokio::time::sleep;

pub struct RuledRequestDispatcher {
    transport: HttpTransport,
    retry_policy: RetryPolicy,
}

impl RuledRequestDispatcher {
    pub fn new(transport: HttpTransport, retry_policy: RetryPolicy) -> Self {
        Self {
            transport,
            retry_policy,
        }
    }

    /// First rule, in list order, whose non-empty base url prefixes `url`.
    pub fn match_rule<'a>(url: &str, rules: &'a [HttpRule]) -> Option<&'a HttpRule> {
        rules.iter().find(|rule| rule.matches(url))
    }

    /// Decorates `url` with the matching rule, if any.
    ///
    /// The rule query is appended verbatim, so a `url` already carrying query
    /// parameters ends up with whatever the plain concatenation produces.
    pub fn build_request(url: &str, rules: &[HttpRule], method: HttpMethod) -> RuledRequest {
        let Some(rule) = Self::match_rule(url, rules) else {
            return RuledRequest::new(url.to_string(), method);
        };

        log::debug!("[ruledhttp.dispatcher] {} matches rule for {}", url, rule.base_url);

        let mut request = RuledRequest::new(format!("{}{}", url, rule.query), method);
        request.target = url.to_string();
        for (name, value) in &rule.headers {
            request.headers.push((name.clone(), value.clone()));
        }
        request
    }

    pub async fn get(&self, url: &str, rules: &[HttpRule]) -> Result<Response, DispatchError> {
        let max_attempts = self.retry_policy.max_attempts;
        let mut attempt = 1;

        loop {
            let request = Self::build_request(url, rules, HttpMethod::Get);
            log::info!("[ruledhttp.dispatcher] sending {} (attempt {}/{})", url, attempt, max_attempts);

            match self.transport.send(request).await {
                Err(error) if error.is_transport() && attempt < max_attempts => {
                    log::warn!(
                        "[ruledhttp.dispatcher] attempt {}/{} failed, retrying in {:?} : {}",
                        attempt,
                        max_attempts,
                        self.retry_policy.interval,
                        error
                    );
                    sleep(self.retry_policy.interval).await;
                    attempt += 1;
                },
                outcome => return outcome,
            }
        }
    }

    pub async fn put(&self, url: &str, content: Bytes, rules: &[HttpRule]) -> Result<Response, DispatchError> {
        let mut request = Self::build_request(url, rules, HttpMethod::Put);
        request.body = Some(content);

        log::info!("[ruledhttp.dispatcher] sending PUT {}", url);
        self.transport.send(request).await
    }
}
