// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::domain::errors::DispatchError;
use crate::domain::interfaces::RequestTransport;
use crate::domain::models::{HttpMethod, RuledRequest};
use crate::infra::networking::http::HTTPClient;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Method, Request};
use std::sync::Arc;
use url::Url;

pub struct ReqwestTransport {
    http_client: Arc<HTTPClient>,
}

impl ReqwestTransport {
    pub fn new(http_client: Arc<HTTPClient>) -> Self {
        Self { http_client }
    }

    fn convert(&self, ruled_request: RuledRequest) -> Result<Request, DispatchError> {
        let invalid = |reason: String| DispatchError::InvalidRequest {
            url: ruled_request.target.clone(),
            reason,
        };

        let url = Url::parse(&ruled_request.url).map_err(|e| invalid(e.to_string()))?;

        let method = match ruled_request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Put => Method::PUT,
        };

        let mut request = Request::new(method, url);

        for (name, value) in &ruled_request.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(format!("{name} : {e}")))?;
            let header_value = HeaderValue::from_str(value).map_err(|e| invalid(format!("{name} : {e}")))?;
            request.headers_mut().append(header_name, header_value);
        }

        if let Some(body) = ruled_request.body {
            *request.body_mut() = Some(body.into());
        }

        Ok(request)
    }
}

impl RequestTransport for ReqwestTransport {
    async fn send(&self, ruled_request: RuledRequest) -> Result<reqwest::Response, DispatchError> {
        let url = ruled_request.target.clone();
        let request = self.convert(ruled_request)?;

        self.http_client
            .execute(request)
            .await
            .map_err(|cause| classify(url, cause))
    }
}

fn classify(url: String, cause: reqwest_middleware::Error) -> DispatchError {
    match cause {
        reqwest_middleware::Error::Reqwest(error) if error.is_timeout() => DispatchError::Timeout {
            url,
            cause: reqwest_middleware::Error::Reqwest(error.without_url()),
        },
        reqwest_middleware::Error::Reqwest(error) => DispatchError::Transport {
            url,
            cause: reqwest_middleware::Error::Reqwest(error.without_url()),
        },
        other => DispatchError::Transport { url, cause: other },
    }
}
