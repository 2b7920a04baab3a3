// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use reqwest::header;
use reqwest_middleware::ClientWithMiddleware;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

/// No middleware is attached: retries and error classification happen in the dispatcher.
pub type HTTPClient = ClientWithMiddleware;

pub static HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Process-wide client, created on first use and shared by every dispatcher.
pub static HTTP_CLIENT: LazyLock<Arc<HTTPClient>> = LazyLock::new(|| {
    let user_agent = format!("ruledhttp/{}", env!("CARGO_PKG_VERSION"));

    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        header::HeaderValue::from_str(&user_agent).expect("user agent is a valid header value"),
    );

    let base_http_client = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("TLS backend should be available");

    let http_client = reqwest_middleware::ClientBuilder::new(base_http_client).build();
    Arc::new(http_client)
});
