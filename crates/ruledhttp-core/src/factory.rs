// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::domain::dispatcher::RuledRequestDispatcher;
use crate::domain::models::RetryPolicy;
use crate::domain::transports::HttpTransport;
use crate::infra::cli::reporter::ConsoleReporter;
use crate::infra::networking::http::HTTP_CLIENT;
use crate::infra::networking::transport::ReqwestTransport;
use crate::ruledhttp::RuledHttp;

pub fn create_dispatcher(retry_policy: RetryPolicy) -> RuledRequestDispatcher {
    let transport = HttpTransport::SharedClient(ReqwestTransport::new(HTTP_CLIENT.clone()));
    RuledRequestDispatcher::new(transport, retry_policy)
}

pub fn create_ruledhttp(retry_policy: RetryPolicy) -> RuledHttp {
    RuledHttp::new(create_dispatcher(retry_policy), ConsoleReporter)
}
