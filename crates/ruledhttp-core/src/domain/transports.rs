// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::domain::errors::DispatchError;
use crate::domain::interfaces::RequestTransport;
use crate::domain::models::RuledRequest;
use crate::infra::networking::transport::ReqwestTransport;
#[cfg(test)]
use std::sync::atomic::{AtomicU32, Ordering};
#[cfg(test)]
use std::sync::{Arc, Mutex};

pub enum HttpTransport {
    SharedClient(ReqwestTransport),
    #[cfg(test)]
    Flaky(FlakyTransport),
}

impl RequestTransport for HttpTransport {
    async fn send(&self, request: RuledRequest) -> Result<reqwest::Response, DispatchError> {
        match self {
            HttpTransport::SharedClient(delegate) => delegate.send(request).await,
            #[cfg(test)]
            HttpTransport::Flaky(fake) => fake.send(request).await,
        }
    }
}

/// Fails the first sends with a transport error, then delegates to a real transport.
#[cfg(test)]
pub struct FlakyTransport {
    remaining_failures: AtomicU32,
    sent_requests: Arc<Mutex<Vec<RuledRequest>>>,
    delegate: ReqwestTransport,
}

#[cfg(test)]
impl FlakyTransport {
    pub fn new(failures: u32, sent_requests: Arc<Mutex<Vec<RuledRequest>>>) -> Self {
        Self {
            remaining_failures: AtomicU32::new(failures),
            sent_requests,
            delegate: ReqwestTransport::new(crate::infra::networking::http::HTTP_CLIENT.clone()),
        }
    }
}

#[cfg(test)]
impl RequestTransport for FlakyTransport {
    async fn send(&self, request: RuledRequest) -> Result<reqwest::Response, DispatchError> {
        self.sent_requests
            .lock()
            .expect("recorded requests lock")
            .push(request.clone());

        let failing = self
            .remaining_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |remaining| remaining.checked_sub(1))
            .is_ok();

        if failing {
            return Err(DispatchError::Transport {
                url: request.target,
                cause: reqwest_middleware::Error::Middleware(anyhow::anyhow!("connection reset by peer")),
            });
        }

        self.delegate.send(request).await
    }
}
