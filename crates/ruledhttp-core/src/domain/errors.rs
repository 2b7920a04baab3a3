// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// Network-level failure, the only kind of error eligible for retries
    #[error("[ruledhttp.transport] failed to reach {url} : {cause}")]
    Transport {
        url: String,
        #[source]
        cause: reqwest_middleware::Error,
    },

    /// Request timed out on the client side, never retried
    #[error("[ruledhttp.transport] timed out waiting for {url} : {cause}")]
    Timeout {
        url: String,
        #[source]
        cause: reqwest_middleware::Error,
    },

    #[error("[ruledhttp.transport] cannot build request for {url} : {reason}")]
    InvalidRequest { url: String, reason: String },
}

impl DispatchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, DispatchError::Transport { .. })
    }
}
