// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::domain::errors::DispatchError;
use crate::domain::models::RuledRequest;

pub trait RequestTransport {
    async fn send(&self, request: RuledRequest) -> Result<reqwest::Response, DispatchError>;
}
