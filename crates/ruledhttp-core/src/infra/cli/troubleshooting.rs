// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use env_logger::{Builder, Env};

pub static DEFAULT_LOG_FILTER: &str = "warn";

pub fn setup_troubleshooting() {
    better_panic::install();
    human_panic::setup_panic!();

    logger(Env::default()).init();
}

/// Surfaces retried attempts unless the filter variable says otherwise.
fn logger(env: Env<'_>) -> Builder {
    let mut builder = Builder::from_env(env.default_filter_or(DEFAULT_LOG_FILTER));
    builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_file(false)
        .format_target(false);
    builder
}
