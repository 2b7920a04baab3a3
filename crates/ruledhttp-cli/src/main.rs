// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use ruledhttp_core::factory;
use ruledhttp_core::infra::cli;
use tikv_jemallocator::Jemalloc;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::troubleshooting::setup_troubleshooting();
    let (task, retry_policy) = cli::parsing::parse_arguments()?;

    let ruledhttp = factory::create_ruledhttp(retry_policy);
    ruledhttp.execute(task).await?;

    Ok(())
}
