// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::domain::models::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_INTERVAL_MILLIS, RetryPolicy};
use crate::ruledhttp::RuledHttpTask;
use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug)]
struct GetArguments {
    /// Target URL
    pub url: String,

    /// JSON file with the ordered list of decoration rules
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Total attempts when the server cannot be reached
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub retry_attempts: u32,

    /// Delay between attempts, in milliseconds
    #[arg(long, default_value_t = DEFAULT_RETRY_INTERVAL_MILLIS)]
    pub retry_interval_millis: u64,
}

#[derive(Args, Debug)]
struct PutArguments {
    /// Target URL
    pub url: String,

    /// File whose contents are sent as request body
    #[arg(short, long)]
    pub body: PathBuf,

    /// JSON file with the ordered list of decoration rules
    #[arg(short, long)]
    pub rules: Option<PathBuf>,
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = false)]
struct CliParser {
    #[command(subcommand)]
    pub command: MainCommands,
}

#[derive(Subcommand)]
enum MainCommands {
    /// Fetch a resource, retrying when the server cannot be reached
    Get(GetArguments),
    /// Upload a file once, without retries
    Put(PutArguments),
}

pub fn parse_arguments() -> anyhow::Result<(RuledHttpTask, RetryPolicy)> {
    let cli = CliParser::parse();
    convert(cli.command)
}

fn convert(command: MainCommands) -> anyhow::Result<(RuledHttpTask, RetryPolicy)> {
    let parsed = match command {
        MainCommands::Get(args) => {
            if args.retry_attempts == 0 {
                bail!("ruledhttp.cli : at least one attempt is required")
            }
            let retry_policy = RetryPolicy::new(
                args.retry_attempts,
                Duration::from_millis(args.retry_interval_millis),
            );
            let task = RuledHttpTask::Get {
                url: args.url,
                rules_file: args.rules,
            };
            (task, retry_policy)
        },
        MainCommands::Put(args) => {
            if !args.body.exists() {
                bail!("ruledhttp.cli : no such file or directory ({:?})", args.body)
            }
            let task = RuledHttpTask::Put {
                url: args.url,
                body_file: args.body,
                rules_file: args.rules,
            };
            (task, RetryPolicy::default())
        },
    };

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use crate::domain::models::RetryPolicy;
    use crate::infra::cli::parsing::{CliParser, convert};
    use crate::ruledhttp::RuledHttpTask;
    use assertor::{EqualityAssertion, ResultAssertion};
    use clap::Parser;
    use std::path::PathBuf;
    use std::time::Duration;

    fn parse(arguments: &[&str]) -> anyhow::Result<(RuledHttpTask, RetryPolicy)> {
        let cli = CliParser::try_parse_from(arguments)?;
        convert(cli.command)
    }

    #[test]
    fn should_parse_get_with_default_retry_policy() {
        let (task, retry_policy) = parse(&["ruledhttp", "get", "https://api.example.com/items"]).unwrap();

        let expected = RuledHttpTask::Get {
            url: "https://api.example.com/items".to_string(),
            rules_file: None,
        };
        assertor::assert_that!(task).is_equal_to(expected);
        assertor::assert_that!(retry_policy).is_equal_to(RetryPolicy::default());
    }

    #[test]
    fn should_parse_get_with_custom_retry_policy() {
        let arguments = [
            "ruledhttp",
            "get",
            "https://api.example.com/items",
            "--rules",
            "rules.json",
            "--retry-attempts",
            "5",
            "--retry-interval-millis",
            "250",
        ];

        let (task, retry_policy) = parse(&arguments).unwrap();

        let expected = RuledHttpTask::Get {
            url: "https://api.example.com/items".to_string(),
            rules_file: Some(PathBuf::from("rules.json")),
        };
        assertor::assert_that!(task).is_equal_to(expected);
        assertor::assert_that!(retry_policy).is_equal_to(RetryPolicy::new(5, Duration::from_millis(250)));
    }

    #[test]
    fn should_reject_zero_attempts() {
        let parsed = parse(&["ruledhttp", "get", "https://api.example.com", "--retry-attempts", "0"]);

        assertor::assert_that!(parsed).is_err();
    }

    #[test]
    fn should_reject_put_with_missing_body_file() {
        let parsed = parse(&["ruledhttp", "put", "https://api.example.com", "--body", "/no/such/file.bin"]);

        assertor::assert_that!(parsed).is_err();
    }
}
