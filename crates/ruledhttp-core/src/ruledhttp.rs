// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::domain::dispatcher::RuledRequestDispatcher;
use crate::domain::models::HttpRule;
use crate::infra::cli::reporter::ConsoleReporter;
use crate::infra::rules::load_rules;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq)]
pub enum RuledHttpTask {
    Get {
        url: String,
        rules_file: Option<PathBuf>,
    },
    Put {
        url: String,
        body_file: PathBuf,
        rules_file: Option<PathBuf>,
    },
}

pub struct RuledHttp {
    dispatcher: RuledRequestDispatcher,
    console_reporter: ConsoleReporter,
}

impl RuledHttp {
    pub(crate) fn new(dispatcher: RuledRequestDispatcher, console_reporter: ConsoleReporter) -> Self {
        Self {
            dispatcher,
            console_reporter,
        }
    }

    pub async fn execute(self, task: RuledHttpTask) -> anyhow::Result<()> {
        let response = match task {
            RuledHttpTask::Get { url, rules_file } => {
                let rules = self.rules(rules_file.as_deref())?;
                self.dispatcher.get(&url, &rules).await?
            },
            RuledHttpTask::Put {
                url,
                body_file,
                rules_file,
            } => {
                let rules = self.rules(rules_file.as_deref())?;
                let content = std::fs::read(&body_file)
                    .with_context(|| format!("[ruledhttp] cannot read request body from {:?}", body_file))?;
                self.dispatcher.put(&url, Bytes::from(content), &rules).await?
            },
        };

        let status = response.status();
        let body = response.text().await?;
        self.console_reporter.report_response(status, &body);

        Ok(())
    }

    fn rules(&self, rules_file: Option<&Path>) -> anyhow::Result<Vec<HttpRule>> {
        match rules_file {
            Some(path) => load_rules(path),
            None => Ok(Vec::new()),
        }
    }
}
