// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use console::style;
use reqwest::StatusCode;

pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn report_response(&self, status: StatusCode, body: &str) {
        let status_line = status.to_string();
        if status.is_success() {
            println!("{}", style(status_line).green());
        } else {
            println!("{}", style(status_line).yellow());
        }

        if !body.is_empty() {
            println!("{}", body);
        }
    }
}
