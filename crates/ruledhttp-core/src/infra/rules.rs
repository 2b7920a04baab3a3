// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::domain::models::HttpRule;
use anyhow::Context;
use std::path::Path;

pub fn load_rules(rules_file: &Path) -> anyhow::Result<Vec<HttpRule>> {
    let contents = std::fs::read_to_string(rules_file)
        .with_context(|| format!("[ruledhttp.rules] cannot read rules from {:?}", rules_file))?;

    let rules = serde_json::from_str::<Vec<HttpRule>>(&contents)
        .with_context(|| format!("[ruledhttp.rules] malformed rules in {:?}", rules_file))?;

    log::info!("[ruledhttp.rules] loaded {} rules from {:?}", rules.len(), rules_file);
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use crate::domain::models::HttpRule;
    use crate::infra::rules::load_rules;
    use assertor::{EqualityAssertion, ResultAssertion};
    use temp_dir::TempDir;

    #[test]
    fn should_load_rules_in_file_order() {
        let temp_dir = TempDir::new().unwrap();
        let rules_file = temp_dir.child("rules.json");

        let payload = r#"
            [
              { "base_url": "https://api.example.com/v2", "query": "?v=2" },
              { "base_url": "https://api.example.com", "headers": { "X-Api-Key": "secret" } }
            ]
        "#;
        std::fs::write(&rules_file, payload).unwrap();

        let rules = load_rules(&rules_file).unwrap();

        let expected = vec![
            HttpRule::new("https://api.example.com/v2", "?v=2", &[]),
            HttpRule::new("https://api.example.com", "", &[("X-Api-Key", "secret")]),
        ];
        assertor::assert_that!(rules).is_equal_to(expected);
    }

    #[test]
    fn should_fail_on_missing_rules_file() {
        let temp_dir = TempDir::new().unwrap();

        let loaded = load_rules(&temp_dir.child("missing.json"));

        assertor::assert_that!(loaded).is_err();
    }

    #[test]
    fn should_fail_on_malformed_rules() {
        let temp_dir = TempDir::new().unwrap();
        let rules_file = temp_dir.child("rules.json");
        std::fs::write(&rules_file, r#"{ "base_url": "not-a-list" }"#).unwrap();

        let loaded = load_rules(&rules_file);

        assertor::assert_that!(loaded).is_err();
    }
}
