// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use regex::Regex;

use super::{SelectionConfig, Selector};
use crate::env::snapshot::EnvSnapshot;
use crate::rule::Rule;

const OWNER: &str = "hankliu62";
const REPO: &str = "define-env-rs";
const ACTION: &str = "build and publish";

fn github_env() -> EnvSnapshot {
    EnvSnapshot::from_pairs([
        ("GITHUB_ACTIONS", ACTION),
        ("GITHUB_REPOSITORY", REPO),
        ("GITHUB_OWNER", OWNER),
        ("HOME", "/home/runner"),
    ])
}

fn selected_names(env: &EnvSnapshot, config: Option<&SelectionConfig>) -> Vec<String> {
    Selector::new(env, config)
        .injection_map()
        .names()
        .map(str::to_owned)
        .collect()
}

#[test]
fn test_no_config_selects_everything() {
    let env = github_env();
    let selector = Selector::new(&env, None);
    let map = selector.injection_map();

    assert_eq!(map.len(), env.len());
    for (key, value) in env.iter() {
        assert_eq!(map.get_env(key), Some(value), "{key} should be injected as-is");
    }
}

#[test]
fn test_exact_include() {
    let env = EnvSnapshot::from_pairs([("GITHUB_ACTIONS", ACTION)]);
    let config = SelectionConfig::new().include("GITHUB_ACTIONS");
    let selector = Selector::new(&env, Some(&config));

    insta::assert_json_snapshot!(selector.injection_map(), @r#"
    {
      "process.env.GITHUB_ACTIONS": "build and publish"
    }
    "#);
}

#[test]
fn test_exact_include_missing_key() {
    let config = SelectionConfig::new().include("NOT_IN_ENV");
    assert!(selected_names(&github_env(), Some(&config)).is_empty());
}

#[test]
fn test_set_include() {
    let config = SelectionConfig::new().include(["GITHUB_ACTIONS", "GITHUB_REPOSITORY", "MISSING"]);
    let names = selected_names(&github_env(), Some(&config));
    assert_eq!(
        names,
        vec!["process.env.GITHUB_ACTIONS", "process.env.GITHUB_REPOSITORY"]
    );
}

#[test]
fn test_predicate_include() {
    let config = SelectionConfig::new()
        .include(Rule::predicate(|key| matches!(key, "GITHUB_ACTIONS" | "GITHUB_OWNER")));
    let selector = Selector::new(&github_env(), Some(&config));

    insta::assert_json_snapshot!(selector.injection_map(), @r#"
    {
      "process.env.GITHUB_ACTIONS": "build and publish",
      "process.env.GITHUB_OWNER": "hankliu62"
    }
    "#);
}

#[test]
fn test_pattern_include() {
    let env = EnvSnapshot::from_pairs([("GITHUB_OWNER", OWNER)]);
    let config = SelectionConfig::new().include(Regex::new("OWNER$").unwrap());
    let selector = Selector::new(&env, Some(&config));

    assert_eq!(selector.injection_map().len(), 1);
    assert_eq!(
        selector.injection_map().get("process.env.GITHUB_OWNER"),
        Some(Some(OWNER))
    );
}

#[test]
fn test_exclude_overrides_include() {
    let env = EnvSnapshot::from_pairs([("A", "1"), ("B", "2"), ("OWNER", "3")]);
    let config = SelectionConfig::new()
        .include(["A", "B", "OWNER"])
        .exclude(Rule::pattern("owner$", "i"));
    let selector = Selector::new(&env, Some(&config));

    insta::assert_json_snapshot!(selector.injection_map(), @r#"
    {
      "process.env.A": "1",
      "process.env.B": "2"
    }
    "#);
}

#[test]
fn test_exclude_wins_for_every_shape() {
    let env = github_env();
    let excludes = [
        Rule::from("GITHUB_OWNER"),
        Rule::from(["GITHUB_OWNER"]),
        Rule::predicate(|key| key == "GITHUB_OWNER"),
        Rule::pattern("_OWNER$", ""),
    ];

    for exclude in excludes {
        let kind = exclude.kind();
        let config = SelectionConfig {
            include: Some(Rule::predicate(|_| true)),
            exclude: Some(exclude),
        };
        let names = selected_names(&env, Some(&config));
        assert!(
            !names.iter().any(|n| n == "process.env.GITHUB_OWNER"),
            "{kind} exclude should remove GITHUB_OWNER"
        );
        assert_eq!(names.len(), env.len() - 1, "{kind} exclude removed too much");
    }
}

#[test]
fn test_exclude_only_selects_nothing() {
    let config = SelectionConfig::new().exclude("GITHUB_OWNER");
    assert!(selected_names(&github_env(), Some(&config)).is_empty());

    let config = SelectionConfig::new().exclude(Rule::pattern("OWNER$", ""));
    assert!(selected_names(&github_env(), Some(&config)).is_empty());
}

#[test]
fn test_empty_config_selects_nothing() {
    let config = SelectionConfig::default();
    assert!(selected_names(&github_env(), Some(&config)).is_empty());
}

#[test]
fn test_unrecognized_include_fails_closed() {
    let config = SelectionConfig {
        include: Some(Rule::Unrecognized),
        exclude: None,
    };
    assert!(selected_names(&github_env(), Some(&config)).is_empty());
}

#[test]
fn test_unrecognized_exclude_is_ignored() {
    let config = SelectionConfig {
        include: Some(Rule::from("HOME")),
        exclude: Some(Rule::Unrecognized),
    };
    assert_eq!(selected_names(&github_env(), Some(&config)), vec!["process.env.HOME"]);
}

#[test]
fn test_absent_value_is_kept() {
    let env = EnvSnapshot::from_entries([
        ("UNSET_BUT_PRESENT".to_string(), None),
        ("SET".to_string(), Some(String::new())),
    ]);
    let selector = Selector::new(&env, None);

    insta::assert_json_snapshot!(selector.injection_map(), @r#"
    {
      "process.env.SET": "",
      "process.env.UNSET_BUT_PRESENT": null
    }
    "#);
}

#[test]
fn test_construction_is_idempotent() {
    let env = github_env();
    let config = SelectionConfig::new()
        .include(Rule::pattern("^GITHUB_", ""))
        .exclude("GITHUB_REPOSITORY");

    let first = Selector::new(&env, Some(&config));
    let second = Selector::new(&env, Some(&config));
    assert_eq!(first.injection_map(), second.injection_map());
}

#[test]
fn test_empty_snapshot() {
    let selector = Selector::new(&EnvSnapshot::empty(), None);
    assert!(selector.into_injection_map().is_empty());
}
