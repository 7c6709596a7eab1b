// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use regex::Regex;

use super::Rule;
use super::flags::PatternFlags;
use super::spec::RuleSpec;
use crate::error::RuleError;

fn rule_from_json(value: serde_json::Value) -> Rule {
    let spec: RuleSpec = serde_json::from_value(value).unwrap();
    spec.into()
}

#[test]
fn test_exact_rule() {
    let rule = Rule::from("GITHUB_ACTIONS");
    assert!(rule.matches("GITHUB_ACTIONS"));
    assert!(!rule.matches("github_actions"));
    assert!(!rule.matches("GITHUB_ACTIONS_EXTRA"));
}

#[test]
fn test_set_rule() {
    let rule = Rule::from(["GITHUB_ACTIONS", "GITHUB_REPOSITORY"]);
    assert!(rule.matches("GITHUB_ACTIONS"));
    assert!(rule.matches("GITHUB_REPOSITORY"));
    assert!(!rule.matches("GITHUB_OWNER"));
    assert!(!Rule::Set(Vec::new()).matches(""));
}

#[test]
fn test_predicate_rule() {
    let rule = Rule::predicate(|key| key.starts_with("CI_"));
    assert!(rule.matches("CI_JOB"));
    assert!(!rule.matches("JOB_CI_"));
}

#[test]
fn test_pattern_rule_is_unanchored() {
    let rule = Rule::from(Regex::new("OWNER$").unwrap());
    assert!(rule.matches("GITHUB_OWNER"));
    assert!(!rule.matches("OWNER_NAME"));

    let rule = Rule::pattern("HUB", "");
    assert!(rule.matches("GITHUB_OWNER"));
}

#[test]
fn test_pattern_flags() {
    let insensitive = Rule::pattern("owner$", "i");
    assert!(insensitive.matches("GITHUB_OWNER"));

    let sensitive = Rule::pattern("owner$", "");
    assert!(!sensitive.matches("GITHUB_OWNER"));

    let sticky = Rule::pattern("OWNER", "y");
    assert!(sticky.matches("OWNER_NAME"));
    assert!(!sticky.matches("GITHUB_OWNER"));

    let global = Rule::pattern("OWNER", "g");
    assert!(global.matches("GITHUB_OWNER"));
    assert!(global.matches("GITHUB_OWNER"), "matching must be stateless");
}

#[test]
fn test_pattern_flag_parsing() {
    let flags = PatternFlags::parse("yig").unwrap();
    assert_eq!(flags.letters(), "giy");
    assert_eq!(PatternFlags::parse("").unwrap(), PatternFlags::empty());

    assert!(matches!(
        PatternFlags::parse("ix"),
        Err(RuleError::InvalidFlag { flag: 'x', .. })
    ));
    assert!(matches!(
        PatternFlags::parse("ii"),
        Err(RuleError::DuplicateFlag { flag: 'i', .. })
    ));
}

#[test]
fn test_invalid_pattern_never_matches() {
    assert!(matches!(
        Rule::try_pattern("(unclosed", ""),
        Err(RuleError::Syntax { .. })
    ));

    let rule = Rule::pattern("(unclosed", "");
    assert!(matches!(rule, Rule::Unrecognized));
    assert!(!rule.matches("(unclosed"));

    let rule = Rule::pattern("KEY", "q");
    assert!(matches!(rule, Rule::Unrecognized));
}

#[test]
fn test_pattern_literal() {
    let rule = Rule::try_pattern_literal("/owner$/i").unwrap();
    assert!(rule.matches("GITHUB_OWNER"));

    let rule = Rule::try_pattern_literal("/a/b/").unwrap();
    assert!(rule.matches("x/a/b/y"));

    let rule = Rule::try_pattern_literal("^CI_").unwrap();
    assert!(rule.matches("CI_JOB"));
    assert!(!rule.matches("ci_job"));

    assert!(Rule::try_pattern_literal("/owner$/x").is_err());
}

#[test]
fn test_unrecognized_never_matches() {
    assert!(!Rule::Unrecognized.matches(""));
    assert!(!Rule::Unrecognized.matches("ANY_KEY"));
}

#[test]
fn test_rule_spec_classification() {
    let kinds: Vec<_> = [
        serde_json::json!("GITHUB_ACTIONS"),
        serde_json::json!(["A", "B"]),
        serde_json::json!({ "pattern": "owner$", "flags": "i" }),
        serde_json::json!({ "pattern": "OWNER$" }),
        serde_json::json!(42),
        serde_json::json!(true),
        serde_json::json!(["A", 1]),
        serde_json::json!({ "flags": "i" }),
        serde_json::json!({ "pattern": "KEY", "flags": "z" }),
    ]
    .into_iter()
    .map(|value| rule_from_json(value).kind())
    .collect();

    insta::assert_debug_snapshot!(kinds, @r#"
    [
        "exact",
        "set",
        "pattern",
        "pattern",
        "unrecognized",
        "unrecognized",
        "unrecognized",
        "unrecognized",
        "unrecognized",
    ]
    "#);
}

#[test]
fn test_rule_spec_pattern_keeps_flags() {
    let rule = rule_from_json(serde_json::json!({ "pattern": "owner$", "flags": "i" }));
    assert!(rule.matches("GITHUB_OWNER"));
}

#[test]
fn test_rule_debug_output() {
    let rules = vec![
        Rule::from("A"),
        Rule::from(["A", "B"]),
        Rule::predicate(|_| true),
        Rule::pattern("^A", ""),
        Rule::Unrecognized,
    ];
    insta::assert_debug_snapshot!(rules, @r#"
    [
        Exact(
            "A",
        ),
        Set(
            [
                "A",
                "B",
            ],
        ),
        Predicate(<fn>),
        Pattern(
            "^A",
        ),
        Unrecognized,
    ]
    "#);
}
