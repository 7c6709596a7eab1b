// define-env-rs: Environment Constant Injection for Build Pipelines
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::{Arc, Mutex};

use super::Compiler;
use super::define::DefinePlugin;
use super::hooks::SyncHook;
use crate::error::{DefineEnvError, PipelineError};

fn node_env() -> DefinePlugin {
    DefinePlugin::new([
        ("process.env.NODE_ENV", "\"production\""),
        ("process.env", "{}"),
        ("__DEV__", "false"),
    ])
}

#[test]
fn test_substitute_longest_prefix() {
    let define = node_env();
    let source = r#"if (process.env.NODE_ENV === "production" && !__DEV__) { log(process.env.OTHER); }"#;

    insta::assert_snapshot!(
        define.substitute(source),
        @r#"if ("production" === "production" && !false) { log({}.OTHER); }"#
    );
}

#[test]
fn test_substitute_keeps_member_suffix() {
    let define = node_env();
    assert_eq!(
        define.substitute("process.env.NODE_ENV.length"),
        "\"production\".length"
    );
}

#[test]
fn test_substitute_skips_property_access_and_partial_identifiers() {
    let define = node_env();
    let source = "obj.process.env.NODE_ENV; my__DEV__; __DEV__x; __DEV__";
    assert_eq!(
        define.substitute(source),
        "obj.process.env.NODE_ENV; my__DEV__; __DEV__x; false"
    );
}

#[test]
fn test_substitute_skips_strings_and_comments() {
    let define = node_env();
    let source = r#"// process.env.NODE_ENV
const a = "process.env.NODE_ENV", b = 'it\'s __DEV__', c = `__DEV__`;
/* __DEV__ */ __DEV__"#;

    let expected = r#"// process.env.NODE_ENV
const a = "process.env.NODE_ENV", b = 'it\'s __DEV__', c = `__DEV__`;
/* __DEV__ */ false"#;

    assert_eq!(define.substitute(source), expected);
}

#[test]
fn test_substitute_template_interpolations() {
    let define = DefinePlugin::new([("process.env.API", "\"x\""), ("__DEV__", "false")]);
    let source = "const u = `${process.env.API}/v1`, t = `__DEV__ ${ {a: __DEV__}.a } ${`${__DEV__}`}`;";

    assert_eq!(
        define.substitute(source),
        "const u = `${\"x\"}/v1`, t = `__DEV__ ${ {a: false}.a } ${`${false}`}`;"
    );
}

#[test]
fn test_substitute_skips_regex_literals() {
    let define = DefinePlugin::new([("process.env.API", "\"x\"")]);
    let source = r#"if (/"/.test(s) || /['process.env.API/]+/g.test(s)) f(process.env.API);"#;

    assert_eq!(
        define.substitute(source),
        r#"if (/"/.test(s) || /['process.env.API/]+/g.test(s)) f("x");"#
    );
}

#[test]
fn test_substitute_keeps_division() {
    let define = DefinePlugin::new([("__DEV__", "false")]);
    assert_eq!(
        define.substitute("a = total / __DEV__ / (b) / __DEV__;"),
        "a = total / false / (b) / false;"
    );
}

#[test]
fn test_substitute_handles_non_ascii() {
    let define = node_env();
    assert_eq!(define.substitute("é + __DEV__ + ü"), "é + false + ü");
}

#[test]
fn test_substitute_without_definitions() {
    let define = DefinePlugin::default();
    assert_eq!(define.substitute("process.env.X"), "process.env.X");
}

#[test]
fn test_define_overwrites() {
    let mut define = node_env();
    define.define("__DEV__", "true");
    define.extend([("process.env.NODE_ENV".to_string(), "\"test\"".to_string())]);

    assert_eq!(define.definitions()["__DEV__"], "true");
    assert_eq!(define.definitions()["process.env.NODE_ENV"], "\"test\"");
    assert_eq!(define.definitions().len(), 3);
}

#[test]
fn test_hook_runs_taps_in_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut hook: SyncHook<Vec<&'static str>> = SyncHook::default();

    let log = Arc::clone(&calls);
    hook.tap("first", move |arg| {
        arg.push("first");
        log.lock().unwrap().push("first");
        Ok(())
    });
    let log = Arc::clone(&calls);
    hook.tap("second", move |arg| {
        arg.push("second");
        log.lock().unwrap().push("second");
        Ok(())
    });

    let mut arg = Vec::new();
    hook.call(&mut arg).unwrap();

    assert_eq!(arg, vec!["first", "second"]);
    assert_eq!(*calls.lock().unwrap(), vec!["first", "second"]);
    assert_eq!(hook.tap_names().collect::<Vec<_>>(), vec!["first", "second"]);
}

#[test]
fn test_hook_error_stops_compilation() {
    let mut compiler = Compiler::new();
    compiler.hooks.this_compilation.tap("failing", |compilation| {
        Err(DefineEnvError::Other(
            format!("compilation #{} rejected", compilation.id()).into_boxed_str(),
        ))
    });
    compiler.hooks.this_compilation.tap("never", |_| {
        Err(PipelineError::EncodeFailed {
            name: "unreachable".to_string(),
            source: serde_json::from_str::<()>("x").unwrap_err(),
        }
        .into())
    });

    let err = compiler.compile("source").unwrap_err();
    assert_eq!(err.to_string(), "compilation #1 rejected");
}

#[test]
fn test_compile_without_define_passes_source_through() {
    let mut compiler = Compiler::new();
    assert!(compiler.hooks.this_compilation.is_empty());

    let compilation = compiler.compile("process.env.HOME").unwrap();
    assert_eq!(compilation.source(), "process.env.HOME");
    assert_eq!(compilation.output(), Some("process.env.HOME"));
    assert!(compilation.define().is_none());
}

#[test]
fn test_compiler_define_is_copied_into_each_compilation() {
    let mut compiler = Compiler::with_plugins(&[&node_env()]);
    compiler.hooks.this_compilation.tap("mutate", |compilation| {
        if let Some(define) = compilation.define_plugin() {
            define.define("__DEV__", "true");
        }
        Ok(())
    });

    let compilation = compiler.compile("__DEV__").unwrap();
    assert_eq!(compilation.output(), Some("true"));

    let base = compiler.define_plugin().unwrap();
    assert_eq!(base.definitions()["__DEV__"], "false");
}
