// tests/unit_resolver.rs
//! Tests for import-specifier resolution against an uploaded path set.

use coderipple_core::graph::resolver::{resolve, resolve_with, PROBE_SUFFIXES};

fn paths(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_suffix_probe_order_is_the_contract() {
    // Every suffix earlier in the list beats every later one.
    let ordered = [
        "src/x",
        "src/x.js",
        "src/x.jsx",
        "src/x.ts",
        "src/x.tsx",
        "src/x.json",
        "src/x/index.js",
        "src/x/index.ts",
    ];
    assert_eq!(ordered.len(), PROBE_SUFFIXES.len());

    for (i, expected) in ordered.iter().enumerate() {
        // Offer this candidate and everything after it; the earliest wins.
        let all = paths(&ordered[i..]);
        let res = resolve("./x", "src/a.js", &all).unwrap();
        assert_eq!(res.path, *expected, "probe #{i}");
        assert!(res.exact);
    }
}

#[test]
fn test_dot_segments_normalize() {
    let all = paths(&["src/lib/util.js", "src/a.js"]);
    let res = resolve("./lib/../lib/./util", "src/a.js", &all).unwrap();
    assert_eq!(res.path, "src/lib/util.js");
}

#[test]
fn test_guess_is_flagged_not_invented() {
    let all = paths(&["src/a.js"]);
    let res = resolve("../shared/helpers", "src/a.js", &all).unwrap();
    assert_eq!(res.path, "shared/helpers.js");
    assert!(!res.exact, "a guess must never look like a real target");
}

#[test]
fn test_bare_specifier_first_match_in_stable_order() {
    let all = paths(&[
        "packages/core/logger.ts",
        "packages/web/logger.ts",
        "src/a.ts",
    ]);
    let res = resolve("logger", "src/a.ts", &all).unwrap();
    assert_eq!(res.path, "packages/core/logger.ts");
}

#[test]
fn test_bare_specifier_conventional_locations() {
    let all = paths(&["vendor/widgets/index.ts", "src/a.ts"]);
    let res = resolve("widgets", "src/a.ts", &all).unwrap();
    assert_eq!(res.path, "vendor/widgets/index.ts");
}

#[test]
fn test_empty_specifier_resolves_to_nothing() {
    let all = paths(&["src/a.js"]);
    assert!(resolve("", "src/a.js", &all).is_none());
}

#[test]
fn test_custom_probe_order() {
    // A host that prefers TypeScript can reorder the probes.
    let suffixes = [".ts".to_string(), ".js".to_string()];
    let all = paths(&["src/b.js", "src/b.ts"]);
    let res = resolve_with("./b", "src/a.ts", &all, &suffixes).unwrap();
    assert_eq!(res.path, "src/b.ts");
}

#[test]
fn test_resolution_is_pure() {
    let all = paths(&["src/a.js", "src/b.js"]);
    for _ in 0..3 {
        assert_eq!(
            resolve("./b", "src/a.js", &all).unwrap().path,
            "src/b.js"
        );
    }
}
