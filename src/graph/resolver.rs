// src/graph/resolver.rs
//! Best-effort import resolution against the uploaded path set.
//!
//! The project exists only as an in-memory upload, so candidates are
//! probed against the set of record paths instead of a filesystem.
//! Resolution is heuristic: a miss is an answer, not an error.

use tracing::trace;

/// Candidate suffixes probed, in order, for relative specifiers.
pub const PROBE_SUFFIXES: &[&str] = &[
    "", ".js", ".jsx", ".ts", ".tsx", ".json", "/index.js", "/index.ts",
];

/// Outcome of resolving one specifier. `exact` is `false` only for the
/// last-resort `.js` guess on a relative specifier that matched nothing;
/// callers that want a real target drop inexact resolutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResolution {
    pub path: String,
    pub exact: bool,
}

/// Resolves a raw specifier from `source_path` against `all_paths`.
///
/// `all_paths` must be in a stable (lexicographic) order: for bare
/// specifiers "first match" is defined by that order, and resolution is
/// deterministic for identical inputs.
#[must_use]
pub fn resolve(
    specifier: &str,
    source_path: &str,
    all_paths: &[String],
) -> Option<ImportResolution> {
    resolve_with(specifier, source_path, all_paths, PROBE_SUFFIXES)
}

/// `resolve` with a caller-supplied probe-suffix order.
#[must_use]
pub fn resolve_with<S: AsRef<str>>(
    specifier: &str,
    source_path: &str,
    all_paths: &[String],
    suffixes: &[S],
) -> Option<ImportResolution> {
    if specifier.is_empty() {
        return None;
    }
    if specifier.starts_with('.') {
        Some(resolve_relative(specifier, source_path, all_paths, suffixes))
    } else {
        resolve_bare(specifier, all_paths).map(|path| ImportResolution { path, exact: true })
    }
}

fn resolve_relative<S: AsRef<str>>(
    specifier: &str,
    source_path: &str,
    all_paths: &[String],
    suffixes: &[S],
) -> ImportResolution {
    let base = normalize(specifier, source_path);
    for suffix in suffixes {
        let candidate = format!("{base}{}", suffix.as_ref());
        if all_paths.iter().any(|p| p == &candidate) {
            return ImportResolution { path: candidate, exact: true };
        }
    }
    trace!("no candidate for '{specifier}' from {source_path}; guessing {base}.js");
    ImportResolution { path: format!("{base}.js"), exact: false }
}

/// Joins a relative specifier onto the directory of `source_path`.
/// `..` pops a segment (and is dropped at the root), `.` is a no-op.
fn normalize(specifier: &str, source_path: &str) -> String {
    let mut segments: Vec<&str> = source_path.split('/').collect();
    segments.pop(); // the file name itself

    for part in specifier.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            seg => segments.push(seg),
        }
    }
    segments.join("/")
}

/// Bare (package-style) specifiers: first path containing the specifier
/// as a substring, or ending in a conventional module location for it.
fn resolve_bare(specifier: &str, all_paths: &[String]) -> Option<String> {
    let tails = [
        format!("/{specifier}.js"),
        format!("/{specifier}.ts"),
        format!("/{specifier}/index.js"),
        format!("/{specifier}/index.ts"),
    ];
    all_paths
        .iter()
        .find(|p| p.contains(specifier) || tails.iter().any(|t| p.ends_with(t.as_str())))
        .cloned()
}
