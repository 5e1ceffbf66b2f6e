// src/file_class.rs
//! Script-file classification.
//!
//! The extraction collaborator only hands over records for files it
//! recognized as script-like, but the engine keeps its own gate: a stray
//! record for a stylesheet or a lockfile must not grow the graph.
//!
//! This module is the single source of truth for that distinction.

/// Extensions the engine accepts as analyzable script files.
///
/// `json` is included because import specifiers may target data modules
/// (`./config.json`), and those files need nodes to become edge targets.
pub const SCRIPT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "json"];

/// Returns the lowercase-insensitive extension of a slash-separated
/// path, or `None` for extensionless names and dotfiles.
#[must_use]
pub fn extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext)
}

/// Returns `true` if the path's extension appears in `allowed`.
#[must_use]
pub fn has_extension_in(path: &str, allowed: &[String]) -> bool {
    match extension(path) {
        Some(ext) => allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

/// Returns `true` if the path is script-like under the default allowlist.
#[must_use]
pub fn is_script_path(path: &str) -> bool {
    match extension(path) {
        Some(ext) => SCRIPT_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)),
        None => false,
    }
}
