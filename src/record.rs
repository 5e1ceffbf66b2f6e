// src/record.rs
//! Extraction-record input types.
//!
//! One `SourceRecord` per analyzed file, produced by the external parser
//! (grammar-based or pattern-based; the engine does not care which).
//! Every field is `#[serde(default)]`: a record with missing pieces
//! degrades to an empty record rather than failing the build.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Placeholder for unnamed function declarations (arrow functions
/// assigned to destructured targets, IIFEs, and similar).
pub const ANONYMOUS: &str = "anonymous";

/// Per-file extraction result: declared imports, declared functions,
/// and observed call sites. Immutable once produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub functions: Vec<FunctionDecl>,
    #[serde(default)]
    pub imports: Vec<ImportRef>,
    #[serde(default)]
    pub calls: Vec<CallSite>,
}

impl SourceRecord {
    /// Decodes a single record from the parser boundary.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Decodes a batch of records. Individual malformed entries degrade to
/// empty records so one bad file cannot abort the whole build; only a
/// payload that is not a JSON array at all is an error.
pub fn records_from_json(json: &str) -> Result<Vec<SourceRecord>> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap_or_default())
        .collect())
}

/// A function declaration inside one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    #[serde(default)]
    pub name: String,
    /// 1-based declaration line.
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub kind: FnKind,
}

impl FunctionDecl {
    #[must_use]
    pub fn new(name: impl Into<String>, line: u32, kind: FnKind) -> Self {
        Self { name: name.into(), line, kind }
    }

    /// Name used for node identity; empty names collapse to the
    /// `anonymous` placeholder.
    #[must_use]
    pub fn graph_name(&self) -> &str {
        if self.name.is_empty() {
            ANONYMOUS
        } else {
            &self.name
        }
    }
}

/// Declaration shape. Carried through as node payload, never branched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FnKind {
    #[default]
    Function,
    Method,
    Arrow,
}

/// A declared import, raw specifier as written in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRef {
    #[serde(default)]
    pub specifier: String,
    #[serde(default)]
    pub kind: ImportKind,
    #[serde(default)]
    pub line: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    /// Static `import ... from` form.
    #[default]
    Import,
    /// Dynamic `require(...)` form.
    Require,
}

/// An observed call site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    #[serde(default)]
    pub callee: String,
    #[serde(default)]
    pub line: u32,
}
