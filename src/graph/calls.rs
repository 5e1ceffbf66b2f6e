// src/graph/calls.rs
//! Callee resolution and containing-function lookup.
//!
//! Name resolution is heuristic: a call site's name is matched against
//! declarations, preferring the same file, falling back to the first
//! declaration of that name anywhere in the stable build order. No
//! scoping or type information is consulted.

use rustc_hash::FxHashMap;

use crate::graph::node::NodeId;
use crate::record::SourceRecord;

#[derive(Debug, Clone)]
struct FnEntry {
    name: String,
    line: u32,
}

/// Per-build index of every function declaration.
#[derive(Debug, Default)]
pub struct FunctionIndex {
    /// path -> declarations sorted by line.
    by_file: FxHashMap<String, Vec<FnEntry>>,
    /// name -> candidates in build order (file order, then declaration
    /// order within the file).
    by_name: FxHashMap<String, Vec<NodeId>>,
}

impl FunctionIndex {
    /// Builds the index. `records` must already be in the builder's
    /// stable order; that order defines "first match" for global
    /// fallback resolution.
    #[must_use]
    pub fn build(records: &[&SourceRecord]) -> Self {
        let mut index = Self::default();
        for record in records {
            let entries: Vec<FnEntry> = record
                .functions
                .iter()
                .map(|decl| FnEntry {
                    name: decl.graph_name().to_string(),
                    line: decl.line,
                })
                .collect();

            for entry in &entries {
                index
                    .by_name
                    .entry(entry.name.clone())
                    .or_default()
                    .push(NodeId::func(&record.path, &entry.name, entry.line));
            }

            let mut sorted = entries;
            sorted.sort_by_key(|e| e.line);
            index.by_file.insert(record.path.clone(), sorted);
        }
        index
    }

    /// Resolves a call-site name: same-file declaration first, then the
    /// first global candidate. Local shadowing wins over global
    /// ambiguity; multiple global candidates are not disambiguated
    /// beyond "first found".
    #[must_use]
    pub fn resolve_callee(&self, name: &str, source_path: &str) -> Option<NodeId> {
        if name.is_empty() {
            return None;
        }
        if let Some(entries) = self.by_file.get(source_path) {
            if let Some(local) = entries.iter().find(|e| e.name == name) {
                return Some(NodeId::func(source_path, name, local.line));
            }
        }
        self.by_name.get(name).and_then(|c| c.first()).cloned()
    }

    /// The declared function whose line range brackets `line`: greatest
    /// declaration line <= `line`, the next declaration's line as an
    /// exclusive upper bound. A call line before every declaration falls
    /// back to the last declared function. `None` only when the file
    /// declares nothing.
    #[must_use]
    pub fn containing_function(&self, path: &str, line: u32) -> Option<NodeId> {
        let entries = self.by_file.get(path)?;
        let containing = entries
            .iter()
            .rev()
            .find(|e| e.line <= line)
            .or_else(|| entries.last())?;
        Some(NodeId::func(path, &containing.name, containing.line))
    }
}
