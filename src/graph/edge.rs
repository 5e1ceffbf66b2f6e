// src/graph/edge.rs
//! Edge relations and payload.

use serde::Serialize;

use crate::graph::node::NodeId;
use crate::record::ImportKind;

/// Edge relation. Edge identity is `(source, target, relation)`, so a
/// pair of nodes may carry one edge per relation but never duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Contains,
    Imports,
    Calls,
}

impl Relation {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::Imports => "imports",
            Self::Calls => "calls",
        }
    }
}

/// Relation plus its payload. `Imports` keeps the specifier exactly as
/// written so the UI can show what the author typed, not what the
/// resolver guessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "relation", rename_all = "lowercase")]
pub enum EdgeKind {
    Contains,
    Imports { specifier: String, import: ImportKind },
    Calls { line: u32 },
}

impl EdgeKind {
    #[must_use]
    pub fn relation(&self) -> Relation {
        match self {
            Self::Contains => Relation::Contains,
            Self::Imports { .. } => Relation::Imports,
            Self::Calls { .. } => Relation::Calls,
        }
    }
}

/// A directed edge.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub kind: EdgeKind,
}

impl Edge {
    #[must_use]
    pub fn new(source: NodeId, target: NodeId, kind: EdgeKind) -> Self {
        Self { source, target, kind }
    }

    #[must_use]
    pub fn relation(&self) -> Relation {
        self.kind.relation()
    }
}
