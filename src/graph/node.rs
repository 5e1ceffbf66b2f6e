// src/graph/node.rs
//! Node identity and payload.
//!
//! Identity is a derived-equality value, not a composite string: the
//! declaration line disambiguates same-named functions in one file.
//! `Display` renders the element id the visualization layer keys its
//! DOM/canvas elements by.

use std::fmt;

use serde::Serialize;

use crate::record::FnKind;

/// Stable node identity for the lifetime of one build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeId {
    File { path: String },
    Func { path: String, name: String, line: u32 },
}

impl NodeId {
    #[must_use]
    pub fn file(path: impl Into<String>) -> Self {
        Self::File { path: path.into() }
    }

    #[must_use]
    pub fn func(path: impl Into<String>, name: impl Into<String>, line: u32) -> Self {
        Self::Func {
            path: path.into(),
            name: name.into(),
            line,
        }
    }

    /// Owning file path (the node's own path for file nodes).
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::File { path } | Self::Func { path, .. } => path,
        }
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    #[must_use]
    pub fn is_func(&self) -> bool {
        matches!(self, Self::Func { .. })
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path } => write!(f, "file:{path}"),
            Self::Func { path, name, line } => write!(f, "func:{path}:{name}:{line}"),
        }
    }
}

/// A node plus its denormalized payload. The payload is informational
/// only; identity and traversal never consult it.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub id: NodeId,
    /// Display label: last path segment for files, function name for
    /// functions.
    pub label: String,
    pub data: NodeData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeData {
    File {
        /// Declared function count, for node sizing in the UI.
        functions: usize,
        imports: usize,
    },
    Func {
        /// Path of the owning file.
        parent: String,
        line: u32,
        kind: FnKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_disambiguates_by_line() {
        let a = NodeId::func("src/a.js", "handler", 3);
        let b = NodeId::func("src/a.js", "handler", 40);
        assert_ne!(a, b);
        assert_eq!(a, NodeId::func("src/a.js", "handler", 3));
    }

    #[test]
    fn test_display_renders_element_ids() {
        assert_eq!(NodeId::file("src/a.js").to_string(), "file:src/a.js");
        assert_eq!(
            NodeId::func("src/a.js", "foo", 3).to_string(),
            "func:src/a.js:foo:3"
        );
    }
}
