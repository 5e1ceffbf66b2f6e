// src/graph/stats.rs
//! Aggregate counts for the summary panel.

use serde::Serialize;

use crate::graph::edge::Relation;
use crate::graph::graph::RippleGraph;

/// Pure counts over a built graph. The `unresolved_*` counters record
/// references the builder dropped (targets that matched nothing); they
/// are independent of the node and edge totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub file_nodes: usize,
    pub function_nodes: usize,
    pub import_edges: usize,
    pub call_edges: usize,
    pub contains_edges: usize,
    pub unresolved_imports: usize,
    pub unresolved_calls: usize,
}

/// Counts nodes by kind and edges by relation. `O(V + E)`, no
/// resolution or traversal.
#[must_use]
pub fn stats(graph: &RippleGraph) -> GraphStats {
    let mut out = GraphStats {
        unresolved_imports: graph.unresolved_imports,
        unresolved_calls: graph.unresolved_calls,
        ..GraphStats::default()
    };

    for node in graph.nodes() {
        if node.id.is_file() {
            out.file_nodes += 1;
        } else {
            out.function_nodes += 1;
        }
    }

    for edge in graph.edges() {
        match edge.relation() {
            Relation::Contains => out.contains_edges += 1,
            Relation::Imports => out.import_edges += 1,
            Relation::Calls => out.call_edges += 1,
        }
    }

    out
}
