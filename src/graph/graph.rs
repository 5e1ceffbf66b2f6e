// src/graph/graph.rs
//! The owned graph value and its query surface.
//!
//! Nodes and edges live in hash maps with a parallel insertion-order
//! list, so enumeration is deterministic given the builder's sorted
//! record order. Adjacency is indexed both ways for the reachability
//! queries. After `build` returns the graph is never mutated.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::edge::{Edge, Relation};
use crate::graph::node::{Node, NodeId};

/// Edge identity: `(source, target, relation)`.
pub type EdgeId = (NodeId, NodeId, Relation);

#[derive(Debug, Default)]
pub struct RippleGraph {
    nodes: FxHashMap<NodeId, Node>,
    node_order: Vec<NodeId>,
    edges: FxHashMap<EdgeId, Edge>,
    edge_order: Vec<EdgeId>,
    outgoing: FxHashMap<NodeId, Vec<(NodeId, Relation)>>,
    incoming: FxHashMap<NodeId, Vec<(NodeId, Relation)>>,
    pub(crate) unresolved_imports: usize,
    pub(crate) unresolved_calls: usize,
}

impl RippleGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node; a second insert under the same identity is a
    /// no-op. Returns whether the node was new.
    pub(crate) fn insert_node(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }
        self.node_order.push(node.id.clone());
        self.nodes.insert(node.id.clone(), node);
        true
    }

    /// Inserts an edge. Self-loops are discarded, edges to or from
    /// unknown nodes are discarded, and re-inserting an existing
    /// `(source, target, relation)` identity is a no-op.
    pub(crate) fn insert_edge(&mut self, edge: Edge) -> bool {
        if edge.source == edge.target {
            return false;
        }
        if !self.nodes.contains_key(&edge.source) || !self.nodes.contains_key(&edge.target) {
            return false;
        }
        let id = (edge.source.clone(), edge.target.clone(), edge.relation());
        if self.edges.contains_key(&id) {
            return false;
        }
        self.outgoing
            .entry(edge.source.clone())
            .or_default()
            .push((edge.target.clone(), edge.relation()));
        self.incoming
            .entry(edge.target.clone())
            .or_default()
            .push((edge.source.clone(), edge.relation()));
        self.edge_order.push(id.clone());
        self.edges.insert(id, edge);
        true
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.node_order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edge_order.iter().filter_map(|id| self.edges.get(id))
    }

    /// Edge payload for an exact `(source, target, relation)` identity.
    #[must_use]
    pub fn edge(&self, source: &NodeId, target: &NodeId, relation: Relation) -> Option<&Edge> {
        self.edges
            .get(&(source.clone(), target.clone(), relation))
    }

    /// All edges between a pair, one per relation at most.
    #[must_use]
    pub fn edges_between(&self, source: &NodeId, target: &NodeId) -> Vec<&Edge> {
        [Relation::Contains, Relation::Imports, Relation::Calls]
            .into_iter()
            .filter_map(|rel| self.edge(source, target, rel))
            .collect()
    }

    /// Distinct direct successors across all relations.
    #[must_use]
    pub fn successors(&self, id: &NodeId) -> Vec<&NodeId> {
        Self::distinct_neighbors(self.outgoing.get(id))
    }

    /// Distinct direct predecessors across all relations.
    #[must_use]
    pub fn predecessors(&self, id: &NodeId) -> Vec<&NodeId> {
        Self::distinct_neighbors(self.incoming.get(id))
    }

    pub(crate) fn out_edges(&self, id: &NodeId) -> &[(NodeId, Relation)] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn in_edges(&self, id: &NodeId) -> &[(NodeId, Relation)] {
        self.incoming.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn distinct_neighbors(adjacent: Option<&Vec<(NodeId, Relation)>>) -> Vec<&NodeId> {
        let mut seen = FxHashSet::default();
        adjacent
            .map(|list| {
                list.iter()
                    .map(|(id, _)| id)
                    .filter(|id| seen.insert(*id))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::edge::EdgeKind;
    use crate::graph::node::NodeData;

    fn file_node(path: &str) -> Node {
        Node {
            id: NodeId::file(path),
            label: path.to_string(),
            data: NodeData::File { functions: 0, imports: 0 },
        }
    }

    #[test]
    fn test_duplicate_edge_is_a_no_op() {
        let mut graph = RippleGraph::new();
        graph.insert_node(file_node("a.js"));
        graph.insert_node(file_node("b.js"));
        let edge = || {
            Edge::new(
                NodeId::file("a.js"),
                NodeId::file("b.js"),
                EdgeKind::Imports {
                    specifier: "./b".to_string(),
                    import: crate::record::ImportKind::Import,
                },
            )
        };
        assert!(graph.insert_edge(edge()));
        assert!(!graph.insert_edge(edge()));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.successors(&NodeId::file("a.js")).len(), 1);
    }

    #[test]
    fn test_self_loop_is_discarded() {
        let mut graph = RippleGraph::new();
        graph.insert_node(file_node("a.js"));
        let edge = Edge::new(
            NodeId::file("a.js"),
            NodeId::file("a.js"),
            EdgeKind::Contains,
        );
        assert!(!graph.insert_edge(edge));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_edge_to_unknown_node_is_discarded() {
        let mut graph = RippleGraph::new();
        graph.insert_node(file_node("a.js"));
        let edge = Edge::new(
            NodeId::file("a.js"),
            NodeId::file("ghost.js"),
            EdgeKind::Contains,
        );
        assert!(!graph.insert_edge(edge));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_pair_can_carry_one_edge_per_relation() {
        let mut graph = RippleGraph::new();
        graph.insert_node(file_node("a.js"));
        graph.insert_node(file_node("b.js"));
        let a = NodeId::file("a.js");
        let b = NodeId::file("b.js");
        graph.insert_edge(Edge::new(a.clone(), b.clone(), EdgeKind::Contains));
        graph.insert_edge(Edge::new(a.clone(), b.clone(), EdgeKind::Calls { line: 4 }));
        assert_eq!(graph.edges_between(&a, &b).len(), 2);
        // Distinct successors collapse the pair to one entry.
        assert_eq!(graph.successors(&a).len(), 1);
        assert_eq!(graph.predecessors(&b).len(), 1);
    }
}
