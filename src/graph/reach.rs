// src/graph/reach.rs
//! Reachability queries behind the ripple interaction.
//!
//! Iterative depth-first traversal with a visited set, so cycles
//! (mutual calls, import loops) terminate and contribute each node
//! once. Unknown start ids yield empty sets: the UI may race a click
//! against a rebuild and that race must not fail.

use rustc_hash::FxHashSet;

use crate::graph::graph::RippleGraph;
use crate::graph::node::NodeId;

#[derive(Clone, Copy)]
enum Direction {
    Out,
    In,
}

/// Everything reachable by following edges forward from `start`,
/// excluding `start` itself. Any relation counts. `O(V + E)`.
#[must_use]
pub fn downstream(graph: &RippleGraph, start: &NodeId) -> FxHashSet<NodeId> {
    traverse(graph, start, Direction::Out)
}

/// Everything that can reach `start` by following edges forward,
/// excluding `start` itself. Any relation counts. `O(V + E)`.
#[must_use]
pub fn upstream(graph: &RippleGraph, start: &NodeId) -> FxHashSet<NodeId> {
    traverse(graph, start, Direction::In)
}

/// The full highlight set for a selected node: downstream, upstream,
/// and the node itself.
#[must_use]
pub fn ripple(graph: &RippleGraph, start: &NodeId) -> FxHashSet<NodeId> {
    if !graph.contains_node(start) {
        return FxHashSet::default();
    }
    let mut set = downstream(graph, start);
    set.extend(upstream(graph, start));
    set.insert(start.clone());
    set
}

fn traverse(graph: &RippleGraph, start: &NodeId, direction: Direction) -> FxHashSet<NodeId> {
    let mut seen: FxHashSet<NodeId> = FxHashSet::default();
    if !graph.contains_node(start) {
        return seen;
    }

    seen.insert(start.clone());
    let mut stack = vec![start.clone()];

    while let Some(id) = stack.pop() {
        let neighbors = match direction {
            Direction::Out => graph.out_edges(&id),
            Direction::In => graph.in_edges(&id),
        };
        for (next, _) in neighbors {
            if seen.insert(next.clone()) {
                stack.push(next.clone());
            }
        }
    }

    seen.remove(start);
    seen
}
