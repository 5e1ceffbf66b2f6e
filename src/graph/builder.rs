// src/graph/builder.rs
//! Three-pass graph construction.
//!
//! Pass 1 creates every node, pass 2 adds `imports` edges, pass 3 adds
//! `calls` edges. The order is load-bearing: passes 2 and 3 look up
//! nodes created in pass 1. Building never fails; references that do
//! not resolve are dropped and surface only as lower edge counts.

use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::debug;

use crate::file_class::{self, has_extension_in};
use crate::graph::calls::FunctionIndex;
use crate::graph::edge::{Edge, EdgeKind};
use crate::graph::graph::RippleGraph;
use crate::graph::node::{Node, NodeData, NodeId};
use crate::graph::resolver;
use crate::record::SourceRecord;

/// Build-time knobs. Defaults reproduce the engine's documented
/// behavior; hosts can widen the script allowlist or reorder the
/// resolver probes without forking the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildOptions {
    /// Extensions accepted at the input boundary.
    #[serde(default = "default_extensions")]
    pub script_extensions: Vec<String>,
    /// Candidate suffixes probed by the import resolver, in order.
    #[serde(default = "default_suffixes")]
    pub probe_suffixes: Vec<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            script_extensions: default_extensions(),
            probe_suffixes: default_suffixes(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    file_class::SCRIPT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

fn default_suffixes() -> Vec<String> {
    resolver::PROBE_SUFFIXES.iter().map(ToString::to_string).collect()
}

/// Builds the full graph from extraction records.
#[must_use]
pub fn build(records: &[SourceRecord], options: &BuildOptions) -> RippleGraph {
    let selected = select_records(records, options);
    let all_paths: Vec<String> = selected.iter().map(|r| r.path.clone()).collect();

    let mut graph = RippleGraph::new();
    add_nodes(&mut graph, &selected);

    let index = FunctionIndex::build(&selected);
    add_import_edges(&mut graph, &selected, &all_paths, options);
    add_call_edges(&mut graph, &selected, &index);

    debug!(
        "graph built: {} nodes, {} edges ({} files)",
        graph.node_count(),
        graph.edge_count(),
        selected.len()
    );
    graph
}

/// Gates records by extension, drops duplicates (first occurrence
/// wins), and fixes the stable lexicographic order every "first match"
/// downstream is defined against.
fn select_records<'a>(
    records: &'a [SourceRecord],
    options: &BuildOptions,
) -> Vec<&'a SourceRecord> {
    let mut seen = FxHashSet::default();
    let mut selected: Vec<&SourceRecord> = Vec::new();

    for record in records {
        if record.path.is_empty() || !has_extension_in(&record.path, &options.script_extensions) {
            debug!("skipping non-script record '{}'", record.path);
            continue;
        }
        if !seen.insert(record.path.as_str()) {
            debug!("skipping duplicate record for {}", record.path);
            continue;
        }
        selected.push(record);
    }

    selected.sort_by(|a, b| a.path.cmp(&b.path));
    selected
}

/// Pass 1: one file node per record, one function node plus its
/// `contains` edge per declaration.
fn add_nodes(graph: &mut RippleGraph, records: &[&SourceRecord]) {
    for record in records {
        let label = record.path.split('/').last().unwrap_or(&record.path);
        let file_id = NodeId::file(&record.path);
        graph.insert_node(Node {
            id: file_id.clone(),
            label: label.to_string(),
            data: NodeData::File {
                functions: record.functions.len(),
                imports: record.imports.len(),
            },
        });

        for decl in &record.functions {
            let name = decl.graph_name();
            let func_id = NodeId::func(&record.path, name, decl.line);
            graph.insert_node(Node {
                id: func_id.clone(),
                label: name.to_string(),
                data: NodeData::Func {
                    parent: record.path.clone(),
                    line: decl.line,
                    kind: decl.kind,
                },
            });
            graph.insert_edge(Edge::new(file_id.clone(), func_id, EdgeKind::Contains));
        }
    }
}

/// Pass 2: file -> file `imports` edges for every specifier that
/// resolves exactly to a different uploaded file.
fn add_import_edges(
    graph: &mut RippleGraph,
    records: &[&SourceRecord],
    all_paths: &[String],
    options: &BuildOptions,
) {
    for record in records {
        for import in &record.imports {
            let resolution = resolver::resolve_with(
                &import.specifier,
                &record.path,
                all_paths,
                &options.probe_suffixes,
            );
            match resolution {
                Some(res) if res.exact => {
                    if res.path == record.path {
                        continue;
                    }
                    graph.insert_edge(Edge::new(
                        NodeId::file(&record.path),
                        NodeId::file(res.path),
                        EdgeKind::Imports {
                            specifier: import.specifier.clone(),
                            import: import.kind,
                        },
                    ));
                }
                _ => {
                    debug!(
                        "unresolved import '{}' in {}",
                        import.specifier, record.path
                    );
                    graph.unresolved_imports += 1;
                }
            }
        }
    }
}

/// Pass 3: function -> function `calls` edges. The source node is the
/// declared function whose line range brackets the call site.
fn add_call_edges(graph: &mut RippleGraph, records: &[&SourceRecord], index: &FunctionIndex) {
    for record in records {
        for call in &record.calls {
            let Some(target) = index.resolve_callee(&call.callee, &record.path) else {
                debug!("unresolved call '{}' in {}", call.callee, record.path);
                graph.unresolved_calls += 1;
                continue;
            };
            let Some(source) = index.containing_function(&record.path, call.line) else {
                // File declares no functions; nothing to hang the edge on.
                continue;
            };
            if source == target {
                continue;
            }
            graph.insert_edge(Edge::new(source, target, EdgeKind::Calls { line: call.line }));
        }
    }
}
