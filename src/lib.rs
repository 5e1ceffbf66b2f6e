// src/lib.rs
pub mod error;
pub mod file_class;
pub mod graph;
pub mod record;

pub use error::{Result, RippleError};
pub use graph::builder::BuildOptions;
pub use graph::edge::{Edge, EdgeKind, Relation};
pub use graph::node::{Node, NodeData, NodeId};
pub use graph::reach::{downstream, ripple, upstream};
pub use graph::stats::{stats, GraphStats};
pub use graph::{GraphEngine, RippleGraph};
pub use record::{CallSite, FnKind, FunctionDecl, ImportKind, ImportRef, SourceRecord};
