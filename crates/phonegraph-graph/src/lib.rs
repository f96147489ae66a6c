//! Phonegraph Graph - who called whom, and how closely
//!
//! This crate owns the undirected call graph built from call records
//! and answers connectivity queries over it.
//!
//! # Architecture
//!
//! The graph uses petgraph internally with additional indexes for:
//! - Number-based node lookups
//! - Pair-based edge lookups (for call count accumulation)
//!
//! Each undirected edge carries one call count, seen from both ends.
//! Shortest-path searches keep their visit state outside the graph.
//!
//! # Example
//!
//! ```
//! use phonegraph_core::PhoneNumber;
//! use phonegraph_graph::{CallGraph, QueryEngine, QueryOutcome};
//!
//! let a: PhoneNumber = "555-111-2222".parse().unwrap();
//! let b: PhoneNumber = "555-333-4444".parse().unwrap();
//! let c: PhoneNumber = "555-555-6666".parse().unwrap();
//!
//! let mut graph = CallGraph::new();
//! graph.insert_pair(&a, &b).unwrap();
//! graph.insert_pair(&b, &c).unwrap();
//!
//! let engine = QueryEngine::new(&graph);
//! assert_eq!(engine.query("555-111-2222", "555-555-6666"), QueryOutcome::ConnectedThrough(1));
//! ```

mod builder;
mod edge;
mod error;
mod graph;
mod path;
mod query;

pub use builder::{GraphBuilder, IngestReport, LineError};
pub use edge::{CallEdge, GraphEdge};
pub use error::{GraphError, IngestError};
pub use graph::{CallGraph, EdgeId, GraphStats, NodeId};
pub use path::shortest_path;
pub use query::{QueryEngine, QueryOutcome};
