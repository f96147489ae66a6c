//! Core graph data structure.
//!
//! The CallGraph wraps an undirected petgraph graph and adds hashed
//! indexes so that resolving a number and checking for an existing
//! edge are both constant-time.

use crate::edge::{CallEdge, GraphEdge};
use crate::error::GraphError;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use phonegraph_core::PhoneNumber;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

/// Unique identifier for a node in the graph.
pub type NodeId = NodeIndex;

/// Unique identifier for an edge in the graph.
pub type EdgeId = EdgeIndex;

/// The phone call graph.
///
/// Each node is a distinct phone number. Each edge joins two numbers
/// that have called each other and carries the running call count.
/// Nodes and edges are only ever added.
#[derive(Debug, Clone)]
pub struct CallGraph {
    /// The underlying petgraph graph.
    pub(crate) graph: UnGraph<PhoneNumber, CallEdge>,

    /// Maps phone numbers to graph node indexes.
    number_index: HashMap<PhoneNumber, NodeId>,

    /// Maps a normalized (low, high) node pair to its edge.
    edge_index: HashMap<(NodeId, NodeId), EdgeId>,
}

impl Default for CallGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl CallGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            number_index: HashMap::new(),
            edge_index: HashMap::new(),
        }
    }

    /// Records a call between two numbers.
    ///
    /// Missing nodes are created. If the pair already has an edge its
    /// count is incremented, otherwise a new edge with a count of 1 is
    /// added. Argument order does not matter.
    ///
    /// Returns the pair's call count after this call.
    pub fn insert_pair(&mut self, a: &PhoneNumber, b: &PhoneNumber) -> Result<u32, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop(a.clone()));
        }

        let from = self.get_or_insert(a);
        let to = self.get_or_insert(b);
        let key = edge_key(from, to);

        let calls = match self.edge_index.get(&key) {
            Some(&edge) => self.graph[edge].record_call(),
            None => {
                let edge = self.graph.add_edge(from, to, CallEdge::new());
                self.edge_index.insert(key, edge);
                1
            }
        };

        trace!(%a, %b, calls, "recorded call");
        Ok(calls)
    }

    fn get_or_insert(&mut self, number: &PhoneNumber) -> NodeId {
        if let Some(&index) = self.number_index.get(number) {
            return index;
        }
        let index = self.graph.add_node(number.clone());
        self.number_index.insert(number.clone(), index);
        index
    }

    /// Looks up a node by its phone number.
    pub fn find_node(&self, number: &str) -> Option<NodeId> {
        self.number_index.get(number).copied()
    }

    /// Gets the phone number stored at a node.
    pub fn number(&self, index: NodeId) -> Option<&PhoneNumber> {
        self.graph.node_weight(index)
    }

    /// Returns true if `index` belongs to this graph.
    pub fn contains(&self, index: NodeId) -> bool {
        self.graph.node_weight(index).is_some()
    }

    /// Gets the call count on the edge between two nodes, if they are
    /// directly connected. Symmetric in its arguments.
    pub fn call_count(&self, a: NodeId, b: NodeId) -> Option<u32> {
        let edge = self.edge_index.get(&edge_key(a, b))?;
        self.graph.edge_weight(*edge).map(|weight| weight.calls)
    }

    /// Iterates over the numbers directly connected to a node.
    pub fn neighbors(&self, index: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.neighbors(index)
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns every edge once, sorted by (source, target).
    pub fn export_edges(&self) -> Vec<GraphEdge> {
        let mut edges: Vec<GraphEdge> = self
            .graph
            .edge_references()
            .map(|edge_ref| {
                let a = &self.graph[edge_ref.source()];
                let b = &self.graph[edge_ref.target()];
                let (source, target) = if a <= b { (a, b) } else { (b, a) };
                GraphEdge {
                    source: source.clone(),
                    target: target.clone(),
                    calls: edge_ref.weight().calls,
                }
            })
            .collect();

        edges.sort_by(|x, y| {
            x.source
                .cmp(&y.source)
                .then_with(|| x.target.cmp(&y.target))
        });
        edges
    }
}

fn edge_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Graph statistics for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub total_calls: u64,
}

impl CallGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            total_calls: self
                .graph
                .edge_weights()
                .map(|weight| u64::from(weight.calls))
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> PhoneNumber {
        PhoneNumber::parse(s).unwrap()
    }

    #[test]
    fn test_insert_creates_nodes_and_edge() {
        let mut graph = CallGraph::new();
        let calls = graph
            .insert_pair(&num("555-111-2222"), &num("555-333-4444"))
            .unwrap();

        assert_eq!(calls, 1);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_repeated_pair_accumulates_symmetrically() {
        let mut graph = CallGraph::new();
        let a = num("555-111-2222");
        let b = num("555-333-4444");

        for _ in 0..5 {
            graph.insert_pair(&a, &b).unwrap();
        }

        let ia = graph.find_node("555-111-2222").unwrap();
        let ib = graph.find_node("555-333-4444").unwrap();
        assert_eq!(graph.call_count(ia, ib), Some(5));
        assert_eq!(graph.call_count(ib, ia), Some(5));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_argument_order_shares_one_edge() {
        let mut graph = CallGraph::new();
        let a = num("555-111-2222");
        let b = num("555-333-4444");

        assert_eq!(graph.insert_pair(&a, &b).unwrap(), 1);
        assert_eq!(graph.insert_pair(&b, &a).unwrap(), 2);

        assert_eq!(graph.edge_count(), 1);
        let ia = graph.find_node(a.as_str()).unwrap();
        let ib = graph.find_node(b.as_str()).unwrap();
        assert_eq!(graph.call_count(ib, ia), Some(2));
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut graph = CallGraph::new();
        let a = num("555-111-2222");

        assert_eq!(
            graph.insert_pair(&a, &a),
            Err(GraphError::SelfLoop(a.clone()))
        );
        assert!(graph.is_empty());
    }

    #[test]
    fn test_find_node_is_stable() {
        let mut graph = CallGraph::new();
        let a = num("555-111-2222");
        let b = num("555-333-4444");
        let c = num("555-555-6666");

        graph.insert_pair(&a, &b).unwrap();
        let first = graph.find_node("555-111-2222").unwrap();
        graph.insert_pair(&c, &a).unwrap();
        graph.insert_pair(&b, &c).unwrap();

        assert_eq!(graph.find_node("555-111-2222"), Some(first));
        assert_eq!(graph.number(first), Some(&a));
        assert_eq!(graph.find_node("555-999-0000"), None);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_call_count_without_edge() {
        let mut graph = CallGraph::new();
        graph
            .insert_pair(&num("555-111-2222"), &num("555-333-4444"))
            .unwrap();
        graph
            .insert_pair(&num("555-333-4444"), &num("555-555-6666"))
            .unwrap();

        let a = graph.find_node("555-111-2222").unwrap();
        let c = graph.find_node("555-555-6666").unwrap();
        assert_eq!(graph.call_count(a, c), None);
    }

    #[test]
    fn test_neighbors() {
        let mut graph = CallGraph::new();
        let hub = num("555-000-0000");
        graph.insert_pair(&hub, &num("555-000-0001")).unwrap();
        graph.insert_pair(&num("555-000-0002"), &hub).unwrap();
        graph.insert_pair(&hub, &num("555-000-0001")).unwrap();

        let index = graph.find_node(hub.as_str()).unwrap();
        let mut neighbors: Vec<&str> = graph
            .neighbors(index)
            .filter_map(|n| graph.number(n))
            .map(|n| n.as_str())
            .collect();
        neighbors.sort();
        assert_eq!(neighbors, vec!["555-000-0001", "555-000-0002"]);
    }

    #[test]
    fn test_export_edges_normalized_and_sorted() {
        let mut graph = CallGraph::new();
        graph
            .insert_pair(&num("555-333-4444"), &num("555-111-2222"))
            .unwrap();
        graph
            .insert_pair(&num("555-111-2222"), &num("555-333-4444"))
            .unwrap();
        graph
            .insert_pair(&num("555-000-9999"), &num("555-555-6666"))
            .unwrap();

        let edges = graph.export_edges();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].source.as_str(), "555-000-9999");
        assert_eq!(edges[0].calls, 1);
        assert_eq!(edges[1].source.as_str(), "555-111-2222");
        assert_eq!(edges[1].target.as_str(), "555-333-4444");
        assert_eq!(edges[1].calls, 2);
    }

    #[test]
    fn test_stats() {
        let mut graph = CallGraph::new();
        let a = num("555-111-2222");
        let b = num("555-333-4444");
        let c = num("555-555-6666");
        graph.insert_pair(&a, &b).unwrap();
        graph.insert_pair(&a, &b).unwrap();
        graph.insert_pair(&b, &c).unwrap();

        assert_eq!(
            graph.stats(),
            GraphStats {
                node_count: 3,
                edge_count: 2,
                total_calls: 3,
            }
        );
    }
}
