//! Shortest connection between two numbers.
//!
//! A breadth-first search that counts levels from the source. The
//! visited set and level table belong to a single run and are built
//! fresh each time, so the graph itself is never written to and no
//! state leaks from one query into the next.

use crate::edge::CallEdge;
use crate::graph::{CallGraph, NodeId};
use petgraph::graph::UnGraph;
use petgraph::visit::{VisitMap, Visitable};
use phonegraph_core::PhoneNumber;
use std::collections::VecDeque;
use tracing::trace;

type VisitedSet = <UnGraph<PhoneNumber, CallEdge> as Visitable>::Map;

/// Per-run BFS state, indexed by node.
struct Traversal {
    visited: VisitedSet,
    levels: Vec<usize>,
    queue: VecDeque<NodeId>,
}

impl Traversal {
    fn new(graph: &CallGraph) -> Self {
        Self {
            visited: graph.graph.visit_map(),
            levels: vec![0; graph.node_count()],
            queue: VecDeque::new(),
        }
    }

    /// Marks `node` visited at `level` and queues it, unless it was
    /// already queued by an earlier, shallower level.
    fn enqueue(&mut self, node: NodeId, level: usize) {
        if self.visited.visit(node) {
            self.levels[node.index()] = level;
            self.queue.push_back(node);
        }
    }
}

/// Counts the intermediate numbers on the shortest path from `source`
/// to `target`.
///
/// Neighbors of the source are 0 apart, a path through one other
/// number is 1, and so on. A node is 0 from itself. Returns `None` if
/// there is no path, or if either index is not in the graph.
pub fn shortest_path(graph: &CallGraph, source: NodeId, target: NodeId) -> Option<usize> {
    if !graph.contains(source) || !graph.contains(target) {
        return None;
    }

    let mut traversal = Traversal::new(graph);
    traversal.enqueue(source, 0);

    while let Some(current) = traversal.queue.pop_front() {
        let level = traversal.levels[current.index()];
        if current == target {
            trace!(level, "reached target");
            return Some(level.saturating_sub(1));
        }

        for neighbor in graph.neighbors(current) {
            traversal.enqueue(neighbor, level + 1);
        }
    }

    trace!("queue exhausted without reaching target");
    None
}

impl CallGraph {
    /// Counts the intermediate numbers on the shortest path between two
    /// nodes. See [`shortest_path`].
    pub fn shortest_path(&self, source: NodeId, target: NodeId) -> Option<usize> {
        shortest_path(self, source, target)
    }
}
