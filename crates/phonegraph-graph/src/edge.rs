//! Edge types for the call graph.
//!
//! The graph is undirected, so a single `CallEdge` weight is shared by
//! both endpoints. There is no second copy of the count to keep in sync.

use phonegraph_core::PhoneNumber;
use serde::{Deserialize, Serialize};

/// Accumulated call history between two numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallEdge {
    /// How many times the pair has been seen. Always at least 1.
    pub calls: u32,
}

impl CallEdge {
    /// Creates an edge for a first call.
    pub fn new() -> Self {
        Self { calls: 1 }
    }

    /// Records one more call, saturating at `u32::MAX`.
    pub fn record_call(&mut self) -> u32 {
        self.calls = self.calls.saturating_add(1);
        self.calls
    }
}

impl Default for CallEdge {
    fn default() -> Self {
        Self::new()
    }
}

/// A flattened edge for export.
///
/// `source` sorts before `target`, so every undirected edge has exactly
/// one exported form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: PhoneNumber,
    pub target: PhoneNumber,
    pub calls: u32,
}
