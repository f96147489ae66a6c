//! Connectivity queries over a built call graph.

use crate::graph::CallGraph;
use crate::path::shortest_path;
use phonegraph_core::CallRecord;
use std::fmt;
use tracing::debug;

/// The answer to a query about two numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The numbers called each other directly this many times.
    Talked(u32),
    /// The numbers are linked through this many intermediate numbers.
    ConnectedThrough(usize),
    /// Both numbers are known but no chain of calls links them.
    NotConnected,
    /// This number never appeared in the call records.
    NotFound(String),
    /// Both sides of the query were the same number.
    SameNumber,
}

impl QueryOutcome {
    /// True for outcomes that answer the question; false for the ones
    /// that describe a problem with the query itself.
    pub fn is_answer(&self) -> bool {
        matches!(
            self,
            Self::Talked(_) | Self::ConnectedThrough(_) | Self::NotConnected
        )
    }
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Talked(calls) => write!(f, "Talked {} times", calls),
            Self::ConnectedThrough(hops) => write!(f, "Connected through {} numbers", hops),
            Self::NotConnected => write!(f, "Not connected"),
            Self::NotFound(number) => write!(f, "Phone number not found: {}", number),
            Self::SameNumber => write!(f, "Same number given twice"),
        }
    }
}

/// Answers queries against a borrowed graph.
///
/// Queries only read the graph. Search state is local to each call.
pub struct QueryEngine<'g> {
    graph: &'g CallGraph,
}

impl<'g> QueryEngine<'g> {
    pub fn new(graph: &'g CallGraph) -> Self {
        Self { graph }
    }

    /// Reports how two numbers are related.
    ///
    /// A direct edge wins over any path: directly connected numbers are
    /// reported by call count, never by distance.
    pub fn query(&self, a: &str, b: &str) -> QueryOutcome {
        if a == b {
            return QueryOutcome::SameNumber;
        }

        let Some(from) = self.graph.find_node(a) else {
            return QueryOutcome::NotFound(a.to_string());
        };
        let Some(to) = self.graph.find_node(b) else {
            return QueryOutcome::NotFound(b.to_string());
        };

        if let Some(calls) = self.graph.call_count(from, to) {
            debug!(a, b, calls, "direct connection");
            return QueryOutcome::Talked(calls);
        }

        match shortest_path(self.graph, from, to) {
            Some(between) => {
                debug!(a, b, between, "indirect connection");
                QueryOutcome::ConnectedThrough(between)
            }
            None => {
                debug!(a, b, "no connection");
                QueryOutcome::NotConnected
            }
        }
    }

    /// Queries the two numbers of a parsed record.
    pub fn query_record(&self, record: &CallRecord) -> QueryOutcome {
        self.query(record.caller.as_str(), record.callee.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonegraph_core::PhoneNumber;

    fn graph_from(pairs: &[(&str, &str)]) -> CallGraph {
        let mut graph = CallGraph::new();
        for (a, b) in pairs {
            let a = PhoneNumber::parse(a).unwrap();
            let b = PhoneNumber::parse(b).unwrap();
            graph.insert_pair(&a, &b).unwrap();
        }
        graph
    }

    #[test]
    fn test_direct_edge_reports_call_count() {
        let graph = graph_from(&[
            ("555-111-2222", "555-333-4444"),
            ("555-333-4444", "555-111-2222"),
            ("555-111-2222", "555-333-4444"),
        ]);
        let engine = QueryEngine::new(&graph);

        assert_eq!(
            engine.query("555-111-2222", "555-333-4444"),
            QueryOutcome::Talked(3)
        );
        assert_eq!(
            engine.query("555-333-4444", "555-111-2222"),
            QueryOutcome::Talked(3)
        );
    }

    #[test]
    fn test_direct_edge_short_circuits_shorter_path() {
        // A-C is direct even though A-B-C also exists.
        let graph = graph_from(&[
            ("555-000-0001", "555-000-0002"),
            ("555-000-0002", "555-000-0003"),
            ("555-000-0001", "555-000-0003"),
        ]);
        let engine = QueryEngine::new(&graph);
        assert_eq!(
            engine.query("555-000-0001", "555-000-0003"),
            QueryOutcome::Talked(1)
        );
    }

    #[test]
    fn test_indirect_connection() {
        let graph = graph_from(&[
            ("555-111-2222", "555-333-4444"),
            ("555-333-4444", "555-555-6666"),
        ]);
        let outcome = QueryEngine::new(&graph).query("555-111-2222", "555-555-6666");

        assert_eq!(outcome, QueryOutcome::ConnectedThrough(1));
        assert_eq!(outcome.to_string(), "Connected through 1 numbers");
    }

    #[test]
    fn test_not_connected() {
        let graph = graph_from(&[
            ("555-000-0001", "555-000-0002"),
            ("555-000-0003", "555-000-0004"),
        ]);
        let outcome = QueryEngine::new(&graph).query("555-000-0001", "555-000-0004");

        assert_eq!(outcome, QueryOutcome::NotConnected);
        assert_eq!(outcome.to_string(), "Not connected");
        assert!(outcome.is_answer());
    }

    #[test]
    fn test_not_found_names_first_missing_number() {
        let graph = graph_from(&[("555-000-0001", "555-000-0002")]);
        let engine = QueryEngine::new(&graph);

        assert_eq!(
            engine.query("555-999-9999", "555-000-0002"),
            QueryOutcome::NotFound("555-999-9999".to_string())
        );
        assert_eq!(
            engine.query("555-000-0001", "555-888-8888"),
            QueryOutcome::NotFound("555-888-8888".to_string())
        );
        assert!(!engine.query("555-999-9999", "555-888-8888").is_answer());
    }

    #[test]
    fn test_same_number() {
        let graph = graph_from(&[("555-000-0001", "555-000-0002")]);
        let outcome = QueryEngine::new(&graph).query("555-000-0001", "555-000-0001");
        assert_eq!(outcome, QueryOutcome::SameNumber);
        assert!(!outcome.is_answer());
    }

    #[test]
    fn test_query_record() {
        let graph = graph_from(&[("555-000-0001", "555-000-0002")]);
        let record = CallRecord::parse_line("555-000-0002 555-000-0001").unwrap();
        assert_eq!(
            QueryEngine::new(&graph).query_record(&record).to_string(),
            "Talked 1 times"
        );
    }
}
