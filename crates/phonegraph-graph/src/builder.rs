//! Graph builder for constructing the call graph from record sources.
//!
//! The builder feeds every valid record of a file or stream into a
//! `CallGraph`. Bad lines are logged, counted in the source's report,
//! and skipped; they never stop the rest of the source from loading.

use crate::error::IngestError;
use crate::graph::CallGraph;
use phonegraph_core::RecordReader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// A line that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    pub line: usize,
    pub message: String,
}

/// Summary of loading one source.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// Name of the source, for diagnostics.
    pub source: String,
    /// Records added to the graph.
    pub records: usize,
    /// Lines that were skipped because they were malformed.
    pub errors: Vec<LineError>,
    /// Time taken in milliseconds.
    pub duration_ms: u64,
}

impl IngestReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Builds a CallGraph from call-record sources.
///
/// Call `ingest_file` or `ingest_reader` once per source, then `build`.
pub struct GraphBuilder {
    graph: CallGraph,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Creates a builder over an empty graph.
    pub fn new() -> Self {
        Self {
            graph: CallGraph::new(),
        }
    }

    /// Loads every record in a file.
    ///
    /// Fails only if the file cannot be opened.
    pub fn ingest_file(&mut self, path: &Path) -> Result<IngestReport, IngestError> {
        let file = File::open(path).map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.ingest_reader(BufReader::new(file), &path.display().to_string()))
    }

    /// Loads every record in a stream.
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R, source: &str) -> IngestReport {
        let start = Instant::now();
        let mut report = IngestReport {
            source: source.to_string(),
            ..IngestReport::default()
        };

        let mut records = RecordReader::new(reader);
        for (line, result) in records.by_ref() {
            let outcome = result
                .map_err(|e| e.to_string())
                .and_then(|record| {
                    self.graph
                        .insert_pair(&record.caller, &record.callee)
                        .map_err(|e| e.to_string())
                });

            match outcome {
                Ok(_) => report.records += 1,
                Err(message) => {
                    warn!("{}:{}: {}", source, line, message);
                    report.errors.push(LineError { line, message });
                }
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            source,
            lines = records.lines_read(),
            records = report.records,
            skipped = report.errors.len(),
            duration_ms = report.duration_ms,
            "loaded call records"
        );
        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "graph size"
        );
        report
    }

    /// Borrows the graph built so far.
    pub fn graph(&self) -> &CallGraph {
        &self.graph
    }

    /// Finishes building and returns the graph.
    pub fn build(self) -> CallGraph {
        self.graph
    }
}
