//! CLI command implementations.

use colored::Colorize;
use phonegraph_core::{RecordError, RecordReader};
use phonegraph_graph::{CallGraph, GraphBuilder, QueryEngine, QueryOutcome};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// What the user asked for on the command line.
pub struct RunOptions {
    pub files: Vec<PathBuf>,
    pub export: Option<PathBuf>,
    pub stats: bool,
}

/// Counts of everything that went wrong without stopping the run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Files that could not be opened.
    pub unreadable_files: usize,
    /// Malformed lines across all record files.
    pub bad_records: usize,
    /// Malformed lines on the query stream.
    pub bad_queries: usize,
}

impl RunSummary {
    /// True if the run saw no recoverable errors at all.
    pub fn is_clean(&self) -> bool {
        self.unreadable_files == 0 && self.bad_records == 0 && self.bad_queries == 0
    }
}

/// Counts from one pass over a query stream.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QuerySummary {
    pub answered: usize,
    pub not_found: usize,
    /// Well-formed queries that name one number twice.
    pub same_number: usize,
    pub malformed: usize,
}

/// Builds the graph from every file, then answers queries from stdin.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let graph = build(&options.files, &mut summary);

    if options.stats {
        print_stats(&graph);
    }

    if let Some(path) = &options.export {
        export_graph(&graph, path)?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let queries = run_queries(&graph, stdin.lock(), stdout.lock())?;
    summary.bad_queries = queries.malformed;

    info!(
        answered = queries.answered,
        not_found = queries.not_found,
        same_number = queries.same_number,
        malformed = queries.malformed,
        "query stream finished"
    );

    Ok(summary)
}

/// Loads every file into one graph. Unreadable files are logged and skipped.
pub fn build(files: &[PathBuf], summary: &mut RunSummary) -> CallGraph {
    let mut builder = GraphBuilder::new();

    for path in files {
        match builder.ingest_file(path) {
            Ok(report) => {
                if report.has_errors() {
                    warn!(
                        "{}: skipped {} malformed lines",
                        report.source,
                        report.errors.len()
                    );
                }
                summary.bad_records += report.errors.len();
            }
            Err(e) => {
                error!("{}", e);
                summary.unreadable_files += 1;
            }
        }
    }

    builder.build()
}

/// Answers one query per line of `input`, writing answers to `output`.
///
/// Malformed lines, unknown numbers and same-number queries are logged,
/// not written. Only malformed lines count against the run.
pub fn run_queries<R: BufRead, W: Write>(
    graph: &CallGraph,
    input: R,
    mut output: W,
) -> io::Result<QuerySummary> {
    let engine = QueryEngine::new(graph);
    let mut summary = QuerySummary::default();

    for (line, result) in RecordReader::new(input) {
        let record = match result {
            Ok(record) => record,
            Err(RecordError::Io(e)) => {
                warn!("stdin:{}: {}", line, e);
                summary.malformed += 1;
                break;
            }
            Err(RecordError::SameNumber(_)) => {
                warn!("stdin:{}: {}", line, QueryOutcome::SameNumber);
                summary.same_number += 1;
                continue;
            }
            Err(e) => {
                warn!("stdin:{}: {}", line, e);
                summary.malformed += 1;
                continue;
            }
        };

        let outcome = engine.query_record(&record);
        if outcome.is_answer() {
            writeln!(output, "{}", outcome)?;
            summary.answered += 1;
            continue;
        }

        warn!("stdin:{}: {}", line, outcome);
        match outcome {
            QueryOutcome::NotFound(_) => summary.not_found += 1,
            _ => summary.same_number += 1,
        }
    }

    output.flush()?;
    Ok(summary)
}

fn print_stats(graph: &CallGraph) {
    let stats = graph.stats();
    eprintln!(
        "{} Loaded {} numbers, {} connections ({} calls)",
        "✓".green(),
        stats.node_count.to_string().cyan(),
        stats.edge_count.to_string().cyan(),
        stats.total_calls
    );
}

fn export_graph(graph: &CallGraph, path: &Path) -> Result<()> {
    let export = serde_json::json!({
        "version": "1.0",
        "stats": graph.stats(),
        "edges": graph.export_edges(),
    });

    fs::write(path, serde_json::to_string_pretty(&export)?)?;
    eprintln!("{} Exported to {}", "✓".green(), path.display());

    Ok(())
}
