use phonegraph_core::PhoneNumber;
use std::path::PathBuf;
use thiserror::Error;

/// Misuse of the graph API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("cannot connect {0} to itself")]
    SelfLoop(PhoneNumber),
}

/// Failure to ingest a call-record source as a whole.
///
/// Bad lines inside a source are not errors at this level; they are
/// collected in the `IngestReport`.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
