use std::path::PathBuf;
use thiserror::Error;

/// Failure classes of a migration run.
///
/// `Parse`, `Config`, and `Io` abort before any store interaction;
/// `Connection` aborts before the load; `Write` aborts the remaining load
/// with no rollback of already-written data. Index-creation failures are
/// logged and never surface here.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// The input could not be interpreted as a GraphML attributed multigraph.
    #[error("failed to parse GraphML: {0}")]
    Parse(String),

    /// Reading or writing a local file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The mapping configuration file is not valid JSON for the expected schema.
    #[error("invalid mapping config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Transport or authentication failure while establishing the store session.
    #[error("failed to connect to FalkorDB at {addr}: {source}")]
    Connection {
        addr: String,
        #[source]
        source: falkordb::FalkorDBError,
    },

    /// A load operation was attempted without a live session.
    #[error("loader is not connected")]
    NotConnected,

    /// The store rejected a single node or relationship write.
    #[error("write rejected for {entity}: {source}")]
    Write {
        entity: String,
        #[source]
        source: falkordb::FalkorDBError,
    },
}

pub type Result<T> = std::result::Result<T, MigrateError>;
