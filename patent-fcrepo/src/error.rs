//! Error types for repository operations

use crate::transaction::TxState;
use patent_graph_format::FormatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from checksumming and repository synchronization
///
/// Step failures (`ItemCreateFailed` through `CommitFailed`) abort the
/// current item only; the caller rolls back the item's transaction and moves
/// on. Rollback failures never surface here, they are logged.
#[derive(Debug, Error)]
pub enum FcrepoError {
    /// Local asset missing or unreadable
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transaction could not be started; nothing to roll back
    #[error("failed to open transaction: {0}")]
    TransactionOpen(String),

    #[error("failed to create item container: {0}")]
    ItemCreateFailed(String),

    #[error("failed to upload binary: {0}")]
    BinaryUploadFailed(String),

    #[error("failed to link file to item: {0}")]
    LinkFailed(String),

    #[error("failed to update file metadata: {0}")]
    MetadataPatchFailed(String),

    /// Commit rejected; the transaction is still open and must be rolled back
    #[error("failed to commit transaction: {0}")]
    CommitFailed(String),

    /// Operation not valid in the transaction's current state
    #[error("cannot {action} a {state} transaction")]
    InvalidTransactionState {
        state: TxState,
        action: &'static str,
    },

    /// Payload could not be built
    #[error("payload error: {0}")]
    Format(#[from] FormatError),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, FcrepoError>;
