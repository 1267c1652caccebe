use thiserror::Error;

use crate::convert::MalformedInputError;

/// The ways a pipeline invocation can fail
#[derive(Debug, Error)]
pub enum TransformError {
    /// A source object could not be read as a playlist document
    #[error("malformed input object {bucket}/{key}: {source}")]
    MalformedInput {
        bucket: String,
        key: String,
        #[source]
        source: MalformedInputError,
    },
    /// A list, get, put or delete call against object storage failed
    #[error("storage access failed: {0:#}")]
    StorageAccess(#[from] anyhow::Error),
    /// The triggering notification did not describe a usable object
    #[error("invalid notification: {0}")]
    InvalidNotification(String),
}
