//! Error types for the correlation layer.

use courier_wire::{JobId, WireError};

/// Errors that can occur while correlating requests with replies.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// A caller error detected before any state changed.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What the caller got wrong.
        message: String,
    },

    /// The job id is already waiting on a reply.
    #[error("job id already pending: {job}")]
    DuplicateJob {
        /// The colliding job id.
        job: JobId,
    },

    /// The pending slot was dropped before a reply arrived.
    #[error("reply slot dropped before a reply arrived")]
    Canceled,

    /// An envelope failed to decode.
    #[error(transparent)]
    Wire(#[from] WireError),
}
