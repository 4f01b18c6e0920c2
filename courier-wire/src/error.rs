//! Error types for envelope encoding and decoding.

/// Errors produced while decoding or accessing envelope frames.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WireError {
    /// Not enough bytes remain to decode a fixed-width region.
    #[error("truncated input: need {needed} bytes, have {have}")]
    TruncatedInput {
        /// Minimum bytes required to continue decoding.
        needed: usize,
        /// Actual bytes available.
        have: usize,
    },

    /// The body's own decoder rejected its byte range.
    #[error("malformed body at offset {offset}: {message}")]
    MalformedBody {
        /// Absolute offset of the body start within the frame.
        offset: usize,
        /// Description reported by the body decoder.
        message: String,
    },

    /// A payload seek or read crossed the end of the captured region.
    #[error("payload access out of range: requested {requested}, length {len}")]
    OutOfRange {
        /// Offset or extent that was requested.
        requested: usize,
        /// Length of the captured payload region.
        len: usize,
    },

    /// The frame's header flags legacy framing, which this codec does not speak.
    #[error("legacy framing on frame with code {code}")]
    NonProtoFrame {
        /// Raw message code carried by the offending frame.
        code: u32,
    },
}
