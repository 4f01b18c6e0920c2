//! # courier-wire
//!
//! Envelope codec for job-correlated request/reply messaging with a
//! coordinator-style service.
//!
//! Every message on the wire is a self-describing envelope: a fixed-layout
//! header carrying routing and correlation metadata, a variable-length body
//! whose encoding is self-delimiting, and an optional opaque trailing
//! payload covering the remainder of the frame.
//!
//! This crate provides:
//!
//! - [`EnvelopeHeader`]: the fixed 20-byte header codec
//! - [`JobId`]: 64-bit correlation tokens with a reserved "none" sentinel
//! - [`MsgKind`]: the static wire-code table
//! - [`WireBody`]: the capability a body type must provide to travel in an
//!   envelope
//! - [`PayloadSlice`]: the seekable view of an envelope's trailing bytes
//! - [`Envelope`]: the composed unit, with request, reply, decode, and
//!   encode construction paths
//!
//! Everything here is synchronous and allocation-only: no I/O, no shared
//! state, no framing. Matching replies to requests lives in `courier-rpc`;
//! carrying frames lives in the transport below both.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

mod body;
mod cursor;
mod envelope;
mod error;
mod header;
mod job;
mod kind;
mod payload;

pub use body::{decode_body, BodyDecodeError, WireBody};
pub use cursor::ByteCursor;
pub use envelope::{Envelope, DEFAULT_PAYLOAD_RESERVE};
pub use error::WireError;
pub use header::{EnvelopeHeader, HEADER_SIZE};
pub use job::JobId;
pub use kind::MsgKind;
pub use payload::PayloadSlice;
