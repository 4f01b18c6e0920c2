//! # courier-rpc
//!
//! Request/reply correlation on top of the `courier-wire` envelope codec.
//!
//! The codec moves bytes; this crate makes them a conversation:
//!
//! - [`JobIdAllocator`]: atomic monotonic ids, the one synchronization
//!   point shared request paths need
//! - [`PendingReplies`]: job id → one-shot reply slot
//! - [`ReplyFuture`]: resolves to the decoded reply envelope
//! - [`InboundHandler`] / [`KindDispatcher`]: kind-keyed routing for
//!   unsolicited frames
//! - [`SessionRouter`]: the glue that prepares outbound requests and
//!   routes inbound frames, reporting each as a [`RouteOutcome`]
//!
//! Timeouts, retries, and the transport that actually carries frames all
//! live above or below this layer, not in it.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

// Re-export the wire types callers need alongside this crate.
pub use courier_wire::{
    BodyDecodeError, Envelope, EnvelopeHeader, JobId, MsgKind, PayloadSlice, WireBody, WireError,
    HEADER_SIZE,
};

mod allocator;
mod dispatch;
mod error;
mod pending;
mod reply_future;
mod session;

pub use allocator::JobIdAllocator;
pub use dispatch::{InboundHandler, KindDispatcher};
pub use error::RpcError;
pub use pending::PendingReplies;
pub use reply_future::ReplyFuture;
pub use session::{RouteOutcome, SessionRouter};
