//! Table of requests waiting on replies.

use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use courier_wire::{JobId, WireBody};
use tokio::sync::oneshot;

use crate::error::RpcError;
use crate::reply_future::ReplyFuture;

/// Maps outstanding job ids to one-shot reply slots.
///
/// `register` installs a slot and hands back the future side; `complete`
/// delivers an inbound reply frame to it. A reply that matches no pending
/// job (late, duplicate, or never issued) is reported and dropped, never
/// an error: the sender cannot be corrected from here.
///
/// Not thread-safe; share within one task via `Rc` like the rest of the
/// session state. Job id *allocation* is the atomic piece, this table is
/// not.
#[derive(Debug, Default)]
pub struct PendingReplies {
    slots: RefCell<HashMap<JobId, oneshot::Sender<Vec<u8>>>>,
}

impl PendingReplies {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a pending slot for `job` and return its future.
    ///
    /// The future decodes the delivered frame with body type `B`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `job` is the sentinel: "no correlation" can
    ///   never match a reply.
    /// - `DuplicateJob` if `job` is already pending.
    pub fn register<B: WireBody>(&self, job: JobId) -> Result<ReplyFuture<B>, RpcError> {
        if job.is_none() {
            return Err(RpcError::InvalidArgument {
                message: "cannot wait on the none sentinel".to_string(),
            });
        }

        match self.slots.borrow_mut().entry(job) {
            Entry::Occupied(_) => Err(RpcError::DuplicateJob { job }),
            Entry::Vacant(entry) => {
                let (tx, rx) = oneshot::channel();
                entry.insert(tx);
                Ok(ReplyFuture::new(rx))
            }
        }
    }

    /// Deliver a raw reply frame to the slot waiting on `job`.
    ///
    /// Returns whether the frame reached a waiter. `false` means no such
    /// job was pending, or its future had already been dropped.
    pub fn complete(&self, job: JobId, frame: Vec<u8>) -> bool {
        let sender = match self.slots.borrow_mut().remove(&job) {
            Some(sender) => sender,
            None => {
                tracing::warn!(job = %job, "reply for unknown or expired job id");
                return false;
            }
        };

        match sender.send(frame) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!(job = %job, "reply arrived after the waiter was dropped");
                false
            }
        }
    }

    /// Abandon the pending slot for `job`, resolving its future with
    /// `Canceled`.
    ///
    /// Returns whether a slot existed.
    pub fn cancel(&self, job: JobId) -> bool {
        self.slots.borrow_mut().remove(&job).is_some()
    }

    /// Number of requests currently waiting on replies.
    pub fn pending_count(&self) -> usize {
        self.slots.borrow().len()
    }
}
