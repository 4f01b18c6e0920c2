//! Session-level orchestration of correlation and dispatch.

use std::rc::Rc;

use courier_wire::{Envelope, EnvelopeHeader, JobId, MsgKind, WireBody, WireError};

use crate::allocator::JobIdAllocator;
use crate::dispatch::{InboundHandler, KindDispatcher};
use crate::error::RpcError;
use crate::pending::PendingReplies;
use crate::reply_future::ReplyFuture;

/// Where an inbound frame ended up.
///
/// Routing never errors on unfamiliar traffic; the outcome says what
/// happened and the caller decides whether that deserves a drop, a log
/// line, or an escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The frame completed a pending request.
    Reply,

    /// The frame reached the handler registered for its kind.
    Handled,

    /// The kind is known but nothing is registered for it.
    NoHandler(MsgKind),

    /// The code is outside the kind table.
    UnknownCode(u32),
}

/// Client-side router gluing allocation, correlation, and dispatch.
///
/// Outbound: [`SessionRouter::start_request`] stamps a fresh source job id
/// on an envelope, encodes it, and installs the pending slot its reply
/// will complete. Inbound: [`SessionRouter::route_inbound`] peeks the
/// header and hands the frame to the waiting future (reply) or the kind's
/// handler (unsolicited).
///
/// Not thread-safe; a session lives on one task. Job id allocation is
/// atomic on its own, so envelopes prepared here never collide even if
/// several sessions share an allocator-style counter upstream.
#[derive(Debug, Default)]
pub struct SessionRouter {
    allocator: JobIdAllocator,
    pending: PendingReplies,
    dispatcher: KindDispatcher,
}

impl SessionRouter {
    /// Create a router with no handlers and no pending requests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for unsolicited frames of `kind`.
    pub fn register_handler(&mut self, kind: MsgKind, handler: Rc<dyn InboundHandler>) {
        self.dispatcher.register(kind, handler);
    }

    /// Prepare `request` for sending and wait-list its reply.
    ///
    /// Allocates a fresh job id, stamps it as the request's source, and
    /// returns the encoded frame together with the future that resolves
    /// when a reply targeting that id arrives. The reply decodes with body
    /// type `Resp`.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateJob` if the allocated id is somehow already
    /// pending (a reused allocator after `starting_at` rollback).
    pub fn start_request<Req, Resp>(
        &self,
        request: &mut Envelope<Req>,
    ) -> Result<(Vec<u8>, ReplyFuture<Resp>), RpcError>
    where
        Req: WireBody,
        Resp: WireBody,
    {
        let job = self.allocator.next_id();
        request.set_source_job_id(job);
        let future = self.pending.register::<Resp>(job)?;
        Ok((request.encode(), future))
    }

    /// Route one inbound frame.
    ///
    /// Replies take precedence: a frame whose target job id matches a
    /// pending request completes it, whatever its kind. Everything else
    /// routes by kind. Unknown codes and missing handlers are outcomes,
    /// not errors.
    ///
    /// # Errors
    ///
    /// - `Wire(TruncatedInput)` if the frame is shorter than a header.
    /// - `Wire(NonProtoFrame)` if the header flags legacy framing.
    pub fn route_inbound(&self, frame: &[u8]) -> Result<RouteOutcome, RpcError> {
        let header = EnvelopeHeader::peek(frame)?;
        if !header.proto {
            return Err(RpcError::from(WireError::NonProtoFrame {
                code: header.code,
            }));
        }

        let target = header.job_id_target;
        if !target.is_none() && self.pending.complete(target, frame.to_vec()) {
            return Ok(RouteOutcome::Reply);
        }

        match MsgKind::from_code(header.code) {
            Some(kind) => {
                if self.dispatcher.dispatch(kind, frame) {
                    Ok(RouteOutcome::Handled)
                } else {
                    tracing::debug!(kind = %kind, "no handler registered for message kind");
                    Ok(RouteOutcome::NoHandler(kind))
                }
            }
            None => {
                tracing::debug!(code = header.code, "dropping frame with unknown message code");
                Ok(RouteOutcome::UnknownCode(header.code))
            }
        }
    }

    /// Abandon the pending reply slot for an in-flight request.
    pub fn cancel_request(&self, job: JobId) -> bool {
        self.pending.cancel(job)
    }

    /// Number of requests currently waiting on replies.
    pub fn pending_count(&self) -> usize {
        self.pending.pending_count()
    }

    /// Number of registered kind handlers.
    pub fn handler_count(&self) -> usize {
        self.dispatcher.handler_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_wire::BodyDecodeError;
    use std::cell::RefCell;

    /// Single counter byte.
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    struct SeqBody {
        value: u8,
    }

    impl WireBody for SeqBody {
        fn merge_from(&mut self, buf: &[u8]) -> Result<usize, BodyDecodeError> {
            let byte = buf
                .first()
                .ok_or_else(|| BodyDecodeError::new("empty body"))?;
            self.value = *byte;
            Ok(1)
        }

        fn encode_to_vec(&self) -> Vec<u8> {
            vec![self.value]
        }
    }

    struct CountingHandler {
        count: RefCell<usize>,
    }

    impl CountingHandler {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                count: RefCell::new(0),
            })
        }
    }

    impl InboundHandler for CountingHandler {
        fn handle(&self, _frame: &[u8]) {
            *self.count.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_start_request_stamps_fresh_source() {
        let router = SessionRouter::new();
        let mut request: Envelope<SeqBody> = Envelope::new_request(MsgKind::StoreGet);

        let (frame, _future) = router
            .start_request::<SeqBody, SeqBody>(&mut request)
            .expect("start");

        assert!(!request.source_job_id().is_none());
        assert_eq!(router.pending_count(), 1);

        let header = EnvelopeHeader::peek(&frame).expect("peek");
        assert_eq!(header.job_id_source, request.source_job_id());
    }

    #[test]
    fn test_unsolicited_frame_routes_by_kind() {
        let mut router = SessionRouter::new();
        let handler = CountingHandler::new();
        router.register_handler(MsgKind::EventNotify, handler.clone());

        let frame = Envelope::<SeqBody>::new_request(MsgKind::EventNotify).encode();
        let outcome = router.route_inbound(&frame).expect("route");

        assert_eq!(outcome, RouteOutcome::Handled);
        assert_eq!(*handler.count.borrow(), 1);
    }

    #[test]
    fn test_no_handler_outcome() {
        let router = SessionRouter::new();
        let frame = Envelope::<SeqBody>::new_request(MsgKind::SessionStatus).encode();

        let outcome = router.route_inbound(&frame).expect("route");
        assert_eq!(outcome, RouteOutcome::NoHandler(MsgKind::SessionStatus));
    }

    #[test]
    fn test_unknown_code_outcome() {
        let router = SessionRouter::new();

        let mut frame = Vec::new();
        EnvelopeHeader::for_code(61234).write_to(&mut frame);
        frame.push(0); // empty body

        let outcome = router.route_inbound(&frame).expect("route");
        assert_eq!(outcome, RouteOutcome::UnknownCode(61234));
    }

    #[test]
    fn test_legacy_framing_rejected() {
        let router = SessionRouter::new();

        let mut frame = Envelope::<SeqBody>::new_request(MsgKind::SessionHello).encode();
        frame[3] &= 0x7F;

        let result = router.route_inbound(&frame);
        assert!(matches!(
            result,
            Err(RpcError::Wire(WireError::NonProtoFrame { .. }))
        ));
    }

    #[test]
    fn test_short_frame_rejected() {
        let router = SessionRouter::new();
        let result = router.route_inbound(&[0u8; 4]);
        assert!(matches!(
            result,
            Err(RpcError::Wire(WireError::TruncatedInput { .. }))
        ));
    }

    #[test]
    fn test_targeted_frame_with_no_pending_falls_through() {
        let mut router = SessionRouter::new();
        let handler = CountingHandler::new();
        router.register_handler(MsgKind::StoreGetReply, handler.clone());

        let mut reply: Envelope<SeqBody> = Envelope::new_request(MsgKind::StoreGetReply);
        reply.set_target_job_id(JobId::new(424242));

        let outcome = router.route_inbound(&reply.encode()).expect("route");
        assert_eq!(outcome, RouteOutcome::Handled);
        assert_eq!(*handler.count.borrow(), 1);
    }

    #[test]
    fn test_cancel_request() {
        let router = SessionRouter::new();
        let mut request: Envelope<SeqBody> = Envelope::new_request(MsgKind::StorePut);

        let (_frame, _future) = router
            .start_request::<SeqBody, SeqBody>(&mut request)
            .expect("start");
        assert_eq!(router.pending_count(), 1);

        assert!(router.cancel_request(request.source_job_id()));
        assert_eq!(router.pending_count(), 0);
    }
}
