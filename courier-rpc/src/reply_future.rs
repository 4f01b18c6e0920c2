//! Future side of a pending reply.

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

use courier_wire::{Envelope, WireBody};
use tokio::sync::oneshot;

use crate::error::RpcError;

/// Future resolving to the decoded reply envelope for one request.
///
/// Created by registering a job id with
/// [`PendingReplies`](crate::PendingReplies). The raw reply frame is
/// delivered through a one-shot slot and decoded here with the body type
/// the caller chose at registration.
pub struct ReplyFuture<B> {
    rx: oneshot::Receiver<Vec<u8>>,
    _body: PhantomData<fn() -> B>,
}

impl<B: WireBody> ReplyFuture<B> {
    pub(crate) fn new(rx: oneshot::Receiver<Vec<u8>>) -> Self {
        Self {
            rx,
            _body: PhantomData,
        }
    }
}

impl<B: WireBody> Future for ReplyFuture<B> {
    type Output = Result<Envelope<B>, RpcError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(Ok(frame)) => {
                Poll::Ready(Envelope::decode(&frame).map_err(RpcError::from))
            }
            Poll::Ready(Err(_)) => Poll::Ready(Err(RpcError::Canceled)),
            Poll::Pending => Poll::Pending,
        }
    }
}
