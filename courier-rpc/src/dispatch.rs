//! Kind-keyed dispatch of unsolicited frames.

use std::collections::HashMap;
use std::rc::Rc;

use courier_wire::MsgKind;

/// Receives raw frames routed by message kind.
///
/// Handlers get the complete frame and decode it with the body type they
/// know belongs to their kind; the router never decodes a body on their
/// behalf. Called synchronously during frame processing.
pub trait InboundHandler {
    /// Process one inbound frame of the kind this handler registered for.
    fn handle(&self, frame: &[u8]);
}

/// Registry mapping message kinds to their handlers.
///
/// One handler per kind; registering again replaces the previous handler.
#[derive(Default)]
pub struct KindDispatcher {
    handlers: HashMap<MsgKind, Rc<dyn InboundHandler>>,
}

impl KindDispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`, replacing any previous registration.
    pub fn register(&mut self, kind: MsgKind, handler: Rc<dyn InboundHandler>) {
        self.handlers.insert(kind, handler);
    }

    /// Route a frame to the handler for `kind`.
    ///
    /// Returns whether a handler was registered.
    pub fn dispatch(&self, kind: MsgKind, frame: &[u8]) -> bool {
        match self.handlers.get(&kind) {
            Some(handler) => {
                handler.handle(frame);
                true
            }
            None => false,
        }
    }

    /// Whether a handler is registered for `kind`.
    pub fn contains(&self, kind: MsgKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl std::fmt::Debug for KindDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KindDispatcher")
            .field("handler_count", &self.handlers.len())
            .finish()
    }
}
