//! Synchronous in-process event bus.
//!
//! Producers (the model, views, the input layer) only hold an [`Emitter`],
//! a cheap handle onto the shared queue. The owner of the [`EventBus`] calls
//! [`EventBus::pump`] with the context every handler mutates; each queued
//! event is delivered to all matching handlers in registration order and
//! runs to completion before the next event is taken from the queue.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use super::types::{EventKind, FormKind, ShopEvent};

/// Which events a handler receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Exactly one event kind.
    Exact(EventKind),
    /// Every field-change event emitted by the given form.
    Form(FormKind),
    /// Everything.
    Any,
}

impl Selector {
    pub fn matches(&self, event: &ShopEvent) -> bool {
        match self {
            Selector::Exact(kind) => event.kind() == *kind,
            Selector::Form(form) => matches!(
                event,
                ShopEvent::FieldChange { form: emitted, .. } if emitted == form
            ),
            Selector::Any => true,
        }
    }
}

impl From<EventKind> for Selector {
    fn from(kind: EventKind) -> Self {
        Selector::Exact(kind)
    }
}

/// Cloneable handle for queueing events onto the bus.
#[derive(Clone, Default)]
pub struct Emitter {
    queue: Arc<Mutex<VecDeque<ShopEvent>>>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: ShopEvent) {
        self.queue.lock().push_back(event);
    }

    /// Number of events waiting for dispatch.
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Remove and return everything queued so far without dispatching it.
    pub fn drain(&self) -> Vec<ShopEvent> {
        self.queue.lock().drain(..).collect()
    }

    fn pop(&self) -> Option<ShopEvent> {
        self.queue.lock().pop_front()
    }
}

pub type Handler<C> = Box<dyn FnMut(&mut C, &ShopEvent)>;

struct Subscription<C> {
    selector: Selector,
    handler: Handler<C>,
}

/// Dispatch table of process-wide subscriptions. Registered once at startup.
pub struct EventBus<C> {
    subscriptions: Vec<Subscription<C>>,
    emitter: Emitter,
}

impl<C> EventBus<C> {
    pub fn new(emitter: Emitter) -> Self {
        Self {
            subscriptions: Vec::new(),
            emitter,
        }
    }

    pub fn emitter(&self) -> Emitter {
        self.emitter.clone()
    }

    pub fn on<S, F>(&mut self, selector: S, handler: F)
    where
        S: Into<Selector>,
        F: FnMut(&mut C, &ShopEvent) + 'static,
    {
        self.subscriptions.push(Subscription {
            selector: selector.into(),
            handler: Box::new(handler),
        });
    }

    pub fn emit(&self, event: ShopEvent) {
        self.emitter.emit(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Dispatch queued events until the queue is empty.
    ///
    /// Returns the number of events dispatched.
    pub fn pump(&mut self, ctx: &mut C) -> usize {
        let mut dispatched = 0;
        while let Some(event) = self.emitter.pop() {
            let kind = event.kind();
            let mut delivered = 0usize;
            for subscription in self.subscriptions.iter_mut() {
                if subscription.selector.matches(&event) {
                    (subscription.handler)(ctx, &event);
                    delivered += 1;
                }
            }
            tracing::trace!(event = %kind, handlers = delivered, "dispatched");
            dispatched += 1;
        }
        dispatched
    }
}
