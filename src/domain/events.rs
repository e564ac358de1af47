//! # Deferred Event Posting
//!
//! Handlers never emit follow-up events synchronously. Instead the host hands
//! each invocation a posting capability; events enqueued through it are
//! delivered by the host after the handler has returned (typically after the
//! surrounding unit of work commits).

use serde::Serialize;
use serde_json::Value;

/// A follow-up event scheduled by a handler for the host to deliver later.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelayedEvent {
    kind: String,
    payload: Value,
}

impl DelayedEvent {
    pub fn new(kind: &str, payload: Value) -> DelayedEvent {
        DelayedEvent {
            kind: kind.to_string(),
            payload,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

/// The capability through which a handler schedules follow-up events.
///
/// Supplied by the host per invocation; the only sanctioned side-effect
/// channel for handlers.
pub trait DelayedEventPoster {
    fn enqueue(&mut self, event: DelayedEvent);
}

/// A [`DelayedEventPoster`] that buffers events in memory for the host to
/// drain once the handler has returned.
#[derive(Debug, Default)]
pub struct BufferedEventPoster {
    events: Vec<DelayedEvent>,
}

impl BufferedEventPoster {
    pub fn new() -> BufferedEventPoster {
        BufferedEventPoster::default()
    }

    /// Removes and returns everything enqueued so far.
    pub fn drain(&mut self) -> Vec<DelayedEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[DelayedEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl DelayedEventPoster for BufferedEventPoster {
    fn enqueue(&mut self, event: DelayedEvent) {
        self.events.push(event);
    }
}
