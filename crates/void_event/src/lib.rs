//! # void_event - Synchronous Event Bus
//!
//! Publish-subscribe dispatch for world hooks:
//! - Handlers run synchronously, in priority order, before `publish` returns
//! - Cancellable events stop at the first handler that cancels
//! - Handler lists are snapshotted per dispatch, so handlers may subscribe
//!   or publish from inside a callback

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Event identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(String);

impl EventId {
    /// Create a new event ID
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the event name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Base event trait
pub trait Event: Send + Sync + 'static {
    /// Get the event ID
    fn event_id(&self) -> EventId;

    /// Whether handlers may veto this event
    fn cancellable(&self) -> bool {
        false
    }

    /// Type erasure
    fn as_any(&self) -> &dyn Any;
}

impl dyn Event {
    /// Downcast to a concrete event type
    pub fn downcast_ref<E: Event>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }
}

/// Event handling result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventResult {
    /// Continue propagation
    Continue,
    /// Event was acted on; propagation continues
    Handled,
    /// Veto the event (only honoured when it is cancellable)
    Cancel,
}

impl EventResult {
    /// Whether the dispatch ended in a veto
    pub fn is_cancelled(self) -> bool {
        self == EventResult::Cancel
    }
}

/// Event handler trait
pub trait EventHandler: Send + Sync {
    /// Handle an event
    fn handle(&self, event: &dyn Event) -> EventResult;

    /// Event types this handler wants; empty means every event
    fn event_types(&self) -> Vec<EventId>;

    /// Handler priority (higher = called first)
    fn handler_priority(&self) -> i32 {
        0
    }
}

/// Subscriber ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriberId(pub u64);

#[derive(Clone)]
struct HandlerEntry {
    id: SubscriberId,
    priority: i32,
    handler: Arc<dyn EventHandler>,
}

/// Snapshot of bus counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBusStats {
    /// Total events published
    pub events_published: u64,
    /// Total events at least one handler reported as handled
    pub events_handled: u64,
    /// Total events vetoed
    pub events_cancelled: u64,
    /// Handlers currently registered
    pub handlers_registered: usize,
}

#[derive(Default)]
struct Counters {
    published: AtomicU64,
    handled: AtomicU64,
    cancelled: AtomicU64,
}

/// Event bus for synchronous publish-subscribe
pub struct EventBus {
    /// Handlers by event type
    handlers: RwLock<HashMap<EventId, Vec<HandlerEntry>>>,
    /// Global handlers (receive all events)
    global_handlers: RwLock<Vec<HandlerEntry>>,
    next_subscriber_id: AtomicU64,
    counters: Counters,
}

fn insert_sorted(entries: &mut Vec<HandlerEntry>, entry: HandlerEntry) {
    entries.push(entry);
    // Stable: equal priorities keep subscription order
    entries.sort_by(|a, b| b.priority.cmp(&a.priority));
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            global_handlers: RwLock::new(Vec::new()),
            next_subscriber_id: AtomicU64::new(1),
            counters: Counters::default(),
        }
    }

    /// Subscribe a handler to the event types it reports
    pub fn subscribe(&self, handler: Arc<dyn EventHandler>) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber_id.fetch_add(1, Ordering::Relaxed));
        let priority = handler.handler_priority();
        let event_types = handler.event_types();

        if event_types.is_empty() {
            insert_sorted(
                &mut self.global_handlers.write(),
                HandlerEntry { id, priority, handler },
            );
        } else {
            let mut handlers = self.handlers.write();
            for event_id in event_types {
                insert_sorted(
                    handlers.entry(event_id).or_default(),
                    HandlerEntry {
                        id,
                        priority,
                        handler: Arc::clone(&handler),
                    },
                );
            }
        }

        log::trace!("Subscribed event handler {:?} (priority {})", id, priority);
        id
    }

    /// Subscribe a closure handler
    pub fn subscribe_fn<F>(&self, event_id: EventId, priority: i32, handler: F) -> SubscriberId
    where
        F: Fn(&dyn Event) -> EventResult + Send + Sync + 'static,
    {
        struct ClosureHandler<F> {
            event_id: EventId,
            priority: i32,
            handler: F,
        }

        impl<F> EventHandler for ClosureHandler<F>
        where
            F: Fn(&dyn Event) -> EventResult + Send + Sync + 'static,
        {
            fn handle(&self, event: &dyn Event) -> EventResult {
                (self.handler)(event)
            }

            fn event_types(&self) -> Vec<EventId> {
                vec![self.event_id.clone()]
            }

            fn handler_priority(&self) -> i32 {
                self.priority
            }
        }

        self.subscribe(Arc::new(ClosureHandler {
            event_id,
            priority,
            handler,
        }))
    }

    /// Subscribe a closure that only sees events of type `E`
    pub fn subscribe_typed<E, F>(&self, event_id: EventId, priority: i32, handler: F) -> SubscriberId
    where
        E: Event,
        F: Fn(&E) -> EventResult + Send + Sync + 'static,
    {
        self.subscribe_fn(event_id, priority, move |event| {
            match event.downcast_ref::<E>() {
                Some(event) => handler(event),
                None => EventResult::Continue,
            }
        })
    }

    /// Unsubscribe; returns whether anything was removed
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut removed = false;
        for entries in self.handlers.write().values_mut() {
            let before = entries.len();
            entries.retain(|entry| entry.id != id);
            removed |= entries.len() != before;
        }
        let mut global = self.global_handlers.write();
        let before = global.len();
        global.retain(|entry| entry.id != id);
        removed | (global.len() != before)
    }

    /// Dispatch an event to every interested handler before returning.
    ///
    /// Global handlers run first, then type-specific ones, each group in
    /// priority order. A `Cancel` from any handler on a cancellable event
    /// ends the dispatch immediately and is the final answer.
    pub fn publish(&self, event: &dyn Event) -> EventResult {
        self.counters.published.fetch_add(1, Ordering::Relaxed);

        let event_id = event.event_id();
        let mut snapshot: Vec<HandlerEntry> = self.global_handlers.read().clone();
        if let Some(entries) = self.handlers.read().get(&event_id) {
            snapshot.extend(entries.iter().cloned());
        }

        let mut result = EventResult::Continue;
        for entry in &snapshot {
            match entry.handler.handle(event) {
                EventResult::Cancel if event.cancellable() => {
                    self.counters.cancelled.fetch_add(1, Ordering::Relaxed);
                    log::debug!("Event '{}' cancelled by handler {:?}", event_id, entry.id);
                    return EventResult::Cancel;
                }
                EventResult::Cancel => {
                    log::warn!(
                        "Handler {:?} tried to cancel non-cancellable event '{}'",
                        entry.id,
                        event_id
                    );
                }
                EventResult::Handled => result = EventResult::Handled,
                EventResult::Continue => {}
            }
        }

        if result == EventResult::Handled {
            self.counters.handled.fetch_add(1, Ordering::Relaxed);
        }
        result
    }

    /// Number of registered handlers
    pub fn handler_count(&self) -> usize {
        let mut ids: Vec<SubscriberId> = self
            .handlers
            .read()
            .values()
            .flat_map(|entries| entries.iter().map(|entry| entry.id))
            .collect();
        ids.extend(self.global_handlers.read().iter().map(|entry| entry.id));
        ids.sort_by_key(|id| id.0);
        ids.dedup();
        ids.len()
    }

    /// Get statistics
    pub fn stats(&self) -> EventBusStats {
        EventBusStats {
            events_published: self.counters.published.load(Ordering::Relaxed),
            events_handled: self.counters.handled.load(Ordering::Relaxed),
            events_cancelled: self.counters.cancelled.load(Ordering::Relaxed),
            handlers_registered: self.handler_count(),
        }
    }

    /// Remove all handlers
    pub fn clear(&self) {
        self.handlers.write().clear();
        self.global_handlers.write().clear();
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Prelude
pub mod prelude {
    pub use crate::{Event, EventBus, EventBusStats, EventHandler, EventId, EventResult, SubscriberId};
}
