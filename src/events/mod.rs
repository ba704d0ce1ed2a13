//! Synchronous publish/subscribe used by the chart controller.
//!
//! Handlers run on the caller's thread, in registration order, during
//! [`EventDispatcher::trigger`].

use indexmap::IndexMap;
use tracing::trace;

/// Name of the notification hosts fire when the chart's container may have
/// changed size.
pub const RESIZE_EVENT: &str = "resize";

/// Notification delivered to handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub name: String,
}

/// Identifies one registered handler for [`EventDispatcher::off`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Handler = Box<dyn FnMut(&Event)>;

struct Listener {
    id: ListenerId,
    once: bool,
    handler: Handler,
}

#[derive(Default)]
pub struct EventDispatcher {
    listeners: IndexMap<String, Vec<Listener>>,
    next_id: u64,
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: Vec<(&str, usize)> = self
            .listeners
            .iter()
            .map(|(name, listeners)| (name.as_str(), listeners.len()))
            .collect();
        f.debug_struct("EventDispatcher")
            .field("listeners", &counts)
            .finish()
    }
}

impl EventDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every future `name` notification.
    pub fn on(
        &mut self,
        name: impl Into<String>,
        handler: impl FnMut(&Event) + 'static,
    ) -> ListenerId {
        self.insert(name.into(), false, Box::new(handler))
    }

    /// Registers `handler` for the next `name` notification only.
    pub fn once(
        &mut self,
        name: impl Into<String>,
        handler: impl FnMut(&Event) + 'static,
    ) -> ListenerId {
        self.insert(name.into(), true, Box::new(handler))
    }

    /// Unregisters a handler. Returns `true` when removed.
    pub fn off(&mut self, name: &str, id: ListenerId) -> bool {
        let Some(listeners) = self.listeners.get_mut(name) else {
            return false;
        };
        if let Some(position) = listeners.iter().position(|listener| listener.id == id) {
            listeners.remove(position);
            return true;
        }
        false
    }

    /// Delivers `name` to its handlers and returns how many ran.
    pub fn trigger(&mut self, name: &str) -> usize {
        let Some(listeners) = self.listeners.get_mut(name) else {
            trace!(event = name, "no listeners");
            return 0;
        };
        let event = Event {
            name: name.to_owned(),
        };
        for listener in listeners.iter_mut() {
            (listener.handler)(&event);
        }
        let invoked = listeners.len();
        listeners.retain(|listener| !listener.once);
        trace!(event = name, invoked, "event dispatched");
        invoked
    }

    #[must_use]
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.get(name).map_or(0, Vec::len)
    }

    fn insert(&mut self, name: String, once: bool, handler: Handler) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.entry(name).or_default().push(Listener {
            id,
            once,
            handler,
        });
        id
    }
}
