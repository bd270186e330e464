//! Change notification for the key-value store.
//!
//! Listeners observe every mutation of the flat map. Delivery is a direct
//! synchronous call in mutation order, made after the map and the document
//! have both been updated; there is no event queue.

use std::fmt;
use std::rc::Rc;

/// A mutation of the flat key/value map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyEvent {
    /// A key that was not present before was added.
    Added { key: String, value: String },

    /// An existing key's value was replaced.
    Updated {
        key: String,
        old_value: String,
        new_value: String,
    },
}

impl PropertyEvent {
    /// The key the event is about.
    pub fn key(&self) -> &str {
        match self {
            PropertyEvent::Added { key, .. } => key,
            PropertyEvent::Updated { key, .. } => key,
        }
    }
}

/// Trait for observing store mutations.
pub trait Listener {
    /// Called once per mutation, after it has been applied.
    fn notify(&self, event: &PropertyEvent);

    /// Listener name, used for deregistration.
    fn name(&self) -> &str;
}

/// Function-based listener wrapper
#[derive(Clone)]
pub struct FunctionListener {
    name: String,
    callback: Rc<dyn Fn(&PropertyEvent)>,
}

impl FunctionListener {
    pub fn new<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&PropertyEvent) + 'static,
    {
        Self {
            name: name.into(),
            callback: Rc::new(callback),
        }
    }
}

impl Listener for FunctionListener {
    fn notify(&self, event: &PropertyEvent) {
        (self.callback)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for FunctionListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionListener")
            .field("name", &self.name)
            .finish()
    }
}

/// Registry of listeners attached to one store.
pub struct ListenerSet {
    listeners: Vec<Box<dyn Listener>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener
    pub fn register<L>(&mut self, listener: L)
    where
        L: Listener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Drop every listener with the given name
    pub fn unregister(&mut self, name: &str) {
        self.listeners.retain(|listener| listener.name() != name);
    }

    /// Deliver an event to every listener, in registration order
    pub fn notify_all(&self, event: &PropertyEvent) {
        for listener in &self.listeners {
            listener.notify(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Default for ListenerSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_function_listener() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut set = ListenerSet::new();
        set.register(FunctionListener::new("capture", move |event| {
            sink.borrow_mut().push(event.key().to_string());
        }));

        set.notify_all(&PropertyEvent::Added {
            key: "a".to_string(),
            value: "1".to_string(),
        });
        set.notify_all(&PropertyEvent::Updated {
            key: "b".to_string(),
            old_value: "1".to_string(),
            new_value: "2".to_string(),
        });

        assert_eq!(seen.borrow().as_slice(), &["a", "b"]);
    }

    #[test]
    fn test_unregister_by_name() {
        let mut set = ListenerSet::new();
        set.register(FunctionListener::new("one", |_| {}));
        set.register(FunctionListener::new("two", |_| {}));
        assert_eq!(set.len(), 2);

        set.unregister("one");
        assert_eq!(set.len(), 1);
    }
}
