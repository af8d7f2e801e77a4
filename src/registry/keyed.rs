//! # Keyed registry - listeners deduplicated by an explicit key.
//!
//! [`KeyedBroadcast`] carries the same operation set as the direct registry,
//! but a listener is a capability implementing [`Keyed`]: the capability's
//! key decides deduplication and removal, while its value is the payload
//! delivered to handlers. This lets pointer-like or non-comparable payloads
//! be deduplicated by a business key (a user id, a connection id) while
//! still broadcasting the full structured payload.
//!
//! ## Architecture
//! ```text
//! watch(signal, listener) ──► [write lock] append-if-absent (key equality)
//! broadcast(signal) ────────► [read lock]  snapshot (handlers, listeners)
//!                             [unlocked]   listener.value() → handler, per pair
//! ```
//!
//! ## Rules
//! - `key()` must be cheap and stable; it may run while the registry lock
//!   is held.
//! - `value()` may be arbitrarily expensive or read mutable external state;
//!   it is **never** called under the lock, so a handler or accessor may
//!   re-enter `watch`/`unwatch`/`broadcast` without deadlock.
//! - Duplicate-key watch is a strict no-op: the originally registered
//!   capability is kept, the new one is dropped.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::HandlerError;
use crate::handlers::Handler;
use crate::registry::dedup;

/// # Capability providing a dedup key and a deliverable payload.
///
/// The key is the listener's identity: comparable, stable, independent of
/// payload mutation. The value is produced once per (handler, listener)
/// delivery, outside the registry lock.
///
/// # Example
/// ```
/// use signalcast::Keyed;
///
/// #[derive(Clone)]
/// struct UserEvent {
///     user_id: u64,
///     action: String,
/// }
///
/// struct UserListener(UserEvent);
///
/// impl Keyed for UserListener {
///     type Key = u64;
///     type Value = UserEvent;
///
///     fn key(&self) -> u64 {
///         self.0.user_id
///     }
///
///     fn value(&self) -> UserEvent {
///         self.0.clone()
///     }
/// }
/// ```
pub trait Keyed: Send + Sync + 'static {
    /// Identity token used for deduplication and removal.
    type Key: Clone + PartialEq + Send + Sync;
    /// Payload delivered to handlers.
    type Value;

    /// Returns the listener's identity. Cheap, stable, may run under the
    /// registry lock.
    fn key(&self) -> Self::Key;

    /// Produces the payload for one delivery. Never runs under the registry
    /// lock; free to be expensive or to read external state.
    fn value(&self) -> Self::Value;
}

/// Shared handle to a registered capability, suitable for storing in the
/// registry and keeping on the caller's side for later `unwatch`.
pub type ListenerRef<K, V> = Arc<dyn Keyed<Key = K, Value = V>>;

/// Shared state behind the instance lock.
struct State<K, V> {
    handlers: Vec<Handler<V>>,
    listeners: HashMap<String, Vec<ListenerRef<K, V>>>,
}

/// Signal-broadcast registry deduplicating listeners by capability key.
///
/// Cheap to clone (internally holds an `Arc`-backed state); clones observe
/// and mutate the same registry. Same operation surface and no-op semantics
/// as [`Broadcast`](crate::Broadcast).
pub struct KeyedBroadcast<K, V> {
    state: Arc<RwLock<State<K, V>>>,
}

impl<K, V> Clone for KeyedBroadcast<K, V> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<K, V> fmt::Debug for KeyedBroadcast<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("KeyedBroadcast")
            .field("handlers", &state.handlers.len())
            .field("signals", &state.listeners.len())
            .finish()
    }
}

impl<K, V> Default for KeyedBroadcast<K, V>
where
    K: Clone + PartialEq + Send + Sync + 'static,
    V: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> KeyedBroadcast<K, V>
where
    K: Clone + PartialEq + Send + Sync + 'static,
    V: 'static,
{
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                handlers: Vec::new(),
                listeners: HashMap::new(),
            })),
        }
    }

    /// Appends a handler to the handler list.
    ///
    /// - No uniqueness check: registering the same closure twice means it
    ///   runs twice per broadcast.
    /// - There is no removal API; handlers live as long as the registry.
    pub fn handle<F>(&self, handler: F)
    where
        F: Fn(&str, V) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        let mut state = self.state.write();
        state.handlers.push(Arc::new(handler));
    }

    /// Registers a capability under `signal`, deduplicated by its key.
    ///
    /// If a listener with an equal key is already registered for this
    /// signal, the call is a strict no-op: the original capability (and its
    /// payload) is kept, `listener` is dropped.
    pub fn watch(&self, signal: &str, listener: ListenerRef<K, V>) {
        let key = listener.key();
        let mut state = self.state.write();
        let entries = state.listeners.entry(signal.to_string()).or_default();
        if dedup::contains(entries, |e| e.key() == key) {
            return;
        }
        entries.push(listener);
    }

    /// Removes the first listener under `signal` whose key equals
    /// `listener.key()`.
    ///
    /// The capability passed here does not have to be the registered one;
    /// only the key matters. No-op when no key matches or the signal has no
    /// listeners.
    pub fn unwatch(&self, signal: &str, listener: &dyn Keyed<Key = K, Value = V>) {
        let key = listener.key();
        let mut state = self.state.write();
        if let Some(entries) = state.listeners.get_mut(signal) {
            dedup::remove_first(entries, |e| e.key() == key);
        }
    }

    /// Synchronously delivers `signal` to every handler × listener pair.
    ///
    /// Copies the handler list and the signal's listener list under the read
    /// lock, releases it, and only then calls each listener's `value()` and
    /// each handler - once per pair. Handler results are discarded.
    ///
    /// ### Notes
    /// - `value()` and handlers run on the calling thread, outside the lock;
    ///   either may re-enter the registry.
    /// - Listeners or handlers added *during* the broadcast are not part of
    ///   this delivery (the linearization point is the snapshot copy).
    pub fn broadcast(&self, signal: &str) {
        let (handlers, listeners) = {
            let state = self.state.read();
            (
                state.handlers.clone(),
                state.listeners.get(signal).cloned().unwrap_or_default(),
            )
        };

        for handler in &handlers {
            for listener in &listeners {
                let _ = handler(signal, listener.value());
            }
        }
    }

    /// Removes every listener registered under `signal`.
    pub fn clean(&self, signal: &str) {
        let mut state = self.state.write();
        state.listeners.remove(signal);
    }

    /// Removes every listener of every signal. Handlers are kept.
    pub fn clean_all(&self) {
        let mut state = self.state.write();
        state.listeners.clear();
    }

    /// Returns true when `signal` has at least one registered listener.
    pub fn has_watch(&self, signal: &str) -> bool {
        let state = self.state.read();
        state.listeners.get(signal).is_some_and(|e| !e.is_empty())
    }

    /// Returns the number of listeners registered under `signal`.
    pub fn watch_count(&self, signal: &str) -> usize {
        let state = self.state.read();
        state.listeners.get(signal).map_or(0, Vec::len)
    }

    /// Visits every known signal with its listener count, in unspecified
    /// order, stopping the first time `f` returns `false`.
    ///
    /// ### Notes
    /// The visitor runs under the registry's read lock: it must not call
    /// mutating operations on the same registry.
    pub fn range(&self, mut f: impl FnMut(&str, usize) -> bool) {
        let state = self.state.read();
        for (signal, entries) in state.listeners.iter() {
            if !f(signal, entries.len()) {
                break;
            }
        }
    }
}
