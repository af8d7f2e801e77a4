//! # Direct registry - listeners deduplicated by value equality.
//!
//! [`Broadcast`] maps signal names to insertion-ordered listener lists and
//! fans every broadcast out to all registered handlers. A listener's identity
//! *is* its payload value: two payloads that compare equal collapse to one
//! listener, regardless of where they are stored.
//!
//! ## Architecture
//! ```text
//! watch(signal, payload) ──► [write lock] append-if-absent (value equality)
//! broadcast(signal) ───────► [read lock] snapshot (handlers, listeners)
//!                            [unlocked]  handler × listener deliveries
//! ```
//!
//! ## Rules
//! - One reader/writer lock per instance (not per signal).
//! - Handlers run **outside** the lock; a handler may re-enter the registry.
//! - Deduplication is by *value*: `T: PartialEq` decides identity, and a
//!   derived `PartialEq` on composite payloads compares field-wise (deep).
//! - Handler results are discarded; delivery is best-effort.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::HandlerError;
use crate::handlers::Handler;
use crate::registry::dedup;

/// Shared state behind the instance lock.
struct State<T> {
    handlers: Vec<Handler<T>>,
    listeners: HashMap<String, Vec<T>>,
}

/// Signal-broadcast registry deduplicating listeners by value equality.
///
/// Cheap to clone (internally holds an `Arc`-backed state); clones observe
/// and mutate the same registry.
///
/// ### Properties
/// - **Idempotent watch**: registering a value-equal payload twice keeps one
///   listener.
/// - **Synchronous**: every operation blocks only on lock contention, never
///   on user code.
/// - **Total**: unknown signals, duplicate watches and absent unwatches are
///   no-ops, never errors.
pub struct Broadcast<T> {
    state: Arc<RwLock<State<T>>>,
}

impl<T> Clone for Broadcast<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> fmt::Debug for Broadcast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Broadcast")
            .field("handlers", &state.handlers.len())
            .field("signals", &state.listeners.len())
            .finish()
    }
}

impl<T> Default for Broadcast<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Broadcast<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
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
        F: Fn(&str, T) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        let mut state = self.state.write();
        state.handlers.push(Arc::new(handler));
    }

    /// Registers a listener payload under `signal`.
    ///
    /// First use of a signal creates its partition. If a value-equal payload
    /// is already registered for this signal, the call is a no-op.
    pub fn watch(&self, signal: &str, payload: T) {
        let mut state = self.state.write();
        let entries = state.listeners.entry(signal.to_string()).or_default();
        if dedup::contains(entries, |e| *e == payload) {
            return;
        }
        entries.push(payload);
    }

    /// Removes the first value-equal listener under `signal`.
    ///
    /// Relative order of the remaining listeners is preserved. No-op when
    /// the payload was never watched or the signal has no listeners.
    pub fn unwatch(&self, signal: &str, payload: &T) {
        let mut state = self.state.write();
        if let Some(entries) = state.listeners.get_mut(signal) {
            dedup::remove_first(entries, |e| e == payload);
        }
    }

    /// Synchronously delivers `signal` to every handler × listener pair.
    ///
    /// Copies the handler list and the signal's listener list under the read
    /// lock, releases it, then invokes each handler with a clone of each
    /// snapshot payload. Handler results are discarded.
    ///
    /// ### Notes
    /// - Handlers run on the calling thread; a slow handler stalls only this
    ///   call, other threads keep mutating the registry.
    /// - Handlers and listeners added *during* the broadcast are not part of
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
            for payload in &listeners {
                let _ = handler(signal, payload.clone());
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
    ///
    /// A signal with an empty partition is indistinguishable from a signal
    /// never seen.
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
