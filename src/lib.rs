//! # signalcast
//!
//! **Signalcast** is an in-process, generic signal-broadcast registry for Rust.
//!
//! Producers raise a named signal; every registered handler is invoked once
//! per distinct listener previously registered for that signal. The crate
//! decouples event producers from consumers within a single process - no
//! network, no persistence, no background tasks.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//!     │  producer #1 │    │  producer #2 │    │  producer #N │
//!     └──────┬───────┘    └──────┬───────┘    └──────┬───────┘
//!            │ broadcast(signal) │                   │
//!            ▼                   ▼                   ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Registry (one RwLock per instance)                               │
//! │  - handlers:  Vec<Handler>            (append-only)               │
//! │  - listeners: signal → Vec<listener>  (deduplicated, ordered)     │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                │ snapshot under read lock,
//!                                │ dispatch with no lock held
//!                                ▼
//!                  for handler in handlers:        (registration order)
//!                      for listener in listeners:  (registration order)
//!                          handler(signal, payload)
//! ```
//!
//! ### Dispatch rules
//! - Within one `broadcast`: handlers run in registration order and, per
//!   handler, listeners run in their registration order at snapshot time.
//! - No ordering guarantees across signals or across concurrent broadcasts.
//! - A `watch` racing a `broadcast` on the same signal may or may not be
//!   included; the linearization point is the snapshot copy.
//! - Handler results are discarded: delivery is best-effort, at most one
//!   attempt per (handler, listener) pair.
//! - Handlers run outside the registry lock and may re-enter any operation.
//!
//! ## Features
//! | Area          | Description                                              | Key types / traits            |
//! |---------------|----------------------------------------------------------|-------------------------------|
//! | **Direct**    | Dedup by value equality of the payload itself.           | [`Broadcast`]                 |
//! | **Keyed**     | Dedup by an explicit key, payload produced per delivery. | [`KeyedBroadcast`], [`Keyed`] |
//! | **Handlers**  | Append-only callbacks invoked per listener on broadcast. | [`Handler`], [`HandlerError`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`log_writer`] handler _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use signalcast::Broadcast;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! let bus: Broadcast<User> = Broadcast::new();
//!
//! bus.handle(|signal, user: User| {
//!     println!("[{signal}] user={} ({})", user.id, user.name);
//!     Ok(())
//! });
//!
//! let alice = User { id: 1, name: "alice".into() };
//! bus.watch("login", alice.clone());
//! bus.watch("login", alice.clone()); // value-equal: deduplicated
//! assert_eq!(bus.watch_count("login"), 1);
//!
//! bus.broadcast("login"); // one handler × one listener
//!
//! bus.unwatch("login", &alice);
//! assert!(!bus.has_watch("login"));
//! ```

mod error;
mod handlers;
mod registry;

// ---- Public re-exports ----

pub use error::HandlerError;
pub use handlers::Handler;
pub use registry::{Broadcast, Keyed, KeyedBroadcast, ListenerRef};

// Optional: expose a simple built-in stdout log handler (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use handlers::log_writer;
