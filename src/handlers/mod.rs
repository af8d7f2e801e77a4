//! # Broadcast handlers.
//!
//! A handler is a plain closure invoked once per (handler, listener) pair
//! during a broadcast of the listener's signal. Registration is append-only:
//! there is no handler removal API, handlers accumulate for the life of the
//! registry instance.
//!
//! ## Rules
//! - Handlers run on the broadcasting thread, **outside** the registry lock;
//!   a handler may call back into `watch`/`unwatch`/`broadcast`.
//! - Handler results are observed and discarded (best-effort delivery).
//!   Wrap the closure to count or log failures.
//! - Duplicate registration of the same closure is allowed and means the
//!   handler runs multiple times per broadcast.
//!
//! ## Example
//! ```
//! use signalcast::Broadcast;
//!
//! let bus: Broadcast<String> = Broadcast::new();
//! bus.handle(|signal, payload: String| {
//!     println!("[{signal}] {payload}");
//!     Ok(())
//! });
//! ```

mod handler;
#[cfg(feature = "logging")]
mod log;

pub use handler::Handler;
#[cfg(feature = "logging")]
pub use log::log_writer;
