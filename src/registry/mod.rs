//! # Signal registries: the deduplicating broadcast core.
//!
//! Two structurally parallel registries that differ only in how a listener's
//! deduplication identity is computed:
//!
//! - [`Broadcast`] - **direct**: the payload type supports value equality and
//!   the payload *is* the identity.
//! - [`KeyedBroadcast`] - **keyed**: a [`Keyed`] capability supplies the
//!   identity (`key()`) separately from the delivered payload (`value()`).
//!
//! ## Quick reference
//! - **Writers** (`handle`, `watch`, `unwatch`, `clean`, `clean_all`) take
//!   the exclusive lock.
//! - **Readers** (`has_watch`, `watch_count`, `range`) take the shared lock.
//! - **`broadcast`** takes the shared lock only to snapshot, then dispatches
//!   with no lock held.
//!
//! Shared dedup discipline lives in the private `dedup` module.

mod dedup;
mod direct;
mod keyed;

pub use direct::Broadcast;
pub use keyed::{Keyed, KeyedBroadcast, ListenerRef};
