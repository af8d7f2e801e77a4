//! Shared handle type for registered handlers.

use std::sync::Arc;

use crate::error::HandlerError;

/// Shared handle to a registered broadcast handler.
///
/// Receives the signal name and an owned payload, and reports the outcome of
/// this single delivery attempt. The payload is produced per invocation
/// (cloned from the snapshot, or fetched via the capability's `value()`), so
/// the handler is free to consume it.
///
/// `handle()` accepts any compatible closure and wraps it into this type;
/// user code normally never names `Handler` directly.
pub type Handler<T> = Arc<dyn Fn(&str, T) -> Result<(), HandlerError> + Send + Sync>;
