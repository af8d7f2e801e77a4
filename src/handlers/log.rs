//! # Simple logging handler for debugging and demos.
//!
//! [`log_writer`] builds a handler that prints every delivery to stdout in a
//! human-readable format. This is primarily useful for development,
//! debugging, and the demo programs.
//!
//! ## Output format
//! ```text
//! [user_activity] payload=UserEvent { user_id: 1, action: "login" }
//! [metrics] payload="cpu.high"
//! ```

use std::fmt::Debug;

use crate::error::HandlerError;

/// Returns a handler that prints each delivery to stdout.
///
/// Enabled via the `logging` feature. Prints the signal name and the
/// payload's `Debug` form, one line per (handler, listener) delivery.
///
/// Not intended for production use - register a custom handler for
/// structured logging or metrics collection.
pub fn log_writer<T: Debug>() -> impl Fn(&str, T) -> Result<(), HandlerError> {
    |signal, payload| {
        println!("[{signal}] payload={payload:?}");
        Ok(())
    }
}
