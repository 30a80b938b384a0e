//! Status-code based error dispatch.
//!
//! # Responsibilities
//! - Map exact status codes to registered error handlers
//! - Run the handler for the status present on the context, if any
//!
//! # Design Decisions
//! - Exact integer match only, no ranges or wildcards
//! - Lookup keys off the current status value, never off fault history, so
//!   an explicit 404 from a successful route handler dispatches the same as
//!   an unmatched-route 404

use std::collections::HashMap;
use std::sync::Arc;

use crate::context::Context;
use crate::fault::Fault;

/// User code bound to an exact HTTP status code.
pub type ErrorHandler = Arc<dyn Fn(&mut Context) -> Result<(), Fault> + Send + Sync>;

/// Map from exact status code to error handler.
#[derive(Default)]
pub struct ErrorMapper {
    handlers: HashMap<u16, ErrorHandler>,
}

impl ErrorMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        status: u16,
        handler: impl Fn(&mut Context) -> Result<(), Fault> + Send + Sync + 'static,
    ) {
        self.handlers.insert(status, Arc::new(handler));
    }

    /// Dispatch on the given status code.
    ///
    /// No-op when nothing is registered for `status`. The handler may mutate
    /// status and body, and those mutations are final. A fault raised by the
    /// handler propagates to the caller via `?`.
    pub fn dispatch(&self, status: u16, ctx: &mut Context) -> Result<(), Fault> {
        if let Some(handler) = self.handlers.get(&status) {
            tracing::debug!(status, "Dispatching to error handler");
            handler(ctx)?;
        }
        Ok(())
    }
}
