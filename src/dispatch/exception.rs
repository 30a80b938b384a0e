//! Fault-kind based exception dispatch.
//!
//! # Responsibilities
//! - Map fault kinds to registered exception handlers
//! - Resolve the most specific registered ancestor of a raised fault
//! - Apply the framework default (500, generic body) when nothing resolves
//!
//! # Design Decisions
//! - Resolution walks the kind's ancestor chain most-derived first, so a
//!   handler on the root kind acts as a catch-all
//! - The unhandled-fault default runs *before* error dispatch, so an
//!   error(500) handler sees the defaulted status

use std::collections::HashMap;
use std::sync::Arc;

use crate::context::Context;
use crate::fault::{Fault, FaultKind};

/// Status applied when a fault has no registered handler.
pub const UNHANDLED_FAULT_STATUS: u16 = 500;

/// Body applied when a fault has no registered handler.
pub const UNHANDLED_FAULT_BODY: &str = "Internal server error";

/// User code bound to a fault kind. Returning `Err` raises a new fault that
/// the pipeline deliberately does not catch.
pub type ExceptionHandler = Arc<dyn Fn(&Fault, &mut Context) -> Result<(), Fault> + Send + Sync>;

/// Map from fault kind to exception handler.
#[derive(Default)]
pub struct ExceptionMapper {
    handlers: HashMap<FaultKind, ExceptionHandler>,
}

impl ExceptionMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        kind: FaultKind,
        handler: impl Fn(&Fault, &mut Context) -> Result<(), Fault> + Send + Sync + 'static,
    ) {
        self.handlers.insert(kind, Arc::new(handler));
    }

    /// Handler for the nearest registered ancestor of `kind`, if any.
    pub fn resolve(&self, kind: FaultKind) -> Option<&ExceptionHandler> {
        kind.ancestors().find_map(|k| self.handlers.get(&k))
    }

    /// Dispatch a caught fault.
    ///
    /// Runs the resolved handler, or applies the unhandled-fault default when
    /// no ancestor is registered. A fault raised by the handler itself
    /// propagates to the caller via `?`.
    pub fn dispatch(&self, fault: &Fault, ctx: &mut Context) -> Result<(), Fault> {
        match self.resolve(fault.kind()) {
            Some(handler) => {
                tracing::debug!(kind = ?fault.kind(), "Dispatching fault to exception handler");
                handler(fault, ctx)
            }
            None => {
                tracing::warn!(fault = %fault, "Unhandled fault, applying default response");
                ctx.set_status(UNHANDLED_FAULT_STATUS);
                ctx.set_body(UNHANDLED_FAULT_BODY);
                Ok(())
            }
        }
    }
}
