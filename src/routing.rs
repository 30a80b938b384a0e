//! Route table and execution.
//!
//! # Responsibilities
//! - Store registered route handlers by path
//! - Run the matched handler or report an explicit no-match
//!
//! # Design Decisions
//! - Exact path match only; immutable after registration
//! - Explicit `NoMatch` rather than a silent default, so the pipeline owns
//!   the 404 policy

use std::collections::HashMap;
use std::sync::Arc;

use crate::context::Context;
use crate::fault::Fault;

/// User code bound to a URL path. Returning `Err` raises a fault.
pub type RouteHandler = Arc<dyn Fn(&mut Context) -> Result<(), Fault> + Send + Sync>;

/// Result of attempting route execution for a request path.
#[derive(Debug)]
pub enum RouteOutcome {
    /// No handler is registered for the path. Not a fault.
    NoMatch,
    /// The handler ran to completion.
    Completed,
    /// The handler raised a fault.
    Faulted(Fault),
}

/// Exact-path map from request path to route handler.
#[derive(Default)]
pub struct RouteTable {
    routes: HashMap<String, RouteHandler>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a path. A later registration for the same path
    /// replaces the earlier one.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        handler: impl Fn(&mut Context) -> Result<(), Fault> + Send + Sync + 'static,
    ) {
        self.routes.insert(path.into(), Arc::new(handler));
    }

    /// Look up and run the handler for `path`, mutating `ctx` in place.
    pub fn execute(&self, path: &str, ctx: &mut Context) -> RouteOutcome {
        match self.routes.get(path) {
            None => RouteOutcome::NoMatch,
            Some(handler) => match handler(ctx) {
                Ok(()) => RouteOutcome::Completed,
                Err(fault) => RouteOutcome::Faulted(fault),
            },
        }
    }
}
