//! Application surface: handler registration and request entry point.
//!
//! # Responsibilities
//! - Collect route, exception, and error handler registrations
//! - Freeze the tables and drive the pipeline for each request
//!
//! # Design Decisions
//! - Fluent consuming builder, so registration reads as a declaration
//! - Tables are read-only once `handle` is first called; an `App` behind an
//!   `Arc` is safe to share across concurrently served requests

use crate::context::{Context, Response};
use crate::dispatch::error::ErrorMapper;
use crate::dispatch::exception::ExceptionMapper;
use crate::fault::{Fault, FaultKind};
use crate::pipeline;
use crate::routing::RouteTable;

/// A framework application: registered handlers plus the request pipeline.
#[derive(Default)]
pub struct App {
    routes: RouteTable,
    exceptions: ExceptionMapper,
    errors: ErrorMapper,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route handler for an exact path.
    pub fn route(
        mut self,
        path: impl Into<String>,
        handler: impl Fn(&mut Context) -> Result<(), Fault> + Send + Sync + 'static,
    ) -> Self {
        self.routes.insert(path, handler);
        self
    }

    /// Register an exception handler for a fault kind and its descendants.
    pub fn exception(
        mut self,
        kind: FaultKind,
        handler: impl Fn(&Fault, &mut Context) -> Result<(), Fault> + Send + Sync + 'static,
    ) -> Self {
        self.exceptions.insert(kind, handler);
        self
    }

    /// Register an error handler for an exact status code.
    pub fn error(
        mut self,
        status: u16,
        handler: impl Fn(&mut Context) -> Result<(), Fault> + Send + Sync + 'static,
    ) -> Self {
        self.errors.insert(status, handler);
        self
    }

    /// Handle one request path and commit a response.
    pub fn handle(&self, path: &str) -> Response {
        pipeline::handle(self, path)
    }

    pub(crate) fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub(crate) fn exceptions(&self) -> &ExceptionMapper {
        &self.exceptions
    }

    pub(crate) fn errors(&self) -> &ErrorMapper {
        &self.errors
    }
}
