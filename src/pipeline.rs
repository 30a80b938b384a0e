//! Request pipeline orchestration.
//!
//! # Data Flow
//! ```text
//! handle(path)
//!     → routing (match + run route handler, catch its fault once)
//!     → dispatch::exception (if a fault is pending)
//!     → dispatch::error (always, on the *current* status value)
//!     → Commit (status, body); uncaught dispatcher faults hit the fallback
//! ```
//!
//! # Design Decisions
//! - A route-handler fault is caught exactly once; dispatcher faults are not
//!   caught at all and surface as `Err` from `run`
//! - The context is snapshotted around error dispatch so a faulting error
//!   handler discards its own partial output
//! - Fallback for an uncaught fault: the committed context state when a body
//!   was set, otherwise 500 with the generic body

use crate::app::App;
use crate::context::{Context, Response};
use crate::dispatch::exception::{UNHANDLED_FAULT_BODY, UNHANDLED_FAULT_STATUS};
use crate::fault::Fault;
use crate::routing::RouteOutcome;

/// Drive one request through the full pipeline and commit a response.
pub fn handle(app: &App, path: &str) -> Response {
    let mut ctx = Context::new();
    match run(app, path, &mut ctx) {
        Ok(()) => ctx.into_response(),
        Err(fault) => {
            tracing::error!(path, fault = %fault, "Uncaught fault from dispatcher");
            if ctx.has_body() {
                ctx.into_response()
            } else {
                Response {
                    status: UNHANDLED_FAULT_STATUS,
                    body: UNHANDLED_FAULT_BODY.to_string(),
                }
            }
        }
    }
}

/// Run the three pipeline stages. `Err` carries a fault raised inside an
/// exception or error handler, which this core deliberately leaves uncaught.
fn run(app: &App, path: &str, ctx: &mut Context) -> Result<(), Fault> {
    // Stage 1: route execution. Unmatched paths are a 404, not a fault.
    let pending = match app.routes().execute(path, ctx) {
        RouteOutcome::NoMatch => {
            ctx.set_status(404);
            None
        }
        RouteOutcome::Completed => None,
        RouteOutcome::Faulted(fault) => Some(fault),
    };

    // Stage 2: exception dispatch. A fault raised by the handler itself
    // propagates out here and skips error dispatch entirely.
    if let Some(fault) = pending {
        app.exceptions().dispatch(&fault, ctx)?;
    }

    // Stage 3: error dispatch, keyed off whatever status is current now.
    // A faulting error handler loses its own writes.
    let snap = ctx.snapshot();
    if let Err(fault) = app.errors().dispatch(ctx.status(), ctx) {
        ctx.restore(snap);
        return Err(fault);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::fault::{Fault, FaultKind};

    #[test]
    fn test_unmatched_path_is_404_with_empty_body() {
        let app = App::new();
        let resp = app.handle("/unmapped");
        assert_eq!(resp.status, 404);
        assert_eq!(resp.body, "");
    }

    #[test]
    fn test_error_mapper_works_for_404() {
        let app = App::new().error(404, |ctx| {
            ctx.set_body("Custom 404 page");
            Ok(())
        });
        let resp = app.handle("/unmapped");
        assert_eq!(resp.status, 404);
        assert_eq!(resp.body, "Custom 404 page");
    }

    #[test]
    fn test_error_mapper_works_for_500_without_exception_handler() {
        let app = App::new()
            .route("/exception", |_| Err(Fault::runtime("boom")))
            .error(500, |ctx| {
                ctx.set_body("Custom 500 page");
                Ok(())
            });
        let resp = app.handle("/exception");
        assert_eq!(resp.status, 500);
        assert_eq!(resp.body, "Custom 500 page");
    }

    #[test]
    fn test_error_mapper_runs_after_exception_mapper() {
        let app = App::new()
            .route("/exception", |_| Err(Fault::runtime("boom")))
            .exception(FaultKind::Fault, |_, ctx| {
                ctx.set_status(500);
                ctx.set_body("Exception handled!");
                Ok(())
            })
            .error(500, |ctx| {
                ctx.set_body("Custom 500 page");
                Ok(())
            });
        let resp = app.handle("/exception");
        assert_eq!(resp.status, 500);
        assert_eq!(resp.body, "Custom 500 page");
    }

    #[test]
    fn test_faulting_error_mapper_falls_back_to_exception_output() {
        let app = App::new()
            .route("/exception", |_| Err(Fault::runtime("boom")))
            .exception(FaultKind::Fault, |_, ctx| {
                ctx.set_status(500);
                ctx.set_body("Exception handled!");
                Ok(())
            })
            .error(500, |ctx| {
                ctx.set_body("Custom 500 page");
                Err(Fault::runtime("error handler died"))
            });
        let resp = app.handle("/exception");
        assert_eq!(resp.status, 500);
        assert_eq!(resp.body, "Exception handled!");
    }

    #[test]
    fn test_exception_mapper_does_not_trump_error_handler() {
        let app = App::new()
            .exception(FaultKind::Fault, |_, ctx| {
                ctx.set_status(500);
                ctx.set_body("boom");
                Ok(())
            })
            .error(404, |ctx| {
                ctx.set_body("custom-404-page");
                Ok(())
            });
        let resp = app.handle("/doesntexist");
        assert_eq!(resp.status, 404);
        assert_eq!(resp.body, "custom-404-page");
    }

    #[test]
    fn test_exception_mapper_does_not_override_404_from_missing_route() {
        let app = App::new().exception(FaultKind::Fault, |_, ctx| {
            ctx.set_status(500);
            ctx.set_body("boom");
            Ok(())
        });
        let resp = app.handle("/doesntexist");
        assert_eq!(resp.status, 404);
    }

    #[test]
    fn test_exception_mapper_does_not_override_explicit_status() {
        let app = App::new()
            .route("/", |ctx| {
                ctx.set_status(404);
                Ok(())
            })
            .exception(FaultKind::Fault, |_, ctx| {
                ctx.set_status(500);
                ctx.set_body("boom");
                Ok(())
            });
        let resp = app.handle("/");
        assert_eq!(resp.status, 404);
    }

    #[test]
    fn test_explicit_404_from_route_triggers_error_handler() {
        let app = App::new()
            .route("/gone", |ctx| {
                ctx.set_status(404);
                Ok(())
            })
            .error(404, |ctx| {
                ctx.set_body("Custom 404 page");
                Ok(())
            });
        let resp = app.handle("/gone");
        assert_eq!(resp.status, 404);
        assert_eq!(resp.body, "Custom 404 page");
    }

    #[test]
    fn test_faulting_exception_mapper_skips_error_dispatch() {
        let app = App::new()
            .route("/exception", |_| Err(Fault::runtime("boom")))
            .exception(FaultKind::Fault, |_, _| Err(Fault::runtime("rethrown")))
            .error(500, |ctx| {
                ctx.set_body("never runs");
                Ok(())
            });
        let resp = app.handle("/exception");
        assert_eq!(resp.status, 500);
        assert_eq!(resp.body, "Internal server error");
    }

    #[test]
    fn test_error_handler_status_mutation_is_final() {
        let app = App::new().error(404, |ctx| {
            ctx.set_status(410);
            ctx.set_body("gone for good");
            Ok(())
        });
        let resp = app.handle("/unmapped");
        assert_eq!(resp.status, 410);
        assert_eq!(resp.body, "gone for good");
    }
}
