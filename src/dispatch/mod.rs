//! Handler dispatch after route execution.
//!
//! # Data Flow
//! ```text
//! Route execution finished (or faulted)
//!     → exception.rs (fault kind → nearest registered ancestor handler)
//!     → error.rs (current status code → exact-match handler)
//!     → Commit: last successful handler wins
//! ```
//!
//! # Design Decisions
//! - At most one exception handler and one error handler run per request
//! - Error dispatch always follows exception dispatch, fault or no fault
//! - Faults raised inside either dispatcher are not caught here; they
//!   propagate to the HTTP layer's fallback response

pub mod error;
pub mod exception;
