//! Fault types raised by handlers.
//!
//! # Design Decisions
//! - Kinds form a single-rooted hierarchy (every kind descends from `Fault`)
//! - Hierarchy is encoded in `parent()`, not in the type system, so the
//!   exception mapper can walk it at lookup time
//! - `ancestors()` yields the kind itself first, then each parent up to the
//!   root, giving most-specific-first resolution order

use thiserror::Error;

/// Kind of a raised fault, forming a single-rooted hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Root of the hierarchy; matches any fault.
    Fault,
    /// Unexpected failure inside a handler.
    Runtime,
    /// Handler exceeded its time budget.
    Timeout,
    /// Request failed input validation.
    Validation,
    /// Request payload could not be understood.
    Payload,
}

impl FaultKind {
    /// Immediate supertype, or `None` for the root.
    pub fn parent(self) -> Option<FaultKind> {
        match self {
            FaultKind::Fault => None,
            FaultKind::Runtime => Some(FaultKind::Fault),
            FaultKind::Timeout => Some(FaultKind::Runtime),
            FaultKind::Validation => Some(FaultKind::Fault),
            FaultKind::Payload => Some(FaultKind::Validation),
        }
    }

    /// Walk from this kind up to the root, self first.
    pub fn ancestors(self) -> impl Iterator<Item = FaultKind> {
        std::iter::successors(Some(self), |kind| kind.parent())
    }
}

/// A runtime fault raised during handler execution.
#[derive(Debug, Clone, Error)]
#[error("{kind:?} fault: {message}")]
pub struct Fault {
    kind: FaultKind,
    message: String,
}

impl Fault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for the most common fault raised by route handlers.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Runtime, message)
    }

    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
