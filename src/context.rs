//! Per-request mutable state.
//!
//! # Responsibilities
//! - Carry the current status code and response body through the pipeline
//! - Commit the final (status, body) pair once dispatch is finished
//!
//! # Design Decisions
//! - Last write wins for both status and body
//! - Body stays `None` until a handler sets it (an unset body commits as "")
//! - Snapshot/restore is a plain value copy; no interior mutability needed

/// Mutable carrier of status and body for a single request.
///
/// One `Context` is created per inbound request and threaded by mutable
/// reference through route execution, exception dispatch, and error dispatch.
#[derive(Debug)]
pub struct Context {
    status: u16,
    body: Option<String>,
}

/// Saved (status, body) pair taken before a dispatch stage runs.
#[derive(Debug, Clone)]
pub struct Snapshot {
    status: u16,
    body: Option<String>,
}

/// Committed output of a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Context {
    /// Create a fresh context with status 200 and no body.
    pub fn new() -> Self {
        Self {
            status: 200,
            body: None,
        }
    }

    /// Current status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Overwrite the status code.
    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    /// Overwrite the response body.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = Some(body.into());
    }

    /// Whether any handler has set a body so far.
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Capture the current (status, body) pair.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            body: self.body.clone(),
        }
    }

    /// Discard everything written since `snap` was taken.
    pub fn restore(&mut self, snap: Snapshot) {
        self.status = snap.status;
        self.body = snap.body;
    }

    /// Commit the final response. An unset body becomes the empty string.
    pub fn into_response(self) -> Response {
        Response {
            status: self.status,
            body: self.body.unwrap_or_default(),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
