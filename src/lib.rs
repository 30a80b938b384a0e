//! Micro web framework built around error and exception dispatch.
//!
//! Requests flow through three stages: the matched route handler runs first;
//! a fault it raises is offered once to the exception mapper; the error
//! mapper then runs against whatever status code is current. The last
//! handler to complete successfully owns the response.

pub mod app;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod fault;
pub mod http;
pub mod pipeline;
pub mod routing;

pub use app::App;
pub use config::ServerConfig;
pub use context::{Context, Response};
pub use fault::{Fault, FaultKind};
pub use http::HttpServer;
