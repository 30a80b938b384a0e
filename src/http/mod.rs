//! HTTP surface for the framework.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → App::handle(path) (pipeline: route → exception → error dispatch)
//!     → (status, body) converted back to an Axum response
//! ```

pub mod server;

pub use server::HttpServer;
