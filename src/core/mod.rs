//! Application runtime: HTTP serving boundary.

pub mod http;

pub use http::{create_router, start_server, AppState};
