//! HTTP surface for the health query backend.
//!
//! One business endpoint (`POST /process-health-query`) plus liveness and
//! service-index routes. The router is composable — `health_api_router()`
//! returns a `Router` that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::health_api_router;
pub use server::{start_api_server, ApiServer, ApiSession};
pub use types::ApiContext;
