//! REST API implementation
//!
//! - types: Shared state and response types
//! - extractors: JSON extractor that maps rejections to `ServerError`
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration
//! - tests: Unit tests for the handlers

mod extractors;
mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use extractors::JsonExtractor;
pub use router::create_router;
pub use types::{AppState, HealthResponse, ServiceInfoResponse, SERVICE_NAME};
