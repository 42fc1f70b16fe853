//! REST API implementation
//!
//! - types: Request/response type definitions
//! - extractors: Custom request extractors
//! - conversions: Type conversion utilities
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration

mod conversions;
mod extractors;
mod handlers;
mod router;
mod tests;
pub mod types;

// Re-export public API
pub use extractors::JsonExtractor;
pub use router::create_router;
pub use types::{AppState, EvaluateRequest, EvaluateResponse};
