//! HTTP API module for the payroll computation engine.
//!
//! This module provides the REST API endpoint for computing attendance
//! and pay for one employee over one pay period.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ComputeRequest;
pub use response::ApiError;
pub use state::AppState;
