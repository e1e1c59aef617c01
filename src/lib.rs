//! envelope-api - a minimal HTTP API skeleton
//!
//! - `POST /api/v1/login` checks a single configured login
//! - `GET /api/v1/users` lists a static user directory
//! - every API outcome is written through the [`envelope`] module, which wraps
//!   it as `{ message, meta, data? }`
//! - the OpenAPI document is generated from derive attributes in [`api::docs`]

pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod types;

pub use envelope::{ApiResponse, Envelope, Meta, ResponseChannel, ResponseStatus};
pub use error::{Error, Result};
