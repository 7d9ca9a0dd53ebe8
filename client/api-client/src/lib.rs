//! Typed client for the Uplift backend
//!
//! Every operation is request construction only: validate the payload
//! client-side, build the request, issue it, map the response. Business
//! rules live on the backend.

pub mod client;
pub mod config;
pub mod models;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use models::*;
