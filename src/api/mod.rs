//! Estimate API Server module
//!
//! HTTP front end for the layout engine.
//! Run with `estimate-server`.

pub mod handlers;
pub mod server;

pub use server::{router, run_api_server, ApiConfig, AppState};
