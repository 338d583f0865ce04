//! HTTP server wiring for the usuarios service: database pool, middleware stack,
//! health endpoint and lifecycle.

pub mod request_id;
pub mod server;
pub mod web;

pub use server::{build_router, connect_db, run};
