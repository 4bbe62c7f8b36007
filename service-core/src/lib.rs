//! service-core: listener config, error responses, request middleware and
//! tracing setup shared by the predictor binaries.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
