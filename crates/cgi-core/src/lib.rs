//! Execution-environment model for CGI status pages.
//!
//! This crate provides the typed view of a single CGI request:
//! - `GatewayEnv` - the environment mapping the gateway supplies
//! - `EnvValue` - explicit present/absent lookup result
//! - `DerivedHeaders` - HTTP headers reconstructed from `HTTP_*` keys
//! - `QueryParams` - decoded query-string parameters
//! - `RequestId` - per-request identifier for log correlation

mod env;
mod headers;
mod query;
mod request_id;

pub use env::*;
pub use headers::*;
pub use query::*;
pub use request_id::*;
