//! Structured logging for CGI status pages.
//!
//! CGI stderr lands in the gateway's error log, so each page emits one
//! structured line per event there: JSON for aggregation, or a
//! human-readable form for development.

mod logging;

pub use logging::*;
