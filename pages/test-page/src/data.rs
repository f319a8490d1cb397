//! Data-preparation stage for the test page.

use chrono::{DateTime, Local};

use cgi_core::{EnvValue, GatewayEnv, QueryParams};

/// Version of this page binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolved display fields for one render of the test page.
#[derive(Debug, Clone)]
pub struct TestPageData {
    pub version: &'static str,
    pub server_software: EnvValue,
    pub request_method: EnvValue,
    pub script_name: EnvValue,
    pub query_string: EnvValue,
    pub query: QueryParams,
    /// `YYYY-MM-DD HH:MM:SS` in server local time.
    pub server_time: String,
    /// Local offset from UTC.
    pub utc_offset: String,
}

impl TestPageData {
    /// Resolve all display fields from the injected environment.
    pub fn gather(env: &GatewayEnv, query: QueryParams, now: DateTime<Local>) -> Self {
        Self {
            version: VERSION,
            server_software: env.server_software(),
            request_method: env.request_method(),
            script_name: env.script_name(),
            query_string: env.query_string(),
            query,
            server_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            utc_offset: now.offset().to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_fixtures::make_data;

    #[test]
    fn test_gather_resolves_fields() {
        let data = make_data(&[
            ("SERVER_SOFTWARE", "Webserv/1.0"),
            ("QUERY_STRING", "x=1"),
        ]);
        assert_eq!(data.server_software.as_str(), Some("Webserv/1.0"));
        assert_eq!(data.query.get("x"), Some("1"));
        assert_eq!(data.server_time, "2024-06-01 12:30:45");
    }

    #[test]
    fn test_absent_fields_are_not_set() {
        let data = make_data(&[]);
        assert!(!data.request_method.is_set());
        assert!(data.query.is_empty());
    }
}
