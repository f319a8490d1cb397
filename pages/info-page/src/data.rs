//! Data-preparation stage for the info page.
//!
//! Everything the sections display is resolved here, once, from the
//! injected environment. The templating stage never goes back to the
//! environment mid-markup.

use chrono::{DateTime, Local};

use cgi_core::{DerivedHeaders, EnvValue, GatewayEnv, QueryParams};

/// Version of this page binary, shown where the original interpreter
/// stack showed its runtime version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolved display fields for one render of the info page.
#[derive(Debug, Clone)]
pub struct InfoPageData {
    /// Page program version.
    pub version: &'static str,
    pub server_software: EnvValue,
    pub server_protocol: EnvValue,
    pub gateway_interface: EnvValue,
    pub document_root: EnvValue,
    pub server_name: EnvValue,
    pub server_port: EnvValue,
    pub request_method: EnvValue,
    pub script_name: EnvValue,
    pub script_filename: EnvValue,
    pub path_info: EnvValue,
    /// The raw, undecoded query string.
    pub query_string: EnvValue,
    /// Headers reconstructed from `HTTP_*` keys.
    pub headers: DerivedHeaders,
    /// Decoded query parameters.
    pub query: QueryParams,
    /// Timestamps for the time card and footer.
    pub time: TimeInfo,
}

impl InfoPageData {
    /// Resolve all display fields from the environment. Pure: same
    /// inputs give the same data, and the same rendered page.
    pub fn gather(env: &GatewayEnv, query: QueryParams, now: DateTime<Local>) -> Self {
        Self {
            version: VERSION,
            server_software: env.server_software(),
            server_protocol: env.server_protocol(),
            gateway_interface: env.gateway_interface(),
            document_root: env.document_root(),
            server_name: env.server_name(),
            server_port: env.server_port(),
            request_method: env.request_method(),
            script_name: env.script_name(),
            script_filename: env.script_filename(),
            path_info: env.path_info(),
            query_string: env.query_string(),
            headers: DerivedHeaders::from_env(env),
            query,
            time: TimeInfo::at(now),
        }
    }

    /// Server software truncated for the banner stat card.
    pub fn server_software_short(&self) -> String {
        match self.server_software.as_str() {
            Some(software) if software.len() > 20 => {
                let cut: String = software.chars().take(20).collect();
                format!("{}...", cut)
            }
            Some(software) => software.to_string(),
            None => "Unknown".to_string(),
        }
    }
}

/// Timestamps resolved at gather time.
#[derive(Debug, Clone)]
pub struct TimeInfo {
    /// `YYYY-MM-DD HH:MM:SS` in server local time.
    pub formatted: String,
    /// Local offset from UTC, e.g. `+02:00`.
    pub utc_offset: String,
    /// Seconds since the Unix epoch.
    pub unix: i64,
}

impl TimeInfo {
    /// Capture a timestamp.
    pub fn at(now: DateTime<Local>) -> Self {
        Self {
            formatted: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            utc_offset: now.offset().to_string(),
            unix: now.timestamp(),
        }
    }
}

/// Shared fixtures for section and page tests.
#[cfg(test)]
pub mod test_fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 1, 12, 30, 45).unwrap()
    }

    pub fn make_data(pairs: &[(&str, &str)]) -> InfoPageData {
        let env = GatewayEnv::from_pairs(pairs.iter().copied());
        let query = QueryParams::parse(env.query_string().unwrap_or(""));
        InfoPageData::gather(&env, query, fixed_now())
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::{fixed_now, make_data};
    use super::*;

    #[test]
    fn test_gather_resolves_present_fields() {
        let data = make_data(&[
            ("SERVER_SOFTWARE", "Webserv/1.0"),
            ("REQUEST_METHOD", "GET"),
        ]);
        assert_eq!(data.server_software.as_str(), Some("Webserv/1.0"));
        assert_eq!(data.request_method.as_str(), Some("GET"));
    }

    #[test]
    fn test_gather_marks_absent_fields() {
        let data = make_data(&[]);
        assert!(!data.document_root.is_set());
        assert!(!data.script_name.is_set());
        assert!(data.headers.is_empty());
        assert!(data.query.is_empty());
    }

    #[test]
    fn test_query_parsed_from_query_string() {
        let data = make_data(&[("QUERY_STRING", "a=1&b=2")]);
        assert_eq!(data.query.get("a"), Some("1"));
        assert_eq!(data.query.len(), 2);
    }

    #[test]
    fn test_server_software_short_truncates() {
        let data = make_data(&[("SERVER_SOFTWARE", "SomeVeryLongServerIdentity/3.14")]);
        assert_eq!(data.server_software_short(), "SomeVeryLongServerId...");
    }

    #[test]
    fn test_server_software_short_unknown_when_absent() {
        assert_eq!(make_data(&[]).server_software_short(), "Unknown");
    }

    #[test]
    fn test_time_info_formats() {
        let time = TimeInfo::at(fixed_now());
        assert_eq!(time.formatted, "2024-06-01 12:30:45");
        assert_eq!(time.unix, fixed_now().timestamp());
    }
}
