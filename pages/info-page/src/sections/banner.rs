//! Page header, banner stats and the query-string alert.

use cgi_html::escape_html;

use crate::data::InfoPageData;

/// Render the page header with logo and gateway badge.
pub fn render_header(data: &InfoPageData) -> String {
    format!(
        r#"<div class="header">
    <div class="logo">
        <span class="logo-text">Rust CGI</span>
    </div>
    <div class="language-badge">
        <span class="language-tag">Rust {}</span>
        <span>{}</span>
    </div>
</div>"#,
        escape_html(data.version),
        escape_html(data.gateway_interface.unwrap_or("CGI/1.1")),
    )
}

/// Render the three banner stat cards.
pub fn render_stats(data: &InfoPageData) -> String {
    format!(
        r#"<div class="stats-grid">
    <div class="stat-card">
        <div class="stat-title">Page Version</div>
        <div class="stat-number">{}</div>
    </div>
    <div class="stat-card">
        <div class="stat-title">Server</div>
        <div class="stat-number stat-server">{}</div>
    </div>
    <div class="stat-card">
        <div class="stat-title">Status</div>
        <div class="stat-number stat-active">&#10003; Active</div>
    </div>
</div>"#,
        escape_html(data.version),
        escape_html(&data.server_software_short()),
    )
}

/// Render the query-string alert, or nothing when the query is empty.
pub fn render_query_alert(data: &InfoPageData) -> Option<String> {
    let raw = data.query_string.as_str().filter(|s| !s.is_empty())?;
    Some(format!(
        r#"<div class="alert alert-info">
    <div><strong>Query String:</strong> {}</div>
</div>"#,
        escape_html(raw)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_fixtures::make_data;

    #[test]
    fn test_header_shows_version_and_interface() {
        let html = render_header(&make_data(&[("GATEWAY_INTERFACE", "CGI/1.1")]));
        assert!(html.contains("Rust "));
        assert!(html.contains("CGI/1.1"));
    }

    #[test]
    fn test_stats_show_truncated_server() {
        let html = render_stats(&make_data(&[("SERVER_SOFTWARE", "Webserv/1.0")]));
        assert!(html.contains("Webserv/1.0"));
        assert!(html.contains("Active"));
    }

    #[test]
    fn test_query_alert_absent_without_query() {
        assert!(render_query_alert(&make_data(&[])).is_none());
        assert!(render_query_alert(&make_data(&[("QUERY_STRING", "")])).is_none());
    }

    #[test]
    fn test_query_alert_escapes_raw_string() {
        let html = render_query_alert(&make_data(&[("QUERY_STRING", "a=<b>")])).unwrap();
        assert!(html.contains("a=&lt;b&gt;"));
        assert!(!html.contains("a=<b>"));
    }
}
