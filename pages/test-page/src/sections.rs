//! Section renderers for the test page.

use cgi_html::{FieldValue, InfoTable};

use crate::data::TestPageData;

/// Render the gradient hero header.
pub fn render_hero() -> String {
    r#"<header>
    <h1>&#129408; Rust CGI</h1>
    <p>Gateway Test Page</p>
</header>"#
        .to_string()
}

/// Render the runtime information card with the success row.
pub fn render_runtime_info(data: &TestPageData) -> String {
    let table = InfoTable::new()
        .row("Version", data.version)
        .row(
            "Server Software",
            FieldValue::from(data.server_software.clone()),
        )
        .row(
            "Request Method",
            FieldValue::from(data.request_method.clone()),
        )
        .row("Script Name", FieldValue::from(data.script_name.clone()))
        .row("Query String", FieldValue::from(data.query_string.clone()))
        .raw_row("Status", r#"<span class="success">&#10003; CGI Working!</span>"#);

    info_card("Runtime Information", &table.render())
}

/// Render the current time card.
pub fn render_current_time(data: &TestPageData) -> String {
    let table = InfoTable::new()
        .row("Server Time", data.server_time.as_str())
        .row("UTC Offset", data.utc_offset.as_str());
    info_card("Current Time", &table.render())
}

/// Render the GET parameters card, or nothing when the query is empty.
pub fn render_get_params(data: &TestPageData) -> Option<String> {
    if data.query.is_empty() {
        return None;
    }
    let mut table = InfoTable::new();
    for (key, value) in data.query.iter() {
        table = table.row(key, value);
    }
    Some(info_card("GET Parameters", &table.render()))
}

fn info_card(title: &str, body: &str) -> String {
    format!(
        "<div class=\"info-card\">\n<h3>{}</h3>\n{}\n</div>",
        cgi_html::escape_html(title),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_fixtures::make_data;

    #[test]
    fn test_runtime_info_has_success_row() {
        let html = render_runtime_info(&make_data(&[("REQUEST_METHOD", "GET")]));
        assert!(html.contains("CGI Working!"));
        assert!(html.contains("<td>GET</td>"));
    }

    #[test]
    fn test_absent_fields_render_placeholder() {
        let html = render_runtime_info(&make_data(&[]));
        assert!(html.contains(r#"<span class="value-not-set">N/A</span>"#));
    }

    #[test]
    fn test_time_card_shows_fixture_time() {
        let html = render_current_time(&make_data(&[]));
        assert!(html.contains("2024-06-01 12:30:45"));
    }

    #[test]
    fn test_params_card_escapes_and_orders() {
        let html = render_get_params(&make_data(&[("QUERY_STRING", "b=<i>&a=2")])).unwrap();
        assert!(html.contains("&lt;i&gt;"));
        assert!(html.find("<td>b</td>").unwrap() < html.find("<td>a</td>").unwrap());
    }

    #[test]
    fn test_params_card_omitted_when_empty() {
        assert!(render_get_params(&make_data(&[])).is_none());
    }
}
