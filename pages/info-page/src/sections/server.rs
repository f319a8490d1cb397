//! Server information card.

use cgi_html::{Card, FieldValue, InfoTable};

use crate::data::InfoPageData;

/// Render the server information card.
pub fn render_server_info(data: &InfoPageData) -> String {
    let table = InfoTable::new()
        .row("Page Version", data.version)
        .row(
            "Server Software",
            FieldValue::from(data.server_software.clone()),
        )
        .row(
            "Server Protocol",
            FieldValue::from(data.server_protocol.clone()),
        )
        .row(
            "Gateway Interface",
            FieldValue::from(data.gateway_interface.clone()),
        )
        .row("Document Root", FieldValue::from(data.document_root.clone()))
        .row("Server Name", FieldValue::from(data.server_name.clone()))
        .row("Server Port", FieldValue::from(data.server_port.clone()));

    Card::new("Server Information", table.render())
        .with_badge("badge-rust", "cgi-bin")
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_fixtures::make_data;

    #[test]
    fn test_present_fields_rendered() {
        let html = render_server_info(&make_data(&[
            ("SERVER_SOFTWARE", "Webserv/1.0"),
            ("SERVER_PROTOCOL", "HTTP/1.1"),
            ("SERVER_PORT", "8080"),
        ]));
        assert!(html.contains("<td>Webserv/1.0</td>"));
        assert!(html.contains("<td>HTTP/1.1</td>"));
        assert!(html.contains("<td>8080</td>"));
    }

    #[test]
    fn test_absent_field_renders_placeholder_not_empty_cell() {
        let html = render_server_info(&make_data(&[]));
        assert!(html.contains(r#"<span class="value-not-set">N/A</span>"#));
        assert!(html.contains("Server Software"));
    }
}
