//! Request information card.

use cgi_html::{Card, FieldValue, InfoTable};

use crate::data::InfoPageData;

/// Render the request information card.
pub fn render_request_info(data: &InfoPageData) -> String {
    let table = InfoTable::new()
        .row(
            "Request Method",
            FieldValue::from(data.request_method.clone()),
        )
        .row("Script Name", FieldValue::from(data.script_name.clone()))
        .row(
            "Script Filename",
            FieldValue::from(data.script_filename.clone()),
        )
        .row("Path Info", FieldValue::from(data.path_info.clone()));

    Card::new("Request Information", table.render())
        .with_badge("badge-cgi", "CGI")
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_fixtures::make_data;

    #[test]
    fn test_request_fields_rendered() {
        let html = render_request_info(&make_data(&[
            ("REQUEST_METHOD", "GET"),
            ("SCRIPT_NAME", "/cgi-bin/info"),
        ]));
        assert!(html.contains("<td>GET</td>"));
        assert!(html.contains("<td>/cgi-bin/info</td>"));
    }

    #[test]
    fn test_no_field_is_omitted_when_absent() {
        let html = render_request_info(&make_data(&[]));
        for label in ["Request Method", "Script Name", "Script Filename", "Path Info"] {
            assert!(html.contains(label), "missing row: {label}");
        }
    }
}
