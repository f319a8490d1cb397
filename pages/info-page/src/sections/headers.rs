//! HTTP headers card, built from the derived header set.

use cgi_html::{Card, InfoTable};

use crate::data::InfoPageData;

/// Render the HTTP headers card. An empty header set still renders the
/// card, with the placeholder row instead of an empty table.
pub fn render_headers(data: &InfoPageData) -> String {
    let mut table = InfoTable::new().with_placeholder("No HTTP headers received");
    for (name, value) in data.headers.iter() {
        table = table.styled_row(name, value, "value-muted");
    }

    Card::new("HTTP Headers", table.render())
        .with_badge("badge-cgi", "request")
        .render()
}
