//! GET parameters card.

use cgi_html::{Card, InfoTable};

use crate::data::InfoPageData;

/// Render the GET parameters card, or nothing when the query is empty.
pub fn render_get_params(data: &InfoPageData) -> Option<String> {
    if data.query.is_empty() {
        return None;
    }

    let mut table = InfoTable::new();
    for (key, value) in data.query.iter() {
        table = table.styled_row(key, value, "value-info");
    }

    let badge = format!("{} fields", data.query.len());
    Some(
        Card::new("GET Parameters", table.render())
            .with_badge("badge-rust", &badge)
            .render(),
    )
}
