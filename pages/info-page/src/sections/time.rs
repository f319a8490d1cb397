//! Time information card.

use cgi_html::{Card, InfoTable};

use crate::data::InfoPageData;

/// Render the time information card.
pub fn render_time(data: &InfoPageData) -> String {
    let table = InfoTable::new()
        .styled_row("Server Time", data.time.formatted.as_str(), "value-warning")
        .row("UTC Offset", data.time.utc_offset.as_str())
        .row("Unix Timestamp", data.time.unix.to_string());

    Card::new("Time Information", table.render())
        .with_badge("badge-rust", &data.time.utc_offset)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_fixtures::make_data;

    #[test]
    fn test_time_card_shows_all_three_rows() {
        let data = make_data(&[]);
        let html = render_time(&data);
        assert!(html.contains(&data.time.formatted));
        assert!(html.contains(&data.time.unix.to_string()));
        assert!(html.contains("UTC Offset"));
    }
}
