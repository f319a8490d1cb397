//! Navigation card and page footer. Links are static strings, not
//! computed from the request.

use cgi_html::{escape_html, Card};

use crate::data::InfoPageData;

/// Render the navigation card with links to sibling endpoints.
pub fn render_nav() -> String {
    let body = r#"<div class="btn-group">
    <a href="/cgi-bin/test" class="btn">Test Page</a>
    <a href="/cgi-bin/" class="btn">Test Center</a>
    <a href="/" class="btn">Home</a>
</div>"#;
    Card::new("Navigation", body).render()
}

/// Render the page footer.
pub fn render_footer(data: &InfoPageData) -> String {
    format!(
        r#"<div class="footer">
    <p>Rust CGI &middot; System Information &middot; {}</p>
    <p class="footer-detail">v{} &middot; {} &middot; Server: {}</p>
</div>"#,
        escape_html(&data.time.formatted),
        escape_html(data.version),
        escape_html(data.gateway_interface.unwrap_or("CGI/1.1")),
        escape_html(data.server_software.unwrap_or("Unknown")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_fixtures::make_data;

    #[test]
    fn test_nav_links_are_fixed() {
        let html = render_nav();
        assert!(html.contains(r#"href="/cgi-bin/test""#));
        assert!(html.contains(r#"href="/cgi-bin/""#));
        assert!(html.contains(r#"href="/""#));
    }

    #[test]
    fn test_footer_falls_back_when_software_absent() {
        let html = render_footer(&make_data(&[]));
        assert!(html.contains("Server: Unknown"));
    }
}
