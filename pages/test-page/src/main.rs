//! Test Renderer - abbreviated CGI page confirming the gateway works.

mod data;
mod sections;

use std::collections::HashMap;
use std::io::{self, Write};

use anyhow::Context;
use chrono::Local;

use cgi_core::{GatewayEnv, QueryParams, RequestId};
use cgi_html::{HeadContent, ResponseSink, Shell, SinkError};
use cgi_observe::{LogLevel, RequestLogger};

use data::TestPageData;
use sections::{render_current_time, render_get_params, render_hero, render_runtime_info};

fn main() -> anyhow::Result<()> {
    let logger = RequestLogger::new(RequestId::generate()).with_script("test-page");
    logger.info("Request started");

    let env = GatewayEnv::from_process();
    let query = QueryParams::parse(env.query_string().unwrap_or(""));
    let data = TestPageData::gather(&env, query, Local::now());

    let stdout = io::stdout();
    let mut sink = ResponseSink::new(stdout.lock());
    render(&data, &mut sink).context("failed to render test page")?;

    logger.log_with_fields(
        LogLevel::Info,
        "Request complete",
        HashMap::from([("params".to_string(), serde_json::json!(data.query.len()))]),
    );
    Ok(())
}

/// Stream the abbreviated document.
fn render<W: Write>(data: &TestPageData, sink: &mut ResponseSink<W>) -> Result<(), SinkError> {
    sink.send_preamble("text/html; charset=utf-8")?;

    let shell = create_shell();
    sink.send_section("shell", &shell.render_opening())?;
    sink.send_section("hero", &render_hero())?;
    sink.send_section("content-open", "<div class=\"content\">\n")?;
    sink.send_section("runtime", &render_runtime_info(data))?;
    sink.send_section("time", &render_current_time(data))?;
    if let Some(params) = render_get_params(data) {
        sink.send_section("params", &params)?;
    }
    sink.send_section("content-close", "\n</div>")?;
    sink.send_section("closing", &shell.render_closing())?;
    sink.finish()
}

fn create_shell() -> Shell {
    Shell::new(HeadContent::new("Rust CGI Test").with_style(PAGE_STYLES))
}

const PAGE_STYLES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    min-height: 100vh;
    padding: 40px;
}

.container {
    max-width: 800px;
    margin: 0 auto;
    background: white;
    border-radius: 16px;
    box-shadow: 0 20px 60px rgba(0,0,0,0.3);
    overflow: hidden;
}

header {
    background: linear-gradient(135deg, #f74c00 0%, #e3b341 100%);
    padding: 30px;
    text-align: center;
    color: white;
}

header h1 { font-size: 2.5rem; margin-bottom: 10px; }

.content { padding: 30px; }

.info-card {
    background: #f8f9fa;
    border-radius: 12px;
    padding: 20px;
    margin-bottom: 20px;
}

.info-card h3 { color: #f74c00; margin-bottom: 15px; }

.info-table { width: 100%; border-collapse: collapse; }
.info-table td { padding: 8px 12px; border-bottom: 1px solid #dee2e6; }
.info-table td:first-child { font-weight: 600; color: #495057; width: 40%; }
.info-table tr:last-child td { border-bottom: none; }

.table-placeholder { color: #6c757d; text-align: center; }
.value-not-set { color: #6c757d; font-style: italic; }
.success { color: #28a745; font-weight: 600; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_fixtures::make_data;

    fn render_to_string(pairs: &[(&str, &str)]) -> String {
        let data = make_data(pairs);
        let mut sink = ResponseSink::new(Vec::new());
        render(&data, &mut sink).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_document_shape() {
        let out = render_to_string(&[("REQUEST_METHOD", "GET")]);
        assert!(out.starts_with("Content-Type: text/html; charset=utf-8\r\n\r\n"));
        assert!(out.contains("<!DOCTYPE html>"));
        assert!(out.contains("CGI Working!"));
        assert!(out.ends_with("</html>"));
    }

    #[test]
    fn test_query_markup_is_escaped() {
        let out = render_to_string(&[("QUERY_STRING", "b=<script>")]);
        assert!(out.contains("&lt;script&gt;"));
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn test_missing_fields_render_placeholders() {
        let out = render_to_string(&[]);
        assert!(out.contains(r#"<span class="value-not-set">N/A</span>"#));
        assert!(!out.contains("GET Parameters"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render_to_string(&[("QUERY_STRING", "a=1")]);
        let b = render_to_string(&[("QUERY_STRING", "a=1")]);
        assert_eq!(a, b);
    }
}
