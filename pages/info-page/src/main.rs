//! Info Renderer - CGI status page for the full gateway environment.
//!
//! One invocation handles exactly one request: capture the environment
//! the gateway supplied, prepare the display data, and stream the
//! document to stdout behind the `Content-Type` preamble. There is no
//! state that outlives the process.

mod data;
mod sections;
mod shell;

use std::collections::HashMap;
use std::io::{self, Write};

use anyhow::Context;
use chrono::Local;

use cgi_core::{GatewayEnv, QueryParams, RequestId};
use cgi_html::{ResponseSink, SinkError};
use cgi_observe::{LogLevel, RequestLogger};

use data::InfoPageData;
use sections::{
    render_footer, render_get_params, render_header, render_headers, render_nav,
    render_query_alert, render_request_info, render_server_info, render_stats, render_time,
};

fn main() -> anyhow::Result<()> {
    let logger = RequestLogger::new(RequestId::generate()).with_script("info-page");
    logger.info("Request started");

    let env = GatewayEnv::from_process();
    let query = QueryParams::parse(env.query_string().unwrap_or(""));
    let data = InfoPageData::gather(&env, query, Local::now());

    let stdout = io::stdout();
    let mut sink = ResponseSink::new(stdout.lock());
    render(&data, &mut sink).context("failed to render info page")?;

    logger.log_with_fields(
        LogLevel::Info,
        "Request complete",
        HashMap::from([
            ("sections".to_string(), serde_json::json!(sink.sections_sent().len())),
            ("params".to_string(), serde_json::json!(data.query.len())),
            ("headers".to_string(), serde_json::json!(data.headers.len())),
        ]),
    );
    Ok(())
}

/// Stream the full document: preamble, shell, sections, closing.
fn render<W: Write>(data: &InfoPageData, sink: &mut ResponseSink<W>) -> Result<(), SinkError> {
    sink.send_preamble("text/html; charset=utf-8")?;

    let shell = shell::create_shell();
    sink.send_section("shell", &shell.render_opening())?;
    sink.send_section("header", &render_header(data))?;
    sink.send_section("stats", &render_stats(data))?;
    if let Some(alert) = render_query_alert(data) {
        sink.send_section("query-alert", &alert)?;
    }
    sink.send_section("server", &render_server_info(data))?;
    sink.send_section("request", &render_request_info(data))?;
    if let Some(params) = render_get_params(data) {
        sink.send_section("params", &params)?;
    }
    sink.send_section("headers", &render_headers(data))?;
    sink.send_section("time", &render_time(data))?;
    sink.send_section("nav", &render_nav())?;
    sink.send_section("footer", &render_footer(data))?;
    sink.send_section("closing", &shell.render_closing())?;
    sink.finish()
}
