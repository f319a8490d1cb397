//! HTML building blocks for CGI status pages.
//!
//! - `escape_html` / `unescape_html` - total escaping of text content
//! - `Shell` / `HeadContent` - document frame around the page body
//! - `InfoTable` / `Card` / `FieldValue` - the shared table markup
//! - `ResponseSink` - preamble-first writer over the CGI byte stream

mod escape;
mod shell;
mod sink;
mod table;

pub use escape::*;
pub use shell::*;
pub use sink::*;
pub use table::*;
