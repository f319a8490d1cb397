//! Section renderers for the info page.
//!
//! Each renderer is a pure function over the prepared [`InfoPageData`];
//! no section reads the environment itself.

mod banner;
mod headers;
mod nav;
mod params;
mod request;
mod server;
mod time;

pub use banner::*;
pub use headers::*;
pub use nav::*;
pub use params::*;
pub use request::*;
pub use server::*;
pub use time::*;
