//! Settings schema and loader.
//!
//! Settings cover where the library is read from, how long samples play and
//! how verbose logging is.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
