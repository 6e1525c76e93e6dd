//! Configuration loader and schema types.
//!
//! Settings control the scan and the optional voice-over pass. Command-line
//! flags are applied on top of whatever is loaded here.

mod load;
mod schema;

pub use schema::*;
