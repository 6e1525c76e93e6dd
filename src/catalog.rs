//! The `iTunesSD` catalog: the binary track and playlist database read by
//! the iPod shuffle (4th generation) firmware.
//!
//! Building happens in three steps. [`Catalog::build`] assigns album/artist
//! ids and dbids over the sorted track list, `Layout::plan` sizes every
//! section and computes every offset, and [`encode`] emits the image in one
//! forward pass.

mod encode;
mod ids;
mod layout;
mod model;

pub use encode::encode;
pub use ids::Dbid;
pub use model::{BuildOptions, Catalog, TrackEntry};
