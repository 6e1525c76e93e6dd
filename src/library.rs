//! Media inventory: every audio track and playlist file under the device's
//! music directory.
//!
//! Paths leave this module as device paths: relative to the mount point,
//! `/`-separated, valid UTF-8.

mod metadata;
mod model;
mod scan;

pub use metadata::{TrackTags, read_tags};
pub use model::{AudioType, Inventory, PlaylistSource};
pub use scan::scan;
