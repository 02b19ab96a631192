//! Song library access: listing song folders and finding their descriptors.

mod locate;
mod scan;

pub use locate::find_descriptor;
pub use scan::{SongDir, list_song_dirs};
