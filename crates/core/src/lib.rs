pub mod title;
pub mod types;

pub use types::{EpisodeMeta, ItemKind, LibraryItem, SeasonMeta};
