pub mod overrides;
pub mod pipeline;

pub use overrides::{OverrideBadge, diff_overrides};
pub use pipeline::{ListPage, ListState, PAGE_SIZE, SortKey, transform};
