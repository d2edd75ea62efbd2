//! Grouping and five-number summaries of numerical data.

pub use self::group::{distinct_keys, group_by, summarize, GroupedSummaries};
pub use self::quantile::quantile_sorted;
pub use self::summary::Summary;

pub(crate) use self::summary::write_summary;

mod group;
mod quantile;
mod summary;
