mod merge;
mod store;

pub use merge::merge;
pub use store::{CumulativeStats, StatsStore, STATS_FILE_NAME};
