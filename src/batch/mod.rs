pub mod grouping;
pub mod presence;
pub mod runner;

pub use grouping::{group_by_day, normalize_date, DayGroup, GroupKey, Grouping};
pub use presence::PresenceSet;
pub use runner::{process_group, run_season_batch, BatchError, BatchOptions, BatchSummary};
