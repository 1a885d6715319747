//! Weekly cash-flow projection: pure bucketing of future entries into a
//! fixed window of calendar weeks around the current date.

pub mod config;
pub mod weekly;

pub use config::ProjectionConfig;
pub use weekly::{weekly_buckets, WeekBucket, BUCKET_COUNT, WEEKS_AHEAD, WEEKS_BACK};
