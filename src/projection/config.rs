use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Locale-sensitive projection settings.
///
/// Only the first day of the week is configurable; the projection window
/// itself (two weeks back, four weeks ahead) is an invariant of the view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectionConfig {
    pub week_start: Weekday,
}

impl ProjectionConfig {
    pub fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
        }
    }
}
