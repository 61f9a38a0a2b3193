use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bounds of the cumulative clock shared by every vehicle.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDimension {
    /// Maximum idle time a vehicle may accumulate while waiting for windows to open.
    pub slack_ceiling: SignedDuration,

    /// Maximum time between leaving the depot and returning to it.
    pub max_duration: SignedDuration,
}

impl Default for TimeDimension {
    fn default() -> Self {
        TimeDimension {
            slack_ceiling: SignedDuration::from_hours(6),
            max_duration: SignedDuration::from_hours(17),
        }
    }
}

impl TimeDimension {
    pub fn slack_ceiling_secs(&self) -> i64 {
        self.slack_ceiling.as_secs()
    }

    pub fn max_duration_secs(&self) -> i64 {
        self.max_duration.as_secs()
    }
}
