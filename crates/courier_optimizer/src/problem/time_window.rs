use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::travel_time_matrix::Seconds;

/// Inclusive interval, in seconds from the day-start epoch, during which a node may be visited.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    pub earliest: Seconds,
    pub latest: Seconds,
}

impl TimeWindow {
    pub const fn new(earliest: Seconds, latest: Seconds) -> Self {
        TimeWindow { earliest, latest }
    }

    pub fn is_inverted(&self) -> bool {
        self.earliest > self.latest
    }

    pub fn contains(&self, time: Seconds) -> bool {
        self.earliest <= time && time <= self.latest
    }
}

impl From<(Seconds, Seconds)> for TimeWindow {
    fn from((earliest, latest): (Seconds, Seconds)) -> Self {
        TimeWindow::new(earliest, latest)
    }
}
