use std::fmt::Display;

use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{time_window::TimeWindow, travel_time_matrix::Seconds};

const HOUR: Seconds = 60 * 60;

pub const DAY_START: Seconds = 6 * HOUR;
pub const DAY_END: Seconds = 23 * HOUR;

/// Window of the depot: vehicles may leave and return at any time until the end of the day.
pub const DEPOT_TIME_WINDOW: TimeWindow = TimeWindow::new(0, DAY_END);

/// Window given to a previously dropped stop when it is planned again.
pub const REENTRY_TIME_WINDOW: TimeWindow = TimeWindow::new(0, DAY_END);

pub const DEFAULT_SERVICE_DURATION: SignedDuration = SignedDuration::from_mins(5);

/// Part of the day a stop can be visited in.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    #[serde(alias = "am")]
    Morning,
    #[serde(alias = "pm")]
    Afternoon,
    #[default]
    #[serde(alias = "all")]
    AllDay,
}

impl TimeSlot {
    pub fn time_window(&self) -> TimeWindow {
        match self {
            TimeSlot::Morning => TimeWindow::new(DAY_START, 14 * HOUR),
            TimeSlot::Afternoon => TimeWindow::new(14 * HOUR, DAY_END),
            TimeSlot::AllDay => TimeWindow::new(DAY_START, DAY_END),
        }
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, TimeSlot::AllDay)
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TimeSlot::Morning => "morning",
                TimeSlot::Afternoon => "afternoon",
                TimeSlot::AllDay => "all day",
            }
        )
    }
}
