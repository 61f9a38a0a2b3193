use serde::Serialize;

use crate::{define_index_newtype, problem::time_window::TimeWindow};

use super::travel_time_matrix::Seconds;

define_index_newtype!(NodeIdx, Node);

/// Start and end of every vehicle.
pub const DEPOT: NodeIdx = NodeIdx::new(0);

impl NodeIdx {
    pub fn is_depot(&self) -> bool {
        *self == DEPOT
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Node {
    time_window: TimeWindow,
    service_duration: Seconds,
}

impl Node {
    pub fn new(time_window: TimeWindow, service_duration: Seconds) -> Self {
        Node {
            time_window,
            service_duration,
        }
    }

    pub fn time_window(&self) -> TimeWindow {
        self.time_window
    }

    pub fn service_duration(&self) -> Seconds {
        self.service_duration
    }
}
