use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::time_slot::TimeSlot;

/// Waits longer than this are flagged as a likely cause.
const LONG_WAIT_MINUTES: u32 = 10;

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnservedCause {
    RestrictiveTimeSlot,
    LongWait,
    ConflictWithOtherStops,
}

impl UnservedCause {
    pub fn description(&self) -> &'static str {
        match self {
            UnservedCause::RestrictiveTimeSlot => "Restrictive time slot",
            UnservedCause::LongWait => "Long wait at the stop",
            UnservedCause::ConflictWithOtherStops => "Conflict with other stops",
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            UnservedCause::RestrictiveTimeSlot => "Try widening the slot to the whole day",
            UnservedCause::LongWait => "Reduce the wait to 5 to 10 minutes",
            UnservedCause::ConflictWithOtherStops => {
                "Move this stop to another route or split the day"
            }
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct UnservedDiagnosis {
    pub address: String,
    pub causes: Vec<UnservedCause>,
    pub suggestions: Vec<String>,
}

/// Static rules guessing why a stop was left out. Advisory only.
pub fn explain_unserved(address: &str, slot: TimeSlot, wait_minutes: u32) -> UnservedDiagnosis {
    let mut causes = Vec::new();

    if !slot.is_all_day() {
        causes.push(UnservedCause::RestrictiveTimeSlot);
    }

    if wait_minutes > LONG_WAIT_MINUTES {
        causes.push(UnservedCause::LongWait);
    }

    if causes.is_empty() {
        causes.push(UnservedCause::ConflictWithOtherStops);
    }

    UnservedDiagnosis {
        address: address.to_owned(),
        suggestions: causes
            .iter()
            .map(|cause| cause.suggestion().to_owned())
            .collect(),
        causes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restrictive_slot_and_long_wait() {
        let diagnosis = explain_unserved("A", TimeSlot::Morning, 15);
        assert_eq!(
            diagnosis.causes,
            vec![UnservedCause::RestrictiveTimeSlot, UnservedCause::LongWait]
        );
        assert_eq!(diagnosis.suggestions.len(), 2);
    }

    #[test]
    fn test_falls_back_to_conflict() {
        let diagnosis = explain_unserved("A", TimeSlot::AllDay, 10);
        assert_eq!(diagnosis.causes, vec![UnservedCause::ConflictWithOtherStops]);
        assert_eq!(
            diagnosis.suggestions,
            vec!["Move this stop to another route or split the day".to_owned()]
        );
    }
}
