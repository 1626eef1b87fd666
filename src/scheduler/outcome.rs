//! Scheduling outcome: a schedule plus its demand coverage.
//!
//! Unfilled slots are identified by route and position, so a route that
//! lists the same times twice is still accounted slot by slot.

use serde::{Deserialize, Serialize};

use crate::models::{RouteId, Schedule, TimeSlot};

/// Reference to one route slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRef {
    /// Route the slot belongs to.
    pub route_id: RouteId,
    /// Position of the slot within its route.
    pub index: usize,
    /// The slot itself.
    pub slot: TimeSlot,
}

/// Whether every demanded slot received an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coverage {
    /// Every route slot is served.
    Full,
    /// Some slots found no feasible bus and driver.
    Partial {
        /// Unserved slots.
        unfilled: Vec<SlotRef>,
    },
}

impl Coverage {
    /// Builds coverage from a list of unfilled slots.
    pub fn from_unfilled(unfilled: Vec<SlotRef>) -> Self {
        if unfilled.is_empty() {
            Coverage::Full
        } else {
            Coverage::Partial { unfilled }
        }
    }

    /// Whether all demand is met.
    pub fn is_full(&self) -> bool {
        matches!(self, Coverage::Full)
    }

    /// Unserved slots (empty when full).
    pub fn unfilled(&self) -> &[SlotRef] {
        match self {
            Coverage::Full => &[],
            Coverage::Partial { unfilled } => unfilled,
        }
    }
}

/// Result of one scheduler invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingOutcome {
    /// Produced schedule.
    pub schedule: Schedule,
    /// Demand coverage of `schedule`.
    pub coverage: Coverage,
}

impl SchedulingOutcome {
    /// Whether every slot was served.
    pub fn is_fully_scheduled(&self) -> bool {
        self.coverage.is_full()
    }
}
