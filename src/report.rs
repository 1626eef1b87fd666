//! Schedule reporting.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Driver conflicts | Pairs sharing a driver with overlapping slots |
//! | Bus conflicts | Pairs sharing a bus with overlapping slots |
//! | Total | Sum of both; one pair may count twice |
//!
//! Unlike [`evaluate_fitness`](crate::ga::evaluate_fitness), bus overlaps
//! are counted here.

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Overlap-based conflict counts of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Assignments in the schedule.
    pub assignment_count: usize,
    /// Unordered pairs double-booking a driver.
    pub driver_conflicts: usize,
    /// Unordered pairs double-booking a bus.
    pub bus_conflicts: usize,
}

impl ConflictReport {
    /// Pairwise scan over all assignments. O(n²).
    pub fn calculate(schedule: &Schedule) -> Self {
        let genes = schedule.assignments();
        let mut driver_conflicts = 0;
        let mut bus_conflicts = 0;

        for (i, a) in genes.iter().enumerate() {
            for b in &genes[i + 1..] {
                if a.driver_clashes_with(b) {
                    driver_conflicts += 1;
                }
                if a.bus_clashes_with(b) {
                    bus_conflicts += 1;
                }
            }
        }

        Self {
            assignment_count: genes.len(),
            driver_conflicts,
            bus_conflicts,
        }
    }

    /// Driver plus bus conflicts.
    pub fn total(&self) -> usize {
        self.driver_conflicts + self.bus_conflicts
    }

    /// Whether no resource is double-booked.
    pub fn is_conflict_free(&self) -> bool {
        self.total() == 0
    }
}

/// One display line per assignment, in insertion order.
pub fn render_assignments(schedule: &Schedule) -> Vec<String> {
    schedule
        .assignments()
        .iter()
        .map(ToString::to_string)
        .collect()
}
