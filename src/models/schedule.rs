//! Schedule (solution) model.
//!
//! A schedule is an insertion-ordered list of driver-bus-route-slot
//! assignments. It only grows: there is no removal, and genetic operators
//! build new schedules instead of editing existing ones.
//!
//! Conflict queries use the inclusive overlap rule of
//! [`TimeSlot::overlaps`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Bus, BusId, Driver, DriverId, RouteId, TimeSlot};

/// One committed unit of work.
///
/// Identity is structural; two assignments with equal fields are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned driver.
    pub driver: Driver,
    /// Assigned bus.
    pub bus: Bus,
    /// Route the slot belongs to.
    pub route_id: RouteId,
    /// Serviced slot.
    pub slot: TimeSlot,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(driver: Driver, bus: Bus, route_id: RouteId, slot: TimeSlot) -> Self {
        Self {
            driver,
            bus,
            route_id,
            slot,
        }
    }

    /// Same route and slot, different driver.
    pub fn with_driver(&self, driver: Driver) -> Self {
        Self { driver, ..*self }
    }

    /// Same route and slot, different bus.
    pub fn with_bus(&self, bus: Bus) -> Self {
        Self { bus, ..*self }
    }

    /// Worked minutes (slot length).
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.slot.duration_minutes()
    }

    /// Whether both assignments use the same driver at overlapping times.
    pub fn driver_clashes_with(&self, other: &Self) -> bool {
        self.driver.id == other.driver.id && self.slot.overlaps(&other.slot)
    }

    /// Whether both assignments use the same bus at overlapping times.
    pub fn bus_clashes_with(&self, other: &Self) -> bool {
        self.bus.id == other.bus.id && self.slot.overlaps(&other.slot)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route {} assigned to bus {}, driver {} from {} to {} (peak: {})",
            self.route_id,
            self.bus.id,
            self.driver.id,
            self.slot.start,
            self.slot.end,
            if self.slot.is_peak { "yes" } else { "no" }
        )
    }
}

/// An ordered collection of assignments for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    assignments: Vec<Assignment>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing assignment list.
    pub fn from_assignments(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    /// Appends an assignment. No feasibility check is made here.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Assignments in insertion order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Consumes the schedule, returning its assignments.
    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the schedule has no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Whether `driver` already works a slot overlapping `slot`.
    ///
    /// Driver-scoped only; bus exclusivity is [`Schedule::is_bus_busy`].
    pub fn is_conflict(&self, driver: &Driver, slot: &TimeSlot) -> bool {
        self.assignments
            .iter()
            .any(|a| a.driver.id == driver.id && a.slot.overlaps(slot))
    }

    /// Whether `bus` is already committed to a slot overlapping `slot`.
    pub fn is_bus_busy(&self, bus: &Bus, slot: &TimeSlot) -> bool {
        self.assignments
            .iter()
            .any(|a| a.bus.id == bus.id && a.slot.overlaps(slot))
    }

    /// All assignments of a driver, in insertion order.
    pub fn assignments_for_driver(&self, driver_id: DriverId) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.driver.id == driver_id)
            .collect()
    }

    /// All assignments of a bus, in insertion order.
    pub fn assignments_for_bus(&self, bus_id: BusId) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.bus.id == bus_id)
            .collect()
    }

    /// Sum of actual slot minutes worked by a driver.
    pub fn worked_minutes(&self, driver_id: DriverId) -> u32 {
        self.assignments
            .iter()
            .filter(|a| a.driver.id == driver_id)
            .map(Assignment::duration_minutes)
            .sum()
    }
}
