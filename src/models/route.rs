//! Route model.

use serde::{Deserialize, Serialize};

use super::{ServiceTime, TimeSlot};

/// Route identifier.
pub type RouteId = u32;

/// A route and the ordered slots it needs serviced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Unique positive identifier.
    pub id: RouteId,
    /// Slots in timetable order.
    pub slots: Vec<TimeSlot>,
}

impl Route {
    /// Creates a route with no slots.
    pub fn new(id: RouteId) -> Self {
        Self {
            id,
            slots: Vec::new(),
        }
    }

    /// Appends a slot.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Replaces the slot list.
    pub fn with_slots(mut self, slots: Vec<TimeSlot>) -> Self {
        self.slots = slots;
        self
    }

    /// Start of the first slot, if any.
    pub fn first_start(&self) -> Option<ServiceTime> {
        self.slots.first().map(|s| s.start)
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
