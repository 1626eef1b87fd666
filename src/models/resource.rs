//! Resource pool models.
//!
//! Buses and drivers carry identity only. Availability is never stored on
//! the resource; it is derived from a [`Schedule`](super::Schedule) on each
//! query.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bus identifier.
pub type BusId = u32;

/// Driver identifier.
pub type DriverId = u32;

/// A vehicle that can serve one slot at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bus {
    /// Unique positive identifier.
    pub id: BusId,
}

impl Bus {
    /// Creates a bus.
    pub fn new(id: BusId) -> Self {
        Self { id }
    }
}

/// Labor-rule class of a driver.
///
/// Ordering is significant: `A < B`, and the greedy scheduler offers work
/// to Category A drivers first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DriverCategory {
    /// Daily-hours driver: capped on total credited work per day.
    A,
    /// Continuous-work driver: needs breaks after long stretches.
    B,
}

impl fmt::Display for DriverCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverCategory::A => f.write_str("A"),
            DriverCategory::B => f.write_str("B"),
        }
    }
}

/// A driver with a labor-rule category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Driver {
    /// Unique positive identifier.
    pub id: DriverId,
    /// Labor-rule class.
    pub category: DriverCategory,
}

impl Driver {
    /// Creates a driver.
    pub fn new(id: DriverId, category: DriverCategory) -> Self {
        Self { id, category }
    }

    /// Creates a Category A driver.
    pub fn category_a(id: DriverId) -> Self {
        Self::new(id, DriverCategory::A)
    }

    /// Creates a Category B driver.
    pub fn category_b(id: DriverId) -> Self {
        Self::new(id, DriverCategory::B)
    }
}
