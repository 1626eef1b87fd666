//! Driver availability rules.
//!
//! Each [`DriverCategory`] maps to exactly one [`AvailabilityRule`]. The set
//! is closed: categories and rules are matched in
//! [`DriverCategory::availability_rule`].
//!
//! A rule only answers the labor question ("may this driver take one more
//! slot?"). Overlap with the driver's existing work is checked separately
//! through [`Schedule::is_conflict`].

mod continuous_work;
mod daily_hours;

pub use continuous_work::ContinuousWorkRule;
pub use daily_hours::DailyHoursRule;

use std::fmt::Debug;

use crate::models::{Driver, DriverCategory, Schedule, TimeSlot};

/// Maximum worked minutes per driver per day, shared by both categories.
pub const MAX_DAILY_MINUTES: u32 = 8 * 60;

/// A labor rule deciding whether a driver may take a candidate slot.
pub trait AvailabilityRule: Send + Sync + Debug {
    /// Rule name.
    fn name(&self) -> &'static str;

    /// Whether `driver` may additionally work `slot` given `schedule`.
    fn is_available(&self, driver: &Driver, schedule: &Schedule, slot: &TimeSlot) -> bool;
}

impl DriverCategory {
    /// The labor rule governing this category.
    pub fn availability_rule(self) -> &'static dyn AvailabilityRule {
        match self {
            DriverCategory::A => &DailyHoursRule,
            DriverCategory::B => &ContinuousWorkRule,
        }
    }
}

/// Whether `driver` may take `slot`: no overlapping work and the category
/// rule admits it.
pub fn is_driver_feasible(driver: &Driver, schedule: &Schedule, slot: &TimeSlot) -> bool {
    !schedule.is_conflict(driver, slot)
        && driver
            .category
            .availability_rule()
            .is_available(driver, schedule, slot)
}
