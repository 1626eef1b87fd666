//! Category A: daily-hours rule.

use super::{AvailabilityRule, MAX_DAILY_MINUTES};
use crate::models::{Driver, Schedule, TimeSlot};

/// Caps a driver's credited work per day.
///
/// Every committed assignment is credited a flat
/// [`CREDITED_MINUTES`](Self::CREDITED_MINUTES), regardless of its real
/// length. The driver is unavailable once the credit reaches
/// [`MAX_DAILY_MINUTES`]. The candidate slot is not counted, so the last
/// admitted slot may take a driver past the cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyHoursRule;

impl DailyHoursRule {
    /// Minutes credited per committed assignment.
    pub const CREDITED_MINUTES: u32 = 70;

    /// Credited minutes already committed for `driver`.
    pub fn credited_minutes(driver: &Driver, schedule: &Schedule) -> u32 {
        schedule
            .assignments()
            .iter()
            .filter(|a| a.driver.id == driver.id)
            .count() as u32
            * Self::CREDITED_MINUTES
    }

    /// Whether any of the driver's slots falls in a peak window, i.e. no
    /// lunch could be taken then.
    ///
    /// Diagnostic only: it does not take part in admission.
    pub fn works_during_peak(driver: &Driver, schedule: &Schedule) -> bool {
        schedule
            .assignments()
            .iter()
            .any(|a| a.driver.id == driver.id && a.slot.is_peak)
    }
}

impl AvailabilityRule for DailyHoursRule {
    fn name(&self) -> &'static str {
        "daily-hours"
    }

    fn is_available(&self, driver: &Driver, schedule: &Schedule, _slot: &TimeSlot) -> bool {
        Self::credited_minutes(driver, schedule) < MAX_DAILY_MINUTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Bus, ServiceTime};

    fn slot_at(start_min: u32, is_peak: bool) -> TimeSlot {
        let start = ServiceTime::from_minutes(start_min);
        TimeSlot::new(start, start.plus_minutes(70), is_peak)
    }

    fn schedule_with(driver: Driver, count: u32) -> Schedule {
        let mut s = Schedule::new();
        for i in 0..count {
            s.add_assignment(Assignment::new(driver, Bus::new(1), 1, slot_at(360 + i * 80, false)));
        }
        s
    }

    #[test]
    fn test_fresh_driver_available() {
        let d = Driver::category_a(1);
        assert!(DailyHoursRule.is_available(&d, &Schedule::new(), &slot_at(360, false)));
    }

    #[test]
    fn test_cap_boundary() {
        let d = Driver::category_a(1);
        // 6 x 70 = 420 < 480 → still available, and may go to 490
        let s6 = schedule_with(d, 6);
        assert_eq!(DailyHoursRule::credited_minutes(&d, &s6), 420);
        assert!(DailyHoursRule.is_available(&d, &s6, &slot_at(1200, false)));

        // 7 x 70 = 490 ≥ 480 → unavailable
        let s7 = schedule_with(d, 7);
        assert!(!DailyHoursRule.is_available(&d, &s7, &slot_at(1200, false)));
    }

    #[test]
    fn test_credit_is_flat_per_assignment() {
        let d = Driver::category_a(1);
        let mut s = Schedule::new();
        let short = TimeSlot::new(ServiceTime::hm(6, 0), ServiceTime::hm(6, 10), false);
        s.add_assignment(Assignment::new(d, Bus::new(1), 1, short));
        assert_eq!(DailyHoursRule::credited_minutes(&d, &s), 70);
    }

    #[test]
    fn test_other_drivers_ignored() {
        let d = Driver::category_a(1);
        let other = Driver::category_a(2);
        let s = schedule_with(other, 7);
        assert!(DailyHoursRule.is_available(&d, &s, &slot_at(1200, false)));
    }

    #[test]
    fn test_peak_flag_does_not_block() {
        let d = Driver::category_a(1);
        let mut s = Schedule::new();
        s.add_assignment(Assignment::new(d, Bus::new(1), 1, slot_at(420, true)));
        assert!(DailyHoursRule::works_during_peak(&d, &s));
        assert!(DailyHoursRule.is_available(&d, &s, &slot_at(600, true)));
    }
}
