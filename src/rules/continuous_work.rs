//! Category B: continuous-work rule.

use super::{AvailabilityRule, MAX_DAILY_MINUTES};
use crate::models::{Assignment, Driver, Schedule, TimeSlot};

/// Requires a break after long uninterrupted stretches and caps actual
/// worked minutes per day.
///
/// 1. Take the latest of the driver's assignments (by start) that ends at
///    or before the candidate's start. Walk back through back-to-back
///    predecessors (each ending exactly where the next starts) and sum
///    their minutes. If that stretch is at least
///    [`CONTINUOUS_LIMIT_MINUTES`](Self::CONTINUOUS_LIMIT_MINUTES), the
///    candidate must start at least
///    [`MIN_BREAK_MINUTES`](Self::MIN_BREAK_MINUTES) after it ends.
/// 2. Actual minutes already worked plus the candidate's minutes must not
///    exceed [`MAX_DAILY_MINUTES`].
///
/// Work after the candidate never shortens the stretch before it, so a
/// later assignment does not lift the break requirement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContinuousWorkRule;

impl ContinuousWorkRule {
    /// Uninterrupted work after which a break is due.
    pub const CONTINUOUS_LIMIT_MINUTES: u32 = 120;
    /// Minimum break once the limit is reached.
    pub const MIN_BREAK_MINUTES: u32 = 15;

    /// Uninterrupted minutes ending at `own[..=last]`, walking backwards.
    fn continuous_minutes(own: &[&Assignment], last: usize) -> u32 {
        let mut boundary = own[last].slot.end;
        let mut minutes = 0;
        for a in own[..=last].iter().rev() {
            if a.slot.end != boundary {
                break;
            }
            minutes += a.duration_minutes();
            boundary = a.slot.start;
        }
        minutes
    }

    /// Whether the break requirement admits `slot`.
    fn has_required_break(own: &[&Assignment], slot: &TimeSlot) -> bool {
        let preceding = own
            .iter()
            .take_while(|a| a.slot.end <= slot.start)
            .count();
        if preceding == 0 {
            return true;
        }

        let last = own[preceding - 1];
        let gap = last.slot.end.minutes_until(slot.start);
        Self::continuous_minutes(own, preceding - 1) < Self::CONTINUOUS_LIMIT_MINUTES
            || gap >= Self::MIN_BREAK_MINUTES
    }
}

impl AvailabilityRule for ContinuousWorkRule {
    fn name(&self) -> &'static str {
        "continuous-work"
    }

    fn is_available(&self, driver: &Driver, schedule: &Schedule, slot: &TimeSlot) -> bool {
        let mut own = schedule.assignments_for_driver(driver.id);
        own.sort_by_key(|a| a.slot.start);

        if !Self::has_required_break(&own, slot) {
            return false;
        }

        let worked: u32 = own.iter().map(|a| a.duration_minutes()).sum();
        worked + slot.duration_minutes() <= MAX_DAILY_MINUTES
    }
}
