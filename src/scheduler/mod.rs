//! Greedy construction and scheduling outcomes.
//!
//! # Algorithm
//!
//! [`GreedyScheduler`] scans routes in first-departure order and commits the
//! first feasible bus/driver pair for every slot. It is deterministic and
//! fast, and also seeds the genetic search in [`crate::ga`].
//!
//! # Outcome
//!
//! Every scheduler returns a [`SchedulingOutcome`]: the schedule plus a
//! [`Coverage`] that lists any slot left without a bus or driver.

mod greedy;
mod outcome;

pub use greedy::{GreedyScheduler, ScheduleRequest};
pub use outcome::{Coverage, SchedulingOutcome, SlotRef};
