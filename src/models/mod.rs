//! Rostering domain models.
//!
//! Provides the data types for one operating day: the resource pool
//! (buses, drivers), the timetable (routes made of time slots), and the
//! solution (a schedule of assignments).
//!
//! # Lifecycle
//!
//! Buses, drivers, and routes are built once per run and read-only during
//! scheduling. Assignments live only inside the [`Schedule`] that holds
//! them.

mod resource;
mod route;
mod schedule;
mod time_slot;

pub use resource::{Bus, BusId, Driver, DriverCategory, DriverId};
pub use route::{Route, RouteId};
pub use schedule::{Assignment, Schedule};
pub use time_slot::{ServiceTime, TimeSlot, MINUTES_PER_DAY};
