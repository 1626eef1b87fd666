//! Deterministic greedy construction.
//!
//! # Algorithm
//!
//! 1. Order routes by the start of their first slot (stable; routes with
//!    no slots go last).
//! 2. For each route, walk its slots in timetable order.
//! 3. Pick the first bus (input order) with no overlapping commitment.
//! 4. Pick the first feasible driver, Category A drivers before Category B
//!    (stable within a category).
//! 5. Commit if both exist; otherwise record the slot as unfilled.
//!
//! # Complexity
//! O(r * s * (b + d) * n) where r=routes, s=slots/route, b=buses,
//! d=drivers, n=assignments committed so far.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::{Coverage, SchedulingOutcome, SlotRef};
use crate::models::{Assignment, Bus, Driver, Route, Schedule, TimeSlot};
use crate::rules::is_driver_feasible;
use crate::validation::{self, ValidationResult};

/// Input resource pool and timetable for one run.
///
/// Schedulers take their own clones, so one request can feed several
/// independent runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Available buses, in preference order.
    pub buses: Vec<Bus>,
    /// Available drivers, in preference order within a category.
    pub drivers: Vec<Driver>,
    /// Routes to serve.
    pub routes: Vec<Route>,
}

impl ScheduleRequest {
    /// Creates a request.
    pub fn new(buses: Vec<Bus>, drivers: Vec<Driver>, routes: Vec<Route>) -> Self {
        Self {
            buses,
            drivers,
            routes,
        }
    }

    /// Total number of route slots demanded.
    pub fn demanded_slots(&self) -> usize {
        self.routes.iter().map(Route::slot_count).sum()
    }

    /// Runs input validation on this request.
    pub fn validate(&self) -> ValidationResult {
        validation::validate_input(&self.buses, &self.drivers, &self.routes)
    }
}

/// Greedy first-fit scheduler.
///
/// # Example
///
/// ```
/// use u_transit::models::{Bus, Driver, Route, ServiceTime, TimeSlot};
/// use u_transit::scheduler::{GreedyScheduler, ScheduleRequest};
///
/// let slot = TimeSlot::new(ServiceTime::hm(6, 0), ServiceTime::hm(7, 10), false);
/// let request = ScheduleRequest::new(
///     vec![Bus::new(1)],
///     vec![Driver::category_a(1), Driver::category_a(2)],
///     vec![Route::new(1).with_slot(slot)],
/// );
///
/// let outcome = GreedyScheduler::from_request(&request).schedule();
/// assert_eq!(outcome.schedule.assignment_count(), 1);
/// assert!(outcome.is_fully_scheduled());
/// ```
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    buses: Vec<Bus>,
    drivers: Vec<Driver>,
    routes: Vec<Route>,
}

impl GreedyScheduler {
    /// Creates a scheduler owning its inputs.
    pub fn new(buses: Vec<Bus>, drivers: Vec<Driver>, routes: Vec<Route>) -> Self {
        Self {
            buses,
            drivers,
            routes,
        }
    }

    /// Creates a scheduler on private clones of a request.
    pub fn from_request(request: &ScheduleRequest) -> Self {
        Self::new(
            request.buses.clone(),
            request.drivers.clone(),
            request.routes.clone(),
        )
    }

    /// Builds one schedule. Never fails; unmet demand shows up in
    /// [`SchedulingOutcome::coverage`].
    pub fn schedule(&self) -> SchedulingOutcome {
        let mut schedule = Schedule::new();
        let mut unfilled = Vec::new();
        let driver_order = self.driver_order();

        for &route_idx in &self.route_order() {
            let route = &self.routes[route_idx];
            for (index, slot) in route.slots.iter().enumerate() {
                let bus = self.find_bus(&schedule, slot);
                let driver = bus.and_then(|_| self.find_driver(&driver_order, &schedule, slot));

                match (bus, driver) {
                    (Some(bus), Some(driver)) => {
                        schedule.add_assignment(Assignment::new(*driver, *bus, route.id, *slot));
                    }
                    _ => {
                        trace!(
                            "route {} slot {} unfilled (bus: {}, driver: {})",
                            route.id,
                            slot,
                            bus.is_some(),
                            driver.is_some()
                        );
                        unfilled.push(SlotRef {
                            route_id: route.id,
                            index,
                            slot: *slot,
                        });
                    }
                }
            }
        }

        debug!(
            "greedy: {} assignments, {} unfilled slots",
            schedule.assignment_count(),
            unfilled.len()
        );

        SchedulingOutcome {
            schedule,
            coverage: Coverage::from_unfilled(unfilled),
        }
    }

    /// Route indices by first-slot start; empty routes last.
    fn route_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.routes.len()).collect();
        order.sort_by_key(|&i| {
            let first = self.routes[i].first_start();
            (first.is_none(), first)
        });
        order
    }

    /// Driver indices with Category A first.
    fn driver_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.drivers.len()).collect();
        order.sort_by_key(|&i| self.drivers[i].category);
        order
    }

    fn find_bus(&self, schedule: &Schedule, slot: &TimeSlot) -> Option<&Bus> {
        self.buses.iter().find(|bus| !schedule.is_bus_busy(bus, slot))
    }

    fn find_driver(
        &self,
        order: &[usize],
        schedule: &Schedule,
        slot: &TimeSlot,
    ) -> Option<&Driver> {
        order
            .iter()
            .map(|&i| &self.drivers[i])
            .find(|driver| is_driver_feasible(driver, schedule, slot))
    }
}
