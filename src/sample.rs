//! Sample network generation.
//!
//! Builds the fixed demonstration data set: a bus fleet, two groups of
//! drivers (Category A then Category B), and identical routes with slots on
//! a fixed cadence from the first departure until the operating window is
//! used up.

use serde::{Deserialize, Serialize};

use crate::models::{Bus, Driver, Route, ServiceTime, TimeSlot};
use crate::scheduler::ScheduleRequest;

/// A peak-hour window `[start, end)` on the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakWindow {
    /// Window start (inclusive).
    pub start: ServiceTime,
    /// Window end (exclusive).
    pub end: ServiceTime,
}

impl PeakWindow {
    /// Creates a window.
    pub fn new(start: ServiceTime, end: ServiceTime) -> Self {
        Self { start, end }
    }

    /// Whether `time`, wrapped to the wall clock, lies in the window.
    pub fn contains(&self, time: ServiceTime) -> bool {
        let minute = time.minute_of_day();
        minute >= self.start.minutes() && minute < self.end.minutes()
    }
}

/// Sample network parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Buses, numbered from 1 (default: 8).
    pub bus_count: u32,
    /// Category A drivers, numbered first (default: 10).
    pub category_a_drivers: u32,
    /// Category B drivers, numbered after Category A (default: 10).
    pub category_b_drivers: u32,
    /// Routes, numbered from 1 (default: 10).
    pub route_count: u32,
    /// First departure of every route (default: 06:00).
    pub first_departure: ServiceTime,
    /// Slot length in minutes (default: 70).
    pub slot_minutes: u32,
    /// Operating window in minutes (default: 21 hours).
    pub operating_minutes: u32,
    /// Peak-hour windows (default: 07:00-09:00 and 17:00-19:00).
    pub peak_windows: Vec<PeakWindow>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            bus_count: 8,
            category_a_drivers: 10,
            category_b_drivers: 10,
            route_count: 10,
            first_departure: ServiceTime::hm(6, 0),
            slot_minutes: 70,
            operating_minutes: 21 * 60,
            peak_windows: vec![
                PeakWindow::new(ServiceTime::hm(7, 0), ServiceTime::hm(9, 0)),
                PeakWindow::new(ServiceTime::hm(17, 0), ServiceTime::hm(19, 0)),
            ],
        }
    }
}

impl SampleConfig {
    /// Sets the bus count.
    pub fn with_bus_count(mut self, bus_count: u32) -> Self {
        self.bus_count = bus_count;
        self
    }

    /// Sets both driver group sizes.
    pub fn with_drivers(mut self, category_a: u32, category_b: u32) -> Self {
        self.category_a_drivers = category_a;
        self.category_b_drivers = category_b;
        self
    }

    /// Sets the route count.
    pub fn with_route_count(mut self, route_count: u32) -> Self {
        self.route_count = route_count;
        self
    }

    /// Whether a departure falls in any peak window.
    pub fn is_peak(&self, time: ServiceTime) -> bool {
        self.peak_windows.iter().any(|w| w.contains(time))
    }

    /// The slot timetable shared by every route.
    pub fn timetable(&self) -> Vec<TimeSlot> {
        let mut slots = Vec::new();
        if self.slot_minutes == 0 {
            return slots;
        }
        let mut start = self.first_departure;
        let mut elapsed = 0;
        while elapsed < self.operating_minutes {
            let end = start.plus_minutes(self.slot_minutes);
            slots.push(TimeSlot::new(start, end, self.is_peak(start)));
            start = end;
            elapsed += self.slot_minutes;
        }
        slots
    }
}

/// Generates the sample request.
pub fn generate(config: &SampleConfig) -> ScheduleRequest {
    let buses = (1..=config.bus_count).map(Bus::new).collect();

    let a_last = config.category_a_drivers;
    let drivers = (1..=a_last)
        .map(Driver::category_a)
        .chain((a_last + 1..=a_last + config.category_b_drivers).map(Driver::category_b))
        .collect();

    let timetable = config.timetable();
    let routes = (1..=config.route_count)
        .map(|id| Route::new(id).with_slots(timetable.clone()))
        .collect();

    ScheduleRequest::new(buses, drivers, routes)
}
