//! Bus and driver rostering for one operating day.
//!
//! Assigns buses and drivers to timetabled route slots under resource
//! exclusivity and driver labor rules, and compares two strategies: a
//! deterministic greedy heuristic and a genetic-algorithm metaheuristic.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ServiceTime`, `TimeSlot`, `Bus`, `Driver`,
//!   `Route`, `Assignment`, `Schedule`
//! - **`rules`**: Driver availability rules per category
//! - **`scheduler`**: Greedy construction and scheduling outcomes
//! - **`ga`**: Genetic search seeded by the greedy scheduler
//! - **`report`**: Conflict counting and assignment listing
//! - **`validation`**: Input integrity checks (duplicate IDs, empty routes, bad slots)
//! - **`sample`**: Fixed demonstration network
//!
//! # Example
//!
//! ```
//! use u_transit::ga::{GeneticConfig, GeneticScheduler};
//! use u_transit::report::ConflictReport;
//! use u_transit::sample::{self, SampleConfig};
//! use u_transit::scheduler::GreedyScheduler;
//!
//! let request = sample::generate(&SampleConfig::default().with_route_count(2));
//!
//! let greedy = GreedyScheduler::from_request(&request).schedule();
//! assert!(ConflictReport::calculate(&greedy.schedule).driver_conflicts == 0);
//!
//! let config = GeneticConfig::default()
//!     .with_population_size(4)
//!     .with_generations(2)
//!     .with_seed(7);
//! let genetic = GeneticScheduler::from_config(&request, config).unwrap().run().unwrap();
//! assert_eq!(
//!     genetic.best.schedule.assignment_count(),
//!     greedy.schedule.assignment_count()
//! );
//! ```

pub mod error;
pub mod ga;
pub mod models;
pub mod report;
pub mod rules;
pub mod sample;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
