//! GA-based rostering.
//!
//! Evolves greedy-seeded schedules with tournament selection, single-point
//! crossover, and random driver/bus substitution.
//!
//! # Encoding
//!
//! A chromosome is the schedule's flat assignment list. Genes are
//! positional, so all individuals must have equal length; the default
//! seeding produces identical greedy schedules, and
//! [`SeedingStrategy::Perturbed`] diversifies them without changing length.
//!
//! # Submodules
//!
//! - [`operators`]: selection, crossover, and mutation functions

mod chromosome;
mod config;
pub mod operators;
mod scheduler;

pub use chromosome::{evaluate_fitness, fittest, ScheduleChromosome};
pub use config::{GeneticConfig, SeedingStrategy};
pub use scheduler::{GeneticOutcome, GeneticScheduler};
