//! Genetic operators on assignment-list chromosomes.
//!
//! - [`tournament_select`]: k-way tournament, draws with replacement
//! - [`single_point_crossover`]: positional head/tail exchange
//! - [`mutate`]: per-gene driver or bus substitution
//!
//! Operators never edit their inputs; they always build a new schedule.
//! Mutation performs no feasibility check and may introduce conflicts.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::chromosome::{fittest, ScheduleChromosome};
use crate::error::{Result, ScheduleError};
use crate::models::{Bus, Driver, Schedule};

/// Draws `size` individuals uniformly with replacement and returns the
/// fittest (earliest draw wins ties).
///
/// Returns `None` if the population is empty or `size` is zero.
pub fn tournament_select<'a, R: Rng>(
    population: &'a [ScheduleChromosome],
    size: usize,
    rng: &mut R,
) -> Option<&'a ScheduleChromosome> {
    if population.is_empty() {
        return None;
    }
    let drawn: Vec<&ScheduleChromosome> = (0..size)
        .map(|_| &population[rng.random_range(0..population.len())])
        .collect();
    fittest(drawn)
}

/// Single-point crossover over the flat assignment lists.
///
/// Picks a split index uniformly in `[0, len)`; the child takes genes
/// before it from `p1` and the rest from `p2`.
///
/// # Errors
/// [`ScheduleError::MismatchedParentLength`] if the parents differ in length.
pub fn single_point_crossover<R: Rng>(
    p1: &Schedule,
    p2: &Schedule,
    rng: &mut R,
) -> Result<Schedule> {
    let len = p1.assignment_count();
    if len != p2.assignment_count() {
        return Err(ScheduleError::MismatchedParentLength {
            left: len,
            right: p2.assignment_count(),
        });
    }
    if len == 0 {
        return Ok(Schedule::new());
    }

    let point = rng.random_range(0..len);
    let genes = p1.assignments()[..point]
        .iter()
        .chain(&p2.assignments()[point..])
        .copied()
        .collect();
    Ok(Schedule::from_assignments(genes))
}

/// Replaces each gene with probability `rate`.
///
/// A fair coin picks whether the replacement gets a random driver from
/// `drivers` or a random bus from `buses`; route and slot are kept.
///
/// # Errors
/// [`ScheduleError::EmptyResourcePool`] if a gene must be mutated and the
/// chosen pool is empty.
pub fn mutate<R: Rng>(
    schedule: &Schedule,
    buses: &[Bus],
    drivers: &[Driver],
    rate: f64,
    rng: &mut R,
) -> Result<Schedule> {
    let genes = schedule
        .assignments()
        .iter()
        .map(|gene| {
            if rng.random::<f64>() >= rate {
                return Ok(*gene);
            }
            if rng.random_bool(0.5) {
                let driver = drivers
                    .choose(rng)
                    .ok_or(ScheduleError::EmptyResourcePool("driver"))?;
                Ok(gene.with_driver(*driver))
            } else {
                let bus = buses
                    .choose(rng)
                    .ok_or(ScheduleError::EmptyResourcePool("bus"))?;
                Ok(gene.with_bus(*bus))
            }
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Schedule::from_assignments(genes))
}
