//! Flat assignment-list chromosome.
//!
//! # Encoding
//!
//! A chromosome is a [`Schedule`] read as a flat list of assignments.
//! Genes are positional: crossover exchanges tails by index, mutation
//! replaces single genes. Route and slot of a gene never change.
//!
//! # Fitness
//!
//! Higher is better. The score counts assignments whose driver is not
//! double-booked anywhere else in the schedule. Bus overlaps do not lower
//! fitness; they show up only in
//! [`ConflictReport`](crate::report::ConflictReport).

use crate::models::Schedule;

/// A schedule with its cached fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleChromosome {
    /// Decoded schedule.
    pub schedule: Schedule,
    /// Cached [`evaluate_fitness`] of `schedule`.
    pub fitness: usize,
}

impl ScheduleChromosome {
    /// Wraps a schedule, evaluating its fitness.
    pub fn new(schedule: Schedule) -> Self {
        let fitness = evaluate_fitness(&schedule);
        Self { schedule, fitness }
    }

    /// Number of genes (assignments).
    pub fn len(&self) -> usize {
        self.schedule.assignment_count()
    }

    /// Whether the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}

/// Counts assignments with no driver overlap against any other assignment.
///
/// Pairwise scan, O(n²). Always within `0..=assignment_count`.
pub fn evaluate_fitness(schedule: &Schedule) -> usize {
    let genes = schedule.assignments();
    genes
        .iter()
        .enumerate()
        .filter(|&(i, a)| {
            !genes
                .iter()
                .enumerate()
                .any(|(j, b)| i != j && a.driver_clashes_with(b))
        })
        .count()
}

/// The fittest chromosome; ties go to the earliest.
pub fn fittest<'a, I>(candidates: I) -> Option<&'a ScheduleChromosome>
where
    I: IntoIterator<Item = &'a ScheduleChromosome>,
{
    candidates
        .into_iter()
        .fold(None, |best: Option<&ScheduleChromosome>, c| match best {
            Some(b) if b.fitness >= c.fitness => Some(b),
            _ => Some(c),
        })
}
