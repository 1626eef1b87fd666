//! Genetic scheduler.
//!
//! Seeds a population with greedy schedules, then evolves it by tournament
//! selection, single-point crossover, and per-gene mutation. The fittest
//! individual of the final population is returned together with the
//! coverage of its greedy seed.
//!
//! All randomness flows through the injected generator, so a seeded
//! generator gives a reproducible run.

use log::{debug, trace, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::chromosome::{fittest, ScheduleChromosome};
use super::config::{GeneticConfig, SeedingStrategy};
use super::operators::{mutate, single_point_crossover, tournament_select};
use crate::error::{Result, ScheduleError};
use crate::models::Schedule;
use crate::scheduler::{GreedyScheduler, ScheduleRequest, SchedulingOutcome};

/// Result of a genetic run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneticOutcome {
    /// Best schedule of the final population, with its coverage.
    pub best: SchedulingOutcome,
    /// Fitness of `best`.
    pub best_fitness: usize,
    /// Generations evolved.
    pub generations: usize,
    /// Best fitness of each population, starting with the initial one.
    pub fitness_history: Vec<usize>,
}

/// Population-based scheduler seeded by [`GreedyScheduler`].
///
/// # Example
///
/// ```
/// use u_transit::ga::{GeneticConfig, GeneticScheduler};
/// use u_transit::models::{Bus, Driver, Route, ServiceTime, TimeSlot};
/// use u_transit::scheduler::ScheduleRequest;
///
/// let slot = TimeSlot::new(ServiceTime::hm(6, 0), ServiceTime::hm(7, 10), false);
/// let request = ScheduleRequest::new(
///     vec![Bus::new(1)],
///     vec![Driver::category_a(1)],
///     vec![Route::new(1).with_slot(slot)],
/// );
/// let config = GeneticConfig::default()
///     .with_population_size(4)
///     .with_generations(3)
///     .with_seed(42);
///
/// let mut ga = GeneticScheduler::from_config(&request, config).unwrap();
/// let outcome = ga.run().unwrap();
/// assert_eq!(outcome.best.schedule.assignment_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticScheduler<R: Rng> {
    request: ScheduleRequest,
    config: GeneticConfig,
    rng: R,
}

impl GeneticScheduler<SmallRng> {
    /// Creates a scheduler with a [`SmallRng`] seeded from `config.seed`,
    /// or from the OS when no seed is set.
    pub fn from_config(request: &ScheduleRequest, config: GeneticConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::new(request, config, rng)
    }
}

impl<R: Rng> GeneticScheduler<R> {
    /// Creates a scheduler on private clones of `request`.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidConfig`] if `config` is out of range.
    pub fn new(request: &ScheduleRequest, config: GeneticConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            request: request.clone(),
            config,
            rng,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Runs the search to completion.
    ///
    /// # Errors
    /// Propagates operator precondition violations:
    /// [`ScheduleError::MismatchedParentLength`] and
    /// [`ScheduleError::EmptyResourcePool`].
    pub fn run(&mut self) -> Result<GeneticOutcome> {
        let seed = GreedyScheduler::from_request(&self.request).schedule();
        let mut population = self.initial_population(&seed.schedule)?;
        let mut fitness_history = vec![best_fitness(&population)];

        for generation in 0..self.config.generations {
            population = self.next_generation(&population)?;
            let best = best_fitness(&population);
            trace!("generation {}: best fitness {}", generation + 1, best);
            fitness_history.push(best);
        }

        let best = fittest(&population)
            .cloned()
            .ok_or_else(|| ScheduleError::InvalidConfig("empty population".into()))?;

        debug!(
            "genetic: {} generations, best fitness {}/{} assignments",
            self.config.generations,
            best.fitness,
            best.len()
        );

        // Genes keep their route slot, so the seed's coverage still holds
        Ok(GeneticOutcome {
            best_fitness: best.fitness,
            best: SchedulingOutcome {
                schedule: best.schedule,
                coverage: seed.coverage,
            },
            generations: self.config.generations,
            fitness_history,
        })
    }

    /// Clones of the greedy `seed`, perturbed per the seeding strategy.
    fn initial_population(&mut self, seed: &Schedule) -> Result<Vec<ScheduleChromosome>> {
        if self.config.seeding == SeedingStrategy::Deterministic && self.config.population_size > 1
        {
            warn!(
                "deterministic seeding: all {} initial individuals are identical",
                self.config.population_size
            );
        }

        let mut population = Vec::with_capacity(self.config.population_size);
        for i in 0..self.config.population_size {
            let individual = match self.config.seeding {
                SeedingStrategy::Perturbed if i > 0 => mutate(
                    seed,
                    &self.request.buses,
                    &self.request.drivers,
                    self.config.mutation_rate,
                    &mut self.rng,
                )?,
                _ => seed.clone(),
            };
            population.push(ScheduleChromosome::new(individual));
        }
        Ok(population)
    }

    /// Selection and crossover for every slot, then mutation of all children.
    fn next_generation(
        &mut self,
        population: &[ScheduleChromosome],
    ) -> Result<Vec<ScheduleChromosome>> {
        let mut children = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size {
            let p1 = self.select(population)?;
            let p2 = self.select(population)?;
            children.push(single_point_crossover(&p1.schedule, &p2.schedule, &mut self.rng)?);
        }

        children
            .iter()
            .map(|child| {
                mutate(
                    child,
                    &self.request.buses,
                    &self.request.drivers,
                    self.config.mutation_rate,
                    &mut self.rng,
                )
                .map(ScheduleChromosome::new)
            })
            .collect()
    }

    fn select<'a>(
        &mut self,
        population: &'a [ScheduleChromosome],
    ) -> Result<&'a ScheduleChromosome> {
        tournament_select(population, self.config.tournament_size, &mut self.rng)
            .ok_or_else(|| ScheduleError::InvalidConfig("empty population".into()))
    }
}

fn best_fitness(population: &[ScheduleChromosome]) -> usize {
    fittest(population).map_or(0, |c| c.fitness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::evaluate_fitness;
    use crate::models::{Bus, Driver, Route, ServiceTime, TimeSlot};

    fn slot_at(start_min: u32) -> TimeSlot {
        let start = ServiceTime::from_minutes(start_min);
        TimeSlot::new(start, start.plus_minutes(70), false)
    }

    fn make_request() -> ScheduleRequest {
        let routes = (1..=3)
            .map(|id| Route::new(id).with_slots((0..6).map(|i| slot_at(360 + i * 70)).collect()))
            .collect();
        ScheduleRequest::new(
            vec![Bus::new(1), Bus::new(2), Bus::new(3)],
            vec![
                Driver::category_a(1),
                Driver::category_a(2),
                Driver::category_b(11),
                Driver::category_b(12),
            ],
            routes,
        )
    }

    #[test]
    fn test_invalid_config_rejected() {
        let request = make_request();
        let config = GeneticConfig::default().with_population_size(0);
        assert!(GeneticScheduler::from_config(&request, config).is_err());
    }

    #[test]
    fn test_zero_generations_returns_greedy() {
        let request = make_request();
        let greedy = GreedyScheduler::from_request(&request).schedule();
        let config = GeneticConfig::default()
            .with_population_size(3)
            .with_generations(0)
            .with_seed(1);

        let outcome = GeneticScheduler::from_config(&request, config)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(outcome.best, greedy);
        assert_eq!(outcome.fitness_history.len(), 1);
        assert_eq!(outcome.generations, 0);
    }

    #[test]
    fn test_without_mutation_stays_conflict_free() {
        // Identical parents cross over into themselves
        let request = make_request();
        let greedy = GreedyScheduler::from_request(&request).schedule();
        let config = GeneticConfig::default()
            .with_population_size(6)
            .with_generations(5)
            .with_mutation_rate(0.0)
            .with_seed(3);

        let outcome = GeneticScheduler::from_config(&request, config)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(outcome.best.schedule, greedy.schedule);
        assert_eq!(outcome.best_fitness, greedy.schedule.assignment_count());
    }

    #[test]
    fn test_length_preserved_and_fitness_bounded() {
        let request = make_request();
        let expected_len = GreedyScheduler::from_request(&request)
            .schedule()
            .schedule
            .assignment_count();
        let config = GeneticConfig::default()
            .with_population_size(8)
            .with_generations(10)
            .with_mutation_rate(0.3)
            .with_seeding(SeedingStrategy::Perturbed)
            .with_seed(42);

        let outcome = GeneticScheduler::from_config(&request, config)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(outcome.best.schedule.assignment_count(), expected_len);
        assert!(outcome.best_fitness <= expected_len);
        assert_eq!(outcome.best_fitness, evaluate_fitness(&outcome.best.schedule));
        assert_eq!(outcome.fitness_history.len(), 11);
    }

    #[test]
    fn test_seeded_runs_reproducible() {
        let request = make_request();
        let config = GeneticConfig::default()
            .with_population_size(6)
            .with_generations(8)
            .with_mutation_rate(0.2)
            .with_seed(99);

        let a = GeneticScheduler::from_config(&request, config.clone())
            .unwrap()
            .run()
            .unwrap();
        let b = GeneticScheduler::from_config(&request, config)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_injected_rng() {
        let request = make_request();
        let config = GeneticConfig::default()
            .with_population_size(4)
            .with_generations(2);
        let mut ga = GeneticScheduler::new(&request, config, SmallRng::seed_from_u64(5)).unwrap();
        let outcome = ga.run().unwrap();
        assert!(outcome.best_fitness <= outcome.best.schedule.assignment_count());
    }

    #[test]
    fn test_empty_request() {
        let request = ScheduleRequest::default();
        let config = GeneticConfig::default()
            .with_population_size(3)
            .with_generations(2)
            .with_seed(1);
        let outcome = GeneticScheduler::from_config(&request, config)
            .unwrap()
            .run()
            .unwrap();
        assert!(outcome.best.schedule.is_empty());
        assert!(outcome.best.is_fully_scheduled());
        assert_eq!(outcome.best_fitness, 0);
    }

    fn ga_for(request: &ScheduleRequest, config: GeneticConfig) -> GeneticScheduler<SmallRng> {
        GeneticScheduler::from_config(request, config).unwrap()
    }

    #[test]
    fn test_zero_generations_keeps_greedy_route_order() {
        // Routes out of departure order and no buses: every slot unfilled
        let request = ScheduleRequest::new(
            Vec::new(),
            vec![Driver::category_a(1)],
            vec![
                Route::new(1).with_slot(slot_at(540)),
                Route::new(2).with_slot(slot_at(360)),
            ],
        );
        let greedy = GreedyScheduler::from_request(&request).schedule();
        let config = GeneticConfig::default()
            .with_population_size(2)
            .with_generations(0)
            .with_seed(1);

        let outcome = ga_for(&request, config).run().unwrap();
        let order: Vec<_> = outcome.best.coverage.unfilled().iter().map(|s| s.route_id).collect();
        assert_eq!(order, vec![2, 1]);
        assert_eq!(outcome.best, greedy);
    }

    #[test]
    fn test_repeated_slot_stays_unfilled() {
        // Same times listed twice: one bus serves only the first copy
        let request = ScheduleRequest::new(
            vec![Bus::new(1)],
            vec![Driver::category_a(1), Driver::category_a(2)],
            vec![Route::new(1).with_slot(slot_at(360)).with_slot(slot_at(360))],
        );
        let greedy = GreedyScheduler::from_request(&request).schedule();
        assert_eq!(greedy.coverage.unfilled()[0].index, 1);

        let config = GeneticConfig::default()
            .with_population_size(2)
            .with_generations(0)
            .with_seed(1);
        let outcome = ga_for(&request, config).run().unwrap();
        assert!(!outcome.best.is_fully_scheduled());
        assert_eq!(outcome.best, greedy);

        let config = GeneticConfig::default()
            .with_population_size(4)
            .with_generations(3)
            .with_mutation_rate(0.5)
            .with_seeding(SeedingStrategy::Perturbed)
            .with_seed(8);
        let outcome = ga_for(&request, config).run().unwrap();
        assert_eq!(outcome.best.coverage, greedy.coverage);
    }

    #[test]
    fn test_perturbed_seeding_diversifies() {
        let request = make_request();
        let greedy = GreedyScheduler::from_request(&request).schedule().schedule;
        let config = GeneticConfig::default()
            .with_population_size(4)
            .with_mutation_rate(1.0)
            .with_seeding(SeedingStrategy::Perturbed)
            .with_seed(42);

        let population = ga_for(&request, config).initial_population(&greedy).unwrap();
        assert_eq!(population.len(), 4);
        assert_eq!(population[0].schedule, greedy);
        assert!(population[1..].iter().any(|c| c.schedule != greedy));
        assert!(population
            .iter()
            .all(|c| c.len() == greedy.assignment_count()));
    }

    #[test]
    fn test_deterministic_seeding_clones_greedy() {
        let request = make_request();
        let greedy = GreedyScheduler::from_request(&request).schedule().schedule;
        let config = GeneticConfig::default()
            .with_population_size(3)
            .with_mutation_rate(1.0)
            .with_seed(42);

        let population = ga_for(&request, config).initial_population(&greedy).unwrap();
        assert!(population.iter().all(|c| c.schedule == greedy));
    }
}
