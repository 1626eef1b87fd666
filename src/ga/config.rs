//! Genetic search configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// How the initial population is built from greedy runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedingStrategy {
    /// Every individual is a plain greedy schedule (all identical).
    #[default]
    Deterministic,
    /// Every individual after the first gets one mutation pass at the
    /// configured rate. Lengths are unchanged, so crossover stays valid.
    Perturbed,
}

/// Genetic scheduler parameters.
///
/// # Example
///
/// ```
/// use u_transit::ga::{GeneticConfig, SeedingStrategy};
///
/// let config = GeneticConfig::default()
///     .with_population_size(20)
///     .with_generations(10)
///     .with_mutation_rate(0.1)
///     .with_seeding(SeedingStrategy::Perturbed)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneticConfig {
    /// Individuals per generation (default: 50).
    pub population_size: usize,
    /// Number of generations (default: 100).
    pub generations: usize,
    /// Per-assignment mutation probability in [0, 1] (default: 0.05).
    pub mutation_rate: f64,
    /// Individuals drawn per tournament (default: 5).
    pub tournament_size: usize,
    /// Initial population strategy.
    pub seeding: SeedingStrategy,
    /// RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.05,
            tournament_size: 5,
            seeding: SeedingStrategy::Deterministic,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, tournament_size: usize) -> Self {
        self.tournament_size = tournament_size;
        self
    }

    /// Sets the seeding strategy.
    pub fn with_seeding(mut self, seeding: SeedingStrategy) -> Self {
        self.seeding = seeding;
        self
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(ScheduleError::InvalidConfig(
                "population size must be positive".into(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(ScheduleError::InvalidConfig(
                "tournament size must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ScheduleError::InvalidConfig(format!(
                "mutation rate {} outside [0, 1]",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
