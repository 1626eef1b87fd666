#![forbid(unsafe_code)]
use std::time::Instant;

use anyhow::{bail, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use serde_json::json;

use u_transit::ga::{GeneticConfig, GeneticScheduler, SeedingStrategy};
use u_transit::report::{render_assignments, ConflictReport};
use u_transit::sample::{self, SampleConfig};
use u_transit::scheduler::{GreedyScheduler, SchedulingOutcome};

#[derive(Debug, Parser)]
/// Compare greedy and genetic bus/driver rostering on the sample network
struct App {
    #[clap(flatten)]
    verbose: Verbosity,

    /// Number of buses in the fleet
    #[arg(long, default_value_t = 8)]
    buses: u32,

    /// Number of routes
    #[arg(long, default_value_t = 10)]
    routes: u32,

    /// Genetic population size
    #[arg(long, default_value_t = 50)]
    population: usize,

    /// Genetic generation count
    #[arg(long, default_value_t = 100)]
    generations: usize,

    /// Per-assignment mutation probability
    #[arg(long, default_value_t = 0.05)]
    mutation_rate: f64,

    /// RNG seed for a reproducible genetic run
    #[arg(long)]
    seed: Option<u64>,

    /// Diversify the initial population with a mutation pass
    #[arg(long)]
    perturbed: bool,

    /// Emit a JSON document instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args: App = App::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    debug!("{args:?}");

    let request = sample::generate(
        &SampleConfig::default()
            .with_bus_count(args.buses)
            .with_route_count(args.routes),
    );
    if let Err(errors) = request.validate() {
        for e in &errors {
            log::error!("{e}");
        }
        bail!("sample network failed validation ({} errors)", errors.len());
    }
    info!(
        "{} buses, {} drivers, {} routes, {} slots",
        request.buses.len(),
        request.drivers.len(),
        request.routes.len(),
        request.demanded_slots()
    );

    let started = Instant::now();
    let greedy = GreedyScheduler::from_request(&request).schedule();
    let greedy_ms = started.elapsed().as_millis();

    let mut config = GeneticConfig::default()
        .with_population_size(args.population)
        .with_generations(args.generations)
        .with_mutation_rate(args.mutation_rate);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.perturbed {
        config = config.with_seeding(SeedingStrategy::Perturbed);
    }

    let started = Instant::now();
    let genetic = GeneticScheduler::from_config(&request, config)?.run()?;
    let genetic_ms = started.elapsed().as_millis();

    let greedy_report = ConflictReport::calculate(&greedy.schedule);
    let genetic_report = ConflictReport::calculate(&genetic.best.schedule);

    if args.json {
        let doc = json!({
            "greedy": {
                "elapsed_ms": greedy_ms,
                "outcome": greedy,
                "conflicts": greedy_report,
            },
            "genetic": {
                "elapsed_ms": genetic_ms,
                "outcome": genetic.best,
                "fitness": genetic.best_fitness,
                "fitness_history": genetic.fitness_history,
                "conflicts": genetic_report,
            },
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    print_summary("Greedy", greedy_ms, &greedy);
    print_summary("Genetic", genetic_ms, &genetic.best);
    print_assignments("greedy", &greedy);
    print_assignments("genetic", &genetic.best);

    println!();
    println!("Greedy conflicts: {}", greedy_report.total());
    println!("Genetic conflicts: {}", genetic_report.total());

    Ok(())
}

fn print_summary(name: &str, elapsed_ms: u128, outcome: &SchedulingOutcome) {
    println!("{name} algorithm:");
    println!("  elapsed: {elapsed_ms} ms");
    println!("  assignments: {}", outcome.schedule.assignment_count());
    println!("  unfilled slots: {}", outcome.coverage.unfilled().len());
    println!();
}

fn print_assignments(name: &str, outcome: &SchedulingOutcome) {
    println!();
    println!("Assignments of the {name} algorithm:");
    for line in render_assignments(&outcome.schedule) {
        println!("{line}");
    }
}
