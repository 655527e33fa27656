use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use colored::*;
use csv::Writer;
use dotenv::dotenv;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info, span, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::ProgramArguments;
use crate::config::constant::{PARAMS_DIR, RESULTS_DIR, SEED};
use crate::distance::build_distance_matrix;
use crate::domain::types::{Configuration, Matrix, Solution};
use crate::error::ConfigError;
use crate::fixtures::data_generator::{generate_random_configuration, write_configuration};
use crate::setup::init::{list_sources, load_configuration, validate_configuration};
use crate::store::{ResultStore, SaveOutcome};
use crate::utils::{print_dist_matrix, print_solution, print_summary};

use super::construction::build_solution;
use super::pheromone::{initial_pheromones, update_pheromones};

/// One colony iteration: fresh demand copy, one route per vehicle, pheromone update.
pub fn run_iteration<R: Rng + ?Sized>(
    config: &Configuration,
    distance: &Matrix,
    pheromone: &mut Matrix,
    demand_template: &[f64],
    rng: &mut R,
) -> Solution {
    let mut demand = demand_template.to_vec();
    let solution = build_solution(config, distance, pheromone, &mut demand, rng);
    update_pheromones(pheromone, distance, &solution, config.rho);
    solution
}

/// Everything a run owns: the problem, both matrices, the demand template and the rng.
#[derive(Debug, Clone)]
pub struct ColonyContext<R: Rng> {
    config: Configuration,
    distance_matrix: Matrix,
    pheromone_matrix: Matrix,
    demand_template: Vec<f64>,
    rng: R,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best: Solution,
    pub best_iteration: usize,
    /// (iteration, total distance) every time the best solution changed.
    pub best_so_far_updates: Vec<(usize, f64)>,
    /// Demand the best solution leaves undelivered.
    pub unserved_demand: f64,
}

const UNSERVED_TOLERANCE: f64 = 1e-9;

impl SearchOutcome {
    pub fn serves_all_demand(&self) -> bool {
        self.unserved_demand <= UNSERVED_TOLERANCE
    }
}

/// Pairs of distinct locations that share coordinates.
pub fn zero_distance_pairs(distance: &Matrix) -> Vec<(usize, usize)> {
    let mut pairs = vec![];
    for (i, row) in distance.iter().enumerate() {
        for (j, d) in row.iter().enumerate().skip(i + 1) {
            if *d == 0.0 {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

impl ColonyContext<ChaCha8Rng> {
    pub fn seeded(config: Configuration, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> ColonyContext<R> {
    /// Validates the configuration and builds the immutable run state.
    pub fn new(config: Configuration, rng: R) -> Result<Self, ConfigError> {
        validate_configuration(&config)?;

        let distance_matrix = build_distance_matrix(&config.depot, &config.clients);
        for (i, j) in zero_distance_pairs(&distance_matrix) {
            warn!(
                "'{}' and '{}' share coordinates; routes cannot move between them",
                config.location_name(i),
                config.location_name(j)
            );
        }
        let pheromone_matrix = initial_pheromones(config.location_count());
        let demand_template = config.demand_template();

        Ok(ColonyContext {
            config,
            distance_matrix,
            pheromone_matrix,
            demand_template,
            rng,
        })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn distance_matrix(&self) -> &Matrix {
        &self.distance_matrix
    }

    pub fn pheromone_matrix(&self) -> &Matrix {
        &self.pheromone_matrix
    }

    pub fn demand_template(&self) -> &[f64] {
        &self.demand_template
    }

    pub fn step(&mut self) -> Solution {
        run_iteration(
            &self.config,
            &self.distance_matrix,
            &mut self.pheromone_matrix,
            &self.demand_template,
            &mut self.rng,
        )
    }

    /// Run every configured iteration and return the shortest solution seen.
    pub fn optimize(&mut self) -> SearchOutcome {
        let total_iterations = self.config.number_of_iterations;
        let loop_span = span!(Level::INFO, "main_search_loop", total_iterations);
        let _loop_guard = loop_span.enter();

        let mut best: Option<Solution> = None;
        let mut best_iteration = 0;
        let mut best_so_far_updates = vec![];

        for iteration in 1..=total_iterations {
            let solution = self.step();
            debug!(
                "Iteration {}: total distance {:.2}",
                iteration, solution.total_distance
            );

            let improved = match &best {
                None => true,
                Some(current) => solution.improves_on(current),
            };
            if improved {
                info!(
                    "New best at iteration {}: distance = {:.2}",
                    iteration, solution.total_distance
                );
                best_so_far_updates.push((iteration, solution.total_distance));
                best_iteration = iteration;
                best = Some(solution);
            }
        }

        let best = best.unwrap_or_else(|| Solution::from_routes(vec![]));
        info!(
            "Optimization complete. Best solution found at iteration {} ({:.2})",
            best_iteration, best.total_distance
        );

        let mut delivered = 0.0;
        for route in &best.routes {
            delivered += route.load;
        }
        let unserved_demand = (self.config.total_demand() - delivered).max(0.0);
        if unserved_demand > UNSERVED_TOLERANCE {
            warn!(
                "Best solution leaves {} of {} demand undelivered",
                unserved_demand,
                self.config.total_demand()
            );
        }

        SearchOutcome {
            best,
            best_iteration,
            best_so_far_updates,
            unserved_demand,
        }
    }
}

/// Initialize tracing and environment
fn init_tracing_and_env() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            fmt::layer()
                .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE)
                .pretty(),
        )
        .try_init()
        .context("failed to install the tracing subscriber")?;

    Ok(())
}

fn fatal(err: &ConfigError) -> ! {
    error!("{}", err);
    eprintln!("{}", format!("Error: {}", err).red());
    process::exit(1);
}

pub fn run() -> anyhow::Result<()> {
    init_tracing_and_env()?;
    let args = ProgramArguments::parse();

    let params_dir = PathBuf::from(args.params_dir.as_deref().unwrap_or(PARAMS_DIR));
    let results_dir = PathBuf::from(args.results_dir.as_deref().unwrap_or(RESULTS_DIR));
    let seed = args.seed.unwrap_or(SEED);

    if args.list {
        let sources = list_sources(&params_dir).unwrap_or_else(|e| fatal(&e));
        for source in sources {
            println!("{}", source.display());
        }
        return Ok(());
    }

    if let Some(client_count) = args.generate {
        let config = generate_random_configuration(client_count, args.vehicles, seed);
        let path = params_dir.join(format!("random-{}-{}.json", client_count, seed));
        write_configuration(&config, &path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let loaded = load_configuration(&params_dir, args.config.as_deref())
        .unwrap_or_else(|e| fatal(&e));
    let mut config = loaded.config;
    if let Some(iterations) = args.iterations {
        config.number_of_iterations = iterations;
    }

    info!(
        "Starting ACO solver on '{}' with {} clients, {} iterations, seed {}",
        loaded.name,
        config.clients.len(),
        config.number_of_iterations,
        seed
    );

    let mut colony = {
        let span = span!(Level::INFO, "setup");
        let _guard = span.enter();
        ColonyContext::seeded(config, seed).unwrap_or_else(|e| fatal(&e))
    };
    print_dist_matrix(colony.distance_matrix());

    let outcome = colony.optimize();

    print_solution(&outcome.best, colony.config());
    print_summary(&outcome.best, colony.config(), outcome.best_iteration);

    if let Some(history) = args.history.as_deref() {
        save_to_csv(&outcome.best_so_far_updates, history)
            .with_context(|| format!("failed to write history to {}", history))?;
    }

    if !outcome.serves_all_demand() {
        println!(
            "{}",
            format!(
                "Warning: {} demand left undelivered, result not saved",
                outcome.unserved_demand
            )
            .yellow()
        );
    } else if !args.no_save {
        let store = ResultStore::new(results_dir);
        let saved = store
            .save_if_better(&loaded.name, colony.config(), &outcome.best)
            .with_context(|| format!("failed to save result for '{}'", loaded.name))?;
        let message = match saved {
            SaveOutcome::Created => "Result saved".to_string(),
            SaveOutcome::Replaced => "Result saved (previous record was for another configuration)".to_string(),
            SaveOutcome::Improved => "Improved on the stored result".to_string(),
            SaveOutcome::Kept => "Stored result is at least as good, not overwritten".to_string(),
        };
        println!("{} -> {}", message, store.path_for(&loaded.name).display());
    }

    Ok(())
}

pub fn save_to_csv(best_so_far_updates: &[(usize, f64)], filename: &str) -> anyhow::Result<()> {
    let mut wtr = Writer::from_path(filename)?;

    wtr.write_record(["iteration", "best_total_distance"])?;

    for (iteration, value) in best_so_far_updates {
        wtr.write_record([iteration.to_string(), value.to_string()])?;
    }

    wtr.flush()?;
    info!("Wrote {} history rows to {}", best_so_far_updates.len(), filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Client, Location};
    use crate::evaluation::fitness::solution_distance;
    use crate::fixtures::data_generator::generate_random_configuration;

    fn small_config(iterations: usize) -> Configuration {
        let mut config = generate_random_configuration(8, 2, 5);
        config.number_of_iterations = iterations;
        config
    }

    #[test]
    fn single_iteration_is_reproducible() {
        let mut a = ColonyContext::seeded(small_config(1), 99).expect("valid");
        let mut b = ColonyContext::seeded(small_config(1), 99).expect("valid");
        let first = a.optimize();
        let second = b.optimize();
        assert_eq!(first.best, second.best);
        assert_eq!(a.pheromone_matrix(), b.pheromone_matrix());
    }

    #[test]
    fn demand_template_survives_iterations() {
        let mut colony = ColonyContext::seeded(small_config(5), 3).expect("valid");
        let template = colony.demand_template().to_vec();
        for _ in 0..5 {
            colony.step();
            assert_eq!(colony.demand_template(), template.as_slice());
        }
    }

    #[test]
    fn best_is_the_minimum_seen() {
        let config = small_config(25);
        let mut colony = ColonyContext::seeded(config.clone(), 17).expect("valid");
        let outcome = colony.optimize();

        let mut replay = ColonyContext::seeded(config, 17).expect("valid");
        let mut minimum = f64::INFINITY;
        for _ in 0..25 {
            minimum = minimum.min(replay.step().total_distance);
        }

        assert_eq!(outcome.best.total_distance, minimum);
        assert_eq!(outcome.best_so_far_updates.first().map(|u| u.0), Some(1));
        assert!(outcome
            .best_so_far_updates
            .windows(2)
            .all(|w| w[1].1 < w[0].1));
        let recomputed = solution_distance(&outcome.best, colony.distance_matrix());
        assert!((recomputed - outcome.best.total_distance).abs() < 1e-9);
    }

    #[test]
    fn pheromone_persists_between_iterations() {
        let mut colony = ColonyContext::seeded(small_config(2), 8).expect("valid");
        colony.step();
        let after_one = colony.pheromone_matrix().clone();
        assert!(after_one.iter().flatten().any(|p| *p != 1.0));
        colony.step();
        assert_ne!(colony.pheromone_matrix(), &after_one);
    }

    #[test]
    fn infeasible_configuration_never_starts() {
        let config = Configuration {
            number_of_vehicles: 1,
            vehicle_capacity: 4.0,
            depot: Location {
                name: "Depot".to_string(),
                x: 0.0,
                y: 0.0,
            },
            clients: vec![Client {
                name: "Heavy".to_string(),
                x: 1.0,
                y: 1.0,
                demand: 5.0,
            }],
            number_of_iterations: 10,
            alpha: 1.0,
            beta: 1.0,
            rho: 0.5,
        };
        assert!(matches!(
            ColonyContext::seeded(config, 1),
            Err(ConfigError::Infeasible { .. })
        ));
    }

    #[test]
    fn complete_runs_serve_all_demand() {
        let outcome = ColonyContext::seeded(small_config(10), 4)
            .expect("valid")
            .optimize();
        assert!(outcome.serves_all_demand());
        assert!(outcome.unserved_demand.abs() < 1e-9);
    }

    #[test]
    fn client_on_the_depot_is_reported_unserved() {
        let config = Configuration {
            number_of_vehicles: 1,
            vehicle_capacity: 10.0,
            depot: Location {
                name: "Depot".to_string(),
                x: 0.0,
                y: 0.0,
            },
            clients: vec![Client {
                name: "Stacked".to_string(),
                x: 0.0,
                y: 0.0,
                demand: 5.0,
            }],
            number_of_iterations: 3,
            alpha: 1.0,
            beta: 1.0,
            rho: 0.5,
        };
        let mut colony = ColonyContext::seeded(config, 1).expect("valid");
        assert_eq!(zero_distance_pairs(colony.distance_matrix()), vec![(0, 1)]);

        let outcome = colony.optimize();
        assert_eq!(outcome.best.total_distance, 0.0);
        assert_eq!(outcome.unserved_demand, 5.0);
        assert!(!outcome.serves_all_demand());
    }
}
