use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::constant::{DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_ITERATIONS, DEFAULT_RHO};
use crate::domain::types::{Client, Configuration, Location};

const GRID_SIZE: i32 = 100;
const MAX_DEMAND: u32 = 20;
const CAPACITY_SLACK: f64 = 5.0;

/// Generates a feasible random instance on an integer grid, depot in the middle.
/// Client positions are unique and never coincide with the depot.
pub fn generate_random_configuration(
    client_count: usize,
    vehicle_count: usize,
    seed: u64,
) -> Configuration {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let depot = (GRID_SIZE / 2, GRID_SIZE / 2);
    let vehicle_count = vehicle_count.max(1);
    let client_count = client_count.min((GRID_SIZE * GRID_SIZE) as usize - 1);

    let mut taken: HashSet<(i32, i32)> = HashSet::new();
    taken.insert(depot);

    let mut clients = Vec::with_capacity(client_count);
    while clients.len() < client_count {
        let pos = (rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
        if !taken.insert(pos) {
            continue;
        }
        clients.push(Client {
            name: format!("Client {}", clients.len() + 1),
            x: pos.0 as f64,
            y: pos.1 as f64,
            demand: rng.gen_range(1..=MAX_DEMAND) as f64,
        });
    }

    let mut total = 0.0;
    for c in &clients {
        total += c.demand;
    }
    let vehicle_capacity = (total / vehicle_count as f64).ceil() + CAPACITY_SLACK;

    Configuration {
        number_of_vehicles: vehicle_count,
        vehicle_capacity,
        depot: Location {
            name: "Depot".to_string(),
            x: depot.0 as f64,
            y: depot.1 as f64,
        },
        clients,
        number_of_iterations: DEFAULT_ITERATIONS,
        alpha: DEFAULT_ALPHA,
        beta: DEFAULT_BETA,
        rho: DEFAULT_RHO,
    }
}

/// Writes a configuration as a pretty-printed JSON document.
pub fn write_configuration(
    config: &Configuration,
    path: &Path,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(
        "Wrote generated configuration with {} clients to {}",
        config.clients.len(),
        path.display()
    );
    Ok(())
}
