use std::collections::HashSet;

use itertools::Itertools;

use crate::config::constant::INITIAL_PHEROMONE;
use crate::domain::types::{Matrix, Solution};

pub fn initial_pheromones(n: usize) -> Matrix {
    vec![vec![INITIAL_PHEROMONE; n]; n]
}

/// Directed edges eligible for reinforcement.
///
/// The last element of every route is dropped before pairing, so the hop back into the
/// depot is never reinforced. It still evaporates with the rest of the matrix.
pub fn reinforced_edges(solution: &Solution) -> HashSet<(usize, usize)> {
    let mut edges = HashSet::new();
    for r in &solution.routes {
        if r.route.is_empty() {
            continue;
        }
        let outbound = &r.route[..r.route.len() - 1];
        edges.extend(outbound.iter().copied().tuple_windows::<(usize, usize)>());
    }
    edges
}

/// Evaporate every cell by `rho` and reinforce the solution's edges by `old / distance`.
pub fn update_pheromones(pheromone: &mut Matrix, distance: &Matrix, solution: &Solution, rho: f64) {
    let edges = reinforced_edges(solution);
    for (i, row) in pheromone.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            let old = *cell;
            *cell = if edges.contains(&(i, j)) {
                old * rho + old / distance[i][j]
            } else {
                old * rho
            };
        }
    }
}
