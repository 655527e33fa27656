use colored::*;
use itertools::Itertools;
use tracing::{debug, info, trace};

use crate::domain::types::{Configuration, Matrix, Route, Solution};

/// Route as location names, e.g. `Depot -> A -> B -> Depot`.
pub fn describe_route(route: &Route, config: &Configuration) -> String {
    route
        .route
        .iter()
        .map(|index| config.location_name(*index))
        .join(" -> ")
}

/// Delivered quantity against vehicle capacity, e.g. `35/40`.
pub fn load_label(route: &Route, config: &Configuration) -> String {
    format!("{}/{}", route.load, config.vehicle_capacity)
}

pub fn print_solution(solution: &Solution, config: &Configuration) {
    info!("Total distance: {:.2}", solution.total_distance);
    for (vehicle, route) in solution.routes.iter().enumerate() {
        debug!(
            "Vehicle {} ({:.2}, load {}): {:?}",
            vehicle + 1,
            route.distance,
            load_label(route, config),
            route.route
        );
    }
    for route in &solution.routes {
        trace!("{}", describe_route(route, config));
    }
}

/// Final report on stdout.
pub fn print_summary(solution: &Solution, config: &Configuration, best_iteration: usize) {
    println!(
        "{}",
        format!("Best solution (iteration {}):", best_iteration).bold()
    );
    for (vehicle, route) in solution.routes.iter().enumerate() {
        let line = format!(
            "  Vehicle {:>2} [{:>8.2}] load {:>9} {}",
            vehicle + 1,
            route.distance,
            load_label(route, config),
            describe_route(route, config)
        );
        if route.is_empty() {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }
    println!(
        "{}",
        format_args!("Total distance: {:.2}", solution.total_distance)
            .to_string()
            .green()
    );
}

pub fn print_dist_matrix(dist_m: &Matrix) {
    trace!("Distance matrix:");
    for row in dist_m {
        trace!("{:?}", row);
    }
}
