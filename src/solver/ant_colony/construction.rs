use rand::Rng;
use tracing::trace;

use crate::domain::types::{Configuration, Matrix, Route, Solution};
use crate::evaluation::load::total_demand;

use super::probability::transition_probabilities;
use super::sampler::draw_destination;

/// Build one vehicle's route, consuming `demand` in place.
///
/// A stop whose demand exceeds the remaining capacity is only partially served and stays
/// visitable for the vehicles that follow in the same iteration.
pub fn construct_route<R: Rng + ?Sized>(
    vehicle_capacity: f64,
    demand: &mut [f64],
    distance: &Matrix,
    pheromone: &Matrix,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Route {
    let mut current = 0;
    let mut remaining_capacity = vehicle_capacity;
    let mut route = vec![0];
    let mut route_distance = 0.0;

    while remaining_capacity > 0.0 && total_demand(demand) > 0.0 {
        let probabilities =
            match transition_probabilities(current, demand, pheromone, distance, alpha, beta) {
                Some(p) => p,
                None => {
                    trace!("No feasible destination from {}, returning to depot", current);
                    break;
                }
            };

        let destination = draw_destination(&probabilities, rng);

        if demand[destination] > remaining_capacity {
            demand[destination] -= remaining_capacity;
            remaining_capacity = 0.0;
        } else {
            remaining_capacity -= demand[destination];
            demand[destination] = 0.0;
        }

        route_distance += distance[current][destination];
        current = destination;
        route.push(destination);
    }

    route.push(0);
    route_distance += distance[current][0];

    Route {
        route,
        distance: route_distance,
        load: vehicle_capacity - remaining_capacity,
    }
}

/// One route per vehicle, in order, all drawing from the same demand vector.
pub fn build_solution<R: Rng + ?Sized>(
    config: &Configuration,
    distance: &Matrix,
    pheromone: &Matrix,
    demand: &mut [f64],
    rng: &mut R,
) -> Solution {
    let mut routes = Vec::with_capacity(config.number_of_vehicles);
    for _ in 0..config.number_of_vehicles {
        routes.push(construct_route(
            config.vehicle_capacity,
            demand,
            distance,
            pheromone,
            config.alpha,
            config.beta,
            rng,
        ));
    }
    Solution::from_routes(routes)
}
