use crate::domain::types::Matrix;

/// Transition probabilities from `location` to every index.
///
/// Self and locations with no outstanding demand (the depot included) get zero weight;
/// every other candidate is weighted by `pheromone^alpha * (1 / distance)^beta`.
///
/// Returns `None` when no candidate carries a usable weight: all demand is served, or a
/// zero-distance pair pushed the total to infinity. The caller ends the route there.
pub fn transition_probabilities(
    location: usize,
    demand: &[f64],
    pheromone: &Matrix,
    distance: &Matrix,
    alpha: f64,
    beta: f64,
) -> Option<Vec<f64>> {
    let n = demand.len();
    let mut weights = vec![0.0; n];
    let mut total = 0.0;

    for candidate in 0..n {
        if candidate == location || demand[candidate] == 0.0 {
            continue;
        }
        let attraction = pheromone[location][candidate].powf(alpha);
        let visibility = (1.0 / distance[location][candidate]).powf(beta);
        weights[candidate] = attraction * visibility;
        total += weights[candidate];
    }

    if total == 0.0 || !total.is_finite() {
        return None;
    }

    for w in weights.iter_mut() {
        *w /= total;
    }
    Some(weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::matrix::euclidean_matrix;
    use proptest::prelude::*;

    fn ones(n: usize) -> Matrix {
        vec![vec![1.0; n]; n]
    }

    #[test]
    fn closer_client_is_more_likely() {
        let dm = euclidean_matrix(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let p = transition_probabilities(0, &[0.0, 1.0, 1.0], &ones(3), &dm, 1.0, 1.0)
            .expect("feasible");
        assert_eq!(p[0], 0.0);
        assert!((p[1] - 2.0 / 3.0).abs() < 1e-12);
        assert!((p[2] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn pheromone_shifts_the_odds() {
        let dm = euclidean_matrix(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let mut pheromone = ones(3);
        pheromone[0][2] = 3.0;
        let p = transition_probabilities(0, &[0.0, 1.0, 1.0], &pheromone, &dm, 1.0, 1.0)
            .expect("feasible");
        assert!((p[1] - 0.25).abs() < 1e-12);
        assert!((p[2] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn nothing_left_to_serve() {
        let dm = euclidean_matrix(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(transition_probabilities(1, &[0.0, 0.0], &ones(2), &dm, 1.0, 1.0).is_none());
    }

    #[test]
    fn only_self_has_demand() {
        let dm = euclidean_matrix(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(transition_probabilities(1, &[0.0, 4.0], &ones(2), &dm, 1.0, 1.0).is_none());
    }

    #[test]
    fn colocated_client_is_reported_infeasible() {
        let dm = euclidean_matrix(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]);
        assert!(transition_probabilities(0, &[0.0, 2.0, 2.0], &ones(3), &dm, 1.0, 1.0).is_none());
    }

    proptest! {
        #[test]
        fn probabilities_form_a_distribution(
            points in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 2..12),
            demand_seed in prop::collection::vec(0u8..4, 12),
            pheromone_level in 0.1f64..5.0,
            location in 0usize..12,
        ) {
            let n = points.len();
            let location = location % n;
            let dm = euclidean_matrix(&points);
            let pheromone = vec![vec![pheromone_level; n]; n];
            let mut demand: Vec<f64> = demand_seed.iter().take(n).map(|d| *d as f64).collect();
            demand[0] = 0.0;

            if let Some(p) = transition_probabilities(location, &demand, &pheromone, &dm, 1.0, 1.0) {
                let mut sum = 0.0;
                for i in 0..n {
                    if i == location || demand[i] == 0.0 {
                        prop_assert_eq!(p[i], 0.0);
                    }
                    prop_assert!(p[i] >= 0.0);
                    sum += p[i];
                }
                prop_assert!((sum - 1.0).abs() < 1e-9);
            }
        }
    }
}
