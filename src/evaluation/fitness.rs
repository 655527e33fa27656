use crate::domain::types::{Matrix, Solution};

/// Length of a closed index sequence, summing every consecutive hop.
pub fn find_distance(route: &[usize], dm: &Matrix) -> f64 {
    let mut total_dist = 0.0;
    for pair in route.windows(2) {
        total_dist += dist_between(pair[0], pair[1], dm);
    }
    total_dist
}

/// Recompute a solution's total from its index sequences, ignoring stored distances.
pub fn solution_distance(solution: &Solution, dm: &Matrix) -> f64 {
    let mut total = 0.0;
    for r in &solution.routes {
        total += find_distance(&r.route, dm);
    }
    total
}

pub fn dist_between(from_loc: usize, to_loc: usize, dm: &Matrix) -> f64 {
    dm[from_loc][to_loc]
}
