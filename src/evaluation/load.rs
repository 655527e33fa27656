/// Outstanding demand across all locations.
pub fn total_demand(demand: &[f64]) -> f64 {
    let mut total = 0.0;
    for d in demand {
        total += *d;
    }
    total
}

/// Demand removed between two snapshots of the same demand vector.
pub fn delivered(before: &[f64], after: &[f64]) -> f64 {
    total_demand(before) - total_demand(after)
}
