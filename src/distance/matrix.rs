use tracing::debug;

use crate::domain::types::{Client, Location, Matrix};

/// Create the euclidean distance matrix for the depot (index 0) followed by the clients.
pub fn build_distance_matrix(depot: &Location, clients: &[Client]) -> Matrix {
    let mut points: Vec<(f64, f64)> = Vec::with_capacity(clients.len() + 1);
    points.push((depot.x, depot.y));
    points.extend(clients.iter().map(|c| (c.x, c.y)));

    debug!(
        "Creating distance matrix for depot '{}' and {} clients",
        depot.name,
        clients.len()
    );

    euclidean_matrix(&points)
}

pub fn euclidean_matrix(points: &[(f64, f64)]) -> Matrix {
    let n = points.len();
    let mut dm = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = euclidean(points[i], points[j]);
            dm[i][j] = d;
            dm[j][i] = d;
        }
    }
    dm
}

pub fn euclidean(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}
