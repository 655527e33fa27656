use crate::domain::types::{Route, Solution};

impl Route {
    /// Route of a vehicle that never leaves the depot.
    pub fn depot_only() -> Self {
        Route {
            route: vec![0, 0],
            distance: 0.0,
            load: 0.0,
        }
    }

    /// Visited location indices without the leading and trailing depot.
    pub fn stops(&self) -> &[usize] {
        if self.route.len() < 2 {
            return &[];
        }
        &self.route[1..self.route.len() - 1]
    }

    pub fn is_empty(&self) -> bool {
        self.stops().is_empty()
    }
}

impl Solution {
    /// Build a solution and total its route distances.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        let mut total_distance = 0.0;
        for r in &routes {
            total_distance += r.distance;
        }
        Solution {
            routes,
            total_distance,
        }
    }

    /// Strictly shorter total distance.
    pub fn improves_on(&self, other: &Solution) -> bool {
        self.total_distance < other.total_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_routes_sums_distances() {
        let solution = Solution::from_routes(vec![
            Route {
                route: vec![0, 1, 0],
                distance: 2.0,
                load: 0.0,
            },
            Route {
                route: vec![0, 2, 3, 0],
                distance: 3.5,
                load: 0.0,
            },
            Route::depot_only(),
        ]);
        assert!((solution.total_distance - 5.5).abs() < 1e-12);
        assert_eq!(solution.routes.len(), 3);
    }

    #[test]
    fn stops_strip_the_depot() {
        let r = Route {
            route: vec![0, 4, 2, 0],
            distance: 1.0,
            load: 0.0,
        };
        assert_eq!(r.stops(), &[4, 2]);
        assert!(Route::depot_only().is_empty());
    }

    #[test]
    fn improvement_is_strict() {
        let a = Solution::from_routes(vec![Route {
            route: vec![0, 1, 0],
            distance: 2.0,
            load: 0.0,
        }]);
        let b = a.clone();
        assert!(!a.improves_on(&b));
        let c = Solution::from_routes(vec![Route {
            route: vec![0, 1, 0],
            distance: 1.0,
            load: 0.0,
        }]);
        assert!(c.improves_on(&a));
    }
}
