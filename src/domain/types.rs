use serde::{Deserialize, Serialize};

use crate::config::{default_alpha, default_beta, default_iterations, default_rho};

/// Dense N×N matrix indexed by location index (0 = depot, k = client k-1).
pub type Matrix = Vec<Vec<f64>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn same_as(&self, other: &Location) -> bool {
        self.name == other.name && self.x == other.x && self.y == other.y
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub demand: f64,
}

impl Client {
    pub fn same_as(&self, other: &Client) -> bool {
        self.name == other.name
            && self.x == other.x
            && self.y == other.y
            && self.demand == other.demand
    }
}

/// Problem description plus colony parameters, as read from a JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub number_of_vehicles: usize,
    pub vehicle_capacity: f64,
    pub depot: Location,
    pub clients: Vec<Client>,
    #[serde(default = "default_iterations")]
    pub number_of_iterations: usize,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_beta")]
    pub beta: f64,
    #[serde(default = "default_rho")]
    pub rho: f64,
}

impl Configuration {
    /// Number of locations in the index space (depot + clients).
    pub fn location_count(&self) -> usize {
        self.clients.len() + 1
    }

    pub fn total_demand(&self) -> f64 {
        let mut total = 0.0;
        for client in &self.clients {
            total += client.demand;
        }
        total
    }

    pub fn fleet_capacity(&self) -> f64 {
        self.number_of_vehicles as f64 * self.vehicle_capacity
    }

    /// Demand per location index; entry 0 (depot) is always zero.
    pub fn demand_template(&self) -> Vec<f64> {
        let mut demand = Vec::with_capacity(self.location_count());
        demand.push(0.0);
        for client in &self.clients {
            demand.push(client.demand);
        }
        demand
    }

    pub fn location_name(&self, index: usize) -> &str {
        if index == 0 {
            &self.depot.name
        } else {
            self.clients
                .get(index - 1)
                .map(|c| c.name.as_str())
                .unwrap_or("?")
        }
    }

    /// Two configurations describe the same problem when the fleet, the depot and
    /// the ordered client list match. Colony parameters are not compared.
    pub fn same_problem(&self, other: &Configuration) -> bool {
        if self.number_of_vehicles != other.number_of_vehicles
            || self.vehicle_capacity != other.vehicle_capacity
            || !self.depot.same_as(&other.depot)
            || self.clients.len() != other.clients.len()
        {
            return false;
        }
        for (a, b) in self.clients.iter().zip(other.clients.iter()) {
            if !a.same_as(b) {
                return false;
            }
        }
        true
    }
}

/// One vehicle tour: location indices starting and ending at the depot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub route: Vec<usize>,
    pub distance: f64,
    /// Quantity delivered by this vehicle. Not part of the stored record.
    #[serde(skip)]
    pub load: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub routes: Vec<Route>,
    pub total_distance: f64,
}
