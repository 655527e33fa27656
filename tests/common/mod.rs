#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use aco_vrp::domain::types::{Client, Configuration, Location};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Fresh, empty directory under the system temp dir.
pub fn scratch_dir(label: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "aco-vrp-{}-{}-{}",
        label,
        std::process::id(),
        n
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

pub fn two_client_config(vehicles: usize, capacity: f64) -> Configuration {
    Configuration {
        number_of_vehicles: vehicles,
        vehicle_capacity: capacity,
        depot: Location {
            name: "Depot".to_string(),
            x: 0.0,
            y: 0.0,
        },
        clients: vec![
            Client {
                name: "East".to_string(),
                x: 1.0,
                y: 0.0,
                demand: 5.0,
            },
            Client {
                name: "North".to_string(),
                x: 0.0,
                y: 1.0,
                demand: 5.0,
            },
        ],
        number_of_iterations: 10,
        alpha: 1.0,
        beta: 1.0,
        rho: 0.5,
    }
}

pub const TWO_CLIENT_DOCUMENT: &str = r#"{
    "numberOfVehicles": 1,
    "vehicleCapacity": 10,
    "depot": { "name": "Depot", "x": 0, "y": 0 },
    "clients": [
        { "name": "East", "x": 1, "y": 0, "demand": 5 },
        { "name": "North", "x": 0, "y": 1, "demand": 5 }
    ],
    "numberOfIterations": 3
}"#;
