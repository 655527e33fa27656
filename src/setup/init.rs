use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::constant::RESULT_SUFFIX;
use crate::domain::types::Configuration;
use crate::error::ConfigError;
use crate::setup::init_types::LoadedConfiguration;

/// Locate, parse and validate a configuration document.
///
/// `selection` may be a path to a document or the name (file stem or file name) of a
/// document inside `params_dir`. Without a selection the directory must hold exactly one.
pub fn load_configuration(
    params_dir: &Path,
    selection: Option<&str>,
) -> Result<LoadedConfiguration, ConfigError> {
    let path = locate_source(params_dir, selection)?;
    info!("Loading configuration from {}", path.display());

    let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config = parse_configuration(&text).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    validate_configuration(&config)?;

    info!(
        "Loaded {} clients, {} vehicles of capacity {}, {} iterations",
        config.clients.len(),
        config.number_of_vehicles,
        config.vehicle_capacity,
        config.number_of_iterations
    );

    Ok(LoadedConfiguration {
        name: source_name(&path),
        path,
        config,
    })
}

pub fn parse_configuration(text: &str) -> Result<Configuration, serde_json::Error> {
    serde_json::from_str(text)
}

/// All `*.json` documents in `params_dir`, sorted by file name.
pub fn list_sources(params_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    if !params_dir.is_dir() {
        return Ok(vec![]);
    }

    let entries = fs::read_dir(params_dir).map_err(|source| ConfigError::Io {
        path: params_dir.to_path_buf(),
        source,
    })?;

    let mut sources = vec![];
    for entry in entries {
        let entry = entry.map_err(|source| ConfigError::Io {
            path: params_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if path.is_file() && file_name.ends_with(".json") && !file_name.ends_with(RESULT_SUFFIX) {
            sources.push(path);
        }
    }
    sources.sort();
    debug!("Found {} configuration sources in {}", sources.len(), params_dir.display());
    Ok(sources)
}

pub fn locate_source(params_dir: &Path, selection: Option<&str>) -> Result<PathBuf, ConfigError> {
    if let Some(selected) = selection {
        let direct = Path::new(selected);
        if direct.is_file() {
            return Ok(direct.to_path_buf());
        }
    }

    let sources = list_sources(params_dir)?;
    if sources.is_empty() {
        return Err(ConfigError::Missing {
            searched: params_dir.to_path_buf(),
        });
    }

    let available: Vec<String> = sources.iter().map(|p| source_name(p)).collect();

    match selection {
        Some(selected) => sources
            .iter()
            .find(|p| {
                source_name(p) == selected
                    || p.file_name().map(|f| f.to_string_lossy() == selected) == Some(true)
            })
            .cloned()
            .ok_or(ConfigError::Ambiguous {
                selection: Some(selected.to_string()),
                available,
            }),
        None if sources.len() == 1 => Ok(sources[0].clone()),
        None => Err(ConfigError::Ambiguous {
            selection: None,
            available,
        }),
    }
}

/// Range checks plus the fleet capacity invariant.
pub fn validate_configuration(config: &Configuration) -> Result<(), ConfigError> {
    if config.number_of_vehicles == 0 {
        return Err(ConfigError::Invalid(
            "numberOfVehicles must be greater than 0".to_string(),
        ));
    }
    if !config.vehicle_capacity.is_finite() || config.vehicle_capacity <= 0.0 {
        return Err(ConfigError::Invalid(
            "vehicleCapacity must be a positive number".to_string(),
        ));
    }
    if config.number_of_iterations == 0 {
        return Err(ConfigError::Invalid(
            "numberOfIterations must be greater than 0".to_string(),
        ));
    }
    if !config.alpha.is_finite() || !config.beta.is_finite() {
        return Err(ConfigError::Invalid(
            "alpha and beta must be finite".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&config.rho) {
        return Err(ConfigError::Invalid("rho must lie in [0, 1]".to_string()));
    }
    if !config.depot.x.is_finite() || !config.depot.y.is_finite() {
        return Err(ConfigError::Invalid(format!(
            "depot '{}' has non-finite coordinates",
            config.depot.name
        )));
    }
    for client in &config.clients {
        if !client.x.is_finite() || !client.y.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "client '{}' has non-finite coordinates",
                client.name
            )));
        }
        if !client.demand.is_finite() || client.demand < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "client '{}' has a negative or non-finite demand",
                client.name
            )));
        }
    }

    let total_demand = config.total_demand();
    let fleet_capacity = config.fleet_capacity();
    if total_demand > fleet_capacity {
        return Err(ConfigError::Infeasible {
            total_demand,
            fleet_capacity,
        });
    }
    Ok(())
}

fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
