use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::constant::RESULT_SUFFIX;
use crate::domain::types::{Configuration, Solution};
use crate::error::StoreError;

/// On-disk record: the configuration that was solved and its best known solution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedResult {
    pub config: Configuration,
    pub result: Solution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No previous record existed.
    Created,
    /// The previous record was for a different problem.
    Replaced,
    /// Same problem, strictly shorter total distance.
    Improved,
    /// Same problem, the stored solution is at least as good.
    Kept,
}

/// Directory of `<name>.result.json` records, one per configuration source.
#[derive(Debug, Clone)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ResultStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}{}", name, RESULT_SUFFIX))
    }

    pub fn load(&self, name: &str) -> Result<Option<SavedResult>, StoreError> {
        let path = self.path_for(name);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Persist `solution` unless an equally configured record is already as good.
    ///
    /// A record that cannot be parsed is treated as belonging to a different problem.
    pub fn save_if_better(
        &self,
        name: &str,
        config: &Configuration,
        solution: &Solution,
    ) -> Result<SaveOutcome, StoreError> {
        let outcome = match self.load(name) {
            Ok(None) => SaveOutcome::Created,
            Ok(Some(previous)) if previous.config.same_problem(config) => {
                if solution.improves_on(&previous.result) {
                    SaveOutcome::Improved
                } else {
                    info!(
                        "Stored result for '{}' ({:.2}) is not worse than {:.2}, keeping it",
                        name, previous.result.total_distance, solution.total_distance
                    );
                    return Ok(SaveOutcome::Kept);
                }
            }
            Ok(Some(_)) => SaveOutcome::Replaced,
            Err(StoreError::Parse(e)) => {
                warn!("Unreadable result record for '{}': {}", name, e);
                SaveOutcome::Replaced
            }
            Err(e) => return Err(e),
        };

        self.write(name, config, solution)?;
        info!(
            "Saved result for '{}' to {} ({:?})",
            name,
            self.path_for(name).display(),
            outcome
        );
        Ok(outcome)
    }

    fn write(&self, name: &str, config: &Configuration, solution: &Solution) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let record = SavedResult {
            config: config.clone(),
            result: solution.clone(),
        };
        let text = serde_json::to_string_pretty(&record)?;
        fs::write(self.path_for(name), text)?;
        Ok(())
    }
}
