//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! settings and rosters from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayrollSettings, Roster};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/demo/
/// ├── payroll.yaml   # Duplicate policy and hours method
/// └── roster.yaml    # Employees and punches (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/demo")?;
/// println!("{} employees", loader.roster().employees.len());
/// # Ok::<(), timecard_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: PayrollSettings,
    roster: Roster,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `payroll.yaml` is missing, or if either file
    /// contains invalid YAML. A missing `roster.yaml` yields an empty roster.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<PayrollSettings>(&path.join("payroll.yaml"))?;

        let roster_path = path.join("roster.yaml");
        let roster = if roster_path.exists() {
            Self::load_yaml::<Roster>(&roster_path)?
        } else {
            Roster::default()
        };

        tracing::debug!(
            path = %path.display(),
            employees = roster.employees.len(),
            punches = roster.punches.len(),
            "Loaded payroll configuration"
        );

        Ok(Self { settings, roster })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Returns the loaded roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Consumes the loader, returning the settings and roster.
    pub fn into_parts(self) -> (PayrollSettings, Roster) {
        (self.settings, self.roster)
    }
}
