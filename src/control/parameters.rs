use std::fs::File;

use serde::Deserialize;

use crate::constants::{
    BURN_RATE_RANGE, DEFAULT_BURN_RATE, DEFAULT_INITIAL_MASS, DEFAULT_INITIAL_THRUST,
    DEFAULT_SAMPLE_INTERVAL, DEFAULT_TIME_STEP, INITIAL_MASS_RANGE, INITIAL_THRUST_RANGE,
    SAMPLE_INTERVAL_RANGE, TIME_STEP_RANGE,
};
use crate::errors::SimulationError;

/// The five scalars handed over by the parameter source. Fields missing
/// from a parameter file fall back to [`SimulationParameters::default`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    pub initial_mass_kg: f64,
    pub initial_thrust_n: f64,
    pub burn_rate_kg_s: f64,
    pub time_step_s: f64,
    pub sample_interval_s: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            initial_mass_kg: DEFAULT_INITIAL_MASS,
            initial_thrust_n: DEFAULT_INITIAL_THRUST,
            burn_rate_kg_s: DEFAULT_BURN_RATE,
            time_step_s: DEFAULT_TIME_STEP,
            sample_interval_s: DEFAULT_SAMPLE_INTERVAL,
        }
    }
}

impl SimulationParameters {
    pub fn new(
        initial_mass_kg: f64,
        initial_thrust_n: f64,
        burn_rate_kg_s: f64,
        time_step_s: f64,
        sample_interval_s: f64,
    ) -> Self {
        SimulationParameters {
            initial_mass_kg,
            initial_thrust_n,
            burn_rate_kg_s,
            time_step_s,
            sample_interval_s,
        }
    }

    /// Boundary check against the ranges the input form accepts. The
    /// integration loop itself never re-validates.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let checks = [
            ("initial_mass_kg", self.initial_mass_kg, INITIAL_MASS_RANGE),
            ("initial_thrust_n", self.initial_thrust_n, INITIAL_THRUST_RANGE),
            ("burn_rate_kg_s", self.burn_rate_kg_s, BURN_RATE_RANGE),
            ("time_step_s", self.time_step_s, TIME_STEP_RANGE),
            ("sample_interval_s", self.sample_interval_s, SAMPLE_INTERVAL_RANGE),
        ];

        for (name, value, (min, max)) in checks {
            if !value.is_finite() {
                return Err(SimulationError::InitializationError(format!(
                    "parameter `{}` must be finite, got {}",
                    name, value
                )));
            }
            if value < min || value > max {
                return Err(SimulationError::InvalidParameter {
                    name,
                    value,
                    min,
                    max,
                });
            }
        }

        Ok(())
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, SimulationError> {
        serde_yaml::from_str(source).map_err(|e| SimulationError::ConfigError(e.to_string()))
    }
}

/// Reads parameters from a YAML file. The result is not validated.
pub fn load_parameters(path: &str) -> Result<SimulationParameters, SimulationError> {
    let file = File::open(path)
        .map_err(|e| SimulationError::ConfigError(format!("cannot open {}: {}", path, e)))?;
    let params: SimulationParameters = serde_yaml::from_reader(file)
        .map_err(|e| SimulationError::ConfigError(format!("cannot parse {}: {}", path, e)))?;
    Ok(params)
}
