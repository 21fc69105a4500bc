// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Aerodynamic Constants
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const ATMOSPHERE_SCALE_HEIGHT: f64 = 15_000.0; // m
pub const ROCKET_DRAG_COEFFICIENT: f64 = 0.47;
pub const ROCKET_CROSS_SECTIONAL_AREA: f64 = 10.0; // m²

// Staging Constants
pub const STAGING_MASS_THRESHOLD: f64 = 150_000.0; // kg, upper bound of the staging band (inclusive)
pub const MINIMUM_MASS_THRESHOLD: f64 = 100_000.0; // kg, lower bound of the staging band (exclusive)
pub const STAGE_TWO_THRUST: f64 = 2.0e6; // N
pub const STAGE_TWO_BURN_RATE: f64 = 1_500.0; // kg/s

// Termination
pub const TERMINATION_MASS_FLOOR: f64 = 50_000.0; // kg

// Default Simulation Parameters
pub const DEFAULT_INITIAL_MASS: f64 = 800_000.0; // kg
pub const DEFAULT_INITIAL_THRUST: f64 = 3.5e7; // N
pub const DEFAULT_BURN_RATE: f64 = 14_000.0; // kg/s
pub const DEFAULT_TIME_STEP: f64 = 0.01; // s
pub const DEFAULT_SAMPLE_INTERVAL: f64 = 0.5; // s

// Parameter Ranges (inclusive)
pub const INITIAL_MASS_RANGE: (f64, f64) = (50_000.0, 3_000_000.0); // kg
pub const INITIAL_THRUST_RANGE: (f64, f64) = (1.0e6, 5.0e7); // N
pub const BURN_RATE_RANGE: (f64, f64) = (500.0, 25_000.0); // kg/s
pub const TIME_STEP_RANGE: (f64, f64) = (0.001, 0.1); // s
pub const SAMPLE_INTERVAL_RANGE: (f64, f64) = (0.1, 1.0); // s
