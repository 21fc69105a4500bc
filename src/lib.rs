pub mod constants;
pub mod control;
pub mod errors;
pub mod simulation;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::environment::Environment;
pub use control::launch_stages::{StageConfig, StagingMode, StagingRule};
pub use control::parameters::{load_parameters, SimulationParameters};
pub use control::rocket::{TerminationReason, VehicleState};
pub use errors::SimulationError;

// Re-export commonly used items from simulation
pub use simulation::sampling::SamplingPolicy;
pub use simulation::simulator::{simulate, AscentSimulator, FlightRecord};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::forces::{ForceModel, PhysicsModel};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;
pub use telemetry_system::trajectory::{SampleTelemetry, Trajectory};
