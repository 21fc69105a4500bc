//! Force models acting on the vehicle.
//!
//! The integration loop only sees the [`ForceModel`] trait, so the physics
//! can be swapped out (or simplified) without touching the loop itself.
//! [`PhysicsModel`] is the reference model: flat gravity, an exponential
//! atmosphere and quadratic drag.
//!
//! ```text
//! a = (thrust - m * g - 0.5 * rho(h) * v² * Cd * A) / m
//! rho(h) = rho0 * exp(-h / H)
//! ```

use crate::control::environment::Environment;
use crate::control::launch_stages::StageConfig;
use crate::control::rocket::VehicleState;
use crate::errors::SimulationError;

use super::aerodynamics::Aerodynamics;

/// Computes the net vertical acceleration for the current state and stage.
pub trait ForceModel {
    fn net_acceleration(
        &self,
        state: &VehicleState,
        stage: &StageConfig,
    ) -> Result<f64, SimulationError>;
}

/// Reference force model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhysicsModel {
    pub environment: Environment,
    pub aerodynamics: Aerodynamics,
}

impl PhysicsModel {
    pub fn new(environment: Environment, aerodynamics: Aerodynamics) -> Self {
        PhysicsModel {
            environment,
            aerodynamics,
        }
    }

    /// Drag-free variant, handy when a test needs a predictable ascent.
    pub fn vacuum() -> Self {
        PhysicsModel {
            aerodynamics: Aerodynamics::new(0.0, 0.0),
            ..PhysicsModel::default()
        }
    }

    pub fn drag_force(&self, velocity: f64, altitude: f64) -> f64 {
        self.aerodynamics
            .calculate_drag(velocity, self.environment.air_density(altitude))
    }
}

impl ForceModel for PhysicsModel {
    fn net_acceleration(
        &self,
        state: &VehicleState,
        stage: &StageConfig,
    ) -> Result<f64, SimulationError> {
        if state.mass <= 0.0 {
            return Err(SimulationError::PhysicsError(format!(
                "non-positive mass {} kg at t = {} s",
                state.mass, state.elapsed_time
            )));
        }

        let gravity_force = self.environment.gravity_force(state.mass);
        let drag_force = self.drag_force(state.velocity, state.altitude);

        Ok((stage.thrust - gravity_force - drag_force) / state.mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_liftoff_acceleration() {
        let model = PhysicsModel::default();
        let state = VehicleState::on_pad(800_000.0);
        let stage = StageConfig::new(3.5e7, 14_000.0);

        let acceleration = model.net_acceleration(&state, &stage).unwrap();
        assert_abs_diff_eq!(acceleration, 3.5e7 / 800_000.0 - 9.81, epsilon = 1e-12);
    }

    #[test]
    fn test_insufficient_thrust_gives_negative_acceleration() {
        let model = PhysicsModel::default();
        let state = VehicleState::on_pad(3_000_000.0);
        let stage = StageConfig::new(1.0e6, 500.0);

        let acceleration = model.net_acceleration(&state, &stage).unwrap();
        assert!(acceleration < 0.0);
        assert_abs_diff_eq!(acceleration, -9.476_666_666_666_667, epsilon = 1e-9);
    }

    #[test]
    fn test_drag_reduces_acceleration() {
        let model = PhysicsModel::default();
        let stage = StageConfig::new(3.5e7, 14_000.0);
        let still = VehicleState::on_pad(800_000.0);
        let moving = VehicleState {
            velocity: 300.0,
            ..still
        };

        let a_still = model.net_acceleration(&still, &stage).unwrap();
        let a_moving = model.net_acceleration(&moving, &stage).unwrap();
        let expected_drag = 0.5 * 1.225 * 300.0 * 300.0 * 0.47 * 10.0;
        assert_abs_diff_eq!(
            a_still - a_moving,
            expected_drag / 800_000.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_vacuum_model_has_no_drag() {
        let model = PhysicsModel::vacuum();
        assert_eq!(model.drag_force(2_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_zero_mass_is_a_physics_error() {
        let model = PhysicsModel::default();
        let state = VehicleState::on_pad(0.0);
        let stage = StageConfig::new(1.0e6, 500.0);

        assert!(matches!(
            model.net_acceleration(&state, &stage),
            Err(SimulationError::PhysicsError(_))
        ));
    }
}
