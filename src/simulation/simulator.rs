use crate::constants::TERMINATION_MASS_FLOOR;
use crate::control::launch_stages::{StageConfig, StagingRule};
use crate::control::parameters::SimulationParameters;
use crate::control::rocket::{TerminationReason, VehicleState};
use crate::errors::SimulationError;
use crate::telemetry_system::trajectory::{SampleTelemetry, Trajectory};
use crate::trajectory_system::forces::{ForceModel, PhysicsModel};
use crate::trajectory_system::kinematics::Kinematics;

use super::sampling::{Sampler, SamplingPolicy};

/// Everything one run produces. `telemetry[i]` belongs to the i-th
/// trajectory sample.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    pub trajectory: Trajectory,
    pub telemetry: Vec<SampleTelemetry>,
    pub steps: usize,
    pub final_state: VehicleState,
    pub staged_at: Option<f64>,
    pub termination: TerminationReason,
}

/// Fixed-step ascent loop. The force model, staging rule, termination
/// floor and sampling policy are all injected; [`AscentSimulator::new`]
/// wires in the reference values.
#[derive(Debug, Clone)]
pub struct AscentSimulator<F: ForceModel = PhysicsModel> {
    pub forces: F,
    pub staging: StagingRule,
    pub mass_floor: f64,
    pub sampling: SamplingPolicy,
}

impl AscentSimulator<PhysicsModel> {
    pub fn new() -> Self {
        AscentSimulator::with_forces(PhysicsModel::default())
    }
}

impl Default for AscentSimulator<PhysicsModel> {
    fn default() -> Self {
        AscentSimulator::new()
    }
}

impl<F: ForceModel> AscentSimulator<F> {
    pub fn with_forces(forces: F) -> Self {
        AscentSimulator {
            forces,
            staging: StagingRule::default(),
            mass_floor: TERMINATION_MASS_FLOOR,
            sampling: SamplingPolicy::default(),
        }
    }

    pub fn staging(mut self, staging: StagingRule) -> Self {
        self.staging = staging;
        self
    }

    pub fn mass_floor(mut self, mass_floor: f64) -> Self {
        self.mass_floor = mass_floor;
        self
    }

    pub fn sampling(mut self, sampling: SamplingPolicy) -> Self {
        self.sampling = sampling;
        self
    }

    /// Runs until the vehicle is below ground or at the mass floor.
    ///
    /// Parameters are taken as already validated. Each iteration checks
    /// termination, integrates one step, decides on a sample, then
    /// evaluates the staging band against the new mass.
    pub fn run(&self, params: &SimulationParameters) -> Result<FlightRecord, SimulationError> {
        let kinematics = Kinematics::new(params.time_step_s);
        let mut sampler = Sampler::new(
            self.sampling,
            params.sample_interval_s,
            params.time_step_s,
        );

        let mut state = VehicleState::on_pad(params.initial_mass_kg);
        let mut stage = StageConfig::new(params.initial_thrust_n, params.burn_rate_kg_s);

        let mut trajectory = Trajectory::new();
        let mut telemetry = Vec::new();
        let mut steps = 0;
        let mut staged_at = None;

        let termination = loop {
            if let Some(reason) = state.termination(self.mass_floor) {
                break reason;
            }

            let acceleration = self.forces.net_acceleration(&state, &stage)?;
            kinematics.update(&mut state, acceleration, stage.burn_rate);
            steps += 1;

            let sampled = sampler.is_due(state.elapsed_time);

            if self.staging.apply(state.mass, &mut stage, staged_at.is_some())
                && staged_at.is_none()
            {
                staged_at = Some(state.elapsed_time);
            }

            if sampled {
                trajectory.record(state.elapsed_time, state.velocity, state.altitude);
                telemetry.push(SampleTelemetry {
                    mass: state.mass,
                    thrust: stage.thrust,
                    burn_rate: stage.burn_rate,
                });
            }
        };

        Ok(FlightRecord {
            trajectory,
            telemetry,
            steps,
            final_state: state,
            staged_at,
            termination,
        })
    }
}

/// Reference run: default physics, returning only the sampled trajectory.
pub fn simulate(params: &SimulationParameters) -> Result<Trajectory, SimulationError> {
    AscentSimulator::new()
        .run(params)
        .map(|record| record.trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::launch_stages::StagingMode;
    use approx::assert_abs_diff_eq;

    /// Constant net acceleration, independent of state.
    struct ConstantAcceleration(f64);

    impl ForceModel for ConstantAcceleration {
        fn net_acceleration(
            &self,
            _state: &VehicleState,
            _stage: &StageConfig,
        ) -> Result<f64, SimulationError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_default_run_matches_reference_shape() {
        let record = AscentSimulator::new()
            .run(&SimulationParameters::default())
            .unwrap();

        assert_eq!(record.steps, 11_309);
        assert_eq!(record.trajectory.len(), 226);
        assert_eq!(record.telemetry.len(), 226);
        assert_eq!(record.termination, TerminationReason::MassFloorReached);
        assert_abs_diff_eq!(record.staged_at.unwrap(), 46.43, epsilon = 1e-6);
        assert_abs_diff_eq!(record.trajectory.times()[0], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(record.final_state.mass, 49_990.0, epsilon = 1e-3);
    }

    #[test]
    fn test_mass_at_floor_gives_empty_trajectory() {
        let params = SimulationParameters {
            initial_mass_kg: 50_000.0,
            ..SimulationParameters::default()
        };
        let record = AscentSimulator::new().run(&params).unwrap();

        assert_eq!(record.steps, 0);
        assert!(record.trajectory.is_empty());
        assert_eq!(record.termination, TerminationReason::MassFloorReached);
    }

    #[test]
    fn test_injected_force_model_drives_loop() {
        // 1 m/s² for exactly 100 steps of 0.1 s (mass 60000 -> 50000).
        let params = SimulationParameters::new(60_000.0, 1.0e6, 1_000.0, 0.1, 0.1);
        let record = AscentSimulator::with_forces(ConstantAcceleration(1.0))
            .run(&params)
            .unwrap();

        assert_eq!(record.steps, 100);
        assert_eq!(record.trajectory.len(), 100);
        assert_abs_diff_eq!(record.final_state.velocity, 10.0, epsilon = 1e-9);
        assert_eq!(record.termination, TerminationReason::MassFloorReached);
        assert_eq!(record.staged_at, None);
    }

    #[test]
    fn test_falling_vehicle_stops_below_ground() {
        let params = SimulationParameters::new(800_000.0, 1.0e7, 1_000.0, 0.01, 0.5);
        let record = AscentSimulator::with_forces(ConstantAcceleration(-1.0))
            .run(&params)
            .unwrap();

        assert_eq!(record.steps, 1);
        assert_eq!(record.termination, TerminationReason::BelowGround);
        assert!(record.final_state.altitude < 0.0);
    }

    #[test]
    fn test_non_positive_floor_surfaces_physics_error() {
        let params = SimulationParameters::new(60_000.0, 5.0e7, 25_000.0, 0.1, 0.5);
        let result = AscentSimulator::with_forces(PhysicsModel::vacuum())
            .staging(StagingRule {
                upper_mass: 0.0,
                lower_mass: -1.0,
                ..StagingRule::default()
            })
            .mass_floor(-1.0e9)
            .run(&params);

        assert!(matches!(result, Err(SimulationError::PhysicsError(_))));
    }

    #[test]
    fn test_latch_and_reapply_give_same_trajectory() {
        let params = SimulationParameters::default();
        let reapply = AscentSimulator::new().run(&params).unwrap();
        let latch = AscentSimulator::new()
            .staging(StagingRule::default().with_mode(StagingMode::Latch))
            .run(&params)
            .unwrap();

        assert_eq!(reapply.trajectory, latch.trajectory);
        assert_eq!(reapply.staged_at, latch.staged_at);
    }

    #[test]
    fn test_accumulator_sampling_keeps_step_count() {
        let params = SimulationParameters::default();
        let modulo = AscentSimulator::new().run(&params).unwrap();
        let accumulator = AscentSimulator::new()
            .sampling(SamplingPolicy::Accumulator)
            .run(&params)
            .unwrap();

        assert_eq!(modulo.steps, accumulator.steps);
        assert_eq!(modulo.final_state, accumulator.final_state);
        assert_eq!(accumulator.trajectory.len(), 226);
    }

    #[test]
    fn test_simulate_returns_trajectory() {
        let trajectory = simulate(&SimulationParameters::default()).unwrap();
        assert_eq!(trajectory.len(), 226);
    }
}
