/// Scalars advanced by every integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    pub mass: f64,
    pub velocity: f64,
    pub altitude: f64,
    pub elapsed_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    BelowGround,
    MassFloorReached,
}

impl VehicleState {
    pub fn on_pad(initial_mass: f64) -> Self {
        VehicleState {
            mass: initial_mass,
            velocity: 0.0,
            altitude: 0.0,
            elapsed_time: 0.0,
        }
    }

    /// Checked before each step. Altitude takes precedence when both hold.
    pub fn termination(&self, mass_floor: f64) -> Option<TerminationReason> {
        if self.altitude < 0.0 {
            Some(TerminationReason::BelowGround)
        } else if self.mass <= mass_floor {
            Some(TerminationReason::MassFloorReached)
        } else {
            None
        }
    }
}
