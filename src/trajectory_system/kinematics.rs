use crate::control::rocket::VehicleState;

/// Explicit Euler update with a fixed time step. Velocity is advanced
/// first and the new velocity moves the altitude (semi-implicit in
/// position), then mass and clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub delta_time: f64,
}

impl Kinematics {
    pub fn new(delta_time: f64) -> Self {
        Kinematics { delta_time }
    }

    pub fn update(&self, state: &mut VehicleState, acceleration: f64, burn_rate: f64) {
        let dt = self.delta_time;

        state.velocity += acceleration * dt;
        state.altitude += state.velocity * dt;
        state.mass -= burn_rate * dt;
        state.elapsed_time += dt;
    }
}
