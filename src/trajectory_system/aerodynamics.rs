use crate::constants::{ROCKET_CROSS_SECTIONAL_AREA, ROCKET_DRAG_COEFFICIENT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub surface_area: f64,
}

impl Default for Aerodynamics {
    fn default() -> Self {
        Aerodynamics {
            drag_coefficient: ROCKET_DRAG_COEFFICIENT,
            surface_area: ROCKET_CROSS_SECTIONAL_AREA,
        }
    }
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, surface_area: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            surface_area,
        }
    }

    /// Drag magnitude from `v²`. The sign of the velocity is ignored: the
    /// model covers the ascent regime only, so drag is always subtracted
    /// from thrust even while falling.
    pub fn calculate_drag(&self, velocity: f64, air_density: f64) -> f64 {
        0.5 * air_density * velocity.powi(2) * self.drag_coefficient * self.surface_area
    }
}
