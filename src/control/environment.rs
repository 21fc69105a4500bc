use crate::constants::{AIR_DENSITY_SEA_LEVEL, ATMOSPHERE_SCALE_HEIGHT, GRAVITY};

/// Exponential atmosphere over a flat, non-rotating ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub sea_level_density: f64,
    pub scale_height: f64,
    pub gravity: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            sea_level_density: AIR_DENSITY_SEA_LEVEL,
            scale_height: ATMOSPHERE_SCALE_HEIGHT,
            gravity: GRAVITY,
        }
    }
}

impl Environment {
    pub fn new(sea_level_density: f64, scale_height: f64, gravity: f64) -> Self {
        Environment {
            sea_level_density,
            scale_height,
            gravity,
        }
    }

    pub fn air_density(&self, altitude: f64) -> f64 {
        self.sea_level_density * (-altitude / self.scale_height).exp()
    }

    pub fn gravity_force(&self, mass: f64) -> f64 {
        mass * self.gravity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_air_density_sea_level() {
        let environment = Environment::default();
        assert_abs_diff_eq!(environment.air_density(0.0), 1.225, epsilon = 1e-12);
    }

    #[test]
    fn test_air_density_one_scale_height() {
        let environment = Environment::default();
        let expected = 1.225 / std::f64::consts::E;
        assert_abs_diff_eq!(environment.air_density(15_000.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_air_density_decreases_with_altitude() {
        let environment = Environment::default();
        let mut previous = environment.air_density(0.0);
        for step in 1..=20 {
            let density = environment.air_density(step as f64 * 10_000.0);
            assert!(density < previous);
            assert!(density > 0.0);
            previous = density;
        }
    }

    #[test]
    fn test_air_density_below_ground_exceeds_sea_level() {
        // Only reached on the final step before the loop halts.
        let environment = Environment::default();
        assert!(environment.air_density(-10.0) > 1.225);
    }

    #[test]
    fn test_gravity_force_is_flat() {
        let environment = Environment::default();
        assert_abs_diff_eq!(
            environment.gravity_force(3_000_000.0),
            29_430_000.0,
            epsilon = 1e-6
        );
    }
}
