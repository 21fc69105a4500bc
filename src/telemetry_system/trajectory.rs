/// Sampled ascent data handed to the renderer. The three sequences only
/// grow together, so they always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    velocities: Vec<f64>,
    heights: Vec<f64>,
}

impl Trajectory {
    pub fn new() -> Self {
        Trajectory::default()
    }

    pub fn record(&mut self, time: f64, velocity: f64, height: f64) {
        self.times.push(time);
        self.velocities.push(velocity);
        self.heights.push(height);
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterates `(time, velocity, height)` triples in recording order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.times
            .iter()
            .zip(&self.velocities)
            .zip(&self.heights)
            .map(|((&t, &v), &h)| (t, v, h))
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.times, self.velocities, self.heights)
    }
}

/// Vehicle data captured alongside each trajectory sample: the mass and
/// the stage configuration in effect once the step (and its staging
/// check) has completed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleTelemetry {
    pub mass: f64,
    pub thrust: f64,
    pub burn_rate: f64,
}
