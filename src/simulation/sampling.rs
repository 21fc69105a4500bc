/// When a step's end state is copied into the trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingPolicy {
    /// Record when `elapsed % interval < dt`. Floating-point drift can skip
    /// or double a sample near an interval boundary; this is the reference
    /// behavior and stays the default.
    #[default]
    Modulo,
    /// Record the first step that reaches the next due time, then schedule
    /// the following one. Never skips or doubles, but is not bit-compatible
    /// with `Modulo` output.
    Accumulator,
}

#[derive(Debug, Clone)]
pub struct Sampler {
    policy: SamplingPolicy,
    interval: f64,
    time_step: f64,
    next_due: f64,
}

impl Sampler {
    pub fn new(policy: SamplingPolicy, interval: f64, time_step: f64) -> Self {
        Sampler {
            policy,
            interval,
            time_step,
            next_due: interval,
        }
    }

    pub fn is_due(&mut self, elapsed_time: f64) -> bool {
        match self.policy {
            SamplingPolicy::Modulo => elapsed_time % self.interval < self.time_step,
            SamplingPolicy::Accumulator => {
                // Half a step of slack absorbs drift in the accumulated clock.
                let horizon = elapsed_time + 0.5 * self.time_step;
                if horizon < self.next_due {
                    return false;
                }
                while self.next_due <= horizon {
                    self.next_due += self.interval;
                }
                true
            }
        }
    }
}
