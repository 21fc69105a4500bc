use crate::constants::{
    MINIMUM_MASS_THRESHOLD, STAGE_TWO_BURN_RATE, STAGE_TWO_THRUST, STAGING_MASS_THRESHOLD,
};

/// Active propulsion configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageConfig {
    pub thrust: f64,
    pub burn_rate: f64,
}

impl StageConfig {
    pub fn new(thrust: f64, burn_rate: f64) -> Self {
        StageConfig { thrust, burn_rate }
    }

    pub fn stage_two() -> Self {
        StageConfig::new(STAGE_TWO_THRUST, STAGE_TWO_BURN_RATE)
    }
}

/// How the staging band is evaluated once the vehicle is inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StagingMode {
    /// Reapply the stage-two configuration on every step spent in the band.
    #[default]
    Reapply,
    /// Apply it on the first step in the band only.
    Latch,
}

/// The single staging event: the stage-two configuration takes over while
/// `lower_mass < mass <= upper_mass`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagingRule {
    pub upper_mass: f64,
    pub lower_mass: f64,
    pub next_stage: StageConfig,
    pub mode: StagingMode,
}

impl Default for StagingRule {
    fn default() -> Self {
        StagingRule {
            upper_mass: STAGING_MASS_THRESHOLD,
            lower_mass: MINIMUM_MASS_THRESHOLD,
            next_stage: StageConfig::stage_two(),
            mode: StagingMode::Reapply,
        }
    }
}

impl StagingRule {
    pub fn with_mode(mut self, mode: StagingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn in_band(&self, mass: f64) -> bool {
        mass <= self.upper_mass && mass > self.lower_mass
    }

    /// Swaps in the next stage when the band condition holds. Returns true
    /// when the configuration was (re)applied this call.
    pub fn apply(&self, mass: f64, active: &mut StageConfig, already_staged: bool) -> bool {
        if !self.in_band(mass) {
            return false;
        }
        if self.mode == StagingMode::Latch && already_staged {
            return false;
        }

        *active = self.next_stage;
        true
    }
}
