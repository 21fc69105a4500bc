pub mod sampling;
pub mod simulator;
