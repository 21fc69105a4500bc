pub mod environment;
pub mod launch_stages;
pub mod parameters;
pub mod rocket;
