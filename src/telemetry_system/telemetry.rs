use crate::control::rocket::TerminationReason;
use crate::simulation::simulator::FlightRecord;

/// Text rendering of a finished run: summary figures plus the
/// velocity-vs-time and altitude-vs-time series.
pub struct Telemetry<'a> {
    record: &'a FlightRecord,
    max_velocity: f64,
    max_altitude: f64,
}

impl<'a> Telemetry<'a> {
    pub fn new(record: &'a FlightRecord) -> Self {
        let max_velocity = record
            .trajectory
            .velocities()
            .iter()
            .copied()
            .fold(0.0, f64::max);
        let max_altitude = record
            .trajectory
            .heights()
            .iter()
            .copied()
            .fold(0.0, f64::max);

        Telemetry {
            record,
            max_velocity,
            max_altitude,
        }
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    pub fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    fn describe_termination(reason: TerminationReason) -> &'static str {
        match reason {
            TerminationReason::BelowGround => "altitude dropped below ground",
            TerminationReason::MassFloorReached => "mass reached the termination floor",
        }
    }

    /// Two-column table with a title, one row per sample.
    fn render_series(title: &str, unit_label: &str, times: &[f64], values: &[f64]) -> String {
        let mut table = format!("--- {} ---\n{:>12} | {}\n", title, "Time (s)", unit_label);
        for (time, value) in times.iter().zip(values) {
            table.push_str(&format!("{:>12.2} | {:.2}\n", time, value));
        }
        table
    }

    pub fn velocity_table(&self) -> String {
        Self::render_series(
            "Velocity vs Time",
            "Velocity (m/s)",
            self.record.trajectory.times(),
            self.record.trajectory.velocities(),
        )
    }

    pub fn altitude_table(&self) -> String {
        Self::render_series(
            "Height vs Time",
            "Height (m)",
            self.record.trajectory.times(),
            self.record.trajectory.heights(),
        )
    }

    pub fn summary(&self) -> String {
        let final_state = &self.record.final_state;
        let staging = match self.record.staged_at {
            Some(time) => Self::format_time(time),
            None => "not reached".to_string(),
        };

        format!(
            "--- Simulation Summary ---\n\
             Samples: {} ({} integration steps)\n\
             Flight Time: {}\n\
             Max Velocity: {:.2} m/s\n\
             Max Altitude: {}\n\
             Final Mass: {:.2} kg\n\
             Stage Separation: {}\n\
             Termination: {}\n",
            self.record.trajectory.len(),
            self.record.steps,
            Self::format_time(final_state.elapsed_time),
            self.max_velocity,
            Self::format_altitude(self.max_altitude),
            final_state.mass,
            staging,
            Self::describe_termination(self.record.termination),
        )
    }

    pub fn display_data(&self) {
        println!("{}", self.velocity_table());
        println!("{}", self.altitude_table());
        println!("{}", self.summary());
    }
}
