use ascent_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading parameters from {}", path);
            load_parameters(&path)?
        }
        None => SimulationParameters::default(),
    };

    params.validate()?;

    println!(
        "Launching: mass = {:.0} kg, thrust = {:.3e} N, burn rate = {:.0} kg/s, dt = {} s, sample every {} s",
        params.initial_mass_kg,
        params.initial_thrust_n,
        params.burn_rate_kg_s,
        params.time_step_s,
        params.sample_interval_s
    );

    let record = AscentSimulator::new().run(&params)?;

    if record.trajectory.is_empty() {
        println!("No samples recorded before the flight ended.");
    }

    Telemetry::new(&record).display_data();

    Ok(())
}
