use flight_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Commercial 75mm motor, thrust sampled from a bench test
    let thrust_curve = Curve::new(vec![
        (0.0, 0.0),
        (0.1, 2600.0),
        (0.5, 2900.0),
        (1.0, 2700.0),
        (2.0, 2400.0),
        (3.0, 1900.0),
        (3.5, 800.0),
        (3.7, 0.0),
    ])?;
    let motor = Motor::new(2.866, thrust_curve, None, Some(3.737))?;

    let rocket = Rocket::builder(16.4, motor, 0.0157)
        .cd_rocket_at_ma(DragCoefficient::from_fn(|mach| 0.42 + 0.08 * mach * mach))
        .h_second_rail_button(0.8)
        .build()?;

    // High-desert launch site
    let conditions = LaunchConditions::builder(86_400.0, 35.0, 5.18)
        .launch_rail_elevation(86.0)
        .launch_rail_direction(0.0)
        .latitude(32.99)
        .altitude(1401.0)
        .mean_wind_speed(3.0)
        .wind_heading(90.0)
        .build()?;

    let airbrakes = Airbrakes::new(3, 0.004, 1.17, 41.35, 5.5, None)?;

    println!("Motor:");
    println!(
        "  total impulse: {:.1} Ns over a {:.2} s burn ({:.0} N average)",
        rocket.motor().total_impulse(),
        rocket.motor().burn_time(),
        rocket.motor().average_thrust()
    );
    println!("  fuel mass: {:.3} kg", rocket.motor().fuel_mass());
    for time in [0.0, 1.0, 2.0, 3.0, 3.7] {
        println!(
            "  t={:>4.1} s  thrust {:>6.0} N  fuel remaining {:.3} kg",
            time,
            rocket.motor().thrust_at(time),
            rocket.motor().fuel_mass_at(time)
        );
    }

    println!("Rocket:");
    println!("  dry mass: {:.2} kg, liftoff mass: {:.2} kg", rocket.dry_mass(), rocket.total_mass());
    for mach in [0.0, 0.5, 1.0, 1.5] {
        println!("  Ma {:.1}  Cd*A {:.5} m²", mach, rocket.cd_a_rocket(mach));
    }

    println!("Launch site:");
    println!("  pressure: {:.0} Pa", conditions.launchpad_pressure());
    println!("  temperature: {:.2} K", conditions.launchpad_temp());
    println!("  gravity: {:.5} m/s²", conditions.local_gravity());
    println!(
        "  rail: {:.2} m at {:.0} deg elevation",
        conditions.l_launch_rail(),
        conditions.launch_rail_elevation()
    );

    println!("Airbrakes:");
    println!(
        "  {} flaps of {:.4} m² (Cd {:.2}), deploy {:.1} deg/s, retract {:.1} deg/s",
        airbrakes.num_flaps(),
        airbrakes.a_flap(),
        airbrakes.cd_brakes(),
        airbrakes.max_deployment_rate(),
        airbrakes.max_retraction_rate()
    );

    let flight = PastFlight::new(&rocket, &conditions, Some(3128.0), Some("Summer launch".into()));
    if let (Some(name), Some(apogee)) = (&flight.name, flight.apogee) {
        println!("Past flight \"{}\" reached {:.0} m", name, apogee);
    }

    Ok(())
}
