use super::launch_conditions::LaunchConditions;
use super::rocket::Rocket;

/// Record of a flown flight, pairing the configuration with the observed
/// apogee. Several records may borrow the same rocket and launch
/// conditions when comparing simulated projections against real flights.
#[derive(Debug)]
pub struct PastFlight<'a> {
    pub rocket: &'a Rocket,
    pub launch_conditions: &'a LaunchConditions,
    pub apogee: Option<f64>, // m
    pub name: Option<String>,
}

impl<'a> PastFlight<'a> {
    pub fn new(
        rocket: &'a Rocket,
        launch_conditions: &'a LaunchConditions,
        apogee: Option<f64>,
        name: Option<String>,
    ) -> Self {
        PastFlight {
            rocket,
            launch_conditions,
            apogee,
            name,
        }
    }
}
