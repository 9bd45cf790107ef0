pub mod airbrakes;
pub mod launch_conditions;
pub mod motor;
pub mod past_flight;
pub mod rocket;
