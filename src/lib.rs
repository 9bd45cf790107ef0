pub mod constants;
pub mod entities;
pub mod errors;
pub mod physics;
pub mod utils;

pub use constants::*;
pub use entities::airbrakes::Airbrakes;
pub use entities::launch_conditions::{LaunchConditions, LaunchConditionsBuilder};
pub use entities::motor::Motor;
pub use entities::past_flight::PastFlight;
pub use entities::rocket::{Rocket, RocketBuilder};
pub use errors::SimulationError;

// Re-export commonly used items from physics
pub use physics::drag::DragCoefficient;
pub use physics::gravity::local_gravity;

// Re-export commonly used utilities
pub use utils::curve::Curve;
