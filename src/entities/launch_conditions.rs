use crate::constants::{
    CELSIUS_TO_KELVIN_OFFSET, DEFAULT_LAUNCH_RAIL_DIRECTION, DEFAULT_LAUNCH_RAIL_ELEVATION,
    STANDARD_T_LAPSE_RATE,
};
use crate::errors::SimulationError;
use crate::physics::gravity;

/// Atmosphere, rail geometry, gravity and wind at the launch site.
/// Temperature is taken in °C and stored in Kelvin; gravity is resolved
/// once at build from an explicit value, a latitude/altitude pair, or the
/// standard constant, in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConditions {
    launchpad_pressure: f64,
    launchpad_temp: f64, // K
    l_launch_rail: f64,
    launch_rail_elevation: f64,
    launch_rail_direction: f64,
    local_t_lapse_rate: f64,
    local_gravity: f64,
    mean_wind_speed: f64,
    wind_heading: f64,
}

impl LaunchConditions {
    /// Starts a builder from the required fields: pressure (Pa),
    /// temperature (°C) and rail length (m).
    pub fn builder(
        launchpad_pressure: f64,
        launchpad_temp: f64,
        l_launch_rail: f64,
    ) -> LaunchConditionsBuilder {
        LaunchConditionsBuilder {
            launchpad_pressure,
            launchpad_temp,
            l_launch_rail,
            launch_rail_elevation: DEFAULT_LAUNCH_RAIL_ELEVATION,
            launch_rail_direction: DEFAULT_LAUNCH_RAIL_DIRECTION,
            local_t_lapse_rate: STANDARD_T_LAPSE_RATE,
            local_gravity: None,
            latitude: None,
            altitude: None,
            mean_wind_speed: 0.0,
            wind_heading: 0.0,
        }
    }

    pub fn launchpad_pressure(&self) -> f64 {
        self.launchpad_pressure
    }

    /// Launchpad temperature in Kelvin.
    pub fn launchpad_temp(&self) -> f64 {
        self.launchpad_temp
    }

    pub fn l_launch_rail(&self) -> f64 {
        self.l_launch_rail
    }

    /// Angle of the rail from horizontal (deg), 90 is vertical.
    pub fn launch_rail_elevation(&self) -> f64 {
        self.launch_rail_elevation
    }

    /// Compass heading the rail leans towards (deg).
    pub fn launch_rail_direction(&self) -> f64 {
        self.launch_rail_direction
    }

    pub fn local_t_lapse_rate(&self) -> f64 {
        self.local_t_lapse_rate
    }

    pub fn local_gravity(&self) -> f64 {
        self.local_gravity
    }

    pub fn mean_wind_speed(&self) -> f64 {
        self.mean_wind_speed
    }

    /// Compass heading the mean wind blows towards (deg).
    pub fn wind_heading(&self) -> f64 {
        self.wind_heading
    }
}

pub struct LaunchConditionsBuilder {
    launchpad_pressure: f64,
    launchpad_temp: f64, // °C, converted once at build
    l_launch_rail: f64,
    launch_rail_elevation: f64,
    launch_rail_direction: f64,
    local_t_lapse_rate: f64,
    local_gravity: Option<f64>,
    latitude: Option<f64>,
    altitude: Option<f64>,
    mean_wind_speed: f64,
    wind_heading: f64,
}

impl LaunchConditionsBuilder {
    pub fn launch_rail_elevation(mut self, degrees: f64) -> Self {
        self.launch_rail_elevation = degrees;
        self
    }

    pub fn launch_rail_direction(mut self, degrees: f64) -> Self {
        self.launch_rail_direction = degrees;
        self
    }

    pub fn local_t_lapse_rate(mut self, kelvin_per_m: f64) -> Self {
        self.local_t_lapse_rate = kelvin_per_m;
        self
    }

    pub fn local_gravity(mut self, gravity: f64) -> Self {
        self.local_gravity = Some(gravity);
        self
    }

    pub fn latitude(mut self, degrees: f64) -> Self {
        self.latitude = Some(degrees);
        self
    }

    pub fn altitude(mut self, meters: f64) -> Self {
        self.altitude = Some(meters);
        self
    }

    pub fn mean_wind_speed(mut self, speed: f64) -> Self {
        self.mean_wind_speed = speed;
        self
    }

    pub fn wind_heading(mut self, degrees: f64) -> Self {
        self.wind_heading = degrees;
        self
    }

    pub fn build(self) -> Result<LaunchConditions, SimulationError> {
        if self.launchpad_pressure <= 0.0 {
            return Err(SimulationError::NonPositiveField {
                field: "launchpad_pressure",
                value: self.launchpad_pressure,
            });
        }
        if self.l_launch_rail <= 0.0 {
            return Err(SimulationError::NonPositiveField {
                field: "l_launch_rail",
                value: self.l_launch_rail,
            });
        }
        if !(0.0..=90.0).contains(&self.launch_rail_elevation) {
            return Err(SimulationError::AngleOutOfRange {
                field: "launch_rail_elevation",
                value: self.launch_rail_elevation,
                min: 0.0,
                max: 90.0,
            });
        }
        if !(0.0..=360.0).contains(&self.launch_rail_direction) {
            return Err(SimulationError::AngleOutOfRange {
                field: "launch_rail_direction",
                value: self.launch_rail_direction,
                min: 0.0,
                max: 360.0,
            });
        }
        if !(0.0..=360.0).contains(&self.wind_heading) {
            return Err(SimulationError::AngleOutOfRange {
                field: "wind_heading",
                value: self.wind_heading,
                min: 0.0,
                max: 360.0,
            });
        }
        if self.mean_wind_speed < 0.0 {
            return Err(SimulationError::NegativeField {
                field: "mean_wind_speed",
                value: self.mean_wind_speed,
            });
        }

        let local_gravity =
            gravity::resolve_local_gravity(self.local_gravity, self.latitude, self.altitude);

        Ok(LaunchConditions {
            launchpad_pressure: self.launchpad_pressure,
            launchpad_temp: self.launchpad_temp + CELSIUS_TO_KELVIN_OFFSET,
            l_launch_rail: self.l_launch_rail,
            launch_rail_elevation: self.launch_rail_elevation,
            launch_rail_direction: self.launch_rail_direction,
            local_t_lapse_rate: self.local_t_lapse_rate,
            local_gravity,
            mean_wind_speed: self.mean_wind_speed,
            wind_heading: self.wind_heading,
        })
    }
}
