// Physical Constants
pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s²
pub const STANDARD_T_LAPSE_RATE: f64 = -0.0065; // K/m
pub const CELSIUS_TO_KELVIN_OFFSET: f64 = 273.15;
pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0; // Pa

// Gravity Model Constants (International Gravity Formula, 1967)
pub const IGF_EQUATORIAL_GRAVITY: f64 = 9.780327; // m/s²
pub const IGF_SIN_SQ_COEFFICIENT: f64 = 0.0053024;
pub const IGF_SIN_SQ_2_COEFFICIENT: f64 = 0.0000058;
pub const FREE_AIR_CORRECTION: f64 = 3.086e-6; // m/s² per m of altitude

// Rocket Defaults
pub const DEFAULT_CD_ROCKET: f64 = 0.45;
pub const DEFAULT_H_SECOND_RAIL_BUTTON: f64 = 0.69; // m

// Launch Rail Defaults
pub const DEFAULT_LAUNCH_RAIL_ELEVATION: f64 = 90.0; // deg, vertical
pub const DEFAULT_LAUNCH_RAIL_DIRECTION: f64 = 0.0; // deg, north
