use crate::constants::DEFAULT_H_SECOND_RAIL_BUTTON;
use crate::errors::SimulationError;
use crate::physics::drag::DragCoefficient;

use super::motor::Motor;

/// The full vehicle: airframe plus its motor. `a_rocket` is the
/// cross-sectional reference area the drag coefficient was characterized
/// against, so drag area is always their product.
#[derive(Debug)]
pub struct Rocket {
    rocket_mass: f64,
    motor: Motor,
    a_rocket: f64,
    cd_rocket_at_ma: DragCoefficient,
    h_second_rail_button: f64,
    dry_mass: f64,
}

impl Rocket {
    pub fn builder(rocket_mass: f64, motor: Motor, a_rocket: f64) -> RocketBuilder {
        RocketBuilder {
            rocket_mass,
            motor,
            a_rocket,
            cd_rocket_at_ma: DragCoefficient::default(),
            h_second_rail_button: DEFAULT_H_SECOND_RAIL_BUTTON,
        }
    }

    /// Airframe mass without the motor (kg).
    pub fn rocket_mass(&self) -> f64 {
        self.rocket_mass
    }

    pub fn motor(&self) -> &Motor {
        &self.motor
    }

    pub fn a_rocket(&self) -> f64 {
        self.a_rocket
    }

    pub fn cd_rocket_at_ma(&self) -> &DragCoefficient {
        &self.cd_rocket_at_ma
    }

    /// Height of the second rail button from the bottom of the rocket (m).
    pub fn h_second_rail_button(&self) -> f64 {
        self.h_second_rail_button
    }

    /// Mass of the vehicle without fuel (kg).
    pub fn dry_mass(&self) -> f64 {
        self.dry_mass
    }

    /// Mass of the vehicle with a full motor (kg).
    pub fn total_mass(&self) -> f64 {
        self.dry_mass + self.motor.fuel_mass()
    }

    /// Drag area of the rocket at a Mach number (m²).
    pub fn cd_a_rocket(&self, mach: f64) -> f64 {
        self.cd_rocket_at_ma.at(mach) * self.a_rocket
    }
}

pub struct RocketBuilder {
    rocket_mass: f64,
    motor: Motor,
    a_rocket: f64,
    cd_rocket_at_ma: DragCoefficient,
    h_second_rail_button: f64,
}

impl RocketBuilder {
    pub fn cd_rocket_at_ma(mut self, cd: impl Into<DragCoefficient>) -> Self {
        self.cd_rocket_at_ma = cd.into();
        self
    }

    pub fn h_second_rail_button(mut self, height: f64) -> Self {
        self.h_second_rail_button = height;
        self
    }

    pub fn build(self) -> Result<Rocket, SimulationError> {
        if self.rocket_mass <= 0.0 {
            return Err(SimulationError::NonPositiveField {
                field: "rocket_mass",
                value: self.rocket_mass,
            });
        }
        if self.a_rocket <= 0.0 {
            return Err(SimulationError::NonPositiveField {
                field: "a_rocket",
                value: self.a_rocket,
            });
        }
        if self.h_second_rail_button < 0.0 {
            return Err(SimulationError::NegativeField {
                field: "h_second_rail_button",
                value: self.h_second_rail_button,
            });
        }

        let dry_mass = self.rocket_mass + self.motor.dry_mass();

        Ok(Rocket {
            rocket_mass: self.rocket_mass,
            motor: self.motor,
            a_rocket: self.a_rocket,
            cd_rocket_at_ma: self.cd_rocket_at_ma,
            h_second_rail_button: self.h_second_rail_button,
            dry_mass,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_CD_ROCKET;
    use crate::utils::curve::Curve;
    use approx::assert_abs_diff_eq;

    fn test_motor() -> Motor {
        let thrust = Curve::new(vec![(0.0, 0.0), (1.0, 1000.0), (2.0, 500.0), (3.0, 0.0)]).unwrap();
        Motor::new(1.5, thrust, None, Some(2.0)).unwrap()
    }

    #[test]
    fn test_dry_mass_includes_motor() {
        let rocket = Rocket::builder(18.0, test_motor(), 0.015).build().unwrap();
        assert_eq!(rocket.rocket_mass(), 18.0);
        assert_eq!(rocket.dry_mass(), 19.5);
        assert_eq!(rocket.total_mass(), 21.5);
    }

    #[test]
    fn test_defaults() {
        let rocket = Rocket::builder(18.0, test_motor(), 0.015).build().unwrap();
        assert_eq!(rocket.h_second_rail_button(), DEFAULT_H_SECOND_RAIL_BUTTON);
        assert_abs_diff_eq!(
            rocket.cd_a_rocket(0.3),
            DEFAULT_CD_ROCKET * 0.015,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_constant_drag_area_ignores_mach() {
        let rocket = Rocket::builder(18.0, test_motor(), 0.02)
            .cd_rocket_at_ma(0.5)
            .build()
            .unwrap();
        for mach in [0.0, 0.2, 0.8, 1.1, 2.5] {
            assert_abs_diff_eq!(rocket.cd_a_rocket(mach), 0.01, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_mach_dependent_drag_area() {
        let rocket = Rocket::builder(18.0, test_motor(), 0.02)
            .cd_rocket_at_ma(DragCoefficient::from_fn(|mach| 0.4 + 0.1 * mach))
            .build()
            .unwrap();
        for mach in [0.0, 0.5, 1.0, 2.0] {
            assert_abs_diff_eq!(
                rocket.cd_a_rocket(mach),
                (0.4 + 0.1 * mach) * 0.02,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_custom_rail_button_height() {
        let rocket = Rocket::builder(18.0, test_motor(), 0.015)
            .h_second_rail_button(0.85)
            .build()
            .unwrap();
        assert_eq!(rocket.h_second_rail_button(), 0.85);
    }

    #[test]
    fn test_rejects_non_positive_masses_and_areas() {
        let result = Rocket::builder(0.0, test_motor(), 0.015).build();
        assert_eq!(
            result.unwrap_err(),
            SimulationError::NonPositiveField {
                field: "rocket_mass",
                value: 0.0
            }
        );

        let result = Rocket::builder(18.0, test_motor(), -0.01).build();
        assert_eq!(
            result.unwrap_err(),
            SimulationError::NonPositiveField {
                field: "a_rocket",
                value: -0.01
            }
        );

        let result = Rocket::builder(18.0, test_motor(), 0.015)
            .h_second_rail_button(-0.1)
            .build();
        assert_eq!(
            result.unwrap_err(),
            SimulationError::NegativeField {
                field: "h_second_rail_button",
                value: -0.1
            }
        );
    }
}
