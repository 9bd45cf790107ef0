use crate::errors::SimulationError;

/// Airbrake flap geometry, drag coefficient and actuation limits. When no
/// retraction rate is given the mechanism is assumed symmetric and the
/// deployment rate is reused.
#[derive(Debug, Clone, PartialEq)]
pub struct Airbrakes {
    num_flaps: u32,
    a_flap: f64,
    cd_brakes: f64,
    max_deployment_angle: f64,
    max_deployment_rate: f64,
    max_retraction_rate: f64,
}

impl Airbrakes {
    pub fn new(
        num_flaps: u32,
        a_flap: f64,
        cd_brakes: f64,
        max_deployment_angle: f64,
        max_deployment_rate: f64,
        max_retraction_rate: Option<f64>,
    ) -> Result<Self, SimulationError> {
        if num_flaps == 0 {
            return Err(SimulationError::NoFlaps);
        }
        if a_flap <= 0.0 {
            return Err(SimulationError::NonPositiveField {
                field: "a_flap",
                value: a_flap,
            });
        }
        if max_deployment_rate <= 0.0 {
            return Err(SimulationError::NonPositiveField {
                field: "max_deployment_rate",
                value: max_deployment_rate,
            });
        }
        let max_retraction_rate = match max_retraction_rate {
            Some(rate) if rate <= 0.0 => {
                return Err(SimulationError::NonPositiveField {
                    field: "max_retraction_rate",
                    value: rate,
                });
            }
            Some(rate) => rate,
            None => max_deployment_rate,
        };

        Ok(Airbrakes {
            num_flaps,
            a_flap,
            cd_brakes,
            max_deployment_angle,
            max_deployment_rate,
            max_retraction_rate,
        })
    }

    pub fn num_flaps(&self) -> u32 {
        self.num_flaps
    }

    /// Area of a single flap (m²).
    pub fn a_flap(&self) -> f64 {
        self.a_flap
    }

    pub fn cd_brakes(&self) -> f64 {
        self.cd_brakes
    }

    pub fn max_deployment_angle(&self) -> f64 {
        self.max_deployment_angle
    }

    pub fn max_deployment_rate(&self) -> f64 {
        self.max_deployment_rate
    }

    pub fn max_retraction_rate(&self) -> f64 {
        self.max_retraction_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retraction_rate_defaults_to_deployment_rate() {
        let brakes = Airbrakes::new(3, 0.004, 1.17, 41.35, 5.5, None).unwrap();
        assert_eq!(brakes.max_retraction_rate(), 5.5);
    }

    #[test]
    fn test_distinct_retraction_rate_is_kept() {
        let brakes = Airbrakes::new(3, 0.004, 1.17, 41.35, 5.5, Some(2.0)).unwrap();
        assert_eq!(brakes.max_deployment_rate(), 5.5);
        assert_eq!(brakes.max_retraction_rate(), 2.0);
    }

    #[test]
    fn test_geometry_accessors() {
        let brakes = Airbrakes::new(3, 0.004, 1.17, 41.35, 5.5, None).unwrap();
        assert_eq!(brakes.num_flaps(), 3);
        assert_eq!(brakes.a_flap(), 0.004);
        assert_eq!(brakes.cd_brakes(), 1.17);
        assert_eq!(brakes.max_deployment_angle(), 41.35);
    }

    #[test]
    fn test_rejects_zero_flaps() {
        let result = Airbrakes::new(0, 0.004, 1.17, 41.35, 5.5, None);
        assert_eq!(result, Err(SimulationError::NoFlaps));
    }

    #[test]
    fn test_rejects_non_positive_rates_and_areas() {
        let result = Airbrakes::new(3, 0.0, 1.17, 41.35, 5.5, None);
        assert_eq!(
            result,
            Err(SimulationError::NonPositiveField {
                field: "a_flap",
                value: 0.0
            })
        );

        let result = Airbrakes::new(3, 0.004, 1.17, 41.35, 0.0, None);
        assert_eq!(
            result,
            Err(SimulationError::NonPositiveField {
                field: "max_deployment_rate",
                value: 0.0
            })
        );

        let result = Airbrakes::new(3, 0.004, 1.17, 41.35, 5.5, Some(-1.0));
        assert_eq!(
            result,
            Err(SimulationError::NonPositiveField {
                field: "max_retraction_rate",
                value: -1.0
            })
        );
    }
}
