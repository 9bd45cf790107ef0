use crate::errors::SimulationError;
use crate::utils::curve::Curve;

/// A motor characterized by its thrust curve. Total impulse, burn time
/// and the fuel depletion curve are derived once at construction.
///
/// When no measured fuel mass curve is available the depletion curve is
/// derived from a total fuel mass, assuming fuel burn is proportional to
/// impulse. With neither, the motor carries no fuel data and the curve is
/// flat zero over the burn.
#[derive(Debug, Clone, PartialEq)]
pub struct Motor {
    dry_mass: f64,
    thrust_curve: Curve,
    total_impulse: f64,
    burn_time: f64,
    fuel_mass_curve: Curve,
    fuel_mass: f64,
}

impl Motor {
    pub fn new(
        dry_mass: f64,
        thrust_curve: Curve,
        fuel_mass_curve: Option<Curve>,
        fuel_mass: Option<f64>,
    ) -> Result<Self, SimulationError> {
        if dry_mass <= 0.0 {
            return Err(SimulationError::NonPositiveField {
                field: "dry_mass",
                value: dry_mass,
            });
        }
        if thrust_curve.len() < 2 {
            return Err(SimulationError::TooFewThrustSamples(thrust_curve.len()));
        }
        if let Some(&(time, thrust)) = thrust_curve
            .samples()
            .iter()
            .find(|&&(_, thrust)| thrust < 0.0)
        {
            return Err(SimulationError::NegativeThrust { time, thrust });
        }

        let total_impulse = thrust_curve.trapezoidal_integral();
        let burn_time = thrust_curve.end_time();

        let (fuel_mass, fuel_mass_curve) = match (fuel_mass_curve, fuel_mass) {
            (Some(curve), _) => {
                validate_fuel_mass_curve(&curve)?;
                (curve.first_value(), curve)
            }
            (None, Some(total)) => {
                if total < 0.0 {
                    return Err(SimulationError::NegativeField {
                        field: "fuel_mass",
                        value: total,
                    });
                }
                if total_impulse <= 0.0 {
                    return Err(SimulationError::ZeroTotalImpulse);
                }
                let curve = deplete_proportionally(&thrust_curve, total_impulse, total)?;
                (total, curve)
            }
            (None, None) => {
                let curve = Curve::new(vec![(0.0, 0.0), (burn_time, 0.0)])?;
                (0.0, curve)
            }
        };

        Ok(Motor {
            dry_mass,
            thrust_curve,
            total_impulse,
            burn_time,
            fuel_mass_curve,
            fuel_mass,
        })
    }

    pub fn dry_mass(&self) -> f64 {
        self.dry_mass
    }

    pub fn thrust_curve(&self) -> &Curve {
        &self.thrust_curve
    }

    /// Total impulse of the motor (Ns).
    pub fn total_impulse(&self) -> f64 {
        self.total_impulse
    }

    /// Time from ignition to thrust cutoff (s).
    pub fn burn_time(&self) -> f64 {
        self.burn_time
    }

    pub fn fuel_mass_curve(&self) -> &Curve {
        &self.fuel_mass_curve
    }

    /// Fuel mass before ignition (kg).
    pub fn fuel_mass(&self) -> f64 {
        self.fuel_mass
    }

    pub fn thrust_at(&self, time: f64) -> f64 {
        self.thrust_curve.value_at(time)
    }

    pub fn fuel_mass_at(&self, time: f64) -> f64 {
        self.fuel_mass_curve.value_at(time)
    }

    pub fn average_thrust(&self) -> f64 {
        self.total_impulse / self.burn_time
    }

    pub fn total_mass(&self) -> f64 {
        self.dry_mass + self.fuel_mass
    }
}

fn validate_fuel_mass_curve(curve: &Curve) -> Result<(), SimulationError> {
    if curve.start_time() != 0.0 {
        return Err(SimulationError::FuelCurveMissingIgnition(curve.start_time()));
    }
    if let Some(pair) = curve.samples().windows(2).find(|pair| pair[1].1 > pair[0].1) {
        return Err(SimulationError::IncreasingFuelMass {
            prev: pair[0].1,
            next: pair[1].1,
        });
    }
    if curve.last_value() < 0.0 {
        return Err(SimulationError::NegativeField {
            field: "fuel_mass_curve",
            value: curve.last_value(),
        });
    }
    Ok(())
}

/// Remaining fuel at each thrust sample time, apportioning the total fuel
/// mass by the share of total impulse spent over each interval.
fn deplete_proportionally(
    thrust_curve: &Curve,
    total_impulse: f64,
    fuel_mass: f64,
) -> Result<Curve, SimulationError> {
    let samples = thrust_curve.samples();
    let mut depleted = Vec::with_capacity(samples.len());
    let mut remaining = fuel_mass;
    depleted.push((samples[0].0, remaining));

    for pair in samples.windows(2) {
        let (t0, thrust0) = pair[0];
        let (t1, thrust1) = pair[1];
        let interval_impulse = (thrust0 + thrust1) / 2.0 * (t1 - t0);
        remaining -= interval_impulse / total_impulse * fuel_mass;
        depleted.push((t1, remaining));
    }

    Curve::new(depleted)
}
