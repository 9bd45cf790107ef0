use std::fmt;

use crate::constants::DEFAULT_CD_ROCKET;

/// Drag coefficient characterization. Wind-tunnel or CFD data usually
/// arrives either as a single constant or as a function of Mach number;
/// both evaluate through [`DragCoefficient::at`] so downstream code never
/// branches on the representation.
pub enum DragCoefficient {
    Constant(f64),
    FunctionOfMach(Box<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl DragCoefficient {
    pub fn from_fn<F>(cd_at_mach: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        DragCoefficient::FunctionOfMach(Box::new(cd_at_mach))
    }

    pub fn at(&self, mach: f64) -> f64 {
        match self {
            DragCoefficient::Constant(cd) => *cd,
            DragCoefficient::FunctionOfMach(cd_fn) => cd_fn(mach),
        }
    }
}

impl From<f64> for DragCoefficient {
    fn from(cd: f64) -> Self {
        DragCoefficient::Constant(cd)
    }
}

impl Default for DragCoefficient {
    fn default() -> Self {
        DragCoefficient::Constant(DEFAULT_CD_ROCKET)
    }
}

impl fmt::Debug for DragCoefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragCoefficient::Constant(cd) => f.debug_tuple("Constant").field(cd).finish(),
            DragCoefficient::FunctionOfMach(_) => f.write_str("FunctionOfMach(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_constant_ignores_mach() {
        let cd = DragCoefficient::Constant(0.52);
        assert_eq!(cd.at(0.0), 0.52);
        assert_eq!(cd.at(0.3), 0.52);
        assert_eq!(cd.at(1.8), 0.52);
    }

    #[test]
    fn test_function_evaluates_at_mach() {
        let cd = DragCoefficient::from_fn(|mach| 0.4 + 0.1 * mach);
        assert_abs_diff_eq!(cd.at(0.0), 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(cd.at(0.5), 0.45, epsilon = 1e-12);
        assert_abs_diff_eq!(cd.at(2.0), 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_from_f64() {
        let cd = DragCoefficient::from(0.3);
        assert_eq!(cd.at(1.0), 0.3);
    }

    #[test]
    fn test_default_coefficient() {
        assert_eq!(DragCoefficient::default().at(0.7), DEFAULT_CD_ROCKET);
    }
}
