use crate::constants::{
    FREE_AIR_CORRECTION, IGF_EQUATORIAL_GRAVITY, IGF_SIN_SQ_2_COEFFICIENT, IGF_SIN_SQ_COEFFICIENT,
    STANDARD_GRAVITY,
};

/// Acceleration due to gravity at a latitude (deg) and altitude above sea
/// level (m), from the International Gravity Formula with a free-air
/// correction for altitude.
pub fn local_gravity(latitude: f64, altitude: f64) -> f64 {
    let phi = latitude.to_radians();
    let surface_gravity = IGF_EQUATORIAL_GRAVITY
        * (1.0 + IGF_SIN_SQ_COEFFICIENT * phi.sin().powi(2)
            - IGF_SIN_SQ_2_COEFFICIENT * (2.0 * phi).sin().powi(2));

    surface_gravity - FREE_AIR_CORRECTION * altitude
}

/// Gravity used for a launch site. An explicit value wins, then a
/// latitude/altitude pair, then the standard constant. Presence decides
/// each step, so latitude 0.0 (the equator) still selects the second
/// branch.
pub fn resolve_local_gravity(
    explicit: Option<f64>,
    latitude: Option<f64>,
    altitude: Option<f64>,
) -> f64 {
    match (explicit, latitude) {
        (Some(gravity), _) => gravity,
        (None, Some(latitude)) => local_gravity(latitude, altitude.unwrap_or(0.0)),
        (None, None) => STANDARD_GRAVITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_equator_sea_level() {
        assert_abs_diff_eq!(local_gravity(0.0, 0.0), 9.780327, epsilon = 1e-9);
    }

    #[test]
    fn test_pole_sea_level() {
        // sin 90° = 1, sin 180° = 0
        let expected = IGF_EQUATORIAL_GRAVITY * (1.0 + IGF_SIN_SQ_COEFFICIENT);
        assert_abs_diff_eq!(local_gravity(90.0, 0.0), expected, epsilon = 1e-9);
        assert!(local_gravity(90.0, 0.0) > local_gravity(0.0, 0.0));
    }

    #[test]
    fn test_mid_latitude_with_altitude() {
        // reference value for a 45° site at 1400 m
        assert_abs_diff_eq!(local_gravity(45.0, 1400.0), 9.80188, epsilon = 1e-4);
    }

    #[test]
    fn test_altitude_reduces_gravity() {
        let site = local_gravity(32.99, 0.0);
        let elevated = local_gravity(32.99, 1401.0);
        assert!(elevated < site);
        assert_abs_diff_eq!(site - elevated, FREE_AIR_CORRECTION * 1401.0, epsilon = 1e-12);
    }

    #[test]
    fn test_resolution_explicit_wins() {
        let gravity = resolve_local_gravity(Some(9.7), Some(45.0), Some(1400.0));
        assert_eq!(gravity, 9.7);
    }

    #[test]
    fn test_resolution_latitude_branch() {
        let gravity = resolve_local_gravity(None, Some(45.0), Some(1400.0));
        assert_abs_diff_eq!(gravity, local_gravity(45.0, 1400.0), epsilon = 1e-12);
    }

    #[test]
    fn test_resolution_altitude_defaults_to_sea_level() {
        let gravity = resolve_local_gravity(None, Some(45.0), None);
        assert_abs_diff_eq!(gravity, local_gravity(45.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_resolution_equator_is_not_the_global_default() {
        let gravity = resolve_local_gravity(None, Some(0.0), None);
        assert_abs_diff_eq!(gravity, 9.780327, epsilon = 1e-9);
        assert!(gravity != STANDARD_GRAVITY);
    }

    #[test]
    fn test_resolution_global_default() {
        assert_eq!(resolve_local_gravity(None, None, None), STANDARD_GRAVITY);
        // an unused altitude alone does not select the latitude branch
        assert_eq!(
            resolve_local_gravity(None, None, Some(1400.0)),
            STANDARD_GRAVITY
        );
    }
}
