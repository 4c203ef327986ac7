//! Equatorial-to-plane projection for the chart.

use bevy::prelude::*;

/// Right ascension hour mapped to the horizontal center of the plane.
pub const RA_CENTER_HOURS: f32 = 12.0;

/// Horizontal plane-units per hour of right ascension.
pub const PLANE_UNITS_PER_RA_HOUR: f32 = 40.0;

/// Vertical plane-units per degree of declination.
pub const PLANE_UNITS_PER_DEC_DEGREE: f32 = 10.0;

/// Projects equatorial coordinates onto the chart plane.
///
/// The plane is y-down with its origin at the viewport center, so positive
/// declination lands at negative y and northern stars end up above center
/// once the render layer flips the axis back. The constants spread the
/// zodiac across a few hundred plane-units; there is nothing more physical
/// to them than that.
pub const fn plane_position(ra_hours: f32, dec_degrees: f32) -> Vec2 {
    Vec2::new(
        (ra_hours - RA_CENTER_HOURS) * PLANE_UNITS_PER_RA_HOUR,
        -dec_degrees * PLANE_UNITS_PER_DEC_DEGREE,
    )
}

#[cfg(test)]
mod projection_tests {
    use super::*;

    #[test]
    fn test_center_of_sky_lands_at_origin() {
        assert_eq!(plane_position(12.0, 0.0), Vec2::ZERO);
    }

    #[test]
    fn test_follows_linear_formula() {
        let projected = plane_position(2.1196, 23.4624);
        assert_eq!(projected.x, (2.1196 - 12.0) * 40.0);
        assert_eq!(projected.y, -23.4624 * 10.0);
    }

    #[test]
    fn test_positive_declination_maps_to_negative_y() {
        assert!(plane_position(12.0, 45.0).y < 0.0);
        assert!(plane_position(12.0, -45.0).y > 0.0);
    }

    #[test]
    fn test_ra_east_of_center_maps_to_positive_x() {
        assert!(plane_position(18.0, 0.0).x > 0.0);
        assert!(plane_position(6.0, 0.0).x < 0.0);
    }

    #[test]
    fn test_same_input_same_output() {
        assert_eq!(
            plane_position(16.4901, -26.4319),
            plane_position(16.4901, -26.4319)
        );
    }
}
