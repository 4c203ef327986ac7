use bevy::prelude::*;

use crate::catalog::Bounds;

/// Default padding between fitted bounds and the viewport edge, in logical
/// pixels.
pub const FIT_PADDING: f32 = 40.0;

/// Extent floor for a zero-width or zero-height axis. Catalog validation
/// rejects degenerate constellations outright; this keeps the math total
/// for anything that slips past it.
const MIN_EXTENT: f32 = 1.0;

/// A uniform scale and offset that centers a plane-space bounding box in a
/// viewport. Computed once per selection (and per resize) and cached in the
/// view state, never per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub scale:  f32,
    pub offset: Vec2,
}

impl Fit {
    /// Fits `bounds` into `viewport` (logical pixels), leaving `padding` on
    /// every side. The scale is uniform, so the tighter axis decides it, and
    /// the offset drops the bounds center onto the viewport center.
    pub fn compute(bounds: Bounds, viewport: Vec2, padding: f32) -> Self {
        let size = bounds.size();
        let size = Vec2::new(floored(size.x), floored(size.y));
        let scale = ((viewport - 2.0 * padding) / size).min_element();

        Self {
            scale,
            offset: -bounds.center() * scale,
        }
    }

    /// Maps a plane-space position into the fitted view. The result is still
    /// plane-space: y-down, origin at the viewport center.
    pub fn apply(&self, position: Vec2) -> Vec2 { position * self.scale + self.offset }
}

const fn floored(extent: f32) -> f32 {
    if extent == 0.0 { MIN_EXTENT } else { extent }
}

#[cfg(test)]
mod fit_tests {
    use super::*;

    /// 200 x 100 plane-units centered on (50, 50).
    const TEST_BOUNDS: Bounds = Bounds {
        min: Vec2::new(-50.0, 0.0),
        max: Vec2::new(150.0, 100.0),
    };

    #[test]
    fn test_scale_follows_min_axis_formula() {
        let fit = Fit::compute(TEST_BOUNDS, Vec2::new(800.0, 600.0), 40.0);

        // width is the tighter axis: 720 / 200 beats 520 / 100
        assert_eq!(fit.scale, (800.0 - 80.0) / 200.0);
        assert_eq!(fit.offset, Vec2::splat(-180.0));
    }

    #[test]
    fn test_height_decides_when_it_is_tighter() {
        let tall = Bounds {
            min: Vec2::ZERO,
            max: Vec2::new(100.0, 500.0),
        };
        let fit = Fit::compute(tall, Vec2::new(800.0, 600.0), 40.0);

        assert_eq!(fit.scale, (600.0 - 80.0) / 500.0);
        assert!(fit.scale < (800.0 - 80.0) / 100.0);
    }

    #[test]
    fn test_bounds_center_lands_on_viewport_center() {
        let offset_bounds = Bounds {
            min: Vec2::new(-300.0, -120.0),
            max: Vec2::new(-100.0, 40.0),
        };
        let fit = Fit::compute(offset_bounds, Vec2::new(1024.0, 768.0), 40.0);

        assert_eq!(fit.apply(offset_bounds.center()), Vec2::ZERO);
    }

    #[test]
    fn test_binding_axis_touches_the_padded_edge() {
        let fit = Fit::compute(TEST_BOUNDS, Vec2::new(800.0, 600.0), 40.0);

        // x binds, so the corners land exactly padding away from the x edges
        assert_eq!(fit.apply(Vec2::new(150.0, 100.0)), Vec2::new(360.0, 180.0));
        assert_eq!(fit.apply(Vec2::new(-50.0, 0.0)), Vec2::new(-360.0, -180.0));
    }

    #[test]
    fn test_padding_shrinks_the_scale() {
        let bounds = TEST_BOUNDS;
        let padded = Fit::compute(bounds, Vec2::new(800.0, 600.0), 40.0);
        let tight = Fit::compute(bounds, Vec2::new(800.0, 600.0), 0.0);

        assert!(tight.scale > padded.scale);
        assert_eq!(tight.scale, 800.0 / 200.0);
    }

    #[test]
    fn test_zero_extent_axis_is_floored_not_divided() {
        let flat = Bounds {
            min: Vec2::new(0.0, 5.0),
            max: Vec2::new(10.0, 5.0),
        };
        let fit = Fit::compute(flat, Vec2::new(800.0, 600.0), 40.0);

        assert!(fit.scale.is_finite());
        assert_eq!(fit.scale, (800.0 - 80.0) / 10.0);
        assert_eq!(fit.offset.y, -360.0);
    }

    #[test]
    fn test_same_inputs_produce_the_same_fit() {
        let first = Fit::compute(TEST_BOUNDS, Vec2::new(800.0, 600.0), 40.0);
        let second = Fit::compute(TEST_BOUNDS, Vec2::new(800.0, 600.0), 40.0);

        assert_eq!(first, second);
    }
}
