//! Spherical Mercator projection onto the map drawing surface.

use std::f64::consts::FRAC_PI_4;

/// Ratio between surface width and projection scale.
const WIDTH_TO_SCALE: f64 = 6.5;

/// Vertical placement of the origin as a fraction divisor of height.
const HEIGHT_TO_ORIGIN: f64 = 1.5;

/// Mercator projection sized to a drawing surface.
///
/// Longitude maps linearly to x; latitude maps through
/// `ln(tan(pi/4 + lat/2))` to y, flipped so north is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    scale: f64,
    translate: (f64, f64),
}

impl Projection {
    /// Creates the projection for a surface of the given pixel size.
    ///
    /// Scale is `width / 6.5`; the origin sits at `(width / 2, height / 1.5)`.
    pub fn for_surface(width: f64, height: f64) -> Self {
        Self {
            scale: width / WIDTH_TO_SCALE,
            translate: (width / 2.0, height / HEIGHT_TO_ORIGIN),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translate(&self) -> (f64, f64) {
        self.translate
    }

    /// Projects `[longitude, latitude]` in degrees to pixel coordinates.
    ///
    /// Returns `None` for non-finite input, for latitudes at or beyond the
    /// poles, and for any result that is not finite.
    pub fn project(&self, [lon, lat]: [f64; 2]) -> Option<(f64, f64)> {
        if !lon.is_finite() || !lat.is_finite() || lat.abs() >= 90.0 {
            return None;
        }

        let x = lon.to_radians();
        let y = (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();

        let px = self.translate.0 + self.scale * x;
        let py = self.translate.1 - self.scale * y;

        (px.is_finite() && py.is_finite()).then_some((px, py))
    }
}
