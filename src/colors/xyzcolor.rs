//! The CIE 1931 XYZ space, used here only as the stage between linear-light sRGB and CIELAB. Colors
//! are relative to the D65 white point with Y normalized so that reference white has Y = 1.

use rulinalg::vector::Vector;

use crate::color::{Color, RGBColor};
use crate::consts::{SRGB_DECODE_BREAKPOINT, SRGB_ENCODE_BREAKPOINT, SRGB_TO_XYZ, XYZ_TO_SRGB};

/// A point in the CIE 1931 XYZ color space under D65.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X tristimulus value.
    pub x: f64,
    /// The Y tristimulus value, i.e., relative luminance.
    pub y: f64,
    /// The Z tristimulus value.
    pub z: f64,
}

/// Undoes the sRGB transfer curve: encoded [0, 1] component to linear light.
pub fn srgb_decode(c: f64) -> f64 {
    if c > SRGB_DECODE_BREAKPOINT {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// Applies the sRGB transfer curve: linear light to encoded [0, 1] component. Negative linear values
/// (out of the sRGB gamut) encode to 0.
pub fn srgb_encode(c: f64) -> f64 {
    if c > SRGB_ENCODE_BREAKPOINT {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * c.max(0.0)
    }
}

impl Color for XYZColor {
    fn from_rgb(rgb: RGBColor) -> XYZColor {
        let linear: Vec<f64> = rgb.unit_components().iter().map(|&c| srgb_decode(c)).collect();
        let xyz = &*SRGB_TO_XYZ * Vector::new(linear);
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }

    /// Converts back to sRGB. Colors outside the sRGB gamut (and any XYZ value is allowed here) are
    /// clamped per channel into [0, 255].
    fn to_rgb(&self) -> RGBColor {
        let linear = &*XYZ_TO_SRGB * Vector::new(vec![self.x, self.y, self.z]);
        RGBColor::from_unit(
            srgb_encode(linear[0]),
            srgb_encode(linear[1]),
            srgb_encode(linear[2]),
        )
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_white_and_black() {
        let white: XYZColor = RGBColor::from((255, 255, 255)).convert();
        assert!((white.x - 0.9505).abs() <= 1e-4);
        assert!((white.y - 1.0).abs() <= 1e-4);
        assert!((white.z - 1.089).abs() <= 1e-4);
        let black: XYZColor = RGBColor::from((0, 0, 0)).convert();
        assert_eq!(black, XYZColor { x: 0.0, y: 0.0, z: 0.0 });
    }

    #[test]
    fn test_transfer_curve_inverts() {
        for i in 0..=100 {
            let c = f64::from(i) / 100.0;
            assert!((srgb_encode(srgb_decode(c)) - c).abs() <= 1e-9);
        }
        assert_eq!(srgb_encode(-0.5), 0.0);
    }

    #[test]
    fn test_out_of_gamut_clamps() {
        let imaginary = XYZColor { x: 2.0, y: -0.5, z: 0.3 };
        let rgb = imaginary.to_rgb();
        assert_eq!(rgb.r, 255);
        assert_eq!(rgb.g, 0);
    }
}
