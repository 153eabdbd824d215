//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). CIELAB has an L value for
//! lightness and two opponent color axes for chromaticity. Formally the three values are called
//! L\*, a\*, and b\*, but for convenience they are just `l`, `a`, and `b` here.
//!
//! huebox uses CIELAB under D65 with the 2 degree observer, going RGB -> linear light -> XYZ ->
//! Lab and back. CIELAB's domain is much larger than sRGB's, so the inverse can land outside the
//! RGB cube; those channels are clamped into [0, 255], and such colors come back visibly different
//! from what went in.

use crate::bound::{Bound, ComponentRange, LAB_LIGHTNESS, LAB_OPPONENT};
use crate::color::{Color, RGBColor};
use crate::colors::round_component;
use crate::colors::xyzcolor::XYZColor;
use crate::consts::{D65_WHITE_POINT, LAB_EPSILON, LAB_KAPPA_SLOPE, LAB_OFFSET};

/// A color in the CIELAB color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The lightness of a given color. 0 is black and 100 is diffuse white.
    pub l: f64,
    /// The first opponent color axis, between -128 (green) and 127 (magenta).
    pub a: f64,
    /// The second opponent color axis, between -128 (blue) and 127 (yellow).
    pub b: f64,
}

static LAB_RANGES: [ComponentRange; 3] = [LAB_LIGHTNESS, LAB_OPPONENT, LAB_OPPONENT];

// the cube root nonlinearity, with a linear segment near 0 so the slope stays finite
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA_SLOPE * t + LAB_OFFSET
    }
}

fn lab_f_inv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > LAB_EPSILON {
        cubed
    } else {
        (t - LAB_OFFSET) / LAB_KAPPA_SLOPE
    }
}

impl CIELABColor {
    /// Rounds every component to the nearest integer for display.
    pub fn rounded(&self) -> CIELABColor {
        CIELABColor {
            l: round_component(self.l),
            a: round_component(self.a),
            b: round_component(self.b),
        }
    }

    /// Converts from XYZ (D65) to CIELAB.
    pub fn from_xyz(xyz: XYZColor) -> CIELABColor {
        let fx = lab_f(xyz.x / D65_WHITE_POINT[0]);
        let fy = lab_f(xyz.y / D65_WHITE_POINT[1]);
        let fz = lab_f(xyz.z / D65_WHITE_POINT[2]);
        CIELABColor {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Converts to XYZ (D65). The components are clamped into their domain first.
    pub fn to_xyz(&self) -> XYZColor {
        let lab = self.clamp();
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;
        XYZColor {
            x: D65_WHITE_POINT[0] * lab_f_inv(fx),
            y: D65_WHITE_POINT[1] * lab_f_inv(fy),
            z: D65_WHITE_POINT[2] * lab_f_inv(fz),
        }
    }
}

impl Color for CIELABColor {
    fn from_rgb(rgb: RGBColor) -> CIELABColor {
        CIELABColor::from_xyz(XYZColor::from_rgb(rgb))
    }

    fn to_rgb(&self) -> RGBColor {
        self.to_xyz().to_rgb()
    }
}

impl Bound for CIELABColor {
    fn ranges() -> &'static [ComponentRange] {
        &LAB_RANGES
    }
    fn components(&self) -> Vec<f64> {
        vec![self.l, self.a, self.b]
    }
    fn from_components(components: &[f64]) -> CIELABColor {
        CIELABColor {
            l: components[0],
            a: components[1],
            b: components[2],
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_reference_values() {
        let red: CIELABColor = RGBColor::from((255, 0, 0)).convert();
        assert!((red.l - 53.233).abs() <= 0.01);
        assert!((red.a - 80.109).abs() <= 0.01);
        assert!((red.b - 67.220).abs() <= 0.01);
        assert_eq!(red.rounded(), CIELABColor { l: 53.0, a: 80.0, b: 67.0 });

        let blue: CIELABColor = RGBColor::from((59, 130, 246)).convert();
        assert_eq!(blue.rounded(), CIELABColor { l: 56.0, a: 18.0, b: -64.0 });
    }

    #[test]
    fn test_achromatic_axis() {
        let white: CIELABColor = RGBColor::from((255, 255, 255)).convert();
        assert_eq!(white.rounded(), CIELABColor { l: 100.0, a: 0.0, b: 0.0 });
        let black: CIELABColor = RGBColor::from((0, 0, 0)).convert();
        assert_eq!(black.rounded(), CIELABColor { l: 0.0, a: 0.0, b: 0.0 });
        let gray: CIELABColor = RGBColor::from((128, 128, 128)).convert();
        assert_eq!(gray.rounded(), CIELABColor { l: 54.0, a: 0.0, b: 0.0 });
    }

    #[test]
    fn test_round_trip_in_gamut() {
        for &(r, g, b) in &[(255, 0, 0), (59, 130, 246), (12, 200, 99), (250, 250, 5), (1, 2, 3)] {
            let rgb = RGBColor { r, g, b };
            let back = rgb.convert::<CIELABColor>().to_rgb();
            assert!((i16::from(back.r) - i16::from(r)).abs() <= 1);
            assert!((i16::from(back.g) - i16::from(g)).abs() <= 1);
            assert!((i16::from(back.b) - i16::from(b)).abs() <= 1);
        }
        assert_eq!(CIELABColor { l: 100.0, a: 0.0, b: 0.0 }.to_hex_code(), "#ffffff");
        assert_eq!(CIELABColor { l: 0.0, a: 0.0, b: 0.0 }.to_hex_code(), "#000000");
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        // a saturated purple far outside sRGB: channels pin to the cube instead of wrapping
        let purple = CIELABColor { l: 50.0, a: 127.0, b: -128.0 };
        assert_eq!(purple.to_rgb(), RGBColor::from((183, 0, 255)));
        // components outside CIELAB's own domain are clamped before converting
        let wild = CIELABColor { l: 180.0, a: 0.0, b: 0.0 };
        assert_eq!(wild.to_hex_code(), "#ffffff");
    }
}
