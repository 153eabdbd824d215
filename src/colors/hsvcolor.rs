//! This module implements the HSV color space, a cousin of the HSL color space. The definition of
//! value differs from lightness: it goes from black to full saturation instead of black to
//! white. This makes value a poor analog of luminance (dark purple is the same value as white), but
//! does make the hue and saturation a bit more meaningful than HSL. Hue is computed exactly as in
//! HSL; only the saturation denominator differs (chroma over value instead of chroma over the
//! lightness-dependent maximum).

use crate::bound::{Bound, ComponentRange, HUE, PERCENT};
use crate::color::{Color, RGBColor};
use crate::colors::{hexagon_hue, hexagon_rgb, round_component, round_hue};

/// An HSV color: hue in degrees, saturation and value in percent.
/// # Example
/// As with HSL, changing a red to a yellow at the same saturation and value makes it lighter.
///
/// ```
/// # use huebox::prelude::*;
/// # use huebox::colors::HSVColor;
/// let red = HSVColor { h: 0., s: 50., v: 80. };
/// let yellow = HSVColor { h: 50., s: 50., v: 80. };
/// assert_eq!(red.to_hex_code(), "#cc6666");
/// assert_eq!(yellow.to_hex_code(), "#ccbb66");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, in degrees in [0, 360).
    pub h: f64,
    /// The saturation, in percent in [0, 100]: the distance between the color and the gray of the
    /// same value.
    pub s: f64,
    /// The value, in percent in [0, 100]: the largest RGB component.
    pub v: f64,
}

static HSV_RANGES: [ComponentRange; 3] = [HUE, PERCENT, PERCENT];

impl HSVColor {
    /// Rounds every component to the nearest integer for display, wrapping a hue of 360 to 0.
    pub fn rounded(&self) -> HSVColor {
        HSVColor {
            h: round_hue(self.h),
            s: round_component(self.s),
            v: round_component(self.v),
        }
    }
}

impl Color for HSVColor {
    fn from_rgb(rgb: RGBColor) -> HSVColor {
        let components = rgb.unit_components();
        let max_c = components.iter().cloned().fold(0.0, f64::max);
        let min_c = components.iter().cloned().fold(1.0, f64::min);
        let chroma = max_c - min_c;

        let saturation = if max_c == 0.0 { 0.0 } else { chroma / max_c };

        HSVColor {
            h: hexagon_hue(components, max_c, chroma),
            s: saturation * 100.0,
            v: max_c * 100.0,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let hsv = self.clamp();
        let v = hsv.v / 100.0;
        let chroma = hsv.s / 100.0 * v;
        hexagon_rgb(hsv.h, chroma, v - chroma)
    }
}

impl Bound for HSVColor {
    fn ranges() -> &'static [ComponentRange] {
        &HSV_RANGES
    }
    fn components(&self) -> Vec<f64> {
        vec![self.h, self.s, self.v]
    }
    fn from_components(components: &[f64]) -> HSVColor {
        HSVColor {
            h: components[0],
            s: components[1],
            v: components[2],
        }
    }
}
