//! This file implements HSL, the cylindrical transformation of sRGB that color pickers usually show
//! next to the HEX code. *Lightness* runs from black through the fully saturated color in the middle
//! to white at the end, which is what makes HSL convenient for deriving tints and shades: holding
//! hue and saturation fixed and moving lightness walks through a monochromatic ramp. It also means
//! the saturation component is inaccurate near the ends, since very light colors can report a high
//! saturation while being almost white.
//!
//! The model is hexagonal rather than circular: the hue is the position on the hexagon the RGB cube
//! projects to, not a true angle. Gray has no hue; huebox reports 0 degrees for it, and a saturation
//! of 0.

use crate::bound::{Bound, ComponentRange, HUE, PERCENT};
use crate::color::{Color, RGBColor};
use crate::colors::{hexagon_hue, hexagon_rgb, round_component, round_hue};

/// A color in the HSL color space. Hue is in degrees, saturation and lightness in percent.
///
/// # Example
/// ```
/// # use huebox::prelude::*;
/// # use huebox::colors::HSLColor;
/// let lavender = HSLColor { h: 245.0, s: 50.0, l: 60.0 };
/// assert_eq!(lavender.to_rgb().to_string(), "#6e66cc");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component, in degrees in [0, 360).
    pub h: f64,
    /// The saturation component, in percent in [0, 100].
    pub s: f64,
    /// The lightness component, in percent in [0, 100]. Defined as the average of the largest and
    /// smallest RGB components.
    pub l: f64,
}

static HSL_RANGES: [ComponentRange; 3] = [HUE, PERCENT, PERCENT];

impl HSLColor {
    /// Rounds every component to the nearest integer, wrapping a hue of 360 back to 0. This is the
    /// form to display, not to compute with.
    pub fn rounded(&self) -> HSLColor {
        HSLColor {
            h: round_hue(self.h),
            s: round_component(self.s),
            l: round_component(self.l),
        }
    }

    /// Returns a copy with the hue rotated by the given number of degrees, modulo 360.
    pub fn rotate_hue(&self, degrees: f64) -> HSLColor {
        HSLColor {
            h: HUE.apply(self.h + degrees),
            ..*self
        }
    }
}

impl Color for HSLColor {
    fn from_rgb(rgb: RGBColor) -> HSLColor {
        let components = rgb.unit_components();
        let max_c = components.iter().cloned().fold(0.0, f64::max);
        let min_c = components.iter().cloned().fold(1.0, f64::min);
        let chroma = max_c - min_c;

        let lightness = (max_c + min_c) / 2.0;
        // chroma is 0 exactly when lightness pins the denominator to 0 (black or white), so gray
        // and both ends share one branch
        let saturation = if chroma == 0.0 {
            0.0
        } else if lightness > 0.5 {
            chroma / (2.0 - max_c - min_c)
        } else {
            chroma / (max_c + min_c)
        };

        HSLColor {
            h: hexagon_hue(components, max_c, chroma),
            s: saturation * 100.0,
            l: lightness * 100.0,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let hsl = self.clamp();
        let s = hsl.s / 100.0;
        let l = hsl.l / 100.0;
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        hexagon_rgb(hsl.h, chroma, l - chroma / 2.0)
    }
}

impl Bound for HSLColor {
    fn ranges() -> &'static [ComponentRange] {
        &HSL_RANGES
    }
    fn components(&self) -> Vec<f64> {
        vec![self.h, self.s, self.l]
    }
    fn from_components(components: &[f64]) -> HSLColor {
        HSLColor {
            h: components[0],
            s: components[1],
            l: components[2],
        }
    }
}
