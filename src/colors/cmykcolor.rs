//! A module that implements the naive subtractive CMYK model: key (black) is one minus the largest RGB
//! component, and each ink is what remains of its complementary channel after the key is
//! removed. This is not a press profile; it is the CMYK that web color tools show.

use crate::bound::{Bound, ComponentRange, PERCENT};
use crate::color::{Color, RGBColor};
use crate::colors::round_component;

/// A color as cyan, magenta, yellow, and key ink coverage, each in percent.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMYKColor {
    /// Cyan coverage, in percent in [0, 100].
    pub c: f64,
    /// Magenta coverage, in percent in [0, 100].
    pub m: f64,
    /// Yellow coverage, in percent in [0, 100].
    pub y: f64,
    /// Key (black) coverage, in percent in [0, 100].
    pub k: f64,
}

static CMYK_RANGES: [ComponentRange; 4] = [PERCENT, PERCENT, PERCENT, PERCENT];

impl CMYKColor {
    /// Rounds every component to the nearest integer for display.
    pub fn rounded(&self) -> CMYKColor {
        CMYKColor {
            c: round_component(self.c),
            m: round_component(self.m),
            y: round_component(self.y),
            k: round_component(self.k),
        }
    }
}

impl Color for CMYKColor {
    fn from_rgb(rgb: RGBColor) -> CMYKColor {
        let [r, g, b] = rgb.unit_components();
        let k = 1.0 - r.max(g).max(b);
        if k == 1.0 {
            // pure black: the inks are undefined, so use none
            return CMYKColor {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 100.0,
            };
        }
        let ink = |channel: f64| (1.0 - channel - k) / (1.0 - k) * 100.0;
        CMYKColor {
            c: ink(r),
            m: ink(g),
            y: ink(b),
            k: k * 100.0,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let cmyk = self.clamp();
        let k = cmyk.k / 100.0;
        let channel = |ink: f64| (1.0 - ink / 100.0) * (1.0 - k);
        RGBColor::from_unit(channel(cmyk.c), channel(cmyk.m), channel(cmyk.y))
    }
}

impl Bound for CMYKColor {
    fn ranges() -> &'static [ComponentRange] {
        &CMYK_RANGES
    }
    fn components(&self) -> Vec<f64> {
        vec![self.c, self.m, self.y, self.k]
    }
    fn from_components(components: &[f64]) -> CMYKColor {
        CMYKColor {
            c: components[0],
            m: components[1],
            y: components[2],
            k: components[3],
        }
    }
}
