//! This module contains the color representations other than RGB. Each implements [`Color`], so any
//! of them converts to any other through RGB, and [`Bound`], which documents and enforces the domain
//! of its components. For convenience, each main type is imported into this module's namespace
//! directly.
//!
//! Every type stores its components at full floating-point precision, in the units people usually
//! read them in: degrees for hue, percent for saturation/lightness/value and the CMYK inks. Call
//! `rounded()` to get the integer values a user interface displays.
//!
//! [`Color`]: ../color/trait.Color.html
//! [`Bound`]: ../bound/trait.Bound.html
pub mod cielabcolor;
pub mod cmykcolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod xyzcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::cmykcolor::CMYKColor;
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
pub use self::xyzcolor::XYZColor;

use crate::bound::HUE;
use crate::color::RGBColor;

// HSL and HSV share the same hue: the RGB cube tilted onto its black-white diagonal projects to a
// hexagon, and the hue is the position along that hexagon's perimeter, treated as degrees. Gray has
// no hue at all; huebox reports 0 for it.
pub(crate) fn hexagon_hue(rgb: [f64; 3], max_c: f64, chroma: f64) -> f64 {
    let [r, g, b] = rgb;
    if chroma == 0.0 {
        0.0
    } else if max_c == r {
        ((g - b) / chroma).rem_euclid(6.0) * 60.0
    } else if max_c == g {
        ((b - r) / chroma + 2.0) * 60.0
    } else {
        ((r - g) / chroma + 4.0) * 60.0
    }
}

// The inverse of the projection above: given a hue, the chroma, and the amount of gray to add back,
// find the RGB point. `x` is the second-largest component before the offset.
pub(crate) fn hexagon_rgb(hue: f64, chroma: f64, offset: f64) -> RGBColor {
    let h = HUE.apply(hue);
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let (r1, g1, b1) = if h < 60.0 {
        (chroma, x, 0.0)
    } else if h < 120.0 {
        (x, chroma, 0.0)
    } else if h < 180.0 {
        (0.0, chroma, x)
    } else if h < 240.0 {
        (0.0, x, chroma)
    } else if h < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };
    RGBColor::from_unit(r1 + offset, g1 + offset, b1 + offset)
}

// Components are kept at full precision; only the presentation boundary rounds.
pub(crate) fn round_hue(h: f64) -> f64 {
    HUE.apply(h.round())
}

// Rounds a component to the nearest integer without producing -0.
pub(crate) fn round_component(value: f64) -> f64 {
    let rounded = value.round();
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
