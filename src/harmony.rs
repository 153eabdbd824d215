//! Color harmonies: sets of colors related to a base color by fixed offsets in HSL. Every harmony
//! except monochromatic rotates the hue and holds saturation and lightness; monochromatic holds hue
//! and saturation and steps the lightness instead. Results go back through RGB, so they are plain
//! colors (and HEX codes) like everything else in huebox.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::color::{Color, RGBColor, RGBParseError};
use crate::colors::HSLColor;

/// The lightness range monochromatic steps are confined to, so the ramp never collapses into pure
/// black or white.
pub const MONOCHROMATIC_LIGHTNESS: (f64, f64) = (10.0, 90.0);

const COMPLEMENTARY: [f64; 2] = [0.0, 180.0];
const TRIADIC: [f64; 3] = [0.0, 120.0, 240.0];
const ANALOGOUS: [f64; 5] = [-30.0, -15.0, 0.0, 15.0, 30.0];
const TETRADIC: [f64; 4] = [0.0, 90.0, 180.0, 270.0];
const MONOCHROMATIC: [f64; 5] = [-40.0, -20.0, 0.0, 20.0, 40.0];

/// The kinds of harmony huebox can derive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    /// The base and the hue opposite it.
    Complementary,
    /// Three hues evenly spaced around the wheel.
    Triadic,
    /// The base flanked by its neighbors 15 and 30 degrees either side.
    Analogous,
    /// Four hues evenly spaced around the wheel.
    Tetradic,
    /// Darker and lighter versions of the base.
    Monochromatic,
}

impl HarmonyKind {
    /// Every kind, in the order a picker usually lists them.
    pub const ALL: [HarmonyKind; 5] = [
        HarmonyKind::Complementary,
        HarmonyKind::Triadic,
        HarmonyKind::Analogous,
        HarmonyKind::Tetradic,
        HarmonyKind::Monochromatic,
    ];

    /// The lowercase name of this kind.
    pub fn name(&self) -> &'static str {
        match *self {
            HarmonyKind::Complementary => "complementary",
            HarmonyKind::Triadic => "triadic",
            HarmonyKind::Analogous => "analogous",
            HarmonyKind::Tetradic => "tetradic",
            HarmonyKind::Monochromatic => "monochromatic",
        }
    }

    // hue offsets in degrees, or lightness offsets in percent for monochromatic
    fn offsets(&self) -> &'static [f64] {
        match *self {
            HarmonyKind::Complementary => &COMPLEMENTARY,
            HarmonyKind::Triadic => &TRIADIC,
            HarmonyKind::Analogous => &ANALOGOUS,
            HarmonyKind::Tetradic => &TETRADIC,
            HarmonyKind::Monochromatic => &MONOCHROMATIC,
        }
    }

    /// How many colors a harmony of this kind contains, base included.
    pub fn len(&self) -> usize {
        self.offsets().len()
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An unrecognized harmony name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarmonyParseError(pub String);

impl fmt::Display for HarmonyParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown harmony kind: {}", self.0)
    }
}

impl Error for HarmonyParseError {}

impl FromStr for HarmonyKind {
    type Err = HarmonyParseError;

    fn from_str(s: &str) -> Result<HarmonyKind, HarmonyParseError> {
        HarmonyKind::ALL
            .iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .cloned()
            .ok_or_else(|| HarmonyParseError(s.to_string()))
    }
}

/// Derives the harmony of the given kind from a base color. The base color is always one of the
/// members, in the position listed for its kind: first for complementary, triadic and tetradic, and
/// in the middle for analogous and monochromatic.
///
/// # Example
/// ```
/// # use huebox::prelude::*;
/// # use huebox::harmony::{generate_harmony, HarmonyKind};
/// let red = RGBColor::from((255, 0, 0));
/// let hexes: Vec<String> = generate_harmony(red, HarmonyKind::Triadic)
///     .iter()
///     .map(|c| c.to_string())
///     .collect();
/// assert_eq!(hexes, vec!["#ff0000", "#00ff00", "#0000ff"]);
/// ```
pub fn generate_harmony(base: RGBColor, kind: HarmonyKind) -> Vec<RGBColor> {
    let hsl: HSLColor = base.convert();
    let (min_l, max_l) = MONOCHROMATIC_LIGHTNESS;
    kind.offsets()
        .iter()
        .map(|&offset| {
            if offset == 0.0 {
                base
            } else if kind == HarmonyKind::Monochromatic {
                HSLColor {
                    l: num::clamp(hsl.l + offset, min_l, max_l),
                    ..hsl
                }
                .to_rgb()
            } else {
                hsl.rotate_hue(offset).to_rgb()
            }
        })
        .collect()
}

/// Like [`generate_harmony`], but from and to HEX codes.
///
/// # Errors
/// The same [`RGBParseError`] as [`RGBColor::from_hex_code`] when the base is malformed.
pub fn generate_harmony_hex(base: &str, kind: HarmonyKind) -> Result<Vec<String>, RGBParseError> {
    let rgb = RGBColor::from_hex_code(base)?;
    Ok(generate_harmony(rgb, kind)
        .iter()
        .map(|c| c.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn hexes(base: &str, kind: HarmonyKind) -> Vec<String> {
        generate_harmony_hex(base, kind).unwrap()
    }

    #[test]
    fn test_lengths() {
        let base = RGBColor::from((59, 130, 246));
        for kind in &HarmonyKind::ALL {
            assert_eq!(generate_harmony(base, *kind).len(), kind.len());
        }
        assert_eq!(HarmonyKind::Complementary.len(), 2);
        assert_eq!(HarmonyKind::Triadic.len(), 3);
        assert_eq!(HarmonyKind::Analogous.len(), 5);
        assert_eq!(HarmonyKind::Tetradic.len(), 4);
        assert_eq!(HarmonyKind::Monochromatic.len(), 5);
    }

    #[test]
    fn test_red_harmonies() {
        assert_eq!(hexes("#ff0000", HarmonyKind::Complementary), vec!["#ff0000", "#00ffff"]);
        assert_eq!(
            hexes("#ff0000", HarmonyKind::Tetradic),
            vec!["#ff0000", "#80ff00", "#00ffff", "#8000ff"]
        );
        assert_eq!(
            hexes("#ff0000", HarmonyKind::Analogous),
            vec!["#ff0080", "#ff0040", "#ff0000", "#ff4000", "#ff8000"]
        );
        assert_eq!(
            hexes("#ff0000", HarmonyKind::Monochromatic),
            vec!["#330000", "#990000", "#ff0000", "#ff6666", "#ffcccc"]
        );
    }

    #[test]
    fn test_triadic_hues_are_120_apart() {
        let colors = hexes("#3b82f6", HarmonyKind::Triadic);
        assert_eq!(colors, vec!["#3b82f6", "#f63b82", "#82f63b"]);
        let hues: Vec<f64> = colors
            .iter()
            .map(|h| RGBColor::from_hex_code(h).unwrap().convert::<HSLColor>().h)
            .collect();
        assert!(((hues[1] - hues[0]).rem_euclid(360.0) - 120.0).abs() <= 1.0);
        assert!(((hues[2] - hues[1]).rem_euclid(360.0) - 120.0).abs() <= 1.0);
    }

    #[test]
    fn test_monochromatic_clamps_lightness() {
        // lightness 95: every darker step is in range, both lighter steps pin to 90
        let pale = RGBColor::from((236, 244, 249));
        let hsl: HSLColor = pale.convert();
        let ramp = generate_harmony(pale, HarmonyKind::Monochromatic);
        assert_eq!(ramp[2], pale);
        assert_eq!(ramp[3], ramp[4]);
        assert_eq!(ramp[3], HSLColor { l: 90.0, ..hsl }.to_rgb());
        assert_eq!(ramp[3], RGBColor::from((216, 233, 243)));
        assert_eq!(ramp[0], HSLColor { l: hsl.l - 40.0, ..hsl }.to_rgb());
    }

    #[test]
    fn test_gray_stays_gray() {
        let gray = RGBColor::from((128, 128, 128));
        for color in generate_harmony(gray, HarmonyKind::Triadic) {
            assert_eq!(color, gray);
        }
    }

    #[test]
    fn test_parsing_kinds() {
        assert_eq!("triadic".parse::<HarmonyKind>(), Ok(HarmonyKind::Triadic));
        assert_eq!("Monochromatic".parse::<HarmonyKind>(), Ok(HarmonyKind::Monochromatic));
        assert_eq!(
            "split".parse::<HarmonyKind>(),
            Err(HarmonyParseError("split".to_string()))
        );
        assert_eq!(HarmonyKind::Analogous.to_string(), "analogous");
    }

    #[test]
    fn test_malformed_base() {
        assert_eq!(
            generate_harmony_hex("#12345", HarmonyKind::Triadic),
            Err(RGBParseError::InvalidHexSyntax)
        );
    }
}
