//! Summary statistics over a set of colors, such as the ones picked from an image: average
//! lightness and saturation, how the hues spread across six families, and whether the set reads as
//! warm or cool overall.

use std::fmt;

use crate::color::{Color, RGBColor};
use crate::colors::HSLColor;

/// A 60 degree slice of the hue wheel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HueFamily {
    /// Hues in [0, 60).
    RedOrange,
    /// Hues in [60, 120).
    YellowGreen,
    /// Hues in [120, 180).
    GreenCyan,
    /// Hues in [180, 240).
    CyanBlue,
    /// Hues in [240, 300).
    BluePurple,
    /// Hues in [300, 360).
    PurpleRed,
}

impl HueFamily {
    /// The family a hue in degrees falls into. Hues outside [0, 360) are wrapped first.
    pub fn from_hue(hue: f64) -> HueFamily {
        let hue = hue.rem_euclid(360.0);
        if hue < 60.0 {
            HueFamily::RedOrange
        } else if hue < 120.0 {
            HueFamily::YellowGreen
        } else if hue < 180.0 {
            HueFamily::GreenCyan
        } else if hue < 240.0 {
            HueFamily::CyanBlue
        } else if hue < 300.0 {
            HueFamily::BluePurple
        } else {
            HueFamily::PurpleRed
        }
    }
}

impl fmt::Display for HueFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            HueFamily::RedOrange => "Red-Orange",
            HueFamily::YellowGreen => "Yellow-Green",
            HueFamily::GreenCyan => "Green-Cyan",
            HueFamily::CyanBlue => "Cyan-Blue",
            HueFamily::BluePurple => "Blue-Purple",
            HueFamily::PurpleRed => "Purple-Red",
        };
        write!(f, "{}", name)
    }
}

/// The overall color temperature of a set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    /// Reds, oranges, yellows and magentas dominate.
    Warm,
    /// Greens, cyans, blues and purples dominate.
    Cool,
    /// Neither side outnumbers the other by half again.
    Neutral,
}

/// The result of [`analyze_colors`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorAnalysis {
    /// How many colors were analyzed.
    pub total: usize,
    /// Mean HSL lightness, rounded to a whole percent.
    pub avg_brightness: f64,
    /// Mean HSL saturation, rounded to a whole percent.
    pub avg_saturation: f64,
    /// How many colors fell in each hue family, in the order the families were first seen.
    pub hue_distribution: Vec<(HueFamily, usize)>,
    /// The overall temperature.
    pub temperature: Temperature,
}

// both ranges include 300; warm is checked first
fn is_warm(hue: f64) -> bool {
    hue <= 60.0 || hue >= 300.0
}

fn is_cool(hue: f64) -> bool {
    hue >= 120.0 && hue <= 300.0
}

/// Analyzes a set of colors, or returns `None` for an empty set. Grays count as hue 0, as everywhere
/// else in huebox, so they lean warm.
///
/// # Example
/// ```
/// # use huebox::prelude::*;
/// # use huebox::analysis::{analyze_colors, Temperature};
/// let colors = [RGBColor::from((255, 0, 0)), RGBColor::from((255, 128, 0))];
/// let analysis = analyze_colors(&colors).unwrap();
/// assert_eq!(analysis.temperature, Temperature::Warm);
/// assert_eq!(analysis.avg_saturation, 100.0);
/// ```
pub fn analyze_colors(colors: &[RGBColor]) -> Option<ColorAnalysis> {
    if colors.is_empty() {
        return None;
    }
    let mut lightness = 0.0;
    let mut saturation = 0.0;
    let mut warm = 0usize;
    let mut cool = 0usize;
    let mut distribution: Vec<(HueFamily, usize)> = Vec::new();

    for rgb in colors {
        let hsl: HSLColor = rgb.convert();
        lightness += hsl.l;
        saturation += hsl.s;

        let family = HueFamily::from_hue(hsl.h);
        match distribution.iter_mut().find(|(f, _)| *f == family) {
            Some((_, count)) => *count += 1,
            None => distribution.push((family, 1)),
        }

        if is_warm(hsl.h) {
            warm += 1;
        } else if is_cool(hsl.h) {
            cool += 1;
        }
    }

    let n = colors.len() as f64;
    let (warm, cool) = (warm as f64, cool as f64);
    let temperature = if warm > cool * 1.5 {
        Temperature::Warm
    } else if cool > warm * 1.5 {
        Temperature::Cool
    } else {
        Temperature::Neutral
    };

    Some(ColorAnalysis {
        total: colors.len(),
        avg_brightness: (lightness / n).round(),
        avg_saturation: (saturation / n).round(),
        hue_distribution: distribution,
        temperature,
    })
}
