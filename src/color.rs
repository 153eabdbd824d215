//! This module defines the [`Color`] trait and [`RGBColor`], the pivot representation every other
//! color type in huebox converts through. RGB is 8 bits per channel, so the `u8` fields already
//! enforce the [0, 255] domain: there is no such thing as an out-of-range `RGBColor`.
//!
//! HEX codes are the textual form of an `RGBColor`. Parsing accepts `#rrggbb` or `rrggbb` in any
//! case; formatting always produces lowercase `#rrggbb`. A malformed code is an error
//! ([`RGBParseError`]), never a silent fallback to black, and every parse entry point in the crate
//! reports that same error.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

/// The channel values that make up the 216-color web-safe palette.
pub const WEB_SAFE_STEPS: [u8; 6] = [0, 51, 102, 153, 204, 255];

lazy_static! {
    static ref HEX_CODE: Regex = Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$")
        .expect("hex code pattern is a valid regex");
}

/// A color representation that can be converted to and from [`RGBColor`]. Because every
/// representation goes through RGB, any two `Color` types can be converted into one another with
/// [`Color::convert`].
pub trait Color: Sized {
    /// Builds this representation from an RGB color.
    fn from_rgb(rgb: RGBColor) -> Self;
    /// Converts this representation back to RGB. Implementors clamp out-of-domain components
    /// before computing, so this never produces NaN and never panics.
    fn to_rgb(&self) -> RGBColor;
    /// Converts between any two `Color` types by going through RGB.
    ///
    /// # Example
    /// ```
    /// # use huebox::prelude::*;
    /// # use huebox::colors::HSLColor;
    /// let red = RGBColor::from((255, 0, 0));
    /// let hsl: HSLColor = red.convert();
    /// assert_eq!(hsl.rounded(), HSLColor { h: 0., s: 100., l: 50. });
    /// ```
    fn convert<T: Color>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }
    /// The lowercase `#rrggbb` code of this color.
    fn to_hex_code(&self) -> String {
        self.to_rgb().to_string()
    }
}

/// A color in the sRGB space with 8 bits per channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

/// An error in parsing a HEX color code.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum RGBParseError {
    /// The input was empty (or only a `#`).
    EmptyInput,
    /// The input was not exactly six hexadecimal digits with an optional leading `#`.
    InvalidHexSyntax,
}

impl fmt::Display for RGBParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RGBParseError::EmptyInput => write!(f, "empty color code"),
            RGBParseError::InvalidHexSyntax => {
                write!(f, "invalid hex color code: expected #rrggbb")
            }
        }
    }
}

impl Error for RGBParseError {}

impl RGBColor {
    /// Parses a HEX code such as `#3b82f6` or `3B82F6`. Three-digit shorthand and alpha channels are
    /// not accepted.
    ///
    /// # Errors
    /// [`RGBParseError::EmptyInput`] for `""` or `"#"`, [`RGBParseError::InvalidHexSyntax`] for
    /// anything else that is not six hex digits.
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, RGBParseError> {
        if hex.is_empty() || hex == "#" {
            return Err(RGBParseError::EmptyInput);
        }
        let caps = HEX_CODE
            .captures(hex)
            .ok_or(RGBParseError::InvalidHexSyntax)?;
        // the regex guarantees two hex digits per group, so these parses can't fail: map anyway
        let channel = |i: usize| {
            u8::from_str_radix(&caps[i], 16).map_err(|_| RGBParseError::InvalidHexSyntax)
        };
        Ok(RGBColor {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
        })
    }

    /// Builds a color from components in the unit range, rounding to the nearest channel value and
    /// clamping anything outside [0, 1].
    pub fn from_unit(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor {
            r: unit_to_channel(r),
            g: unit_to_channel(g),
            b: unit_to_channel(b),
        }
    }

    /// The channels scaled to the unit range, in the order R, G, B.
    pub fn unit_components(&self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Returns `true` if every channel is one of the six web-safe steps
    /// (0, 51, 102, 153, 204, 255).
    pub fn is_web_safe(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| WEB_SAFE_STEPS.contains(c))
    }

    /// Returns `true` if all three channels are equal, i.e., the color is a gray.
    pub fn is_achromatic(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

fn unit_to_channel(c: f64) -> u8 {
    if c.is_nan() {
        return 0;
    }
    num::clamp((c * 255.0).round(), 0.0, 255.0) as u8
}

impl Color for RGBColor {
    fn from_rgb(rgb: RGBColor) -> RGBColor {
        rgb
    }
    fn to_rgb(&self) -> RGBColor {
        *self
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        RGBColor {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }
}

impl From<RGBColor> for (u8, u8, u8) {
    fn from(rgb: RGBColor) -> (u8, u8, u8) {
        (rgb.r, rgb.g, rgb.b)
    }
}

impl fmt::Display for RGBColor {
    /// Writes the lowercase `#rrggbb` code.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for RGBColor {
    type Err = RGBParseError;

    fn from_str(s: &str) -> Result<RGBColor, RGBParseError> {
        RGBColor::from_hex_code(s)
    }
}

/// Returns `true` if the string is a HEX code that [`RGBColor::from_hex_code`] accepts.
pub fn is_valid_hex(hex: &str) -> bool {
    RGBColor::from_hex_code(hex).is_ok()
}

/// Parses the HEX code and checks it against the web-safe palette.
///
/// # Errors
/// The same [`RGBParseError`] as [`RGBColor::from_hex_code`].
pub fn is_web_safe_hex(hex: &str) -> Result<bool, RGBParseError> {
    RGBColor::from_hex_code(hex).map(|rgb| rgb.is_web_safe())
}
