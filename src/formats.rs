//! Every representation of one color at once, rounded for display. A converter UI edits one field and
//! refreshes the rest from this snapshot; which widgets to skip is the UI's business.

use crate::color::{Color, RGBColor, RGBParseError};
use crate::colors::{CIELABColor, CMYKColor, HSLColor, HSVColor};
use crate::named::css_name;

/// A color in every format huebox knows, each rounded to whole numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorFormats {
    /// Lowercase `#rrggbb`.
    pub hex: String,
    /// The color itself.
    pub rgb: RGBColor,
    /// Rounded HSL.
    pub hsl: HSLColor,
    /// Rounded HSV.
    pub hsv: HSVColor,
    /// Rounded CMYK.
    pub cmyk: CMYKColor,
    /// Rounded CIELAB.
    pub lab: CIELABColor,
    /// The CSS keyword for this exact color, if any.
    pub css_name: Option<String>,
}

impl ColorFormats {
    /// Derives every format from an RGB color.
    ///
    /// # Example
    /// ```
    /// # use huebox::prelude::*;
    /// # use huebox::formats::ColorFormats;
    /// let formats = ColorFormats::from_rgb(RGBColor::from((255, 0, 0)));
    /// assert_eq!(formats.hex, "#ff0000");
    /// assert_eq!(formats.hsl.l, 50.0);
    /// assert_eq!(formats.css_name, Some("red".to_string()));
    /// ```
    pub fn from_rgb(rgb: RGBColor) -> ColorFormats {
        ColorFormats {
            hex: rgb.to_string(),
            rgb,
            hsl: rgb.convert::<HSLColor>().rounded(),
            hsv: rgb.convert::<HSVColor>().rounded(),
            cmyk: rgb.convert::<CMYKColor>().rounded(),
            lab: rgb.convert::<CIELABColor>().rounded(),
            css_name: css_name(rgb).map(String::from),
        }
    }

    /// Parses a HEX code and derives every format from it.
    ///
    /// # Errors
    /// The same [`RGBParseError`] as [`RGBColor::from_hex_code`].
    pub fn from_hex_code(hex: &str) -> Result<ColorFormats, RGBParseError> {
        RGBColor::from_hex_code(hex).map(ColorFormats::from_rgb)
    }
}
