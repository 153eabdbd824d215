//! A small table of CSS color keywords, for labelling colors that happen to have a well-known name
//! and for accepting those names as input. Only exact matches count: this is not a nearest-color
//! search.

use std::collections::HashMap;

use crate::color::RGBColor;

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, RGBColor> = hashmap! {
        "black" => RGBColor { r: 0, g: 0, b: 0 },
        "white" => RGBColor { r: 255, g: 255, b: 255 },
        "red" => RGBColor { r: 255, g: 0, b: 0 },
        "lime" => RGBColor { r: 0, g: 255, b: 0 },
        "blue" => RGBColor { r: 0, g: 0, b: 255 },
        "yellow" => RGBColor { r: 255, g: 255, b: 0 },
        "cyan" => RGBColor { r: 0, g: 255, b: 255 },
        "aqua" => RGBColor { r: 0, g: 255, b: 255 },
        "magenta" => RGBColor { r: 255, g: 0, b: 255 },
        "fuchsia" => RGBColor { r: 255, g: 0, b: 255 },
        "silver" => RGBColor { r: 192, g: 192, b: 192 },
        "gray" => RGBColor { r: 128, g: 128, b: 128 },
        "grey" => RGBColor { r: 128, g: 128, b: 128 },
        "maroon" => RGBColor { r: 128, g: 0, b: 0 },
        "olive" => RGBColor { r: 128, g: 128, b: 0 },
        "green" => RGBColor { r: 0, g: 128, b: 0 },
        "purple" => RGBColor { r: 128, g: 0, b: 128 },
        "teal" => RGBColor { r: 0, g: 128, b: 128 },
        "navy" => RGBColor { r: 0, g: 0, b: 128 },
        "orange" => RGBColor { r: 255, g: 165, b: 0 },
        "pink" => RGBColor { r: 255, g: 192, b: 203 },
        "brown" => RGBColor { r: 165, g: 42, b: 42 },
        "gold" => RGBColor { r: 255, g: 215, b: 0 },
        "indigo" => RGBColor { r: 75, g: 0, b: 130 },
        "violet" => RGBColor { r: 238, g: 130, b: 238 },
    };

    // aliases share a color with another keyword, so they are left out of the reverse map
    static ref BY_COLOR: HashMap<RGBColor, &'static str> = {
        let mut by_color = HashMap::with_capacity(BY_NAME.len());
        for (&name, &rgb) in BY_NAME.iter() {
            if ["aqua", "fuchsia", "grey"].contains(&name) {
                continue;
            }
            by_color.insert(rgb, name);
        }
        by_color
    };
}

/// The CSS keyword for this exact color, if it has one.
///
/// # Example
/// ```
/// # use huebox::prelude::*;
/// # use huebox::named::css_name;
/// assert_eq!(css_name(RGBColor::from((255, 165, 0))), Some("orange"));
/// assert_eq!(css_name(RGBColor::from((255, 165, 1))), None);
/// ```
pub fn css_name(rgb: RGBColor) -> Option<&'static str> {
    BY_COLOR.get(&rgb).cloned()
}

/// Looks up a CSS keyword, ignoring case and surrounding whitespace.
pub fn from_css_name(name: &str) -> Option<RGBColor> {
    BY_NAME.get(name.trim().to_ascii_lowercase().as_str()).cloned()
}
