//! huebox is the engine behind a color tool: it converts between HEX, RGB, HSL, HSV, CMYK and CIELAB,
//! measures WCAG contrast, derives harmonies, pulls dominant colors and palettes out of raw pixel
//! buffers, and keeps the records a saved-color collection needs. Every operation is a pure function
//! of its arguments; there is no current color, no global state, and no I/O beyond the writers and
//! readers callers hand in.
//!
//! RGB is the pivot. Each color space implements [`Color`](color/trait.Color.html), which only
//! knows how to get to and from [`RGBColor`](color/struct.RGBColor.html), and any two spaces convert
//! through it.
//!
//! ```
//! use huebox::prelude::*;
//! use huebox::colors::HSLColor;
//!
//! let blue: RGBColor = "#3b82f6".parse().unwrap();
//! let hsl: HSLColor = blue.convert();
//! assert_eq!(hsl.rounded(), HSLColor { h: 217., s: 91., l: 60. });
//! ```

#![doc(html_root_url = "https://docs.rs/huebox/0.1.0")]
#![warn(missing_docs)]
// Clippy doesn't like long decimals, but the matrix constants read better without separators
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate maplit;
#[macro_use]
extern crate serde_derive;

pub mod analysis;
pub mod bound;
pub mod collection;
pub mod color;
pub mod colors;
mod consts;
pub mod contrast;
pub mod dominant;
pub mod formats;
pub mod harmony;
pub mod named;
pub mod palette;
pub mod prelude;
