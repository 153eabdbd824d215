//! This module brings the most common huebox functionality under a single namespace, to prevent
//! excessive imports. It includes every trait in huebox, the ubiquitous [`RGBColor`] with its parse
//! error [`RGBParseError`], and the harmony kinds. The color spaces in [`colors`] and the
//! free functions of each module are not included.
//!
//! [`colors`]: ../colors/index.html

pub use crate::bound::Bound;
pub use crate::collection::CollectionItem;
pub use crate::color::{Color, RGBColor, RGBParseError};
pub use crate::harmony::HarmonyKind;
