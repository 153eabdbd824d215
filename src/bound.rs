//! This module describes the Bound trait, which encodes the valid domain of every component of the
//! non-RGB color types. Conversions never propagate NaN or infinities: before a color is converted
//! back to RGB, each component is brought into its domain. Hues wrap around the circle, since -30
//! degrees and 330 degrees are the same hue; everything else is clamped to its closest boundary.
//! NaN maps to the lower boundary (or 0 degrees for a hue).

/// The valid domain of a single color component.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComponentRange {
    /// An angle in degrees that wraps modulo the given period (always 360 in huebox).
    Wrapping(f64),
    /// A closed interval `[min, max]`.
    Clamped(f64, f64),
}

/// Hue, in degrees.
pub const HUE: ComponentRange = ComponentRange::Wrapping(360.0);
/// A percentage, as used for saturation, lightness, value, and the CMYK inks.
pub const PERCENT: ComponentRange = ComponentRange::Clamped(0.0, 100.0);
/// CIELAB lightness.
pub const LAB_LIGHTNESS: ComponentRange = ComponentRange::Clamped(0.0, 100.0);
/// The CIELAB opponent axes a* and b*.
pub const LAB_OPPONENT: ComponentRange = ComponentRange::Clamped(-128.0, 127.0);

impl ComponentRange {
    /// Brings a single value into this range.
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            ComponentRange::Wrapping(period) => {
                if !value.is_finite() {
                    return 0.0;
                }
                let wrapped = value.rem_euclid(period);
                // rem_euclid can round tiny negative values up to the period itself
                if wrapped >= period {
                    0.0
                } else {
                    wrapped
                }
            }
            ComponentRange::Clamped(min, max) => {
                if value.is_nan() {
                    min
                } else {
                    num::clamp(value, min, max)
                }
            }
        }
    }

    /// Returns `true` if the value is already inside this range.
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            ComponentRange::Wrapping(period) => value >= 0.0 && value < period,
            ComponentRange::Clamped(min, max) => value >= min && value <= max,
        }
    }
}

/// Describes a color type whose components have explicit bounds. The component order is the order
/// of the letters in the type's name: `h, s, l` for HSL, `c, m, y, k` for CMYK, and so on.
pub trait Bound: Sized {
    /// The domain of each component, in order.
    fn ranges() -> &'static [ComponentRange];
    /// The components of this color, in the same order as `ranges()`.
    fn components(&self) -> Vec<f64>;
    /// Rebuilds a color from its components. `components` has exactly `ranges().len()` entries.
    fn from_components(components: &[f64]) -> Self;

    /// Returns a copy of this color with every component inside its domain. A color that is
    /// already in bounds comes back unchanged.
    fn clamp(&self) -> Self {
        let clamped: Vec<f64> = self
            .components()
            .iter()
            .zip(Self::ranges())
            .map(|(&value, range)| range.apply(value))
            .collect();
        Self::from_components(&clamped)
    }

    /// Returns `true` if every component is inside its domain.
    fn in_bounds(&self) -> bool {
        self.components()
            .iter()
            .zip(Self::ranges())
            .all(|(&value, range)| range.contains(value))
    }
}
