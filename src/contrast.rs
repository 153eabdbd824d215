//! Perceptual metrics from the WCAG 2.x accessibility guidelines: relative luminance, the contrast
//! ratio between two colors, and the compliance levels for text. The ratio runs from 1 (identical
//! luminance) to 21 (black on white) and is symmetric in its arguments.

use crate::color::RGBColor;
use crate::consts::WCAG_DECODE_BREAKPOINT;

/// Minimum ratio for normal-size text at level AA.
pub const AA_NORMAL_TEXT: f64 = 4.5;
/// Minimum ratio for large text (18pt, or 14pt bold) at level AA.
pub const AA_LARGE_TEXT: f64 = 3.0;
/// Minimum ratio for normal-size text at level AAA.
pub const AAA_NORMAL_TEXT: f64 = 7.0;
/// Minimum ratio for large text at level AAA.
pub const AAA_LARGE_TEXT: f64 = 4.5;

fn decode_channel(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= WCAG_DECODE_BREAKPOINT {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// The WCAG relative luminance of a color, in [0, 1].
pub fn relative_luminance(rgb: RGBColor) -> f64 {
    0.2126 * decode_channel(rgb.r) + 0.7152 * decode_channel(rgb.g) + 0.0722 * decode_channel(rgb.b)
}

/// The WCAG contrast ratio `(L1 + 0.05) / (L2 + 0.05)`, where L1 is the lighter of the two
/// luminances. Always at least 1.
///
/// # Example
/// ```
/// # use huebox::prelude::*;
/// # use huebox::contrast::contrast_ratio;
/// let white = RGBColor::from((255, 255, 255));
/// let black = RGBColor::from((0, 0, 0));
/// assert!((contrast_ratio(white, black) - 21.0).abs() <= 0.01);
/// assert_eq!(contrast_ratio(white, white), 1.0);
/// ```
pub fn contrast_ratio(first: RGBColor, second: RGBColor) -> f64 {
    let l1 = relative_luminance(first);
    let l2 = relative_luminance(second);
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Which WCAG text levels a contrast ratio satisfies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcagCompliance {
    /// At least 4.5:1.
    pub aa_normal: bool,
    /// At least 3:1.
    pub aa_large: bool,
    /// At least 7:1.
    pub aaa_normal: bool,
    /// At least 4.5:1.
    pub aaa_large: bool,
}

impl WcagCompliance {
    /// Compares a ratio against each threshold.
    pub fn from_ratio(ratio: f64) -> WcagCompliance {
        WcagCompliance {
            aa_normal: ratio >= AA_NORMAL_TEXT,
            aa_large: ratio >= AA_LARGE_TEXT,
            aaa_normal: ratio >= AAA_NORMAL_TEXT,
            aaa_large: ratio >= AAA_LARGE_TEXT,
        }
    }

    /// Compliance of text in one color drawn over the other.
    pub fn between(foreground: RGBColor, background: RGBColor) -> WcagCompliance {
        WcagCompliance::from_ratio(contrast_ratio(foreground, background))
    }
}

/// Black or white, whichever reads better on the given background. Ties go to black.
pub fn best_text_color(background: RGBColor) -> RGBColor {
    let black = RGBColor::from((0, 0, 0));
    let white = RGBColor::from((255, 255, 255));
    if contrast_ratio(black, background) >= contrast_ratio(white, background) {
        black
    } else {
        white
    }
}

impl RGBColor {
    /// The WCAG relative luminance of this color.
    pub fn luminance(&self) -> f64 {
        relative_luminance(*self)
    }

    /// The WCAG contrast ratio between this color and another.
    pub fn contrast_with(&self, other: &RGBColor) -> f64 {
        contrast_ratio(*self, *other)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::ApproxEqUlps;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(relative_luminance(RGBColor::from((0, 0, 0))), 0.0);
        assert!(relative_luminance(RGBColor::from((255, 255, 255))).approx_eq_ulps(&1.0, 4));
        let blue = RGBColor::from((59, 130, 246));
        assert!((blue.luminance() - 0.23549).abs() <= 1e-5);
    }

    #[test]
    fn test_contrast_ratio() {
        let white = RGBColor::from((255, 255, 255));
        let black = RGBColor::from((0, 0, 0));
        assert!((contrast_ratio(white, black) - 21.0).abs() <= 0.01);
        assert!((contrast_ratio(black, white) - 21.0).abs() <= 0.01);
        let blue = RGBColor::from((59, 130, 246));
        assert!((blue.contrast_with(&white) - 3.678).abs() <= 0.001);
        assert!((blue.contrast_with(&black) - 5.710).abs() <= 0.001);
    }

    #[test]
    fn test_contrast_is_symmetric_and_reflexive() {
        let samples = [
            RGBColor::from((12, 34, 56)),
            RGBColor::from((200, 10, 90)),
            RGBColor::from((255, 255, 0)),
            RGBColor::from((128, 128, 128)),
        ];
        for a in &samples {
            assert_eq!(contrast_ratio(*a, *a), 1.0);
            for b in &samples {
                assert!(contrast_ratio(*a, *b).approx_eq_ulps(&contrast_ratio(*b, *a), 2));
                assert!(contrast_ratio(*a, *b) >= 1.0);
            }
        }
    }

    #[test]
    fn test_compliance_thresholds() {
        let gray = RGBColor::from((119, 119, 119));
        let white = RGBColor::from((255, 255, 255));
        // 4.48:1, the classic near miss
        let c = WcagCompliance::between(gray, white);
        assert_eq!(
            c,
            WcagCompliance { aa_normal: false, aa_large: true, aaa_normal: false, aaa_large: false }
        );
        assert_eq!(
            WcagCompliance::from_ratio(7.0),
            WcagCompliance { aa_normal: true, aa_large: true, aaa_normal: true, aaa_large: true }
        );
        assert_eq!(
            WcagCompliance::from_ratio(2.9),
            WcagCompliance { aa_normal: false, aa_large: false, aaa_normal: false, aaa_large: false }
        );
    }

    #[test]
    fn test_best_text_color() {
        assert_eq!(best_text_color(RGBColor::from((255, 255, 0))), RGBColor::from((0, 0, 0)));
        assert_eq!(best_text_color(RGBColor::from((20, 20, 80))), RGBColor::from((255, 255, 255)));
        assert_eq!(best_text_color(RGBColor::from((59, 130, 246))), RGBColor::from((0, 0, 0)));
    }
}
