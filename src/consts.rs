//! This file provides the constants used for the CIELAB pipeline: the sRGB/XYZ change-of-basis
//! matrices, the D65 reference white, and the breakpoints of the piecewise curves. The matrices are
//! the four-decimal values published with the sRGB standard, which is what every web color tool
//! uses; they are not exact inverses of one another, so a round trip through XYZ is only accurate
//! to about 1e-4 before quantization to 8 bits.

use rulinalg::matrix::Matrix;

lazy_static! {
    /// Linear sRGB to CIE XYZ (D65).
    pub static ref SRGB_TO_XYZ: Matrix<f64> = Matrix::new(
        3,
        3,
        vec![
            0.4124, 0.3576, 0.1805,
            0.2126, 0.7152, 0.0722,
            0.0193, 0.1192, 0.9505,
        ],
    );
    /// CIE XYZ (D65) to linear sRGB.
    pub static ref XYZ_TO_SRGB: Matrix<f64> = Matrix::new(
        3,
        3,
        vec![
            03.2406, -1.5372, -0.4986,
            -0.9689, 01.8758, 00.0415,
            00.0557, -0.2040, 01.0570,
        ],
    );
}

/// The D65 reference white (2 degree observer), normalized so that Y is 1.
pub const D65_WHITE_POINT: [f64; 3] = [0.95047, 1.0, 1.08883];

/// Encoded sRGB values at or below this are on the linear segment of the decoding curve.
pub const SRGB_DECODE_BREAKPOINT: f64 = 0.04045;
/// Linear values at or below this are on the linear segment of the encoding curve.
pub const SRGB_ENCODE_BREAKPOINT: f64 = 0.0031308;
/// The WCAG 2.x luminance formula uses this older breakpoint instead of 0.04045.
pub const WCAG_DECODE_BREAKPOINT: f64 = 0.03928;

/// Below this relative value the CIELAB transfer function is linear instead of a cube root.
pub const LAB_EPSILON: f64 = 0.008856;
/// The slope of the linear segment of the CIELAB transfer function.
pub const LAB_KAPPA_SLOPE: f64 = 7.787;
/// The offset of the linear segment of the CIELAB transfer function.
pub const LAB_OFFSET: f64 = 16.0 / 116.0;
