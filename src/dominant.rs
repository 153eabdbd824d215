//! Dominant color extraction from a raw RGBA pixel buffer. This is histogram binning, not
//! clustering: every sampled opaque pixel is snapped to a coarse grid of channel values, the grid
//! cells are counted, and the most common cells are returned. It is fast, deterministic, and good
//! enough to pull the main colors out of a photo for a swatch strip.
//!
//! The buffer is the interleaved `RGBA` bytes an image decoder or canvas produces, row-major with no
//! padding. Decoding the image is the caller's job.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::color::RGBColor;

/// Tuning for [`extract_dominant_colors`]. Deserializes with every missing field set to its
/// default, so a config file only needs the fields it changes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Visit every `stride`-th pixel, starting with the first. Larger strides trade accuracy for
    /// speed on big images.
    pub stride: usize,
    /// Pixels with alpha below this are treated as transparent and skipped.
    pub alpha_threshold: u8,
    /// Channels are rounded to the nearest multiple of this before counting.
    pub bucket_size: u8,
    /// How many colors to return at most.
    pub max_colors: usize,
}

impl Default for ExtractOptions {
    fn default() -> ExtractOptions {
        ExtractOptions {
            stride: 4,
            alpha_threshold: 128,
            bucket_size: 16,
            max_colors: 8,
        }
    }
}

impl ExtractOptions {
    /// Replaces settings that would make extraction meaningless (a zero stride or bucket size) with
    /// 1, logging a warning for each.
    pub fn sanitize(&mut self) {
        if self.stride == 0 {
            warn!("extract stride of 0 replaced with 1");
            self.stride = 1;
        }
        if self.bucket_size == 0 {
            warn!("extract bucket size of 0 replaced with 1");
            self.bucket_size = 1;
        }
    }
}

/// One entry of an extraction result: a quantized color and how many sampled pixels fell into it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DominantColor {
    /// The quantized color, not any of the original pixel values.
    pub color: RGBColor,
    /// The number of sampled pixels in this bucket.
    pub count: usize,
}

impl DominantColor {
    /// The HEX code of the bucket color.
    pub fn hex(&self) -> String {
        self.color.to_string()
    }
}

/// An error in the shape of a pixel buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The buffer is not `width * height * 4` bytes long.
    BufferSizeMismatch {
        /// The length the dimensions call for.
        expected: usize,
        /// The length actually given.
        actual: usize,
    },
    /// `width * height * 4` does not fit in memory addresses at all.
    DimensionsTooLarge {
        /// The width given.
        width: usize,
        /// The height given.
        height: usize,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ExtractError::BufferSizeMismatch { expected, actual } => write!(
                f,
                "pixel buffer has {} bytes, but the dimensions call for {}",
                actual, expected
            ),
            ExtractError::DimensionsTooLarge { width, height } => {
                write!(f, "image dimensions {}x{} are too large", width, height)
            }
        }
    }
}

impl Error for ExtractError {}

pub(crate) fn check_buffer(pixels: &[u8], width: usize, height: usize) -> Result<(), ExtractError> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or(ExtractError::DimensionsTooLarge { width, height })?;
    if pixels.len() != expected {
        return Err(ExtractError::BufferSizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Tallies of one pass over a buffer, for logging.
#[derive(Debug, Default, Copy, Clone)]
pub(crate) struct SampleStats {
    pub(crate) visited: usize,
    pub(crate) transparent: usize,
}

// Calls `visit` with every sampled pixel whose alpha meets the threshold. `stride` must be nonzero.
pub(crate) fn for_each_opaque<F>(
    pixels: &[u8],
    stride: usize,
    alpha_threshold: u8,
    mut visit: F,
) -> SampleStats
where
    F: FnMut(RGBColor),
{
    let mut stats = SampleStats::default();
    for px in pixels.chunks_exact(4).step_by(stride) {
        stats.visited += 1;
        if px[3] < alpha_threshold {
            stats.transparent += 1;
            continue;
        }
        visit(RGBColor {
            r: px[0],
            g: px[1],
            b: px[2],
        });
    }
    stats
}

fn quantize(channel: u8, bucket: u8) -> u8 {
    let bucket = f64::from(bucket);
    // 255 can round up to 256, which has no HEX form
    ((f64::from(channel) / bucket).round() * bucket).min(255.0) as u8
}

/// Finds the most common colors in an RGBA buffer. Results are ordered by descending count; buckets
/// with equal counts keep the order in which they were first seen.
///
/// # Errors
/// [`ExtractError`] if the buffer length does not match the dimensions.
///
/// # Example
/// ```
/// # use huebox::dominant::{extract_dominant_colors, ExtractOptions};
/// // a 2x2 image: three opaque reds and one transparent pixel
/// let pixels: [u8; 16] = [
///     250, 5, 5, 255,   250, 5, 5, 255,
///     250, 5, 5, 255,   0, 0, 255, 0,
/// ];
/// let options = ExtractOptions { stride: 1, ..ExtractOptions::default() };
/// let colors = extract_dominant_colors(&pixels, 2, 2, &options).unwrap();
/// assert_eq!(colors.len(), 1);
/// assert_eq!(colors[0].hex(), "#ff0000");
/// assert_eq!(colors[0].count, 3);
/// ```
pub fn extract_dominant_colors(
    pixels: &[u8],
    width: usize,
    height: usize,
    options: &ExtractOptions,
) -> Result<Vec<DominantColor>, ExtractError> {
    check_buffer(pixels, width, height)?;
    let mut options = *options;
    options.sanitize();

    let mut index: HashMap<RGBColor, usize> = HashMap::new();
    let mut buckets: Vec<DominantColor> = Vec::new();
    let stats = for_each_opaque(pixels, options.stride, options.alpha_threshold, |rgb| {
        let key = RGBColor {
            r: quantize(rgb.r, options.bucket_size),
            g: quantize(rgb.g, options.bucket_size),
            b: quantize(rgb.b, options.bucket_size),
        };
        let next = buckets.len();
        let i = *index.entry(key).or_insert(next);
        if i == next {
            buckets.push(DominantColor { color: key, count: 0 });
        }
        buckets[i].count += 1;
    });
    debug!(
        "dominant colors: visited {} pixels, skipped {} transparent, {} buckets",
        stats.visited,
        stats.transparent,
        buckets.len()
    );

    // sort_by is stable, so first-seen order breaks ties
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets.truncate(options.max_colors);
    Ok(buckets)
}
