//! Palette generation from an RGBA pixel buffer. Where [`dominant`](../dominant/index.html) returns
//! the most common colors outright, which for a photo is often several shades of the same sky, this
//! prefers variety: samples are grouped by hue sector and coarse saturation and lightness bands, and
//! the palette takes the most common group from as many distinct hue sectors as it can before
//! falling back to the most common groups overall.
//!
//! Each group reports the running mean of the pixels in it, rounded to whole channels as it goes,
//! rather than a quantized grid color.

use std::collections::HashMap;

use crate::color::{Color, RGBColor};
use crate::colors::HSLColor;
use crate::dominant::{check_buffer, for_each_opaque, ExtractError};

/// Tuning for [`generate_palette`]. Missing fields deserialize to their defaults.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    /// Visit every `stride`-th pixel, starting with the first.
    pub stride: usize,
    /// Pixels with alpha below this are skipped.
    pub alpha_threshold: u8,
    /// The width of a hue sector in degrees.
    pub hue_segment: u16,
    /// The size of the palette at most.
    pub max_colors: usize,
}

impl Default for PaletteOptions {
    fn default() -> PaletteOptions {
        PaletteOptions {
            stride: 4,
            alpha_threshold: 128,
            hue_segment: 30,
            max_colors: 6,
        }
    }
}

impl PaletteOptions {
    /// Replaces a zero stride or hue segment with 1, logging a warning for each.
    pub fn sanitize(&mut self) {
        if self.stride == 0 {
            warn!("palette stride of 0 replaced with 1");
            self.stride = 1;
        }
        if self.hue_segment == 0 {
            warn!("palette hue segment of 0 replaced with 1");
            self.hue_segment = 1;
        }
    }
}

// saturation and lightness bands are 20 percent wide
const BAND_WIDTH: f64 = 20.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct GroupKey {
    hue_sector: u16,
    saturation_band: u8,
    lightness_band: u8,
}

#[derive(Debug, Copy, Clone)]
struct Group {
    hue_sector: u16,
    mean: RGBColor,
    count: usize,
}

impl Group {
    fn add(&mut self, rgb: RGBColor) {
        let n = self.count as f64;
        let mix = |old: u8, new: u8| {
            ((f64::from(old) * n + f64::from(new)) / (n + 1.0)).round() as u8
        };
        self.mean = RGBColor {
            r: mix(self.mean.r, rgb.r),
            g: mix(self.mean.g, rgb.g),
            b: mix(self.mean.b, rgb.b),
        };
        self.count += 1;
    }
}

fn group_key(rgb: RGBColor, hue_segment: u16) -> GroupKey {
    let hsl: HSLColor = rgb.convert();
    let segment = f64::from(hue_segment);
    GroupKey {
        hue_sector: ((hsl.h / segment).floor() * segment) as u16,
        saturation_band: (hsl.s / BAND_WIDTH).floor() as u8,
        lightness_band: (hsl.l / BAND_WIDTH).floor() as u8,
    }
}

/// Builds a palette of up to `max_colors` colors from an RGBA buffer, favoring distinct hues. The
/// result never contains the same color twice.
///
/// # Errors
/// [`ExtractError`] if the buffer length does not match the dimensions.
pub fn generate_palette(
    pixels: &[u8],
    width: usize,
    height: usize,
    options: &PaletteOptions,
) -> Result<Vec<RGBColor>, ExtractError> {
    check_buffer(pixels, width, height)?;
    let mut options = *options;
    options.sanitize();

    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();
    let stats = for_each_opaque(pixels, options.stride, options.alpha_threshold, |rgb| {
        let key = group_key(rgb, options.hue_segment);
        let next = groups.len();
        let i = *index.entry(key).or_insert(next);
        if i == next {
            groups.push(Group {
                hue_sector: key.hue_sector,
                mean: rgb,
                count: 1,
            });
        } else {
            groups[i].add(rgb);
        }
    });
    groups.sort_by(|a, b| b.count.cmp(&a.count));

    let mut chosen: Vec<usize> = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        if chosen.len() >= options.max_colors {
            break;
        }
        if chosen.iter().all(|&c| groups[c].hue_sector != group.hue_sector) {
            chosen.push(i);
        }
    }
    let hue_diverse = chosen.len();
    for i in 0..groups.len() {
        if chosen.len() >= options.max_colors {
            break;
        }
        if !chosen.contains(&i) {
            chosen.push(i);
        }
    }
    debug!(
        "palette: visited {} pixels, skipped {} transparent, {} groups, {} distinct hues",
        stats.visited,
        stats.transparent,
        groups.len(),
        hue_diverse
    );

    let mut palette: Vec<RGBColor> = Vec::with_capacity(chosen.len());
    for i in chosen {
        let color = groups[i].mean;
        if !palette.contains(&color) {
            palette.push(color);
        }
    }
    Ok(palette)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn buffer(colors: &[(u8, u8, u8)]) -> Vec<u8> {
        colors
            .iter()
            .flat_map(|&(r, g, b)| vec![r, g, b, 255])
            .collect()
    }

    fn hexes(colors: &[RGBColor]) -> Vec<String> {
        colors.iter().map(|c| c.to_string()).collect()
    }

    fn every_pixel() -> PaletteOptions {
        PaletteOptions {
            stride: 1,
            ..PaletteOptions::default()
        }
    }

    #[test]
    fn test_prefers_distinct_hues() {
        let red = (255, 0, 0);
        let dark_red = (100, 0, 0);
        let blue = (0, 0, 255);
        let pixels = buffer(&[red, dark_red, red, dark_red, red, blue]);
        let palette = generate_palette(&pixels, 6, 1, &every_pixel()).unwrap();
        // dark red is more common than blue, but shares red's hue sector
        assert_eq!(hexes(&palette), vec!["#ff0000", "#0000ff", "#640000"]);

        let options = PaletteOptions {
            max_colors: 2,
            ..every_pixel()
        };
        let palette = generate_palette(&pixels, 6, 1, &options).unwrap();
        assert_eq!(hexes(&palette), vec!["#ff0000", "#0000ff"]);
    }

    #[test]
    fn test_groups_report_running_mean() {
        let pixels = buffer(&[(255, 0, 0), (250, 0, 0)]);
        let palette = generate_palette(&pixels, 2, 1, &every_pixel()).unwrap();
        assert_eq!(hexes(&palette), vec!["#fd0000"]);
    }

    #[test]
    fn test_group_keys() {
        let key = group_key(RGBColor::from((59, 130, 246)), 30);
        assert_eq!(
            key,
            GroupKey {
                hue_sector: 210,
                saturation_band: 4,
                lightness_band: 2
            }
        );
        let white = group_key(RGBColor::from((255, 255, 255)), 30);
        assert_eq!(white.lightness_band, 5);
        assert_eq!(white.hue_sector, 0);
    }

    #[test]
    fn test_transparent_and_empty() {
        let mut pixels = buffer(&[(10, 200, 30); 4]);
        for alpha in pixels.iter_mut().skip(3).step_by(4) {
            *alpha = 0;
        }
        assert_eq!(generate_palette(&pixels, 2, 2, &every_pixel()), Ok(vec![]));
        assert_eq!(
            generate_palette(&pixels, 3, 2, &every_pixel()),
            Err(ExtractError::BufferSizeMismatch {
                expected: 24,
                actual: 16
            })
        );
    }
}
