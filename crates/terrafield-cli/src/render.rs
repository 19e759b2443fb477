//! Grayscale heightmap rendering and deterministic PNG output.
//!
//! The renderer consumes the quantized field as a flat sequence, exactly
//! as the generator emits it, and maps each value to an 8-bit gray level.
//! PNG encoding uses fixed compression and filter settings so the same
//! field always produces byte-identical files.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use terrafield_spec::TerrainConfig;
use terrafield_terrain::HeightMap;

use crate::font;

/// Height of the caption strip in pixels.
const CAPTION_STRIP_HEIGHT: u32 = 40;

/// Scale factor for caption glyphs (5x7 base cells drawn at 10x14).
const CAPTION_TEXT_SCALE: u32 = 2;

/// Errors from rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// An 8-bit grayscale image, row-major.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// One byte per pixel.
    pub pixels: Vec<u8>,
}

/// Maps a quantized terrain value to a gray level.
///
/// The value is shifted down by one before normalizing against the
/// configured range and clamping; quirky, but it is what every terrain
/// image rendered so far has used, so it stays.
fn gray_from_value(value: i32, config: &TerrainConfig) -> u8 {
    let intensity = f64::from(value - 1);
    let min = f64::from(config.min_noise_value);
    let max = f64::from(config.max_noise_value);
    let normalized = (intensity - min) / (max - min);
    let clamped = normalized.clamp(0.0, 1.0);
    (clamped * 255.0).round() as u8
}

/// Renders a heightmap to a grayscale image.
///
/// The flat field is written in sequence order, `width` samples per
/// image row. With `caption` set, a white strip is appended below the
/// field with the text centered in it.
pub fn render_heightmap(
    map: &HeightMap,
    config: &TerrainConfig,
    caption: Option<&str>,
) -> RenderedImage {
    let width = map.width();
    let field_height = map.height();

    let mut pixels: Vec<u8> = map
        .values()
        .iter()
        .map(|&v| gray_from_value(v, config))
        .collect();

    let mut height = field_height;
    if let Some(text) = caption {
        height += CAPTION_STRIP_HEIGHT;
        pixels.resize((width * height) as usize, 255);

        let text_width = font::text_width(text, CAPTION_TEXT_SCALE);
        let text_height = font::GLYPH_HEIGHT * CAPTION_TEXT_SCALE;
        let origin_x = width.saturating_sub(text_width) / 2;
        let origin_y = field_height + CAPTION_STRIP_HEIGHT.saturating_sub(text_height) / 2;
        font::draw_text(
            &mut pixels,
            width,
            origin_x,
            origin_y,
            text,
            CAPTION_TEXT_SCALE,
            0,
        );
    }

    RenderedImage {
        width,
        height,
        pixels,
    }
}

/// Writes a grayscale image to a PNG file.
pub fn write_png(image: &RenderedImage, path: &Path) -> Result<(), RenderError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_png_to_writer(image, writer)
}

/// Writes a grayscale image to any writer.
pub fn write_png_to_writer<W: Write>(image: &RenderedImage, writer: W) -> Result<(), RenderError> {
    let mut encoder = Encoder::new(writer, image.width, image.height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    // Fixed settings keep the encoded bytes reproducible.
    encoder.set_compression(Compression::Default);
    encoder.set_filter(FilterType::NoFilter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&image.pixels)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrafield_terrain::HeightMap;

    fn config() -> TerrainConfig {
        TerrainConfig::builder(2, 2).noise_range(1, 100).build()
    }

    #[test]
    fn test_gray_endpoints() {
        let config = config();
        // min value: intensity 0, normalized below 0, clamps to black.
        assert_eq!(gray_from_value(1, &config), 0);
        // max value: intensity 99, (99 - 1) / 99 * 255 rounds to 252.
        assert_eq!(gray_from_value(100, &config), 252);
        // values past the range clamp to white.
        assert_eq!(gray_from_value(102, &config), 255);
    }

    #[test]
    fn test_render_without_caption() {
        let map = HeightMap::from_data(2, 2, vec![1, 100, 50, 1]);
        let image = render_heightmap(&map, &config(), None);
        assert_eq!(image.width, 2);
        assert_eq!(image.height, 2);
        assert_eq!(image.pixels.len(), 4);
        // Sequence order: pixel 1 comes from the second flat sample.
        assert_eq!(image.pixels[0], 0);
        assert_eq!(image.pixels[1], 252);
    }

    #[test]
    fn test_render_with_caption_extends_height() {
        let map = HeightMap::from_data(4, 4, vec![1; 16]);
        let image = render_heightmap(&map, &config(), Some("seed: 42, passes: 1"));
        assert_eq!(image.width, 4);
        assert_eq!(image.height, 4 + 40);
        assert_eq!(image.pixels.len(), (4 * 44) as usize);
        // The strip background is white.
        assert_eq!(image.pixels[4 * 4], 255);
    }

    #[test]
    fn test_png_output_deterministic() {
        let map = HeightMap::from_data(3, 3, vec![1, 20, 40, 60, 80, 100, 30, 70, 90]);
        let image = render_heightmap(&map, &config(), None);

        let mut a = Vec::new();
        let mut b = Vec::new();
        write_png_to_writer(&image, &mut a).unwrap();
        write_png_to_writer(&image, &mut b).unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
