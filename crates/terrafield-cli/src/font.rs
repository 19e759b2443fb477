//! Minimal 5x7 bitmap font for image captions.
//!
//! Covers only the character set the caption strip needs (digits, a few
//! lowercase letters, punctuation). Glyphs are hardcoded pixel patterns,
//! one byte per row with the low five bits used, leftmost pixel in the
//! high bit of those five.

/// Glyph width in pixels.
pub const GLYPH_WIDTH: u32 = 5;

/// Glyph height in pixels.
pub const GLYPH_HEIGHT: u32 = 7;

/// Horizontal spacing between glyphs, in unscaled pixels.
pub const GLYPH_SPACING: u32 = 1;

/// Returns the 7 bitmap rows for a supported character.
///
/// Unsupported characters render as a blank cell via the `' '` fallback
/// in [`draw_text`].
pub fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'a' => [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'd' => [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10011, 0b01101],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'p' => [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
        's' => [0b00000, 0b00000, 0b01111, 0b10000, 0b01110, 0b00001, 0b11110],
        ':' => [0b00000, 0b00100, 0b00100, 0b00000, 0b00100, 0b00100, 0b00000],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b00000, 0b01110, 0b00000, 0b00000, 0b00000],
        ' ' => [0; 7],
        _ => return None,
    };
    Some(rows)
}

/// Width of a rendered string in pixels at the given scale.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    (chars * (GLYPH_WIDTH + GLYPH_SPACING) - GLYPH_SPACING) * scale
}

/// Draws `text` into a grayscale buffer at `(origin_x, origin_y)`.
///
/// `pixels` is row-major with `row_width` pixels per row. Glyph pixels
/// are written with `color`; background pixels are left untouched.
/// Out-of-bounds pixels are clipped.
pub fn draw_text(
    pixels: &mut [u8],
    row_width: u32,
    origin_x: u32,
    origin_y: u32,
    text: &str,
    scale: u32,
    color: u8,
) {
    let rows_total = pixels.len() as u32 / row_width;
    let mut pen_x = origin_x;

    for c in text.chars() {
        let rows = glyph(c).or_else(|| glyph(' ')).unwrap_or([0; 7]);
        for (gy, row) in rows.iter().enumerate() {
            for gx in 0..GLYPH_WIDTH {
                if row & (1 << (GLYPH_WIDTH - 1 - gx)) == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        let px = pen_x + gx * scale + sx;
                        let py = origin_y + gy as u32 * scale + sy;
                        if px < row_width && py < rows_total {
                            pixels[(py * row_width + px) as usize] = color;
                        }
                    }
                }
            }
        }
        pen_x += (GLYPH_WIDTH + GLYPH_SPACING) * scale;
    }
}
