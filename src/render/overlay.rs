//! Index labels drawn over atlas tiles for debugging templates

use crate::io::configuration::{LABEL_COLOR, LABEL_SCALE_DIVISOR};
use crate::manifest::schema::Rect;
use image::{Rgba, RgbaImage};

const GLYPH_WIDTH: u32 = 3;
const GLYPH_HEIGHT: u32 = 5;

// Rows of each digit, most significant bit on the left
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b011, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Pixel scale of label glyphs for a tile `size` pixels wide
pub fn label_scale(size: u32) -> u32 {
    (size / LABEL_SCALE_DIVISOR).max(1)
}

/// Width and height in pixels of `text` rendered at `scale`
///
/// Non-digit characters are skipped.
pub fn label_dimensions(text: &str, scale: u32) -> (u32, u32) {
    let count = text.chars().filter(char::is_ascii_digit).count() as u32;
    if count == 0 {
        return (0, 0);
    }
    let width = (count * GLYPH_WIDTH + (count - 1)) * scale;
    (width, GLYPH_HEIGHT * scale)
}

/// Draw `value` centred inside `region`
///
/// Pixels falling outside the image are clipped.
pub fn draw_label(image: &mut RgbaImage, region: Rect, value: u32, scale: u32) {
    let text = value.to_string();
    let (width, height) = label_dimensions(&text, scale);
    let origin_x = i64::from(region.x) + (i64::from(region.width) - i64::from(width)) / 2;
    let origin_y = i64::from(region.y) + (i64::from(region.height) - i64::from(height)) / 2;
    let color = Rgba(LABEL_COLOR);

    let glyphs = text
        .chars()
        .filter_map(|c| c.to_digit(10))
        .filter_map(|digit| DIGITS.get(digit as usize));

    for (position, rows) in (0i64..).zip(glyphs) {
        let glyph_x = origin_x + position * i64::from((GLYPH_WIDTH + 1) * scale);
        for (row, bits) in (0i64..).zip(rows) {
            for column in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - column)) == 0 {
                    continue;
                }
                let x = glyph_x + i64::from(column * scale);
                let y = origin_y + row * i64::from(scale);
                fill_block(image, x, y, scale, color);
            }
        }
    }
}

fn fill_block(image: &mut RgbaImage, x: i64, y: i64, scale: u32, color: Rgba<u8>) {
    for dy in 0..i64::from(scale) {
        for dx in 0..i64::from(scale) {
            let (Ok(px), Ok(py)) = (u32::try_from(x + dx), u32::try_from(y + dy)) else {
                continue;
            };
            if let Some(pixel) = image.get_pixel_mut_checked(px, py) {
                *pixel = color;
            }
        }
    }
}
