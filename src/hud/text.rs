use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};

const GLYPH_SIZE: u32 = 8;

/// Draw `text` with its baseline at `baseline`, starting at column `x`.
///
/// Uses the 8x8 bitmap font scaled by an integer factor. Characters the font
/// does not cover are skipped but still advance the pen.
pub fn draw_text(
    img: &mut RgbImage,
    text: &str,
    x: i32,
    baseline: i32,
    scale: u32,
    color: Rgb<u8>,
) {
    let scale = scale.max(1) as i32;
    let glyph = GLYPH_SIZE as i32 * scale;
    let top = baseline - glyph + 1;
    let (width, height) = (img.width() as i32, img.height() as i32);

    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let origin_x = x + i as i32 * glyph;
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_SIZE as i32 {
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let px = origin_x + col * scale + dx;
                        let py = top + row as i32 * scale + dy;
                        if px >= 0 && px < width && py >= 0 && py < height {
                            img.put_pixel(px as u32, py as u32, color);
                        }
                    }
                }
            }
        }
    }
}
