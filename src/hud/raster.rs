use image::{Rgb, RgbImage};

use super::layout::Rect;

/// Fill the rectangle spanning `(x0, y0)` to `(x1, y1)`, corners included.
/// Anything outside the image is clipped.
pub fn fill_rect(img: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
    let (width, height) = (img.width() as i32, img.height() as i32);
    let (left, right) = (x0.min(x1).max(0), x0.max(x1).min(width - 1));
    let (top, bottom) = (y0.min(y1).max(0), y0.max(y1).min(height - 1));
    if left > right || top > bottom {
        return;
    }
    for y in top..=bottom {
        for x in left..=right {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

pub fn fill(img: &mut RgbImage, rect: Rect, color: Rgb<u8>) {
    fill_rect(img, rect.x, rect.y, rect.right(), rect.bottom(), color);
}

/// Outline `rect` with a border `thickness` pixels wide, centered on its edges.
pub fn stroke(img: &mut RgbImage, rect: Rect, thickness: i32, color: Rgb<u8>) {
    let t = thickness.max(1);
    let lo = t / 2;
    let hi = t - 1 - lo;
    let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());

    fill_rect(img, left - lo, top - lo, right + hi, top + hi, color);
    fill_rect(img, left - lo, bottom - lo, right + hi, bottom + hi, color);
    fill_rect(img, left - lo, top - lo, left + hi, bottom + hi, color);
    fill_rect(img, right - lo, top - lo, right + hi, bottom + hi, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    #[test]
    fn fill_clips_to_image() {
        let mut img = RgbImage::new(10, 10);
        fill_rect(&mut img, -5, -5, 2, 2, RED);
        assert_eq!(img.get_pixel(0, 0), &RED);
        assert_eq!(img.get_pixel(2, 2), &RED);
        assert_eq!(img.get_pixel(3, 3), &Rgb([0, 0, 0]));

        fill_rect(&mut img, 20, 20, 30, 30, RED);
        fill_rect(&mut img, 8, 8, 40, 40, RED);
        assert_eq!(img.get_pixel(9, 9), &RED);
    }

    #[test]
    fn stroke_leaves_interior_untouched() {
        let mut img = RgbImage::new(20, 20);
        let rect = Rect { x: 5, y: 5, width: 10, height: 10 };
        stroke(&mut img, rect, 2, RED);
        assert_eq!(img.get_pixel(5, 5), &RED);
        assert_eq!(img.get_pixel(4, 10), &RED);
        assert_eq!(img.get_pixel(15, 15), &RED);
        assert_eq!(img.get_pixel(10, 10), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(2, 2), &Rgb([0, 0, 0]));
    }
}
