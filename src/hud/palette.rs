use image::Rgb;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const NEON_PINK: Rgb<u8> = Rgb([255, 0, 255]);
pub const FACE_BOX_GLOW: Rgb<u8> = Rgb([200, 200, 200]);
pub const BAR_TRACK: Rgb<u8> = Rgb([50, 50, 50]);
pub const BAR_FILL: Rgb<u8> = Rgb([180, 180, 180]);
