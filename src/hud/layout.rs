//! HUD geometry, in frame pixels.
//!
//! Text positions are baselines; glyph boxes grow upward from them.

pub const TITLE: &str = "AI FACE EMOTION HUD";
pub const TITLE_BAR_HEIGHT: i32 = 40;
pub const TITLE_ORIGIN: (i32, i32) = (10, 28);

pub const FACE_BOX_WIDTH: i32 = 260;
pub const FACE_BOX_HEIGHT: i32 = 300;
pub const FACE_BOX_GLOW_PAD: i32 = 3;
pub const BORDER_THICKNESS: i32 = 2;
pub const LABEL_STRIP_HEIGHT: i32 = 30;
pub const LABEL_INSET: (i32, i32) = (10, 8);

pub const PANEL_HEADER: &str = "Tracked emotions:";
pub const PANEL_X: i32 = 20;
pub const PANEL_Y: i32 = 60;
pub const PANEL_HEADER_GAP: i32 = 10;
pub const LINE_HEIGHT: i32 = 28;
pub const BAR_OFFSET_X: i32 = 90;
pub const MAX_BAR_WIDTH: u32 = 160;
pub const BAR_ABOVE_BASELINE: i32 = 12;
pub const BAR_BELOW_BASELINE: i32 = 4;

pub const FOOTER: &str = "Press 'q' to quit";
pub const FOOTER_INSET: (i32, i32) = (210, 20);

pub const TITLE_SCALE: u32 = 2;
pub const LABEL_SCALE: u32 = 2;
pub const PANEL_SCALE: u32 = 1;
pub const FOOTER_SCALE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn inflate(&self, by: i32) -> Rect {
        Rect {
            x: self.x - by,
            y: self.y - by,
            width: self.width + 2 * by,
            height: self.height + 2 * by,
        }
    }
}

/// The fixed-size face box, centered in a `width` x `height` frame.
pub fn face_box(width: u32, height: u32) -> Rect {
    Rect {
        x: width as i32 / 2 - FACE_BOX_WIDTH / 2,
        y: height as i32 / 2 - FACE_BOX_HEIGHT / 2,
        width: FACE_BOX_WIDTH,
        height: FACE_BOX_HEIGHT,
    }
}

/// Filled length of a confidence bar. Scores outside [0, 100] are clamped.
pub fn bar_width(score: f64) -> u32 {
    let fraction = if score.is_finite() {
        score.clamp(0.0, 100.0) / 100.0
    } else {
        0.0
    };
    (fraction * MAX_BAR_WIDTH as f64) as u32
}

/// Baseline of the panel row for the `row`-th tracked emotion.
pub fn panel_row_baseline(row: usize) -> i32 {
    PANEL_Y + row as i32 * LINE_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_endpoints() {
        assert_eq!(bar_width(0.0), 0);
        assert_eq!(bar_width(100.0), MAX_BAR_WIDTH);
        assert_eq!(bar_width(-5.0), 0);
        assert_eq!(bar_width(250.0), MAX_BAR_WIDTH);
        assert_eq!(bar_width(f64::NAN), 0);
    }

    #[test]
    fn bar_width_is_monotonic() {
        let mut previous = 0;
        for step in 0..=1000 {
            let width = bar_width(step as f64 / 10.0);
            assert!(width >= previous);
            previous = width;
        }
    }

    #[test]
    fn bar_width_grows_per_pixel_step() {
        // Scores a full pixel apart always render at different widths.
        let pixel = 100.0 / MAX_BAR_WIDTH as f64;
        for step in 0..MAX_BAR_WIDTH {
            let s1 = step as f64 * pixel;
            let s2 = s1 + pixel + 1e-9;
            assert!(bar_width(s1) < bar_width(s2.min(100.0)), "at {s1}");
        }
    }

    #[test]
    fn face_box_is_centered() {
        let rect = face_box(640, 480);
        assert_eq!(rect, Rect { x: 190, y: 90, width: 260, height: 300 });
        assert_eq!(rect.right(), 450);
        assert_eq!(rect.bottom(), 390);
        assert_eq!(rect.inflate(3).x, 187);
    }

    #[test]
    fn panel_rows_step_by_line_height() {
        assert_eq!(panel_row_baseline(0), 60);
        assert_eq!(panel_row_baseline(4), 60 + 4 * 28);
    }
}
