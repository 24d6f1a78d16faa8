//! Heads-up display drawn over each camera frame.
//!
//! Every layer is a pure overlay: it reads the current scores and never
//! feeds anything back into session state.

pub mod layout;
pub mod palette;
pub mod raster;
pub mod text;

use image::RgbImage;

use crate::emotion::{Emotion, EmotionScores, TopEmotion};

use layout::*;
use palette::*;

/// What the HUD needs to know about the session for one frame.
#[derive(Debug, Clone, Copy)]
pub struct HudView<'a> {
    pub scores: &'a EmotionScores,
    pub top: TopEmotion,
}

/// Draw all HUD layers onto `frame`, bottom to top.
pub fn draw_hud(frame: &mut RgbImage, view: &HudView<'_>) {
    draw_title_bar(frame);
    draw_face_box(frame, &view.top);
    draw_emotion_panel(frame, view.scores, view.top.emotion);
    draw_footer(frame);
}

fn draw_title_bar(frame: &mut RgbImage) {
    let width = frame.width() as i32;
    raster::fill_rect(frame, 0, 0, width, TITLE_BAR_HEIGHT, BLACK);
    let (x, baseline) = TITLE_ORIGIN;
    text::draw_text(frame, TITLE, x, baseline, TITLE_SCALE, NEON_PINK);
}

fn draw_face_box(frame: &mut RgbImage, top: &TopEmotion) {
    let rect = face_box(frame.width(), frame.height());

    raster::stroke(frame, rect.inflate(FACE_BOX_GLOW_PAD), BORDER_THICKNESS, FACE_BOX_GLOW);
    raster::stroke(frame, rect, BORDER_THICKNESS, WHITE);

    let strip = Rect {
        y: rect.y - LABEL_STRIP_HEIGHT,
        height: LABEL_STRIP_HEIGHT,
        ..rect
    };
    raster::fill(frame, strip, BLACK);
    let (dx, dy) = LABEL_INSET;
    text::draw_text(frame, &top.label(), rect.x + dx, rect.y - dy, LABEL_SCALE, WHITE);
}

fn draw_emotion_panel(frame: &mut RgbImage, scores: &EmotionScores, highlighted: Emotion) {
    text::draw_text(
        frame,
        PANEL_HEADER,
        PANEL_X,
        PANEL_Y - PANEL_HEADER_GAP,
        PANEL_SCALE,
        WHITE,
    );

    let bar_x = PANEL_X + BAR_OFFSET_X;
    for (row, (emotion, score)) in scores.iter().enumerate() {
        let baseline = panel_row_baseline(row);
        text::draw_text(frame, emotion.label(), PANEL_X, baseline, PANEL_SCALE, WHITE);

        let (bar_top, bar_bottom) = (baseline - BAR_ABOVE_BASELINE, baseline + BAR_BELOW_BASELINE);
        raster::fill_rect(
            frame,
            bar_x,
            bar_top,
            bar_x + MAX_BAR_WIDTH as i32,
            bar_bottom,
            BAR_TRACK,
        );

        let filled = bar_width(score) as i32;
        if filled > 0 {
            let color = if emotion == highlighted { NEON_PINK } else { BAR_FILL };
            raster::fill_rect(frame, bar_x, bar_top, bar_x + filled, bar_bottom, color);
        }
    }
}

fn draw_footer(frame: &mut RgbImage) {
    let (dx, dy) = FOOTER_INSET;
    let x = frame.width() as i32 - dx;
    let baseline = frame.height() as i32 - dy;
    text::draw_text(frame, FOOTER, x, baseline, FOOTER_SCALE, WHITE);
}
