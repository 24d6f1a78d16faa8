use anyhow::{anyhow, Result};
use image::RgbImage;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use super::{DisplaySurface, KeyPress};

const ENABLE_LOGS: bool = true;

use crate::log_info;

/// Native window backed by minifb.
///
/// The window is opened on the first frame so it takes the camera's size,
/// and reopened if the frame size ever changes.
pub struct WindowSurface {
    title: String,
    window: Option<Window>,
    // Frame size the window was opened for; minifb reports the scaled
    // client area, which can differ on HiDPI screens.
    opened_for: Option<(usize, usize)>,
    buffer: Vec<u32>,
}

impl WindowSurface {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            window: None,
            opened_for: None,
            buffer: Vec::new(),
        }
    }

    fn ensure_window(&mut self, width: usize, height: usize) -> Result<&mut Window> {
        if self.window.is_none() || needs_reopen(self.opened_for, (width, height)) {
            let window = Window::new(&self.title, width, height, WindowOptions::default())
                .map_err(|err| anyhow!("failed to open window '{}': {err}", self.title))?;
            log_info!("window '{}' opened at {}x{}", self.title.trim(), width, height);
            self.window = Some(window);
            self.opened_for = Some((width, height));
        }
        self.window
            .as_mut()
            .ok_or_else(|| anyhow!("window '{}' missing after open", self.title))
    }
}

impl DisplaySurface for WindowSurface {
    fn present(&mut self, frame: &RgbImage) -> Result<()> {
        let (width, height) = (frame.width() as usize, frame.height() as usize);
        let mut buffer = std::mem::take(&mut self.buffer);
        pack_rgb(frame, &mut buffer);

        let window = self.ensure_window(width, height)?;
        let result = window
            .update_with_buffer(&buffer, width, height)
            .map_err(|err| anyhow!("failed to update window: {err}"));
        self.buffer = buffer;
        result
    }

    fn poll_key(&mut self) -> Option<KeyPress> {
        let window = self.window.as_ref()?;
        if !window.is_open() {
            return Some(KeyPress::Quit);
        }
        window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .next()
            .map(key_press)
    }
}

impl Drop for WindowSurface {
    fn drop(&mut self) {
        if self.window.take().is_some() {
            log_info!("window '{}' closed", self.title.trim());
        }
    }
}

fn needs_reopen(opened_for: Option<(usize, usize)>, frame: (usize, usize)) -> bool {
    opened_for != Some(frame)
}

fn key_press(key: Key) -> KeyPress {
    match key {
        Key::Q | Key::Escape => KeyPress::Quit,
        _ => KeyPress::Other,
    }
}

/// Pack RGB pixels into minifb's `0RGB` words, reusing `out`.
pub fn pack_rgb(frame: &RgbImage, out: &mut Vec<u32>) {
    out.clear();
    out.extend(
        frame
            .pixels()
            .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2])),
    );
}
