pub mod window;

pub use window::WindowSurface;

use anyhow::Result;
use image::RgbImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Quit,
    Other,
}

/// Where composed frames are shown, and where quit input comes from.
pub trait DisplaySurface {
    fn present(&mut self, frame: &RgbImage) -> Result<()>;

    /// At most one key per call, without blocking.
    fn poll_key(&mut self) -> Option<KeyPress>;
}

impl<D: DisplaySurface + ?Sized> DisplaySurface for Box<D> {
    fn present(&mut self, frame: &RgbImage) -> Result<()> {
        (**self).present(frame)
    }

    fn poll_key(&mut self) -> Option<KeyPress> {
        (**self).poll_key()
    }
}
