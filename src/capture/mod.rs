//! Camera frame sources.
//!
//! Native capture is behind the `webcam` feature; without it the default
//! camera is reported as unavailable, which the app treats as fatal.

#[cfg(feature = "webcam")]
mod webcam;

#[cfg(feature = "webcam")]
pub use webcam::WebcamSource;

use image::{imageops, RgbImage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("camera {index} unavailable: {reason}")]
    Unavailable { index: u32, reason: String },
    #[error("frame read failed: {0}")]
    Read(String),
    #[error("end of stream")]
    EndOfStream,
}

/// A sequence of color frames. Any `Err` from `read_frame` ends the session.
pub trait FrameSource {
    fn read_frame(&mut self) -> Result<RgbImage, CaptureError>;

    fn describe(&self) -> String {
        "frame source".to_string()
    }
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn read_frame(&mut self) -> Result<RgbImage, CaptureError> {
        (**self).read_frame()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Open the local camera at `index`.
#[cfg(feature = "webcam")]
pub fn open_camera(index: u32) -> Result<Box<dyn FrameSource>, CaptureError> {
    Ok(Box::new(WebcamSource::open(index)?))
}

#[cfg(not(feature = "webcam"))]
pub fn open_camera(index: u32) -> Result<Box<dyn FrameSource>, CaptureError> {
    Err(CaptureError::Unavailable {
        index,
        reason: "built without the `webcam` feature".into(),
    })
}

/// Flip left-to-right so a user-facing camera behaves like a mirror.
pub fn mirror(frame: &mut RgbImage) {
    imageops::flip_horizontal_in_place(frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn mirror_swaps_columns() {
        let mut frame = RgbImage::new(3, 1);
        frame.put_pixel(0, 0, Rgb([255, 0, 0]));
        frame.put_pixel(2, 0, Rgb([0, 0, 255]));
        mirror(&mut frame);
        assert_eq!(frame.get_pixel(0, 0), &Rgb([0, 0, 255]));
        assert_eq!(frame.get_pixel(2, 0), &Rgb([255, 0, 0]));
    }

    #[cfg(not(feature = "webcam"))]
    #[test]
    fn camera_unavailable_without_feature() {
        let err = open_camera(0).err().unwrap();
        assert!(matches!(err, CaptureError::Unavailable { index: 0, .. }));
    }
}
