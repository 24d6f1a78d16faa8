use image::RgbImage;
use nokhwa::{
    pixel_format::RgbFormat,
    utils::{CameraIndex, RequestedFormat, RequestedFormatType},
    Camera,
};

use super::{CaptureError, FrameSource};

const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

/// Local video device read through nokhwa. The stream is stopped on drop.
pub struct WebcamSource {
    camera: Camera,
    index: u32,
}

impl WebcamSource {
    pub fn open(index: u32) -> Result<Self, CaptureError> {
        let unavailable = |err: nokhwa::NokhwaError| CaptureError::Unavailable {
            index,
            reason: err.to_string(),
        };

        let format =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
        let mut camera = Camera::new(CameraIndex::Index(index), format).map_err(unavailable)?;
        camera.open_stream().map_err(unavailable)?;

        let resolution = camera.resolution();
        log_info!(
            "camera {} opened: {} at {}x{}",
            index,
            camera.info().human_name(),
            resolution.width(),
            resolution.height()
        );
        Ok(Self { camera, index })
    }
}

impl FrameSource for WebcamSource {
    fn read_frame(&mut self) -> Result<RgbImage, CaptureError> {
        let buffer = self
            .camera
            .frame()
            .map_err(|err| CaptureError::Read(err.to_string()))?;
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .map_err(|err| CaptureError::Read(err.to_string()))?;
        let (width, height) = decoded.dimensions();
        RgbImage::from_raw(width, height, decoded.into_raw())
            .ok_or_else(|| CaptureError::Read("decoded frame has the wrong length".into()))
    }

    fn describe(&self) -> String {
        format!("camera {} ({})", self.index, self.camera.info().human_name())
    }
}

impl Drop for WebcamSource {
    fn drop(&mut self) {
        match self.camera.stop_stream() {
            Ok(()) => log_info!("camera {} released", self.index),
            Err(err) => log_warn!("camera {} release failed: {err}", self.index),
        }
    }
}
