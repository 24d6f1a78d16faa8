//! Boundary to the external emotion model.
//!
//! The HUD never looks inside the model: it hands over a frame and gets back
//! per-face category scores, or an error it is free to ignore.

pub mod deepface;
pub mod types;

pub use deepface::DeepFaceClient;
pub use types::{AnalyzeAction, AnalyzeRequest, ClassifyError, FaceAnalysis};

use image::RgbImage;

/// A blocking facial-attribute classifier.
pub trait EmotionClassifier {
    /// Run the model over one frame. Results are in detection order.
    fn analyze(
        &mut self,
        frame: &RgbImage,
        request: &AnalyzeRequest,
    ) -> Result<Vec<FaceAnalysis>, ClassifyError>;
}

impl<C: EmotionClassifier + ?Sized> EmotionClassifier for Box<C> {
    fn analyze(
        &mut self,
        frame: &RgbImage,
        request: &AnalyzeRequest,
    ) -> Result<Vec<FaceAnalysis>, ClassifyError> {
        (**self).analyze(frame, request)
    }
}
