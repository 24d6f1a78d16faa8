use image::RgbImage;
use thiserror::Error;

use crate::classifier::{AnalyzeRequest, ClassifyError, EmotionClassifier};
use crate::emotion::EmotionScores;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error(transparent)]
    Classifier(#[from] ClassifyError),
    #[error("classifier returned no face entries")]
    NoFaces,
}

/// Turns a frame into tracked emotion scores via the external classifier.
///
/// Only the first face entry is consulted. The sampler holds no scores of its
/// own, so a failed call cannot disturb what the HUD is showing.
pub struct EmotionSampler<C> {
    classifier: C,
    request: AnalyzeRequest,
}

impl<C: EmotionClassifier> EmotionSampler<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            request: AnalyzeRequest::emotion_only(),
        }
    }

    pub fn sample(&mut self, frame: &RgbImage) -> Result<EmotionScores, SampleError> {
        let faces = self.classifier.analyze(frame, &self.request)?;
        let first = faces.into_iter().next().ok_or(SampleError::NoFaces)?;
        Ok(EmotionScores::project(&first.emotion))
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }
}
