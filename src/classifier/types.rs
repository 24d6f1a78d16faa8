use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzeAction {
    Emotion,
}

/// What to ask of the classifier for a single frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub actions: Vec<AnalyzeAction>,
    /// When false the model returns a best-effort result instead of failing
    /// on frames without a confidently detected face.
    pub enforce_detection: bool,
}

impl AnalyzeRequest {
    /// Emotion analysis only, lenient face detection.
    pub fn emotion_only() -> Self {
        Self {
            actions: vec![AnalyzeAction::Emotion],
            enforce_detection: false,
        }
    }
}

impl Default for AnalyzeRequest {
    fn default() -> Self {
        Self::emotion_only()
    }
}

/// One detected face as reported by the model. Only the emotion map is
/// consumed; the model's vocabulary is a superset of the tracked emotions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceAnalysis {
    #[serde(default)]
    pub emotion: HashMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_emotion: Option<String>,
}

impl FaceAnalysis {
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            emotion: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            dominant_emotion: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("failed to encode frame: {0}")]
    Encode(#[from] image::ImageError),
    #[error("classifier request failed: {0}")]
    Transport(String),
    #[error("classifier returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed classifier response: {0}")]
    Malformed(String),
    #[error("classifier error: {0}")]
    Model(String),
}
