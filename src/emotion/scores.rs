use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;

use super::Emotion;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Confidence per tracked emotion, on the classifier's 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmotionScores {
    values: [f64; Emotion::ALL.len()],
}

impl EmotionScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict a classifier's full category map to the tracked emotions.
    ///
    /// Missing or non-finite categories read as 0.0; everything else is
    /// clamped into [0, 100].
    pub fn project(raw: &HashMap<String, f64>) -> Self {
        let mut scores = Self::new();
        for emotion in Emotion::ALL {
            let value = raw
                .get(emotion.label())
                .copied()
                .filter(|v| v.is_finite())
                .unwrap_or(MIN_SCORE);
            scores.set(emotion, value);
        }
        scores
    }

    pub fn get(&self, emotion: Emotion) -> f64 {
        self.values[emotion.slot()]
    }

    pub fn set(&mut self, emotion: Emotion, value: f64) {
        self.values[emotion.slot()] = value.clamp(MIN_SCORE, MAX_SCORE);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.iter().map(|&e| (e, self.get(e)))
    }

    /// Highest-scoring emotion. Ties go to the emotion declared first.
    pub fn top(&self) -> TopEmotion {
        let mut best = Emotion::ALL[0];
        for emotion in Emotion::ALL.into_iter().skip(1) {
            // Strictly greater, so an earlier emotion keeps a tie.
            if self.get(emotion) > self.get(best) {
                best = emotion;
            }
        }
        TopEmotion::new(best, self.get(best))
    }
}

// Serialized as `{"angry": 10.0, ...}`, the same shape the classifier sends.
impl Serialize for EmotionScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Emotion::ALL.len()))?;
        for (emotion, score) in self.iter() {
            map.serialize_entry(emotion.label(), &score)?;
        }
        map.end()
    }
}

/// Dominant emotion with its confidence truncated to a whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TopEmotion {
    pub emotion: Emotion,
    pub confidence: u8,
}

impl TopEmotion {
    pub fn new(emotion: Emotion, score: f64) -> Self {
        Self {
            emotion,
            confidence: score.clamp(MIN_SCORE, MAX_SCORE).trunc() as u8,
        }
    }

    /// Text for the face-box label strip, e.g. `happy (82%)`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl Default for TopEmotion {
    fn default() -> Self {
        Self {
            emotion: Emotion::Neutral,
            confidence: 0,
        }
    }
}

impl fmt::Display for TopEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.emotion, self.confidence)
    }
}
