pub mod scores;
pub mod types;

pub use scores::{EmotionScores, TopEmotion};
pub use types::Emotion;
