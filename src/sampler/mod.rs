pub mod clock;
pub mod emotion_sampler;

pub use clock::AnalysisClock;
pub use emotion_sampler::{EmotionSampler, SampleError};
