use std::time::Duration;

/// Tunables for a HUD session. Drawing geometry lives in [`crate::hud::layout`].
#[derive(Debug, Clone)]
pub struct HudConfig {
    /// Minimum time between classifier calls; analysis is far more expensive
    /// than drawing a frame.
    pub analyze_every: Duration,

    pub camera_index: u32,
    pub window_title: String,

    /// DeepFace `analyze` route and how long to wait for it.
    pub classifier_endpoint: String,
    pub classifier_timeout: Duration,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            analyze_every: Duration::from_millis(600),
            camera_index: 0,
            window_title: " AI Face Emotion HUD".into(),
            classifier_endpoint: "http://127.0.0.1:5005/analyze".into(),
            classifier_timeout: Duration::from_secs(10),
        }
    }
}
