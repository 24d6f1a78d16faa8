use chrono::{DateTime, Utc};
use image::RgbImage;
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::classifier::EmotionClassifier;
use crate::emotion::{EmotionScores, TopEmotion};
use crate::hud::HudView;
use crate::sampler::{AnalysisClock, EmotionSampler};

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_warn};

#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub started_at: DateTime<Utc>,
    pub frames_rendered: u64,
    pub analyses_attempted: u64,
    pub analyses_succeeded: u64,
    pub analyses_failed: u64,
    /// Failures since the last success. A failed analysis does not advance
    /// the clock, so a broken classifier is retried on every frame.
    pub consecutive_failures: u64,
}

impl SessionStats {
    fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            frames_rendered: 0,
            analyses_attempted: 0,
            analyses_succeeded: 0,
            analyses_failed: 0,
            consecutive_failures: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not due yet; nothing was called.
    Skipped,
    Analyzed(TopEmotion),
    /// The classifier failed; previous scores stay on screen.
    Failed,
}

/// Everything the loop carries from one frame to the next.
#[derive(Debug, Clone)]
pub struct SessionState {
    scores: EmotionScores,
    top: TopEmotion,
    clock: AnalysisClock,
    stats: SessionStats,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            scores: EmotionScores::new(),
            top: TopEmotion::default(),
            clock: AnalysisClock::new(),
            stats: SessionStats::new(Utc::now()),
        }
    }

    pub fn scores(&self) -> &EmotionScores {
        &self.scores
    }

    pub fn top(&self) -> TopEmotion {
        self.top
    }

    pub fn clock(&self) -> &AnalysisClock {
        &self.clock
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn hud_view(&self) -> HudView<'_> {
        HudView {
            scores: &self.scores,
            top: self.top,
        }
    }

    /// Run the sampler if the cadence allows it and fold the result in.
    ///
    /// `now` is read once to check the cadence and again after a successful
    /// analysis; the clock is stamped with the second reading, so the interval
    /// runs from the end of one classifier call. Scores, top emotion and clock
    /// change only on success.
    pub fn tick<C, F>(
        &mut self,
        sampler: &mut EmotionSampler<C>,
        frame: &RgbImage,
        every: Duration,
        mut now: F,
    ) -> TickOutcome
    where
        C: EmotionClassifier,
        F: FnMut() -> Instant,
    {
        if !self.clock.is_due(now(), every) {
            return TickOutcome::Skipped;
        }

        self.stats.analyses_attempted += 1;
        match sampler.sample(frame) {
            Ok(scores) => {
                self.scores = scores;
                self.top = scores.top();
                self.clock.mark(now());
                self.stats.analyses_succeeded += 1;
                self.stats.consecutive_failures = 0;
                TickOutcome::Analyzed(self.top)
            }
            Err(err) => {
                self.stats.analyses_failed += 1;
                self.stats.consecutive_failures += 1;
                if self.stats.consecutive_failures == 1 {
                    log_warn!("emotion analysis failed, keeping previous scores: {err}");
                } else {
                    log_debug!(
                        "emotion analysis failed ({} in a row): {err}",
                        self.stats.consecutive_failures
                    );
                }
                TickOutcome::Failed
            }
        }
    }

    pub fn record_frame(&mut self) {
        self.stats.frames_rendered += 1;
    }
}
