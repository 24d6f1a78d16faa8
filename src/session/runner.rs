use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::time::Instant;

use crate::capture::{mirror, FrameSource};
use crate::classifier::EmotionClassifier;
use crate::config::HudConfig;
use crate::display::{DisplaySurface, KeyPress};
use crate::emotion::{EmotionScores, TopEmotion};
use crate::hud::draw_hud;
use crate::sampler::EmotionSampler;

use super::state::{SessionState, SessionStats, TickOutcome};

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    QuitRequested,
    StreamEnded,
}

impl fmt::Display for ExitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitReason::QuitRequested => f.write_str("quit requested"),
            ExitReason::StreamEnded => f.write_str("stream ended"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub reason: ExitReason,
    pub scores: EmotionScores,
    pub top: TopEmotion,
    pub stats: SessionStats,
}

/// One interactive session: capture, analyze on a cadence, draw, present.
///
/// The session owns its frame source and display. Both are dropped when
/// [`HudSession::run`] returns, on every exit path.
pub struct HudSession<S, C, D> {
    source: S,
    sampler: EmotionSampler<C>,
    display: D,
    config: HudConfig,
    state: SessionState,
}

impl<S, C, D> HudSession<S, C, D>
where
    S: FrameSource,
    C: EmotionClassifier,
    D: DisplaySurface,
{
    pub fn new(source: S, classifier: C, display: D, config: HudConfig) -> Self {
        Self {
            source,
            sampler: EmotionSampler::new(classifier),
            display,
            config,
            state: SessionState::new(),
        }
    }

    pub fn run(self) -> Result<SessionSummary> {
        self.run_with_clock(Instant::now)
    }

    /// Like [`HudSession::run`], reading the time from `now`: once per frame,
    /// and once more when an analysis completes.
    pub fn run_with_clock(mut self, mut now: impl FnMut() -> Instant) -> Result<SessionSummary> {
        log_info!(
            "session started on {} (analysis every {:?})",
            self.source.describe(),
            self.config.analyze_every
        );

        let reason = loop {
            let mut frame = match self.source.read_frame() {
                Ok(frame) => frame,
                Err(err) => {
                    log_info!("capture stopped: {err}");
                    break ExitReason::StreamEnded;
                }
            };
            mirror(&mut frame);

            let outcome = self.state.tick(
                &mut self.sampler,
                &frame,
                self.config.analyze_every,
                &mut now,
            );
            if let TickOutcome::Analyzed(top) = outcome {
                log_debug!("analysis complete: {top}");
            }

            draw_hud(&mut frame, &self.state.hud_view());
            self.display
                .present(&frame)
                .context("failed to present HUD frame")?;
            self.state.record_frame();

            if self.display.poll_key() == Some(KeyPress::Quit) {
                break ExitReason::QuitRequested;
            }
        };

        let stats = self.state.stats().clone();
        log_info!(
            "session ended ({reason}): {} frames, {} analyses ({} ok, {} failed), last reading {}",
            stats.frames_rendered,
            stats.analyses_attempted,
            stats.analyses_succeeded,
            stats.analyses_failed,
            self.state.top()
        );

        let summary = SessionSummary {
            reason,
            scores: *self.state.scores(),
            top: self.state.top(),
            stats,
        };
        match serde_json::to_string(&summary) {
            Ok(json) => log_debug!("session summary: {json}"),
            Err(err) => log_debug!("session summary not serializable: {err}"),
        }
        Ok(summary)
    }
}
