pub mod runner;
pub mod state;

pub use runner::{ExitReason, HudSession, SessionSummary};
pub use state::{SessionState, SessionStats, TickOutcome};
