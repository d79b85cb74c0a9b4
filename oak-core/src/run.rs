//! Agent run entity and its derived view state.
//!
//! The run state machine (pending -> running -> completed/failed/cancelled/
//! timeout) is owned by the daemon. The console only observes runs and
//! requests cancel/rerun; it never transitions state itself.

use crate::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker substring the daemon writes into a run's error field when its
/// watchdog force-completed a stuck run. Opaque contract: matched as a
/// substring, never parsed.
pub const WATCHDOG_RECOVERY_MARKER: &str = "recovered by watchdog";

/// Status of an agent run as reported by the daemon.
///
/// Unrecognized wire values decode as `Pending` so that a newer daemon
/// never breaks an older console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Running,
    Completed,
    Failed,
    Cancelled,
    Timeout,
    #[serde(other)]
    Pending,
}

/// Presentation tone for a status value, mapped to concrete colors by
/// whatever front end embeds this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Neutral,
    Active,
    Success,
    Warning,
    Error,
}

impl RunStatus {
    /// Display label. Total over all status values.
    pub fn label(&self) -> &'static str {
        match self {
            RunStatus::Pending => "Pending",
            RunStatus::Running => "Running",
            RunStatus::Completed => "Completed",
            RunStatus::Failed => "Failed",
            RunStatus::Cancelled => "Cancelled",
            RunStatus::Timeout => "Timed out",
        }
    }

    /// Presentation tone. Total over all status values.
    pub fn tone(&self) -> StatusTone {
        match self {
            RunStatus::Pending => StatusTone::Neutral,
            RunStatus::Running => StatusTone::Active,
            RunStatus::Completed => StatusTone::Success,
            RunStatus::Failed => StatusTone::Error,
            RunStatus::Cancelled => StatusTone::Warning,
            RunStatus::Timeout => StatusTone::Error,
        }
    }

    /// Whether the run is still in flight.
    pub fn is_active(&self) -> bool {
        matches!(self, RunStatus::Pending | RunStatus::Running)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The single action offered for a run in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    Cancel,
    Rerun,
}

/// A single execution of an agent against a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AgentRun {
    pub id: String,
    pub agent_name: String,
    pub task: String,
    pub status: RunStatus,
    pub turns_used: u32,
    pub cost_usd: Option<f64>,
    #[cfg_attr(feature = "openapi", schema(value_type = chrono::DateTime<chrono::Utc>))]
    pub created_at: Timestamp,
    pub error: Option<String>,
    pub files_created: Vec<String>,
    pub files_modified: Vec<String>,
    pub duration_seconds: Option<f64>,
}

impl AgentRun {
    /// Whether the run is pending or running, and therefore cancellable.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Cancel while active, rerun otherwise.
    pub fn offered_action(&self) -> RunAction {
        if self.is_active() {
            RunAction::Cancel
        } else {
            RunAction::Rerun
        }
    }

    /// Whether the daemon's watchdog force-completed this run.
    pub fn is_watchdog_recovered(&self) -> bool {
        self.error
            .as_deref()
            .is_some_and(|e| e.contains(WATCHDOG_RECOVERY_MARKER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn run_with_status(status: RunStatus) -> AgentRun {
        AgentRun {
            id: "run-1".to_string(),
            agent_name: "refactor".to_string(),
            task: "tidy the parser".to_string(),
            status,
            turns_used: 3,
            cost_usd: Some(0.12),
            created_at: Utc::now(),
            error: None,
            files_created: Vec::new(),
            files_modified: Vec::new(),
            duration_seconds: Some(41.5),
        }
    }

    #[test]
    fn running_offers_cancel_not_rerun() {
        let run = run_with_status(RunStatus::Running);
        assert!(run.is_active());
        assert_eq!(run.offered_action(), RunAction::Cancel);
    }

    #[test]
    fn finished_offers_rerun() {
        for status in [
            RunStatus::Completed,
            RunStatus::Failed,
            RunStatus::Cancelled,
            RunStatus::Timeout,
        ] {
            let run = run_with_status(status);
            assert!(!run.is_active());
            assert_eq!(run.offered_action(), RunAction::Rerun);
        }
    }

    #[test]
    fn watchdog_marker_is_substring_matched() {
        let mut run = run_with_status(RunStatus::Completed);
        run.error = Some("Run stalled at turn 7; recovered by watchdog after 300s".to_string());
        assert!(run.is_watchdog_recovered());

        run.error = Some("provider timeout".to_string());
        assert!(!run.is_watchdog_recovered());

        run.error = None;
        assert!(!run.is_watchdog_recovered());
    }

    #[test]
    fn unknown_status_decodes_as_pending() -> Result<(), serde_json::Error> {
        let status: RunStatus = serde_json::from_str("\"paused\"")?;
        assert_eq!(status, RunStatus::Pending);
        let status: RunStatus = serde_json::from_str("\"timeout\"")?;
        assert_eq!(status, RunStatus::Timeout);
        Ok(())
    }
}
