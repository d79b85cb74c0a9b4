//! Saved task entity.

use crate::Timestamp;
use serde::{Deserialize, Serialize};

/// A reusable agent task, optionally on a cron schedule.
///
/// Created, edited, and deleted by explicit user action. The agent a task
/// is bound to is immutable after creation; the console enforces this by
/// never sending an agent name on update (see `oak_api::UpdateSavedTaskRequest`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SavedTask {
    pub id: String,
    pub name: String,
    pub agent_name: String,
    pub task: String,
    pub description: Option<String>,
    pub schedule_cron: Option<String>,
    pub schedule_enabled: bool,
    pub total_runs: u32,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = Option<chrono::DateTime<chrono::Utc>>)
    )]
    pub last_run_at: Option<Timestamp>,
}

impl SavedTask {
    /// Whether the task has a schedule that is currently active.
    pub fn is_scheduled(&self) -> bool {
        self.schedule_enabled && self.schedule_cron.is_some()
    }
}
