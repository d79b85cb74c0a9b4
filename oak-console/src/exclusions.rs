//! Exclusion pattern manager.
//!
//! Add/remove/reset of indexing exclusion patterns, each followed by an
//! apply step that asks the daemon to restart. The apply is fire and
//! forget: a failed restart leaves the pattern change persisted, which is
//! surfaced to the user instead of rolled back.

use crate::api_client::{ApiClient, ApiClientError};
use crate::notifications::Notification;
use oak_api::types::{AddExclusionRequest, RemoveExclusionRequest, UpdateExclusionsResponse};
use oak_core::ExclusionSet;

#[derive(Debug, thiserror::Error)]
pub enum ExclusionError {
    #[error("Pattern must not be empty")]
    EmptyPattern,
    #[error("Pattern '{0}' is already excluded")]
    AlreadyExists(String),
    #[error(transparent)]
    Api(#[from] ApiClientError),
}

/// What the daemon reported for an add request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

pub struct ExclusionManager {
    client: ApiClient,
    set: ExclusionSet,
    notifications: Vec<Notification>,
}

impl ExclusionManager {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            set: ExclusionSet::default(),
            notifications: Vec::new(),
        }
    }

    pub fn patterns(&self) -> &ExclusionSet {
        &self.set
    }

    /// Transient messages produced by apply steps, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Re-sync the pattern lists from the daemon.
    pub async fn refresh(&mut self) -> Result<(), ApiClientError> {
        self.set = self.client.get_exclusions().await?.into_domain();
        Ok(())
    }

    /// Validate raw input client-side: trimmed, non-empty, and not already
    /// present in either list.
    pub fn prepare_add(&self, raw: &str) -> Result<String, ExclusionError> {
        let pattern = raw.trim();
        if pattern.is_empty() {
            return Err(ExclusionError::EmptyPattern);
        }
        if self.set.would_duplicate(pattern) {
            return Err(ExclusionError::AlreadyExists(pattern.to_string()));
        }
        Ok(pattern.to_string())
    }

    /// Whether a mutation response warrants the restart + re-index step.
    /// An `already_exists` outcome changes nothing, so nothing is applied.
    pub fn needs_apply(response: &UpdateExclusionsResponse) -> bool {
        !response.added.is_empty() || !response.removed.is_empty()
    }

    pub async fn add(&mut self, raw: &str) -> Result<AddOutcome, ExclusionError> {
        let pattern = self.prepare_add(raw)?;
        let response = self
            .client
            .add_exclusion(&AddExclusionRequest {
                pattern: pattern.clone(),
            })
            .await?;

        let outcome = self.absorb_add_response(pattern, &response)?;
        if outcome == AddOutcome::Added {
            self.apply_changes().await;
        }
        Ok(outcome)
    }

    /// Fold the daemon's verdict into the local snapshot. Only an `added`
    /// outcome mutates the pattern list and warrants the apply step.
    fn absorb_add_response(
        &mut self,
        pattern: String,
        response: &UpdateExclusionsResponse,
    ) -> Result<AddOutcome, ExclusionError> {
        if response.added.iter().any(|p| p == &pattern) {
            self.set.user_patterns.push(pattern);
            return Ok(AddOutcome::Added);
        }

        // The daemon saw a duplicate the local snapshot missed.
        if response.already_exists.iter().any(|p| p == &pattern) {
            self.notifications
                .push(Notification::info(format!("'{}' is already excluded", pattern)));
            return Ok(AddOutcome::AlreadyExists);
        }

        Err(ExclusionError::Api(ApiClientError::InvalidResponse(
            format!("daemon reported neither added nor already_exists for '{}'", pattern),
        )))
    }

    pub async fn remove(&mut self, pattern: &str) -> Result<(), ExclusionError> {
        let response = self
            .client
            .remove_exclusion(&RemoveExclusionRequest {
                pattern: pattern.to_string(),
            })
            .await?;

        self.set.user_patterns.retain(|p| p != pattern);
        if Self::needs_apply(&response) {
            self.apply_changes().await;
        }
        Ok(())
    }

    /// Drop all user patterns, keeping the built-in defaults.
    pub async fn reset(&mut self) -> Result<(), ExclusionError> {
        let response = self.client.reset_exclusions().await?;
        self.set.user_patterns.clear();
        if Self::needs_apply(&response) {
            self.apply_changes().await;
        }
        Ok(())
    }

    /// Ask the daemon to restart so the pattern change takes effect. The
    /// pattern mutation has already been persisted; a failed restart is
    /// reported, not rolled back, and applies on the next daemon start.
    async fn apply_changes(&mut self) {
        match self.client.restart_daemon().await {
            Ok(response) => {
                tracing::info!(
                    indexing_started = response.indexing_started,
                    "daemon restarted after exclusion change"
                );
                if response.indexing_started {
                    self.notifications
                        .push(Notification::info("Re-indexing started"));
                } else {
                    self.notifications
                        .push(Notification::success("Exclusion changes applied"));
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "daemon restart after exclusion change failed");
                self.notifications.push(Notification::warning(
                    "Exclusion saved, but the daemon restart failed; it will apply on the next restart",
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> ExclusionSet {
        ExclusionSet {
            user_patterns: vec!["vendor".to_string()],
            default_patterns: vec!["node_modules".to_string()],
        }
    }

    fn manager_with_snapshot() -> ExclusionManager {
        let config = crate::config::ConsoleConfig {
            api_base_url: "http://localhost:4665".to_string(),
            auth: crate::config::AuthConfig { api_key: None },
            request_timeout_ms: 1_000,
            refresh_interval_ms: 1_000,
        };
        let client = ApiClient::new(&config).expect("client");
        let mut manager = ExclusionManager::new(client);
        manager.set = snapshot();
        manager
    }

    #[test]
    fn prepare_add_trims_and_rejects_empty() {
        let manager = manager_with_snapshot();
        assert_eq!(manager.prepare_add("  target  ").unwrap(), "target");
        assert!(matches!(
            manager.prepare_add("   "),
            Err(ExclusionError::EmptyPattern)
        ));
    }

    #[test]
    fn prepare_add_rejects_duplicates_in_either_list() {
        let manager = manager_with_snapshot();
        assert!(matches!(
            manager.prepare_add("vendor"),
            Err(ExclusionError::AlreadyExists(_))
        ));
        assert!(matches!(
            manager.prepare_add("node_modules"),
            Err(ExclusionError::AlreadyExists(_))
        ));
    }

    #[test]
    fn already_exists_response_does_not_warrant_apply() {
        let response = UpdateExclusionsResponse {
            added: Vec::new(),
            already_exists: vec!["vendor".to_string()],
            removed: Vec::new(),
        };
        assert!(!ExclusionManager::needs_apply(&response));

        let response = UpdateExclusionsResponse {
            added: vec!["vendor".to_string()],
            already_exists: Vec::new(),
            removed: Vec::new(),
        };
        assert!(ExclusionManager::needs_apply(&response));
    }

    #[test]
    fn daemon_side_duplicate_changes_nothing_and_skips_apply() {
        // "dist" passed the local duplicate check, but another client added
        // it first; the daemon reports already_exists.
        let mut manager = manager_with_snapshot();
        let response = UpdateExclusionsResponse {
            added: Vec::new(),
            already_exists: vec!["dist".to_string()],
            removed: Vec::new(),
        };

        let outcome = manager
            .absorb_add_response("dist".to_string(), &response)
            .unwrap();
        assert_eq!(outcome, AddOutcome::AlreadyExists);
        assert_eq!(manager.set, snapshot());
        assert!(!ExclusionManager::needs_apply(&response));

        let notifications = manager.drain_notifications();
        assert_eq!(notifications.len(), 1);
        assert!(notifications[0].message.contains("dist"));
    }

    #[test]
    fn accepted_add_updates_snapshot() {
        let mut manager = manager_with_snapshot();
        let response = UpdateExclusionsResponse {
            added: vec!["dist".to_string()],
            already_exists: Vec::new(),
            removed: Vec::new(),
        };

        let outcome = manager
            .absorb_add_response("dist".to_string(), &response)
            .unwrap();
        assert_eq!(outcome, AddOutcome::Added);
        assert!(manager.set.user_patterns.contains(&"dist".to_string()));
    }

    #[test]
    fn unrecognized_verdict_is_an_error() {
        let mut manager = manager_with_snapshot();
        let result =
            manager.absorb_add_response("dist".to_string(), &UpdateExclusionsResponse::default());
        assert!(matches!(result, Err(ExclusionError::Api(_))));
        assert_eq!(manager.set, snapshot());
    }
}
