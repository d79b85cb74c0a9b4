//! View-model tests for run and saved-task listings.

use oak_core::{RunAction, RunStatus, StatusTone, WATCHDOG_RECOVERY_MARKER};
use oak_test_utils::{run, run_status_strategy, saved_task};
use proptest::prelude::*;

proptest! {
    // Exactly one action is offered per run, decided by liveness alone.
    #[test]
    fn offered_action_follows_liveness(status in run_status_strategy()) {
        let run = run(status);
        if run.is_active() {
            prop_assert_eq!(run.offered_action(), RunAction::Cancel);
        } else {
            prop_assert_eq!(run.offered_action(), RunAction::Rerun);
        }
    }
}

#[test]
fn status_tones_match_listing_palette() {
    assert_eq!(RunStatus::Pending.tone(), StatusTone::Neutral);
    assert_eq!(RunStatus::Running.tone(), StatusTone::Active);
    assert_eq!(RunStatus::Completed.tone(), StatusTone::Success);
    assert_eq!(RunStatus::Failed.tone(), StatusTone::Error);
    assert_eq!(RunStatus::Timeout.tone(), StatusTone::Error);
    assert_eq!(RunStatus::Cancelled.tone(), StatusTone::Warning);
}

#[test]
fn watchdog_badge_shows_only_for_marked_runs() {
    let mut recovered = run(RunStatus::Completed);
    recovered.error = Some(format!("turn limit hit; {} at 09:31", WATCHDOG_RECOVERY_MARKER));
    assert!(recovered.is_watchdog_recovered());

    let plain = run(RunStatus::Completed);
    assert!(!plain.is_watchdog_recovered());
}

#[test]
fn schedule_badge_requires_cron_and_enabled() {
    let task = saved_task();
    assert!(task.is_scheduled());

    let mut paused = saved_task();
    paused.schedule_enabled = false;
    assert!(!paused.is_scheduled());

    let mut no_cron = saved_task();
    no_cron.schedule_cron = None;
    assert!(!no_cron.is_scheduled());
}
