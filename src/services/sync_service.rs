//! Sync/Seed Action Controllers
//!
//! Two guarded fire-and-forget backend mutations. Each holds a boolean
//! in-flight guard: a second click while one run is outstanding is a
//! no-op. On success the list and stats are each re-fetched exactly
//! once; on failure nothing downstream is touched.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SeedReport, SyncReport, SyncStatus};
use crate::services::notification_service::{show_error, show_success};
use crate::services::property_service::PropertyListState;
use crate::services::stats_service::StatsState;

/// Fixed parameters for a sync run; the backend clamps server-side.
pub const SYNC_DAYS_BACK: u32 = 30;
pub const SYNC_MAX_EMAILS: u32 = 100;

/// Human-readable summary of a completed sync, counts verbatim.
pub fn sync_summary(report: &SyncReport) -> String {
    format!(
        "Found {} properties, added {} new.",
        report.total_found, report.new_added
    )
}

/// Human-readable summary of a completed seed run.
pub fn seed_summary(report: &SeedReport) -> String {
    format!("Added {} sample properties!", report.properties_added)
}

/// Claim an in-flight guard. Returns false when a run is already
/// outstanding, in which case the caller must do nothing.
pub fn claim_guard(guard: RwSignal<bool>) -> bool {
    if guard.get_untracked() {
        return false;
    }
    guard.set(true);
    true
}

/// Resolve a finished action: surface the outcome and, on success only,
/// trigger exactly one list re-fetch and one stats re-fetch. Failures
/// touch nothing downstream.
pub fn finish_action<T>(
    result: Result<T, String>,
    success_title: &str,
    summary: impl FnOnce(&T) -> String,
    error_title: &str,
    refresh_list: impl FnOnce(),
    refresh_stats: impl FnOnce(),
) {
    match result {
        Ok(report) => {
            show_success(success_title, Some(&summary(&report)));
            refresh_list();
            refresh_stats();
        }
        Err(message) => {
            show_error(error_title, Some(&message), None);
        }
    }
}

#[derive(Clone, Copy)]
pub struct SyncActionState {
    /// Whether the backend holds a Gmail credential. Loaded once at
    /// mount, never polled. Gates the sync button, not the controller.
    pub status: RwSignal<SyncStatus>,
    pub syncing: RwSignal<bool>,
    pub seeding: RwSignal<bool>,
}

impl SyncActionState {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(SyncStatus::default()),
            syncing: RwSignal::new(false),
            seeding: RwSignal::new(false),
        }
    }

    /// Fetch the credential status; on failure the "not configured"
    /// default stands and the error is only logged.
    pub fn load_status(&self) {
        let status = self.status;
        spawn_local(async move {
            match api::get_sync_status().await {
                Ok(fresh) => status.set(fresh),
                Err(detail) => log::warn!("sync status check failed: {detail}"),
            }
        });
    }

    /// Trigger an email sync. No-op while one is already running.
    pub fn run_sync(&self, list: PropertyListState, stats: StatsState) {
        if !claim_guard(self.syncing) {
            return;
        }
        let syncing = self.syncing;
        spawn_local(async move {
            let result = api::trigger_sync(SYNC_DAYS_BACK, SYNC_MAX_EMAILS).await;
            finish_action(
                result,
                "Sync complete!",
                sync_summary,
                "Sync failed",
                move || list.load(),
                move || stats.refresh(),
            );
            // Guard is released on both arms.
            syncing.set(false);
        });
    }

    /// Insert demonstration listings. No-op while one run is outstanding.
    pub fn run_seed(&self, list: PropertyListState, stats: StatsState) {
        if !claim_guard(self.seeding) {
            return;
        }
        let seeding = self.seeding;
        spawn_local(async move {
            let result = api::seed_sample().await;
            finish_action(
                result,
                "Sample data added",
                seed_summary,
                "Seeding failed",
                move || list.load(),
                move || stats.refresh(),
            );
            seeding.set(false);
        });
    }
}

impl Default for SyncActionState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_sync_action_state() {
    provide_context(SyncActionState::new());
}

pub fn use_sync_action_state() -> SyncActionState {
    expect_context::<SyncActionState>()
}
