//! Sync/Seed Action Controller Tests
//!
//! The in-flight guards make each action non-reentrant: a second
//! invocation while one run is outstanding must be a no-op. A finished
//! run refreshes the list and stats exactly once each on success and
//! not at all on failure.

use leptos::prelude::*;
use property_gallery::api::{SeedReport, SyncReport};
use property_gallery::services::sync_service::{
    claim_guard, finish_action, seed_summary, sync_summary, SyncActionState,
};
use std::cell::Cell;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_guard_blocks_second_claim() {
    let state = SyncActionState::new();

    assert!(claim_guard(state.syncing));
    // Second invocation while the first run is outstanding.
    assert!(!claim_guard(state.syncing));
}

#[wasm_bindgen_test]
fn test_guard_reusable_after_release() {
    let state = SyncActionState::new();

    assert!(claim_guard(state.syncing));
    state.syncing.set(false);
    assert!(claim_guard(state.syncing));
}

#[wasm_bindgen_test]
fn test_guards_are_independent() {
    let state = SyncActionState::new();

    assert!(claim_guard(state.syncing));
    // A running sync must not block seeding, and vice versa.
    assert!(claim_guard(state.seeding));
}

#[wasm_bindgen_test]
fn test_sync_starts_unconfigured() {
    let state = SyncActionState::new();
    assert!(!state.status.get_untracked().configured);
    assert!(state.status.get_untracked().message.is_empty());
}

#[wasm_bindgen_test]
fn test_successful_sync_refreshes_each_exactly_once() {
    let list_refreshes = Cell::new(0_u32);
    let stats_refreshes = Cell::new(0_u32);

    finish_action(
        Ok(SyncReport {
            total_found: 12,
            new_added: 5,
        }),
        "Sync complete!",
        sync_summary,
        "Sync failed",
        || list_refreshes.set(list_refreshes.get() + 1),
        || stats_refreshes.set(stats_refreshes.get() + 1),
    );

    assert_eq!(list_refreshes.get(), 1);
    assert_eq!(stats_refreshes.get(), 1);
}

#[wasm_bindgen_test]
fn test_failed_sync_refreshes_nothing() {
    let list_refreshes = Cell::new(0_u32);
    let stats_refreshes = Cell::new(0_u32);

    finish_action::<SyncReport>(
        Err("Sync failed. Please check Gmail credentials.".to_string()),
        "Sync complete!",
        sync_summary,
        "Sync failed",
        || list_refreshes.set(list_refreshes.get() + 1),
        || stats_refreshes.set(stats_refreshes.get() + 1),
    );

    assert_eq!(list_refreshes.get(), 0);
    assert_eq!(stats_refreshes.get(), 0);
}

#[wasm_bindgen_test]
fn test_successful_seed_refreshes_each_exactly_once() {
    let list_refreshes = Cell::new(0_u32);
    let stats_refreshes = Cell::new(0_u32);

    finish_action(
        Ok(SeedReport {
            properties_added: 8,
        }),
        "Sample data added",
        seed_summary,
        "Seeding failed",
        || list_refreshes.set(list_refreshes.get() + 1),
        || stats_refreshes.set(stats_refreshes.get() + 1),
    );

    assert_eq!(list_refreshes.get(), 1);
    assert_eq!(stats_refreshes.get(), 1);
}
