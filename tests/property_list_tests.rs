//! Property List Controller Tests
//!
//! Covers the fetch state machine: loading transitions, failure handling
//! that preserves the displayed rows, and the stale-response guard.

use leptos::prelude::*;
use property_gallery::api::{Property, PropertyFilter, LIST_LIMIT};
use property_gallery::services::property_service::{FetchState, PropertyListState};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn listing(id: &str) -> Property {
    Property {
        costar_id: id.to_string(),
        address: "100 Congress Ave".to_string(),
        city: "Austin".to_string(),
        state: "TX".to_string(),
        zip_code: Some("78701".to_string()),
        price: None,
        price_per_sf: None,
        property_type: Some("Office".to_string()),
        cap_rate: None,
        square_feet: None,
        year_built: None,
        image_url: None,
        search_name: None,
    }
}

#[wasm_bindgen_test]
fn test_begin_enters_loading() {
    let state = PropertyListState::new();
    assert_eq!(state.state.get_untracked(), FetchState::Idle);

    let (seq, snapshot) = state.begin();
    assert_eq!(seq, 1);
    assert_eq!(snapshot, PropertyFilter::default());
    assert!(state.state.get_untracked().is_loading());
}

#[wasm_bindgen_test]
fn test_success_replaces_rows() {
    let state = PropertyListState::new();
    let (seq, _) = state.begin();

    state.apply(seq, Ok(vec![listing("1"), listing("2")]));

    assert_eq!(state.rows.get_untracked().len(), 2);
    assert_eq!(
        state.state.get_untracked(),
        FetchState::Success(vec![listing("1"), listing("2")])
    );
}

#[wasm_bindgen_test]
fn test_failure_keeps_previous_rows() {
    let state = PropertyListState::new();
    let (seq, _) = state.begin();
    state.apply(seq, Ok(vec![listing("1")]));

    let (seq, _) = state.begin();
    state.apply(seq, Err("Failed to load properties. Please try again.".to_string()));

    // The error flag is set but the last successful rows survive.
    assert_eq!(
        state.state.get_untracked().error(),
        Some("Failed to load properties. Please try again.")
    );
    assert_eq!(state.rows.get_untracked(), vec![listing("1")]);
}

#[wasm_bindgen_test]
fn test_stale_response_is_discarded() {
    let state = PropertyListState::new();

    // First request issued, then superseded before it resolves.
    let (old_seq, _) = state.begin();
    let (new_seq, _) = state.begin();

    assert!(!state.apply(old_seq, Ok(vec![listing("stale")])));
    assert!(state.state.get_untracked().is_loading());
    assert!(state.rows.get_untracked().is_empty());

    assert!(state.apply(new_seq, Ok(vec![listing("fresh")])));
    assert_eq!(state.rows.get_untracked(), vec![listing("fresh")]);
}

#[wasm_bindgen_test]
fn test_stale_error_cannot_clobber_newer_success() {
    let state = PropertyListState::new();

    let (old_seq, _) = state.begin();
    let (new_seq, _) = state.begin();
    state.apply(new_seq, Ok(vec![listing("fresh")]));

    state.apply(old_seq, Err("boom".to_string()));
    assert_eq!(
        state.state.get_untracked(),
        FetchState::Success(vec![listing("fresh")])
    );
}

#[wasm_bindgen_test]
fn test_retry_snapshots_identical_filter() {
    let state = PropertyListState::new();
    state.set_filter(PropertyFilter {
        city: String::new(),
        state: "TX".to_string(),
        property_type: String::new(),
    });

    let (_, first) = state.begin();
    let (_, second) = state.begin();

    // Unchanged filter means an identical request.
    assert_eq!(first, second);
    assert_eq!(
        first.to_query_pairs(LIST_LIMIT),
        second.to_query_pairs(LIST_LIMIT)
    );
}

#[wasm_bindgen_test]
fn test_clear_filter_resets_all_fields() {
    let state = PropertyListState::new();
    state.set_filter(PropertyFilter {
        city: "Austin".to_string(),
        state: "TX".to_string(),
        property_type: "Retail".to_string(),
    });

    state.clear_filter();
    assert_eq!(state.filter.get_untracked(), PropertyFilter::default());
    assert!(!state.filter.get_untracked().is_active());
}
