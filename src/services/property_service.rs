//! Property List Controller
//!
//! Owns the fetch lifecycle for the listing grid: load on mount, reload
//! on every filter change, explicit retry. Each request carries a
//! sequence ticket; a resolution for a superseded ticket is dropped so a
//! slow response for an old filter can never overwrite newer state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

use crate::api::{self, Property, PropertyFilter, LIST_LIMIT};
use crate::services::notification_service::{show_error, ToastAction};

/// Lifecycle of one controller-owned fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// A resolved request applies only if no newer request has been issued.
pub fn is_current(issued: u64, latest: u64) -> bool {
    issued == latest
}

#[derive(Clone, Copy)]
pub struct PropertyListState {
    /// Lifecycle of the most recently issued fetch.
    pub state: RwSignal<FetchState<Vec<Property>>>,
    /// Rows from the last successful fetch. Replaced only on success, so
    /// a failed reload never clobbers what was already on screen.
    pub rows: RwSignal<Vec<Property>>,
    /// Current predicates; whole-object replacement on every edit.
    pub filter: RwSignal<PropertyFilter>,
    latest_seq: RwSignal<u64>,
}

impl PropertyListState {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FetchState::Idle),
            rows: RwSignal::new(Vec::new()),
            filter: RwSignal::new(PropertyFilter::default()),
            latest_seq: RwSignal::new(0),
        }
    }

    /// Issue a fetch for the current filter.
    pub fn load(&self) {
        let (seq, snapshot) = self.begin();
        let this = *self;
        spawn_local(async move {
            let result = api::list_properties(&snapshot, LIST_LIMIT).await;
            let message = result.as_ref().err().cloned();
            if this.apply(seq, result) {
                if let Some(message) = message {
                    // The inline error panel is the primary affordance;
                    // the toast adds a second retry entry point.
                    let retry = ToastAction {
                        label: "Retry".to_string(),
                        handler: Arc::new(move || this.retry()),
                    };
                    show_error("Failed to load properties", Some(&message), Some(retry));
                }
            }
        });
    }

    /// Re-run the fetch with the unchanged filter.
    pub fn retry(&self) {
        self.load();
    }

    pub fn set_filter(&self, filter: PropertyFilter) {
        self.filter.set(filter);
    }

    pub fn clear_filter(&self) {
        self.filter.set(PropertyFilter::default());
    }

    /// Enter `Loading` and hand out the ticket and filter snapshot for
    /// the request about to be issued.
    pub fn begin(&self) -> (u64, PropertyFilter) {
        let seq = self.latest_seq.get_untracked() + 1;
        self.latest_seq.set(seq);
        self.state.set(FetchState::Loading);
        (seq, self.filter.get_untracked())
    }

    /// Apply a resolved fetch. Results for superseded tickets are
    /// discarded silently; rows are replaced only on success. Returns
    /// whether the resolution was applied.
    pub fn apply(&self, issued_seq: u64, result: Result<Vec<Property>, String>) -> bool {
        if !is_current(issued_seq, self.latest_seq.get_untracked()) {
            log::info!("dropping stale property list response (ticket {issued_seq})");
            return false;
        }
        match result {
            Ok(list) => {
                self.rows.set(list.clone());
                self.state.set(FetchState::Success(list));
            }
            Err(message) => self.state.set(FetchState::Error(message)),
        }
        true
    }
}

impl Default for PropertyListState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_property_list_state() {
    provide_context(PropertyListState::new());
}

pub fn use_property_list_state() -> PropertyListState {
    expect_context::<PropertyListState>()
}
