//! Stats Controller
//!
//! One fetch at mount, re-fetched only when the sync/seed actions land.
//! Failures keep the previous value and are only logged; the header
//! numbers and filter option lists prefer stale data over a blank page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Stats};

#[derive(Clone, Copy)]
pub struct StatsState {
    pub stats: RwSignal<Stats>,
}

impl StatsState {
    pub fn new() -> Self {
        Self {
            stats: RwSignal::new(Stats::default()),
        }
    }

    pub fn refresh(&self) {
        let stats = self.stats;
        spawn_local(async move {
            match api::get_stats().await {
                Ok(fresh) => stats.set(fresh),
                Err(detail) => {
                    log::warn!("stats fetch failed, keeping previous values: {detail}");
                }
            }
        });
    }

    /// Distinct state codes, sorted. BTreeMap keys are already sorted
    /// and duplicate-free.
    pub fn states(&self) -> Vec<String> {
        self.stats.get().by_state.keys().cloned().collect()
    }

    /// Distinct property types, sorted.
    pub fn property_types(&self) -> Vec<String> {
        self.stats.get().by_type.keys().cloned().collect()
    }
}

impl Default for StatsState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_stats_state() {
    provide_context(StatsState::new());
}

pub fn use_stats_state() -> StatsState {
    expect_context::<StatsState>()
}
