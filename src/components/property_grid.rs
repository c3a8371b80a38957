//! Grid area renderer.
//!
//! Branch priority: loading skeleton, then error panel with retry, then
//! the contextual empty state, then the populated grid with its results
//! count. A pure function of the list controller's state.

use leptos::prelude::*;
use phosphor_leptos::{Icon, BUILDINGS};

use crate::components::design_system::{Button, ButtonVariant, SkeletonCard};
use crate::components::property_card::PropertyCard;
use crate::services::property_service::{use_property_list_state, FetchState};
use crate::services::stats_service::use_stats_state;
use crate::services::sync_service::use_sync_action_state;

#[component]
pub fn PropertyGrid() -> impl IntoView {
    let list = use_property_list_state();

    move || match list.state.get() {
        FetchState::Idle | FetchState::Loading => view! { <GridSkeleton /> }.into_any(),
        FetchState::Error(message) => view! { <ErrorPanel message=message /> }.into_any(),
        FetchState::Success(properties) => {
            if properties.is_empty() {
                view! { <EmptyState /> }.into_any()
            } else {
                view! { <ResultsGrid properties=properties /> }.into_any()
            }
        }
    }
}

#[component]
fn GridSkeleton() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            {(0..8).map(|_| view! { <SkeletonCard /> }).collect_view()}
        </div>
    }
}

#[component]
fn ErrorPanel(message: String) -> impl IntoView {
    let list = use_property_list_state();

    view! {
        <div class="text-center py-12">
            <div class="text-red-500 text-lg mb-4">{message}</div>
            <Button on_click=move |_| list.retry()>
                "Retry"
            </Button>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    let list = use_property_list_state();
    let stats = use_stats_state();
    let actions = use_sync_action_state();

    let filters_active = move || list.filter.get().is_active();

    let copy = move || {
        if filters_active() {
            "No properties match your filters. Try adjusting your search criteria."
        } else {
            "Get started by adding sample data or syncing emails from CoStar."
        }
    };

    view! {
        <div class="text-center py-16 bg-white rounded-xl shadow-md">
            <div class="mx-auto mb-4 text-gray-400 flex justify-center">
                <Icon icon=BUILDINGS size="64px" />
            </div>
            <h3 class="text-xl font-semibold text-gray-800 mb-2">"No Properties Found"</h3>
            <p class="text-gray-600 mb-6 max-w-md mx-auto">{copy}</p>
            <div class="flex justify-center gap-3">
                <Show when=filters_active>
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=move |_| list.clear_filter()
                    >
                        "Clear Filters"
                    </Button>
                </Show>
                <Button
                    variant=ButtonVariant::Success
                    loading=Signal::derive(move || actions.seeding.get())
                    on_click=move |_| actions.run_seed(list, stats)
                >
                    "Add Sample Data"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn ResultsGrid(properties: Vec<crate::api::Property>) -> impl IntoView {
    let count = properties.len();

    view! {
        <div class="flex items-center justify-between mb-6">
            <p class="text-gray-600">
                "Showing "
                <span class="font-semibold text-gray-900">{count}</span>
                " properties"
            </p>
        </div>
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            {properties.into_iter().map(|property| view! {
                <PropertyCard property=property />
            }).collect_view()}
        </div>
    }
}
