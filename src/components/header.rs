//! Title bar with the two backend action buttons.

use leptos::prelude::*;
use phosphor_leptos::{Icon, ARROWS_CLOCKWISE, PLUS};

use crate::components::design_system::{Button, ButtonVariant};
use crate::services::property_service::use_property_list_state;
use crate::services::stats_service::use_stats_state;
use crate::services::sync_service::use_sync_action_state;

#[component]
pub fn Header() -> impl IntoView {
    let list = use_property_list_state();
    let stats = use_stats_state();
    let actions = use_sync_action_state();

    let seeding = Signal::derive(move || actions.seeding.get());
    let syncing = Signal::derive(move || actions.syncing.get());
    // Sync is gated here on the credential flag; the controller itself
    // only enforces the in-flight guard.
    let sync_disabled = Signal::derive(move || !actions.status.get().configured);

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                    <div>
                        <h1 class="text-3xl font-bold text-gray-900">
                            "CoStar Property Gallery"
                        </h1>
                        <p class="text-gray-600 mt-1">
                            "Commercial Real Estate Listings from Email Alerts"
                        </p>
                    </div>
                    <div class="flex gap-3">
                        <Button
                            variant=ButtonVariant::Success
                            loading=seeding
                            on_click=move |_| actions.run_seed(list, stats)
                        >
                            <Show when=move || !seeding.get()>
                                <Icon icon=PLUS size="16px" />
                            </Show>
                            {move || if seeding.get() { "Adding..." } else { "Add Sample Data" }}
                        </Button>
                        <Button
                            loading=syncing
                            disabled=sync_disabled
                            on_click=move |_| actions.run_sync(list, stats)
                        >
                            <Show when=move || !syncing.get()>
                                <Icon icon=ARROWS_CLOCKWISE size="16px" />
                            </Show>
                            {move || if syncing.get() { "Syncing..." } else { "Sync from Gmail" }}
                        </Button>
                    </div>
                </div>
            </div>
        </header>
    }
}
