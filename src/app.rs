use leptos::prelude::*;

use crate::components::design_system::ToastContainer;
use crate::components::filters::Filters;
use crate::components::header::Header;
use crate::components::property_grid::PropertyGrid;
use crate::components::stats_summary::StatsSummary;
use crate::services::notification_service::provide_notification_state;
use crate::services::property_service::{provide_property_list_state, use_property_list_state};
use crate::services::stats_service::{provide_stats_state, use_stats_state};
use crate::services::sync_service::{provide_sync_action_state, use_sync_action_state};

#[component]
pub fn App() -> impl IntoView {
    // Provide global services
    provide_notification_state();
    provide_property_list_state();
    provide_stats_state();
    provide_sync_action_state();

    let list = use_property_list_state();
    let stats = use_stats_state();
    let actions = use_sync_action_state();

    // Fetch the list on mount and whenever the filter changes. The
    // effect tracks the filter signal; load() snapshots it untracked.
    Effect::new(move |_| {
        list.filter.track();
        list.load();
    });

    // One-shot mount fetches.
    stats.refresh();
    actions.load_status();

    let has_properties = move || stats.stats.get().total_properties > 0;

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-blue-50">
            <ToastContainer />
            <Header />

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <StatsSummary />

                <Show when=has_properties>
                    <Filters />
                </Show>

                <PropertyGrid />
            </main>

            <footer class="bg-white border-t border-gray-200 mt-12">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                    <p class="text-center text-gray-500 text-sm">
                        "CoStar Property Gallery • Data sourced from CoStar Daily Alert emails"
                    </p>
                </div>
            </footer>
        </div>
    }
}
