//! Summary row over the whole collection, plus the alert shown while
//! Gmail sync is unconfigured.

use leptos::prelude::*;

use crate::components::design_system::{Card, CardBody};
use crate::services::stats_service::use_stats_state;
use crate::services::sync_service::use_sync_action_state;

/// One summary figure
#[component]
fn StatCard(
    /// Label for the stat
    #[prop(into)]
    label: String,
    /// Value to display, reactive
    #[prop(into)]
    value: Signal<String>,
    /// Color classes for the value
    #[prop(default = "text-gray-900")]
    value_class: &'static str,
) -> impl IntoView {
    view! {
        <Card>
            <CardBody>
                <p class="text-sm text-gray-600 mb-1">{label}</p>
                <p class=format!("text-3xl font-bold {value_class}")>
                    {move || value.get()}
                </p>
            </CardBody>
        </Card>
    }
}

#[component]
pub fn StatsSummary() -> impl IntoView {
    let stats = use_stats_state();
    let actions = use_sync_action_state();

    let total = Signal::derive(move || stats.stats.get().total_properties.to_string());
    let state_count = Signal::derive(move || stats.states().len().to_string());
    let type_count = Signal::derive(move || stats.property_types().len().to_string());
    let configured = move || actions.status.get().configured;

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">
            <StatCard label="Total Properties" value=total />
            <StatCard label="States" value=state_count value_class="text-blue-600" />
            <StatCard label="Property Types" value=type_count value_class="text-green-600" />
            <Card>
                <CardBody>
                    <p class="text-sm text-gray-600 mb-1">"Gmail Sync"</p>
                    <p class=move || format!(
                        "text-lg font-bold {}",
                        if configured() { "text-green-600" } else { "text-orange-500" }
                    )>
                        {move || if configured() { "Ready" } else { "Not Configured" }}
                    </p>
                </CardBody>
            </Card>
        </div>

        <Show when=move || !configured()>
            <div class="bg-amber-50 border-l-4 border-amber-400 p-4 mb-8 rounded-r-lg">
                <p class="text-sm text-amber-700">
                    <strong>"Gmail Sync Not Configured: "</strong>
                    {move || actions.status.get().message}
                </p>
                <p class="text-sm text-amber-600 mt-1">
                    "Use the \"Add Sample Data\" button to add demo properties, or configure Gmail API credentials to sync real emails."
                </p>
            </div>
        </Show>
    }
}
