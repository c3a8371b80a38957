//! Filter panel: city search, state and type selects, clear button.
//!
//! Every edit replaces the whole filter object on the list controller,
//! which re-fetches in response. Option lists come from the stats maps;
//! values are not validated beyond that.

use leptos::prelude::*;

use crate::api::PropertyFilter;
use crate::components::design_system::{Button, ButtonVariant, Input, Select};
use crate::services::property_service::use_property_list_state;
use crate::services::stats_service::use_stats_state;

#[component]
pub fn Filters() -> impl IntoView {
    let list = use_property_list_state();
    let stats = use_stats_state();

    let city = Signal::derive(move || list.filter.get().city);
    let state = Signal::derive(move || list.filter.get().state);
    let property_type = Signal::derive(move || list.filter.get().property_type);

    let on_city = Callback::new(move |value: String| {
        list.set_filter(PropertyFilter {
            city: value,
            ..list.filter.get_untracked()
        });
    });
    let on_state = Callback::new(move |value: String| {
        list.set_filter(PropertyFilter {
            state: value,
            ..list.filter.get_untracked()
        });
    });
    let on_type = Callback::new(move |value: String| {
        list.set_filter(PropertyFilter {
            property_type: value,
            ..list.filter.get_untracked()
        });
    });

    view! {
        <div class="bg-white rounded-xl shadow-md p-6 mb-8">
            <h3 class="text-lg font-semibold text-gray-800 mb-4">"Filter Properties"</h3>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"City"</label>
                    <Input
                        value=city
                        placeholder="Search city..."
                        on_input=on_city
                    />
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"State"</label>
                    <Select value=state on_change=on_state>
                        <option value="">"All States"</option>
                        {move || stats.states().into_iter().map(|code| view! {
                            <option value=code.clone()>{code.clone()}</option>
                        }).collect_view()}
                    </Select>
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">"Property Type"</label>
                    <Select value=property_type on_change=on_type>
                        <option value="">"All Types"</option>
                        {move || stats.property_types().into_iter().map(|name| view! {
                            <option value=name.clone()>{name.clone()}</option>
                        }).collect_view()}
                    </Select>
                </div>

                <div class="flex items-end">
                    <Button
                        variant=ButtonVariant::Secondary
                        class="w-full"
                        on_click=move |_| list.clear_filter()
                    >
                        "Clear Filters"
                    </Button>
                </div>
            </div>
        </div>
    }
}
