use leptos::ev;
use leptos::prelude::*;

/// A styled select dropdown component
#[component]
pub fn Select(
    /// Current selected value
    #[prop(into)]
    value: Signal<String>,
    /// Change handler
    #[prop(into, optional)]
    on_change: Option<Callback<String>>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Select options
    children: Children,
) -> impl IntoView {
    let base_class = "w-full px-4 py-2 border border-gray-300 rounded-lg bg-white text-gray-900 focus:ring-2 focus:ring-blue-500 focus:border-transparent outline-none";
    let full_class = format!("{base_class} {class}");

    let handle_change = move |evt: ev::Event| {
        if let Some(ref callback) = on_change {
            let target = event_target::<web_sys::HtmlSelectElement>(&evt);
            callback.run(target.value());
        }
    };

    view! {
        <select
            class=full_class
            on:change=handle_change
            prop:value=move || value.get()
        >
            {children()}
        </select>
    }
}
