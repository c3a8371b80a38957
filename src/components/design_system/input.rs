use leptos::ev;
use leptos::prelude::*;

/// A styled text input component
#[component]
pub fn Input(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Placeholder text
    #[prop(into, optional)]
    placeholder: String,
    /// Input change handler (called with the new value)
    #[prop(into, optional)]
    on_input: Option<Callback<String>>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let base_class = "w-full px-4 py-2 border border-gray-300 rounded-lg bg-white text-gray-900 placeholder-gray-400 focus:ring-2 focus:ring-blue-500 focus:border-transparent outline-none";
    let full_class = format!("{base_class} {class}");

    let handle_input = move |evt: ev::Event| {
        if let Some(ref callback) = on_input {
            callback.run(event_target_value(&evt));
        }
    };

    view! {
        <input
            type="text"
            class=full_class
            prop:value=move || value.get()
            placeholder=placeholder
            on:input=handle_input
        />
    }
}
