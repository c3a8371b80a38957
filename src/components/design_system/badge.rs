use leptos::prelude::*;

/// A small pill label. Color comes in through `class` so callers can use
/// the property-type lookup table directly.
#[component]
pub fn Badge(
    /// Color classes, e.g. "bg-blue-100 text-blue-800"
    #[prop(into)]
    class: String,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let full_class = format!("px-3 py-1 rounded-full text-xs font-medium {class}");

    view! {
        <span class=full_class>
            {children()}
        </span>
    }
}
