use leptos::prelude::*;

/// A styled card container component
#[component]
pub fn Card(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Card content
    children: Children,
) -> impl IntoView {
    let base_class = "bg-white rounded-xl shadow-md overflow-hidden";
    let full_class = format!("{base_class} {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

/// Card body section with padding
#[component]
pub fn CardBody(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Body content
    children: Children,
) -> impl IntoView {
    let full_class = format!("p-5 {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}
