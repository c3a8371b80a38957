use leptos::prelude::*;

/// A loading spinner component
#[component]
pub fn LoadingSpinner(
    /// Size: "sm", "md", or "lg"
    #[prop(default = "md")]
    size: &'static str,
) -> impl IntoView {
    let size_class = match size {
        "sm" => "w-4 h-4",
        "lg" => "w-8 h-8",
        _ => "w-6 h-6",
    };

    view! {
        <div class=format!("{} animate-spin rounded-full border-2 border-gray-300 border-t-blue-600", size_class)></div>
    }
}

/// A grey placeholder card shown while the listing grid loads
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-md overflow-hidden">
            <div class="h-48 bg-gray-200 animate-pulse"></div>
            <div class="p-5">
                <div class="h-8 bg-gray-200 animate-pulse rounded mb-3"></div>
                <div class="h-5 bg-gray-200 animate-pulse rounded mb-2"></div>
                <div class="h-4 bg-gray-200 animate-pulse rounded w-3/4"></div>
            </div>
        </div>
    }
}
