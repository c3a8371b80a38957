use leptos::ev;
use leptos::prelude::*;

use super::loading::LoadingSpinner;

/// Button variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Success,
    Secondary,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white",
            ButtonVariant::Success => "bg-green-600 hover:bg-green-700 text-white",
            ButtonVariant::Secondary => "bg-gray-100 hover:bg-gray-200 text-gray-700",
        }
    }
}

/// A styled button with an optional in-flight spinner
#[component]
pub fn Button<F>(
    /// The visual variant of the button
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Click handler
    #[prop(optional)]
    on_click: Option<F>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Whether to show a loading spinner in place of the leading icon
    #[prop(into, default = Signal::derive(|| false))]
    loading: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Button content
    children: Children,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let base_class = "px-5 py-2.5 rounded-lg transition-colors font-medium flex items-center justify-center gap-2 disabled:opacity-50 disabled:cursor-not-allowed";
    let variant_class = variant.class();

    let is_disabled = move || disabled.get() || loading.get();

    let full_class = format!("{base_class} {variant_class} {class}");

    let handle_click = move |evt: ev::MouseEvent| {
        if !is_disabled() {
            if let Some(ref callback) = on_click {
                callback(evt);
            }
        }
    };

    view! {
        <button
            class=full_class
            disabled=is_disabled
            on:click=handle_click
        >
            <Show when=move || loading.get()>
                <LoadingSpinner size="sm" />
            </Show>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn test_button_variant_classes_distinct() {
        assert_ne!(
            ButtonVariant::Primary.class(),
            ButtonVariant::Secondary.class()
        );
        assert_ne!(
            ButtonVariant::Primary.class(),
            ButtonVariant::Success.class()
        );
    }
}
