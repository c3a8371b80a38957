use leptos::prelude::*;

use crate::services::notification_service::{
    remove_notification, use_notification_state, Notification, ToastType,
};

#[component]
pub fn ToastContainer() -> impl IntoView {
    let state = use_notification_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2">
            {move || state.notifications.get().into_iter().map(|notification| {
                view! {
                    <Toast notification=notification />
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn Toast(notification: Notification) -> impl IntoView {
    let id = notification.id;

    // Auto-close if duration is set
    if let Some(duration) = notification.duration_ms {
        set_timeout(
            move || {
                remove_notification(id);
            },
            std::time::Duration::from_millis(duration),
        );
    }

    let border_class = match notification.toast_type {
        ToastType::Success => "border-l-4 border-green-500",
        ToastType::Error => "border-l-4 border-red-500",
    };

    let icon = match notification.toast_type {
        ToastType::Success => view! { <span class="text-green-600">"✓"</span> },
        ToastType::Error => view! { <span class="text-red-600">"⚠"</span> },
    };

    let action = notification.action.clone();

    view! {
        <div class=format!("bg-white rounded-lg shadow-lg p-4 w-80 flex items-start gap-3 {border_class}")>
            <div class="text-lg">{icon}</div>
            <div class="flex-1 min-w-0">
                <p class="font-semibold text-gray-900 text-sm">{notification.title.clone()}</p>
                {notification.message.clone().map(|message| view! {
                    <p class="text-gray-600 text-sm mt-0.5">{message}</p>
                })}
                {action.map(|action| {
                    let handler = action.handler.clone();
                    view! {
                        <button
                            class="mt-2 text-sm font-medium text-blue-600 hover:text-blue-800"
                            on:click=move |_| {
                                handler();
                                remove_notification(id);
                            }
                        >
                            {action.label.clone()}
                        </button>
                    }
                })}
            </div>
            <button
                class="text-gray-400 hover:text-gray-600"
                on:click=move |_| remove_notification(id)
            >
                "×"
            </button>
        </div>
    }
}
