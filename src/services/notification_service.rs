use leptos::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

#[derive(Clone)]
pub struct ToastAction {
    pub label: String,
    pub handler: Arc<dyn Fn() + Send + Sync>,
}

// Implement Debug manually since Arc<dyn Fn()> doesn't implement it
impl std::fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .finish()
    }
}

impl PartialEq for ToastAction {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && Arc::ptr_eq(&self.handler, &other.handler)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub toast_type: ToastType,
    pub title: String,
    pub message: Option<String>,
    pub action: Option<ToastAction>,
    pub duration_ms: Option<u64>,
}

#[derive(Clone)]
pub struct NotificationState {
    pub notifications: RwSignal<Vec<Notification>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(Vec::new()),
        }
    }

    pub fn add(
        &self,
        toast_type: ToastType,
        title: String,
        message: Option<String>,
        action: Option<ToastAction>,
    ) {
        // Errors stay until dismissed; success auto-dismisses.
        let duration_ms = match toast_type {
            ToastType::Error => None,
            ToastType::Success => Some(5_000),
        };
        let notification = Notification {
            id: Uuid::new_v4(),
            toast_type,
            title,
            message,
            action,
            duration_ms,
        };
        self.notifications.update(|list| list.push(notification));
    }

    pub fn remove(&self, id: Uuid) {
        self.notifications.update(|list| {
            if let Some(pos) = list.iter().position(|n| n.id == id) {
                list.remove(pos);
            }
        });
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

// Global accessor helpers
pub fn provide_notification_state() {
    provide_context(NotificationState::new());
}

pub fn use_notification_state() -> NotificationState {
    expect_context::<NotificationState>()
}

pub fn remove_notification(id: Uuid) {
    if let Some(state) = use_context::<NotificationState>() {
        state.remove(id);
    }
}

pub fn show_success(title: &str, message: Option<&str>) {
    if let Some(state) = use_context::<NotificationState>() {
        state.add(
            ToastType::Success,
            title.to_string(),
            message.map(String::from),
            None,
        );
    }
}

pub fn show_error(title: &str, message: Option<&str>, action: Option<ToastAction>) {
    if let Some(state) = use_context::<NotificationState>() {
        state.add(
            ToastType::Error,
            title.to_string(),
            message.map(String::from),
            action,
        );
    }
}
