//! Design System Components
//!
//! Reusable building blocks shared across the gallery pages.

mod badge;
mod button;
mod card;
mod input;
mod loading;
mod select;
mod toast;

pub use badge::Badge;
pub use button::{Button, ButtonVariant};
pub use card::{Card, CardBody};
pub use input::Input;
pub use loading::{LoadingSpinner, SkeletonCard};
pub use select::Select;
pub use toast::{Toast, ToastContainer};
