//! UI Components
//!
//! Reusable Leptos components.

mod link;
mod navbar;
mod banner;
mod spinner;
mod toaster;
mod confirm_button;
mod todo_card;
mod todo_toolbar;
mod todo_form;

pub use link::AppLink;
pub use navbar::NavBar;
pub use banner::Banner;
pub use spinner::Spinner;
pub use toaster::{use_toasts, ToastViewport, Toasts};
pub use confirm_button::ConfirmButton;
pub use todo_card::TodoCard;
pub use todo_toolbar::TodoToolbar;
pub use todo_form::TodoFormDialog;
