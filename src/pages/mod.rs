//! Pages
//!
//! One component per route.

mod login;
mod signup;
mod todo_list;
mod todo_detail;
mod not_found;

pub use login::LoginPage;
pub use signup::SignUpPage;
pub use todo_list::TodoListPage;
pub use todo_detail::TodoDetailPage;
pub use not_found::NotFoundPage;
