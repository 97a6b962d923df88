//! User Notices
//!
//! Maps API outcomes to the toast text shown to the user.

use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A toast message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// API call being reported on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListTodos,
    CreateTodo,
    GetTodo,
    UpdateTodo,
    CompleteTodo,
    DeleteTodo,
    Login,
    Register,
}

impl Operation {
    /// Calls made with a session token; a 401 on these ends the session
    pub fn requires_session(&self) -> bool {
        !matches!(self, Operation::Login | Operation::Register)
    }

    pub fn success_notice(&self) -> Option<Notice> {
        let (title, description) = match self {
            Operation::CreateTodo => ("Todo created successfully!", "You have added a new todo successfully!"),
            Operation::UpdateTodo => ("Todo updated successfully!", "You have updated a todo successfully!"),
            Operation::CompleteTodo => ("Todo completed successfully!", "You have marked a todo completed successfully!"),
            Operation::DeleteTodo => ("Todo deleted successfully!", "You have deleted a todo successfully!"),
            Operation::Register => ("Account created successfully!", "Welcome aboard!"),
            Operation::ListTodos | Operation::GetTodo | Operation::Login => return None,
        };
        Some(Notice::success(title, description))
    }

    pub fn failure_notice(&self, error: &ApiError) -> Notice {
        match error {
            ApiError::SessionExpired => Notice::error("Session expired!", "Please login again!"),
            ApiError::Offline => Notice::error(
                "Network error!",
                "You are offline. Please check your internet connection.",
            ),
            ApiError::NotFound => self.not_found_notice(),
            ApiError::Duplicate => self.duplicate_notice(),
            ApiError::Forbidden => match self {
                Operation::Login => Notice::error("Username or Password is not correct!", "Please try again!"),
                _ => Notice::error("Not authorized!", "Please try again!"),
            },
            ApiError::Failed(_) => self.generic_failure_notice(),
        }
    }

    fn not_found_notice(&self) -> Notice {
        match self {
            Operation::GetTodo => Notice::error("Todo not found!", "Unable to find this todo. Please try again!"),
            Operation::UpdateTodo | Operation::CompleteTodo | Operation::DeleteTodo => Notice::error(
                "Todo not found!",
                "Todo not found or not authorized. Please try again!",
            ),
            Operation::Login => Notice::error("User not found!", "Please create an account!"),
            _ => self.generic_failure_notice(),
        }
    }

    fn duplicate_notice(&self) -> Notice {
        match self {
            Operation::CreateTodo | Operation::UpdateTodo | Operation::CompleteTodo => {
                Notice::error("Duplicate Todo", "Todo with this title already exists!")
            }
            Operation::Register => Notice::error("Account already exists!", "Please login instead!"),
            _ => self.generic_failure_notice(),
        }
    }

    fn generic_failure_notice(&self) -> Notice {
        let title = match self {
            Operation::ListTodos => "Failed to fetch todos",
            Operation::CreateTodo => "Failed to create todo",
            Operation::GetTodo => "Failed to fetch todo",
            Operation::UpdateTodo => "Failed to update todo",
            Operation::CompleteTodo => "Failed to complete todo",
            Operation::DeleteTodo => "Failed to delete todo",
            Operation::Login => return Notice::error("Unable to login!", "Please try again later!"),
            Operation::Register => return Notice::error("Unable to sign up!", "Please try again later!"),
        };
        Notice::error(title, "Please try again!")
    }
}
