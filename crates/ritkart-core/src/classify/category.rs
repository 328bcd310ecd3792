//! Error categories with their fixed user messages and error routes.

use serde::{Deserialize, Serialize};

/// The classified kind of a failure. Derived per failure, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Network,
    Unauthorized,
    Forbidden,
    NotFound,
    Server,
    Validation,
    Timeout,
    Unknown,
}

impl ErrorCategory {
    /// Fixed user-facing message for this category.
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorCategory::Network => {
                "Network connection error. Please check your internet connection."
            }
            ErrorCategory::Unauthorized => "You are not authorized to access this resource.",
            ErrorCategory::Forbidden => {
                "Access forbidden. You don't have permission to access this resource."
            }
            ErrorCategory::NotFound => "The requested resource was not found.",
            ErrorCategory::Server => "Server error. Please try again later.",
            ErrorCategory::Validation => "Please check your input and try again.",
            ErrorCategory::Timeout => "Request timed out. Please try again.",
            ErrorCategory::Unknown => "An unexpected error occurred.",
        }
    }

    /// Dedicated error view for this category, if one exists.
    pub fn error_route(self) -> Option<&'static str> {
        match self {
            ErrorCategory::Network => Some("/error/network"),
            ErrorCategory::Server => Some("/error/500"),
            ErrorCategory::NotFound => Some("/error/404"),
            ErrorCategory::Unauthorized | ErrorCategory::Forbidden => Some("/error/unauthorized"),
            ErrorCategory::Validation | ErrorCategory::Timeout | ErrorCategory::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_message() {
        let all = [
            ErrorCategory::Network,
            ErrorCategory::Unauthorized,
            ErrorCategory::Forbidden,
            ErrorCategory::NotFound,
            ErrorCategory::Server,
            ErrorCategory::Validation,
            ErrorCategory::Timeout,
            ErrorCategory::Unknown,
        ];
        for category in all {
            assert!(!category.user_message().is_empty());
        }
    }

    #[test]
    fn forbidden_routes_to_unauthorized_view() {
        assert_eq!(
            ErrorCategory::Forbidden.error_route(),
            Some("/error/unauthorized")
        );
    }

    #[test]
    fn validation_and_unknown_have_no_route() {
        assert_eq!(ErrorCategory::Validation.error_route(), None);
        assert_eq!(ErrorCategory::Unknown.error_route(), None);
    }
}
