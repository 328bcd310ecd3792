//! Category → policy: message, redirect and retryability decisions.

use std::collections::BTreeSet;

use crate::config::{RedirectConfig, RitkartConfig};

use super::category::ErrorCategory;
use super::error::RequestError;
use super::table::classify;

/// Full classification of a single failure. Produced fresh per failure;
/// callers read it and drop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: ErrorCategory,
    /// User-facing message: the server's own message when it sent one,
    /// otherwise the category message.
    pub message: String,
    /// Whether policy says to navigate to the category's error view.
    pub should_redirect: bool,
    /// Whether the retry executor may re-invoke the failed operation.
    pub retryable: bool,
    /// Originating HTTP status, if the failure carried one.
    pub status: Option<u16>,
}

impl Classification {
    /// Route of the error view to navigate to, when `should_redirect` is set.
    pub fn redirect_route(&self) -> Option<&'static str> {
        if self.should_redirect {
            self.category.error_route()
        } else {
            None
        }
    }
}

/// Classifier configured with the redirect table and the retryable-status set.
#[derive(Debug, Clone)]
pub struct Classifier {
    redirect: RedirectConfig,
    retryable_statuses: BTreeSet<u16>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(
            RedirectConfig::default(),
            crate::config::RetryConfig::default().retryable_status_codes,
        )
    }
}

impl Classifier {
    pub fn new(redirect: RedirectConfig, retryable_statuses: impl IntoIterator<Item = u16>) -> Self {
        Self {
            redirect,
            retryable_statuses: retryable_statuses.into_iter().collect(),
        }
    }

    pub fn from_config(cfg: &RitkartConfig) -> Self {
        Self::new(cfg.redirect(), cfg.retry().retryable_status_codes)
    }

    /// Whether policy auto-redirects for the given category.
    pub fn should_redirect(&self, category: ErrorCategory) -> bool {
        match category {
            ErrorCategory::Network => self.redirect.network,
            ErrorCategory::Server => self.redirect.server,
            ErrorCategory::NotFound => self.redirect.not_found,
            ErrorCategory::Unauthorized | ErrorCategory::Forbidden => self.redirect.unauthorized,
            ErrorCategory::Validation | ErrorCategory::Timeout => self.redirect.client_errors,
            ErrorCategory::Unknown => false,
        }
    }

    /// Whether the failure may be retried.
    ///
    /// Unauthorized, forbidden and not-found are never retryable, regardless
    /// of the configured status set. Network failures and timeouts always
    /// are. Everything else is retryable only when its status is configured.
    pub fn is_retryable(&self, category: ErrorCategory, status: Option<u16>) -> bool {
        match category {
            ErrorCategory::Unauthorized | ErrorCategory::Forbidden | ErrorCategory::NotFound => {
                false
            }
            ErrorCategory::Network | ErrorCategory::Timeout => true,
            _ => status.is_some_and(|s| self.retryable_statuses.contains(&s)),
        }
    }

    /// Classify a failure into a full classification record.
    pub fn classify_full(&self, err: &RequestError) -> Classification {
        let category = classify(err);
        let status = err.status();
        let message = match err {
            RequestError::Http { message: Some(m), .. } => m.clone(),
            RequestError::Runtime(m) => m.clone(),
            _ => category.user_message().to_string(),
        };
        Classification {
            category,
            message,
            should_redirect: self.should_redirect(category),
            retryable: self.is_retryable(category, status),
            status,
        }
    }
}
