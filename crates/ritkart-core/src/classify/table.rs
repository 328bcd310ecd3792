//! Status and failure tables: the data-driven half of classification.

use super::category::ErrorCategory;
use super::error::RequestError;

/// Classify an HTTP status code into an error category.
///
/// 5xx responses all count as server errors; 4xx responses other than the
/// specifically mapped ones count as validation failures.
pub fn category_for_status(status: u16) -> ErrorCategory {
    match status {
        401 => ErrorCategory::Unauthorized,
        403 => ErrorCategory::Forbidden,
        404 => ErrorCategory::NotFound,
        408 => ErrorCategory::Timeout,
        500..=599 => ErrorCategory::Server,
        400..=499 => ErrorCategory::Validation,
        _ => ErrorCategory::Unknown,
    }
}

/// Classify a curl transport error.
pub fn classify_curl_error(e: &curl::Error) -> ErrorCategory {
    if e.is_operation_timedout() {
        return ErrorCategory::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorCategory::Network;
    }
    ErrorCategory::Unknown
}

/// Classify a request error into an ErrorCategory. Priority order: offline
/// and connection-level failures first, then the HTTP status table, then
/// runtime fallback.
pub fn classify(e: &RequestError) -> ErrorCategory {
    match e {
        RequestError::Offline => ErrorCategory::Network,
        RequestError::Curl(ce) => classify_curl_error(ce),
        RequestError::Http { status, .. } => category_for_status(*status),
        RequestError::Runtime(_) => ErrorCategory::Unknown,
    }
}
