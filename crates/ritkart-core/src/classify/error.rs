//! Request error type for classification.

use std::fmt;

/// Error produced by a single backend or media-host request.
/// Kept as an enum so we can classify and decide retries before converting to anyhow.
#[derive(Debug)]
pub enum RequestError {
    /// Curl reported a transport error (timeout, connection, DNS, etc.).
    Curl(curl::Error),
    /// HTTP response had a non-2xx status, with the server's message when the
    /// body carried one.
    Http { status: u16, message: Option<String> },
    /// The device reports no network connectivity.
    Offline,
    /// Any other runtime failure.
    Runtime(String),
}

impl RequestError {
    /// HTTP status carried by this failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Curl(e) => write!(f, "{}", e),
            RequestError::Http { status, message: Some(m) } => {
                write!(f, "HTTP {}: {}", status, m)
            }
            RequestError::Http { status, message: None } => write!(f, "HTTP {}", status),
            RequestError::Offline => write!(f, "device is offline"),
            RequestError::Runtime(m) => write!(f, "{}", m),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Curl(e) => Some(e),
            RequestError::Http { .. } | RequestError::Offline | RequestError::Runtime(_) => None,
        }
    }
}

impl From<curl::Error> for RequestError {
    fn from(e: curl::Error) -> Self {
        RequestError::Curl(e)
    }
}
