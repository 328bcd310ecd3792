//! Failure classification.
//!
//! Maps a caught failure (curl transport error, HTTP status, offline
//! condition, or runtime message) to an error category, a user-facing
//! message, a redirect decision, and a retryability flag. Classification is
//! table-driven and pure; logging the raw failure is the caller's job.

mod category;
mod error;
mod policy;
mod table;

pub use category::ErrorCategory;
pub use error::RequestError;
pub use policy::{Classification, Classifier};
pub use table::{category_for_status, classify, classify_curl_error};
