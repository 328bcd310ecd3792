//! Signed HTTP client for the media host (upload / list / delete).

use std::collections::BTreeMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use curl::easy::Easy;
use serde::Deserialize;
use url::Url;

use crate::classify::RequestError;

use super::sign::api_signature;
use super::{MediaAsset, MediaCredentials};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";
const LIST_PAGE_SIZE: u32 = 500;

/// Result of a successful upload: the durable identifier and URL.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedAsset {
    pub public_id: String,
    pub secure_url: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    resources: Vec<MediaAsset>,
    #[serde(default)]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ApiErrorMessage {
    message: String,
}

/// Thin caller for the hosting API. Auth, rate limits and idempotency are
/// the provider's contract; failures surface as `RequestError` so callers
/// can classify and retry.
#[derive(Debug, Clone)]
pub struct MediaClient {
    creds: MediaCredentials,
    timeout: Duration,
}

impl MediaClient {
    pub fn new(creds: MediaCredentials) -> Self {
        Self { creds, timeout: Duration::from_secs(30) }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn folder(&self) -> &str {
        &self.creds.folder
    }

    /// Upload `source` (a fetchable URL) under `public_id`, returning the
    /// durable URL the host assigns.
    pub fn upload(&self, source: &str, public_id: &str) -> Result<UploadedAsset, RequestError> {
        let timestamp = unix_timestamp();
        let body = upload_body(&self.creds, source, public_id, timestamp);

        let mut easy = self.easy(&format!(
            "{API_BASE}/{}/image/upload",
            self.creds.cloud_name
        ))?;
        easy.post(true)?;
        easy.post_fields_copy(body.as_bytes())?;

        let (status, response) = perform(&mut easy)?;
        if !(200..300).contains(&status) {
            return Err(http_error(status, &response));
        }
        serde_json::from_slice(&response)
            .map_err(|e| RequestError::Runtime(format!("invalid upload response: {e}")))
    }

    /// List hosted assets under `prefix`, following pagination to the end.
    pub fn list(&self, prefix: &str) -> Result<Vec<MediaAsset>, RequestError> {
        let mut assets = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut url = Url::parse(&format!(
                "{API_BASE}/{}/resources/image/upload",
                self.creds.cloud_name
            ))
            .map_err(|e| RequestError::Runtime(format!("invalid list URL: {e}")))?;
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("prefix", prefix);
                query.append_pair("max_results", &LIST_PAGE_SIZE.to_string());
                if let Some(cursor) = &cursor {
                    query.append_pair("next_cursor", cursor);
                }
            }

            let mut easy = self.easy(url.as_str())?;
            easy.username(&self.creds.api_key)?;
            easy.password(&self.creds.api_secret)?;

            let (status, response) = perform(&mut easy)?;
            if !(200..300).contains(&status) {
                return Err(http_error(status, &response));
            }
            let page: ListResponse = serde_json::from_slice(&response)
                .map_err(|e| RequestError::Runtime(format!("invalid list response: {e}")))?;
            assets.extend(page.resources);
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => return Ok(assets),
            }
        }
    }

    /// Delete the given assets by public id.
    pub fn delete(&self, public_ids: &[String]) -> Result<(), RequestError> {
        if public_ids.is_empty() {
            return Ok(());
        }
        let mut url = Url::parse(&format!(
            "{API_BASE}/{}/resources/image/upload",
            self.creds.cloud_name
        ))
        .map_err(|e| RequestError::Runtime(format!("invalid delete URL: {e}")))?;
        {
            let mut query = url.query_pairs_mut();
            for id in public_ids {
                query.append_pair("public_ids[]", id);
            }
        }

        let mut easy = self.easy(url.as_str())?;
        easy.username(&self.creds.api_key)?;
        easy.password(&self.creds.api_secret)?;
        easy.custom_request("DELETE")?;

        let (status, response) = perform(&mut easy)?;
        if !(200..300).contains(&status) {
            return Err(http_error(status, &response));
        }
        Ok(())
    }

    fn easy(&self, url: &str) -> Result<Easy, RequestError> {
        let mut easy = Easy::new();
        easy.url(url)?;
        easy.useragent("ritkart-media/0.1")?;
        easy.connect_timeout(Duration::from_secs(15))?;
        easy.timeout(self.timeout)?;
        Ok(easy)
    }
}

/// Signed form body for an upload request. The signature covers everything
/// except `file` and `api_key`; the secret itself never leaves the process.
fn upload_body(
    creds: &MediaCredentials,
    source: &str,
    public_id: &str,
    timestamp: u64,
) -> String {
    let signed = BTreeMap::from([
        ("folder", creds.folder.clone()),
        ("public_id", public_id.to_string()),
        ("signature_algorithm", "sha256".to_string()),
        ("timestamp", timestamp.to_string()),
    ]);
    let signature = api_signature(&signed, &creds.api_secret);

    let mut body = url::form_urlencoded::Serializer::new(String::new());
    body.append_pair("file", source);
    for (key, value) in &signed {
        body.append_pair(key, value);
    }
    body.append_pair("api_key", &creds.api_key);
    body.append_pair("signature", &signature);
    body.finish()
}

/// Perform the request, collecting the response body.
fn perform(easy: &mut Easy) -> Result<(u16, Vec<u8>), RequestError> {
    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }
    let status = easy.response_code()? as u16;
    Ok((status, body))
}

fn http_error(status: u16, body: &[u8]) -> RequestError {
    let message = serde_json::from_slice::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.error.message);
    RequestError::Http { status, message }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
