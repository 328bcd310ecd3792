//! Single-endpoint HTTP probe.

use std::time::Duration;

use curl::easy::Easy;

use crate::classify::RequestError;

/// GET the URL and return the response status. The body is read and
/// discarded; redirects are followed. Transport failures surface as
/// `RequestError::Curl` for classification.
pub fn probe_status(url: &str, timeout: Duration) -> Result<u16, RequestError> {
    let mut easy = Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.useragent("ritkart-smoke/0.1")?;
    easy.connect_timeout(Duration::from_secs(15).min(timeout))?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| Ok(data.len()))?;
        transfer.perform()?;
    }

    let status = easy.response_code()? as u16;
    Ok(status)
}
