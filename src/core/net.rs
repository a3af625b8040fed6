#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as raw bytes.
/// In `test-mode`, if `FN_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_bytes(
    resp: reqwest::Response,
    _url: &str,
    _ext: &str,
) -> Result<Vec<u8>, reqwest::Error> {
    let body = resp.bytes().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("FN_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_url, _ext, &body)
        {
            tracing::warn!(feed = %_url, error = %e, "FN_RECORD: failed to write fixture");
        }
    }

    Ok(body.to_vec())
}
