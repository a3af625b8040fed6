use url::Url;

use crate::{
    core::{FeedClient, FnError, RetryConfig, net},
    feed::{convert, model::ParsedFeed},
};

pub(super) async fn fetch_feed(
    client: &FeedClient,
    url: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<ParsedFeed, FnError> {
    let target = Url::parse(url)?;

    let req = client.http().get(target);
    let resp = client.send_with_retry(req, retry_override).await?;

    if !resp.status().is_success() {
        return Err(FnError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = net::get_bytes(resp, url, "xml").await?;
    let feed = feed_rs::parser::parse(body.as_slice())?;

    Ok(convert::from_feed(feed, url))
}
