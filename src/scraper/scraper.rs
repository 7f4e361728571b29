// scraper.rs
use crate::domain::Listing;
use crate::scraper::{parse_feed, parse_feed_raw, FetchError};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://alpha123.uk/api/data?fresh=1";

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Longest slice of an error body kept in [`FetchError::Status`].
const ERROR_BODY_LIMIT: usize = 200;

/// Anything that can hand a reconciliation pass its batch of listings.
pub trait ListingSource {
    fn fetch(&self) -> Result<Vec<Listing>, FetchError>;
}

/// Client for the alpha123 feed. Build it once at startup and pass it to
/// each pass.
pub struct Alpha123Client {
    client: Client,
    api_url: Url,
}

impl Alpha123Client {
    pub fn new(api_url: Url, timeout: Duration) -> Result<Self, FetchError> {
        // Look like a browser; the feed sits behind Cloudflare.
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("zh-CN,zh;q=0.9,en;q=0.8"),
        );
        headers.insert(REFERER, HeaderValue::from_static("https://alpha123.uk/zh/"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .cookie_store(true)
            .gzip(true)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, api_url })
    }
}

impl Alpha123Client {
    fn fetch_body(&self) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(self.api_url.clone())
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!(status = %status, length = text.len(), "feed response received");

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: text.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        Ok(text)
    }

    /// Airdrop objects as the feed sent them, for the debug dump.
    pub fn fetch_raw(&self) -> Result<Vec<Value>, FetchError> {
        parse_feed_raw(&self.fetch_body()?)
    }
}

impl ListingSource for Alpha123Client {
    fn fetch(&self) -> Result<Vec<Listing>, FetchError> {
        let listings = parse_feed(&self.fetch_body()?)?;
        debug!(count = listings.len(), "feed parsed");
        Ok(listings)
    }
}
