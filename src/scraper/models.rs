use crate::domain::Listing;
use crate::scraper::FetchError;
use serde::Deserialize;
use serde_json::Value;

// {
//   "airdrops": [
//     { "token", "name", "date", "time", "amount", "points",
//       "type", "phase", "completed", ... },
//   ],
//   ...
// }

#[derive(Debug, Deserialize)]
struct FeedResponse {
    airdrops: Option<Vec<Value>>,
}

/// The feed's airdrop objects exactly as sent, in feed order. A body
/// without `airdrops` is an empty batch.
pub fn parse_feed_raw(body: &str) -> Result<Vec<Value>, FetchError> {
    let feed: FeedResponse =
        serde_json::from_str(body).map_err(|e| FetchError::JsonParse(e.to_string()))?;
    Ok(feed.airdrops.unwrap_or_default())
}

/// Parses a feed body into typed listings.
pub fn parse_feed(body: &str) -> Result<Vec<Listing>, FetchError> {
    parse_feed_raw(body)?
        .into_iter()
        .map(|raw| serde_json::from_value(raw).map_err(|e| FetchError::JsonParse(e.to_string())))
        .collect()
}
