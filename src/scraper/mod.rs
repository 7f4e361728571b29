mod models;
mod scraper;
mod scraper_error;

pub use models::{parse_feed, parse_feed_raw};
pub use scraper::{Alpha123Client, ListingSource, DEFAULT_API_URL};
pub use scraper_error::FetchError;
