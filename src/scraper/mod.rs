mod models;
mod scraper;
mod scraper_error;
mod search;

pub use models::{CraigslistMarkup, ScrapedListing, SiteMarkup};
pub use self::scraper::{fetch_all_listings, HttpPageSource, PageSource};
pub use scraper_error::{ErrorKind, ScraperError};
pub use search::SearchRequest;
