use crate::scraper::ScrapedListing;

/// One report row. `index` is 1-based and assigned in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRecord {
    pub index: usize,

    pub date: String,  // calendar date only
    pub title: String, // commas already replaced with '|'
    pub price: i64,
    pub url: String,
}

impl ListingRecord {
    pub fn from_scraped(index: usize, listing: ScrapedListing) -> Self {
        Self {
            index,
            date: listing.date,
            title: listing.title,
            price: listing.price,
            url: listing.url,
        }
    }

    /// `index, date, title, price, url`
    pub fn to_row(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}",
            self.index, self.date, self.title, self.price, self.url
        )
    }
}
