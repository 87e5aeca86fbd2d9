// search.rs

/// City + query pair a run is built around. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    city: String,
    raw_query: String,
    query: String,
}

impl SearchRequest {
    /// The query only has spaces swapped for `+`; nothing else is encoded.
    pub fn new(city: &str, raw_query: &str) -> Self {
        Self {
            city: city.trim().to_lowercase(),
            raw_query: raw_query.to_string(),
            query: raw_query.replace(' ', "+"),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// Normalized query, used in URLs and in the report filename.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn base_url(&self) -> String {
        format!(
            "https://{}.craigslist.org/d/for-sale/search/sss?query={}&sort=rel",
            self.city, self.query
        )
    }

    pub fn page_url(&self, offset: usize) -> String {
        format!(
            "https://{}.craigslist.org/d/for-sale/search/sss?s={}&query={}&sort=rel",
            self.city, offset, self.query
        )
    }
}
