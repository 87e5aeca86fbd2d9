use scraper::{ElementRef, Html, Selector};

use crate::scraper::ScraperError;

// li.result-row
//  ├── a[href]                     (first anchor, listing link)
//  ├── time[datetime]              "2020-12-14 09:30"
//  ├── a.result-title.hdrlnk       title text
//  └── span.result-price           "$1,234"
//
// span.totalcount / span.total     page-level result count

/// Outer HTML of one result row. Owned so rows from several pages can be
/// collected without holding on to every parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingNode(String);

impl ListingNode {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn html(&self) -> &str {
        &self.0
    }
}

/// Fields pulled from one row, before it gets a position in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedListing {
    pub date: String,
    pub title: String,
    pub price: i64,
    pub url: String,
}

/// Site-specific markup conventions. Everything that knows a selector lives
/// behind this trait.
pub trait SiteMarkup {
    fn total_count(&self, html: &str) -> Result<usize, ScraperError>;
    fn listing_nodes(&self, html: &str) -> Result<Vec<ListingNode>, ScraperError>;
    fn extract(&self, node: &ListingNode) -> Result<ScrapedListing, ScraperError>;
}

pub struct CraigslistMarkup {
    row: Selector,
    total: Selector,
    time: Selector,
    title: Selector,
    price: Selector,
    link: Selector,
}

impl CraigslistMarkup {
    pub fn new() -> Result<Self, ScraperError> {
        Ok(Self {
            row: parse_selector("li.result-row")?,
            total: parse_selector("span.totalcount, span.total")?,
            time: parse_selector("time[datetime]")?,
            title: parse_selector("a.result-title.hdrlnk")?,
            price: parse_selector("span.result-price")?,
            link: parse_selector("a[href]")?,
        })
    }
}

impl SiteMarkup for CraigslistMarkup {
    fn total_count(&self, html: &str) -> Result<usize, ScraperError> {
        let document = Html::parse_document(html);
        let element = document
            .select(&self.total)
            .next()
            .ok_or(ScraperError::MissingField("total count"))?;

        let text = element_text(element);
        text.trim()
            .parse::<usize>()
            .map_err(|_| ScraperError::InvalidNumber {
                field: "total count",
                value: text,
            })
    }

    fn listing_nodes(&self, html: &str) -> Result<Vec<ListingNode>, ScraperError> {
        let document = Html::parse_document(html);
        Ok(document
            .select(&self.row)
            .map(|row| ListingNode::new(row.html()))
            .collect())
    }

    fn extract(&self, node: &ListingNode) -> Result<ScrapedListing, ScraperError> {
        let fragment = Html::parse_fragment(node.html());

        let datetime = fragment
            .select(&self.time)
            .next()
            .and_then(|t| t.value().attr("datetime"))
            .ok_or(ScraperError::MissingField("date"))?;
        let date = datetime
            .split(' ')
            .next()
            .unwrap_or_default()
            .replace(',', "|");

        let title = fragment
            .select(&self.title)
            .next()
            .map(element_text)
            .ok_or(ScraperError::MissingField("title"))?
            .replace(',', "|");

        let price_text = fragment
            .select(&self.price)
            .next()
            .map(element_text)
            .ok_or(ScraperError::MissingField("price"))?;
        let price = parse_price(&price_text)?;

        let url = fragment
            .select(&self.link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or(ScraperError::MissingField("url"))?
            .to_string();

        Ok(ScrapedListing {
            date,
            title,
            price,
            url,
        })
    }
}

/// `"$1,234"` -> `1234`. Only the dollar sign, thousands separators and
/// surrounding whitespace are tolerated.
pub fn parse_price(text: &str) -> Result<i64, ScraperError> {
    let cleaned: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned
        .trim()
        .parse::<i64>()
        .map_err(|_| ScraperError::InvalidNumber {
            field: "price",
            value: text.to_string(),
        })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

fn parse_selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::HtmlParse(format!("selector {css}: {e:?}")))
}
