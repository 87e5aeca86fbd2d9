use crate::domain::listing::ListingRecord;
use crate::domain::logic::{mean_price, median_price};
use crate::scraper::{ScrapedListing, ScraperError};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

const HEADERS: [&str; 5] = ["Number", "Date", "Listing_Name", "Price", "URL"];

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub listings: Vec<ListingRecord>,
    pub mean_price: f64,
    pub median_price: f64,
}

impl Report {
    /// Numbers the listings from 1 and computes the price summary.
    /// Fails with `EmptyResults` when there is nothing to summarize.
    pub fn build(scraped: Vec<ScrapedListing>) -> Result<Self, ScraperError> {
        let listings: Vec<ListingRecord> = scraped
            .into_iter()
            .enumerate()
            .map(|(i, listing)| ListingRecord::from_scraped(i + 1, listing))
            .collect();

        let prices: Vec<i64> = listings.iter().map(|l| l.price).collect();
        let mean_price = mean_price(&prices).ok_or(ScraperError::EmptyResults)?;
        let median_price = median_price(&prices).ok_or(ScraperError::EmptyResults)?;

        Ok(Self {
            listings,
            mean_price,
            median_price,
        })
    }

    pub fn total_count(&self) -> usize {
        self.listings.len()
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "TOTAL LISTINGS: {}\n\n{}\n",
            self.total_count(),
            HEADERS.join(", ")
        );

        for listing in &self.listings {
            out.push_str(&listing.to_row());
            out.push('\n');
        }

        out.push_str(&format!("\nAverage price: {}\n", self.mean_price));
        out.push_str(&format!(
            "Median price: {}\n",
            format_median(self.median_price, self.total_count())
        ));
        out
    }
}

/// An odd count picks a listed price and prints as an integer; an even count
/// averages two and always keeps a decimal place (`15.0`, `15.5`).
fn format_median(median: f64, count: usize) -> String {
    if count % 2 == 0 && median.fract() == 0.0 {
        format!("{median:.1}")
    } else {
        format!("{median}")
    }
}

/// `2020-12-14_road+bike.csv`
pub fn report_filename(date: NaiveDate, query: &str) -> String {
    format!("{}_{}.csv", date.format("%Y-%m-%d"), query)
}

/// Writes the whole report in one call, replacing any file of the same name.
pub fn write_report(
    report: &Report,
    dir: &Path,
    date: NaiveDate,
    query: &str,
) -> Result<PathBuf, ScraperError> {
    let path = dir.join(report_filename(date, query));
    let body = report.render();

    std::fs::write(&path, body)
        .map_err(|e| ScraperError::Io(format!("writing {}: {e}", path.display())))?;

    Ok(path)
}
