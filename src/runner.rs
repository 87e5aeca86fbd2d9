// src/runner.rs
use crate::config::ScrapeConfig;
use crate::scraper::{
    fetch_all_listings, CraigslistMarkup, HttpPageSource, PageSource, ScrapedListing,
    ScraperError, SearchRequest, SiteMarkup,
};
use crate::spreadsheets::{write_report, Report};
use chrono::{Local, NaiveDate};
use log::info;
use std::path::PathBuf;

/// Live run: real HTTP, Craigslist markup, today's date.
pub fn run_search(request: &SearchRequest, cfg: &ScrapeConfig) -> Result<PathBuf, ScraperError> {
    let source = HttpPageSource::new(cfg)?;
    let markup = CraigslistMarkup::new()?;
    let today = Local::now().date_naive();

    run_with(&source, &markup, request, cfg, today)
}

/// Fetch every page, extract each row, then write the report. A single bad
/// row aborts the run before anything touches the filesystem.
pub fn run_with<S, M>(
    source: &S,
    markup: &M,
    request: &SearchRequest,
    cfg: &ScrapeConfig,
    date: NaiveDate,
) -> Result<PathBuf, ScraperError>
where
    S: PageSource + ?Sized,
    M: SiteMarkup + ?Sized,
{
    let nodes = fetch_all_listings(source, markup, request, cfg)?;
    info!("Collected {} listing rows", nodes.len());

    let scraped = nodes
        .iter()
        .map(|node| markup.extract(node))
        .collect::<Result<Vec<ScrapedListing>, _>>()?;

    let report = Report::build(scraped)?;
    let path = write_report(&report, &cfg.output_dir, date, request.query())?;

    info!(
        "Wrote {} listings to {} (mean {}, median {})",
        report.total_count(),
        path.display(),
        report.mean_price,
        report.median_price
    );

    Ok(path)
}
