use crate::config::ScrapeConfig;
use crate::scraper::{ErrorKind, ScraperError, SearchRequest};
use log::{error, warn};

mod config;
mod domain;
mod logger;
mod prompt;
mod runner;
mod scraper;
mod spreadsheets;

#[cfg(test)]
mod tests;

fn main() {
    logger::init();

    // Every failure ends the same way for the user; the log line carries the kind.
    match prompt_and_run() {
        Ok(path) => {
            log::info!("Report at {}", path.display());
            println!("File successfully written.");
        }
        Err(e) => {
            match e.kind() {
                ErrorKind::EmptyResult => warn!("Run failed ({}): {e}", e.kind()),
                kind => error!("Run failed ({kind}): {e}"),
            }
            println!("Something is broken!");
        }
    }
}

fn prompt_and_run() -> Result<std::path::PathBuf, ScraperError> {
    let city = prompt::ask("Please enter the desired city")?;
    let raw_query = prompt::ask("Enter your search query")?;

    let cfg = ScrapeConfig::from_env();
    let request = SearchRequest::new(&city, &raw_query);

    runner::run_search(&request, &cfg)
}
