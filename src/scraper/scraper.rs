// scraper.rs
use crate::config::ScrapeConfig;
use crate::domain::logic::extra_page_offsets;
use crate::scraper::models::{ListingNode, SiteMarkup};
use crate::scraper::search::SearchRequest;
use crate::scraper::ScraperError;
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::Proxy;

/// Anything that can turn a URL into a page of markup.
pub trait PageSource {
    fn fetch_html(&self, url: &str) -> Result<String, ScraperError>;
}

pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(cfg: &ScrapeConfig) -> Result<Self, ScraperError> {
        let proxy_url = cfg.proxy_url()?;

        // Only plain-http requests go through the proxy; https search pages
        // are fetched directly.
        let proxy = Proxy::http(proxy_url.as_str())
            .map_err(|e| ScraperError::Config(format!("proxy rejected: {e}")))?;

        let mut builder = Client::builder().proxy(proxy);
        if let Some(agent) = &cfg.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        let client = builder
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageSource for HttpPageSource {
    fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();

        let text = resp
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ScraperError::Network(format!("HTTP {status} for {url}")));
        }

        Ok(text)
    }
}

/// First page, then every further page the summary count calls for, in page
/// order. Rows keep document order within a page.
pub fn fetch_all_listings<S, M>(
    source: &S,
    markup: &M,
    request: &SearchRequest,
    cfg: &ScrapeConfig,
) -> Result<Vec<ListingNode>, ScraperError>
where
    S: PageSource + ?Sized,
    M: SiteMarkup + ?Sized,
{
    info!(
        "Searching {} for {:?}",
        request.city(),
        request.raw_query()
    );

    let first_url = request.base_url();
    info!("Fetching {first_url}");

    let html = source.fetch_html(&first_url)?;
    let mut nodes = markup.listing_nodes(&html)?;
    let total = markup.total_count(&html)?;

    info!("Page 1: {} rows, {total} results reported", nodes.len());

    let offsets = extra_page_offsets(total, cfg.per_page);
    if offsets.is_empty() {
        return Ok(nodes);
    }

    info!("Fetching {} more page(s)", offsets.len());

    for (i, offset) in offsets.into_iter().enumerate() {
        let page_url = request.page_url(offset);
        info!("Fetching {page_url}");

        let page_html = source.fetch_html(&page_url)?;
        let page_nodes = markup.listing_nodes(&page_html)?;

        debug!("Page {}: {} rows", i + 2, page_nodes.len());
        nodes.extend(page_nodes);
    }

    Ok(nodes)
}
