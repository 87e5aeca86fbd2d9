// src/config.rs
use std::path::PathBuf;

use url::Url;

use crate::scraper::ScraperError;

pub const DEFAULT_PROXY: &str = "192.109.165.108";
pub const MAX_LISTINGS_PER_PAGE: usize = 120;

const PROXY_ENV: &str = "CL_SCRAPER_PROXY";
const OUT_DIR_ENV: &str = "CL_SCRAPER_OUT_DIR";
const USER_AGENT_ENV: &str = "CL_SCRAPER_USER_AGENT";

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Proxy host for plain-http traffic. A bare host gets an `http://` scheme.
    pub proxy: String,
    /// Result rows the site returns per page; also the pagination step.
    pub per_page: usize,
    /// Directory the report file lands in.
    pub output_dir: PathBuf,
    /// None keeps the HTTP client's default.
    pub user_agent: Option<String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            proxy: DEFAULT_PROXY.to_string(),
            per_page: MAX_LISTINGS_PER_PAGE,
            output_dir: PathBuf::from("."),
            user_agent: None,
        }
    }
}

impl ScrapeConfig {
    /// Defaults, with `CL_SCRAPER_PROXY`, `CL_SCRAPER_OUT_DIR` and
    /// `CL_SCRAPER_USER_AGENT` overrides when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(proxy) = lookup(PROXY_ENV).filter(|v| !v.trim().is_empty()) {
            cfg.proxy = proxy.trim().to_string();
        }
        if let Some(dir) = lookup(OUT_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            cfg.output_dir = PathBuf::from(dir.trim());
        }
        if let Some(agent) = lookup(USER_AGENT_ENV).filter(|v| !v.trim().is_empty()) {
            cfg.user_agent = Some(agent.trim().to_string());
        }

        cfg
    }

    pub fn proxy_url(&self) -> Result<Url, ScraperError> {
        let raw = if self.proxy.contains("://") {
            self.proxy.clone()
        } else {
            format!("http://{}", self.proxy)
        };

        let url = Url::parse(&raw)
            .map_err(|e| ScraperError::Config(format!("invalid proxy {:?}: {e}", self.proxy)))?;

        if url.host_str().is_none() {
            return Err(ScraperError::Config(format!(
                "proxy {:?} has no host",
                self.proxy
            )));
        }

        Ok(url)
    }
}
