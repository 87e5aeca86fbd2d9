use crate::scraper::{PageSource, ScraperError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Serves canned pages by URL and remembers what was asked for.
pub struct FakePages {
    pages: HashMap<String, String>,
    requested: RefCell<Vec<String>>,
}

impl FakePages {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl PageSource for FakePages {
    fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScraperError::Network(format!("no fixture for {url}")))
    }
}

pub fn listing_row(pid: usize, title: &str, price: &str) -> String {
    format!(
        r#"<li class="result-row" data-pid="{pid}">
    <a href="https://seattle.craigslist.org/see/for/d/item/{pid}.html" class="result-image gallery"></a>
    <div class="result-info">
        <time class="result-date" datetime="2020-12-14 10:{:02}" title="Mon 14 Dec">Dec 14</time>
        <h3 class="result-heading">
            <a href="https://seattle.craigslist.org/see/for/d/item/{pid}.html" class="result-title hdrlnk">{title}</a>
        </h3>
        <span class="result-meta"><span class="result-price">{price}</span></span>
    </div>
</li>"#,
        pid % 60
    )
}

/// A results page with the given rows and summary count.
pub fn results_page(total: usize, rows: &[String]) -> String {
    format!(
        r#"<html><body>
<span class="button pagenum"><span class="range">1 - {}</span> / <span class="totalcount">{total}</span></span>
<ul class="rows">
{}
</ul>
</body></html>"#,
        rows.len(),
        rows.join("\n")
    )
}

/// `count` rows numbered from `first_pid`, all priced at `price`.
pub fn rows(first_pid: usize, count: usize, price: &str) -> Vec<String> {
    (first_pid..first_pid + count)
        .map(|pid| listing_row(pid, &format!("Item {pid}"), price))
        .collect()
}

/// Fresh, empty directory under the system temp dir.
pub fn temp_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "cl_scraper_{label}_{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
