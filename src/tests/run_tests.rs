use super::utils::{listing_row, results_page, rows, temp_dir, FakePages};
use crate::config::ScrapeConfig;
use crate::runner::run_with;
use crate::scraper::{CraigslistMarkup, ErrorKind, ScraperError, SearchRequest};
use chrono::NaiveDate;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 12, 14).unwrap()
}

fn config_in(label: &str) -> ScrapeConfig {
    ScrapeConfig {
        output_dir: temp_dir(label),
        ..ScrapeConfig::default()
    }
}

#[test]
fn writes_report_named_after_date_and_query() {
    let cfg = config_in("named");
    let req = SearchRequest::new("seattle", "road bike");
    let page = results_page(
        3,
        &[
            listing_row(1, "Trek, 54cm", "$1,200"),
            listing_row(2, "Fixie", "$300"),
            listing_row(3, "Cruiser", "$450"),
        ],
    );
    let pages = FakePages::new().with_page(req.base_url(), page);
    let markup = CraigslistMarkup::new().unwrap();

    let path = run_with(&pages, &markup, &req, &cfg, date()).unwrap();

    assert_eq!(path, cfg.output_dir.join("2020-12-14_road+bike.csv"));
    let body = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = body.lines().collect();

    assert_eq!(lines[0], "TOTAL LISTINGS: 3");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "Number, Date, Listing_Name, Price, URL");
    assert_eq!(
        lines[3],
        "1, 2020-12-14, Trek| 54cm, 1200, https://seattle.craigslist.org/see/for/d/item/1.html"
    );
    assert!(lines[5].starts_with("3, 2020-12-14, Cruiser, 450, "));
    assert_eq!(lines[7], "Average price: 650");
    assert_eq!(lines[8], "Median price: 450");
}

#[test]
fn header_count_matches_data_rows() {
    let cfg = config_in("count");
    let req = SearchRequest::new("seattle", "lamp");
    let pages = FakePages::new()
        .with_page(req.base_url(), results_page(130, &rows(1, 120, "$15")))
        .with_page(req.page_url(120), results_page(130, &rows(121, 10, "$25")));
    let markup = CraigslistMarkup::new().unwrap();

    let path = run_with(&pages, &markup, &req, &cfg, date()).unwrap();
    let body = std::fs::read_to_string(path).unwrap();

    let declared: usize = body
        .lines()
        .next()
        .and_then(|l| l.strip_prefix("TOTAL LISTINGS: "))
        .unwrap()
        .parse()
        .unwrap();
    let data_rows = body
        .lines()
        .filter(|l| l.chars().next().is_some_and(|c| c.is_ascii_digit()))
        .count();

    assert_eq!(declared, 130);
    assert_eq!(data_rows, declared);
}

#[test]
fn second_run_overwrites_first() {
    let cfg = config_in("overwrite");
    let req = SearchRequest::new("seattle", "sofa");
    let markup = CraigslistMarkup::new().unwrap();

    let first = FakePages::new().with_page(req.base_url(), results_page(4, &rows(1, 4, "$100")));
    run_with(&first, &markup, &req, &cfg, date()).unwrap();

    let second = FakePages::new().with_page(req.base_url(), results_page(1, &rows(9, 1, "$70")));
    let path = run_with(&second, &markup, &req, &cfg, date()).unwrap();

    let body = std::fs::read_to_string(path).unwrap();
    assert!(body.starts_with("TOTAL LISTINGS: 1\n"));
    assert!(body.contains("Item 9"));
    assert!(!body.contains("Item 1,"));
    assert!(body.ends_with("Average price: 70\nMedian price: 70\n"));
}

#[test]
fn empty_results_fail_without_writing_a_file() {
    let cfg = config_in("empty");
    let req = SearchRequest::new("seattle", "unicorn");
    let pages = FakePages::new().with_page(req.base_url(), results_page(0, &[]));
    let markup = CraigslistMarkup::new().unwrap();

    let err = run_with(&pages, &markup, &req, &cfg, date()).unwrap_err();

    assert!(matches!(err, ScraperError::EmptyResults));
    assert_eq!(err.kind(), ErrorKind::EmptyResult);
    assert!(!cfg.output_dir.join("2020-12-14_unicorn.csv").exists());
}

#[test]
fn one_bad_price_aborts_whole_run() {
    let cfg = config_in("badprice");
    let req = SearchRequest::new("seattle", "chair");
    let mut page_rows = rows(1, 5, "$20");
    page_rows.push(listing_row(6, "Free chair", "free"));
    let pages = FakePages::new().with_page(req.base_url(), results_page(6, &page_rows));
    let markup = CraigslistMarkup::new().unwrap();

    let err = run_with(&pages, &markup, &req, &cfg, date()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(!cfg.output_dir.join("2020-12-14_chair.csv").exists());
}

#[test]
fn network_failure_is_typed() {
    let cfg = config_in("network");
    let req = SearchRequest::new("seattle", "table");
    let pages = FakePages::new();
    let markup = CraigslistMarkup::new().unwrap();

    let err = run_with(&pages, &markup, &req, &cfg, date()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
}
