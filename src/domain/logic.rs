// src/domain/logic.rs

/// Offsets of the pages to fetch after the first one.
///
/// A search reporting `total` results spans `ceil(total / per_page)` pages;
/// the first is already in hand, so this yields `per_page, 2 * per_page, ...`
/// for the rest. Nothing is returned when everything fits on one page.
pub fn extra_page_offsets(total: usize, per_page: usize) -> Vec<usize> {
    if per_page == 0 || total <= per_page {
        return Vec::new();
    }

    let pages = total.div_ceil(per_page);
    (1..pages).map(|page| page * per_page).collect()
}

/// Arithmetic mean rounded to two decimal places. `None` for no prices.
pub fn mean_price(prices: &[i64]) -> Option<f64> {
    if prices.is_empty() {
        return None;
    }

    let sum: i128 = prices.iter().map(|&p| p as i128).sum();
    let mean = sum as f64 / prices.len() as f64;
    Some((mean * 100.0).round() / 100.0)
}

/// Middle value; the mean of the two middle values for an even count.
pub fn median_price(prices: &[i64]) -> Option<f64> {
    if prices.is_empty() {
        return None;
    }

    let mut sorted = prices.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    }
}
