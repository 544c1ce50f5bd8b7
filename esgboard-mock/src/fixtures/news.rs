use chrono::{TimeZone, Utc};
use esgboard_core::{NewsArticle, NewsRequest};

// (url, title, yyyy, mm, dd, domain, tone)
const ROWS: &[(&str, &str, i32, u32, u32, &str, f64)] = &[
    (
        "https://news.example/apple-renewable-suppliers",
        "Apple commits suppliers to renewable power",
        2024,
        3,
        4,
        "news.example",
        4.2,
    ),
    (
        "https://news.example/tesla-labor-investigation",
        "Tesla faces labor investigation at Berlin plant",
        2024,
        2,
        19,
        "news.example",
        -5.1,
    ),
    (
        "https://wire.example/microsoft-carbon-board",
        "Microsoft board ties executive pay to carbon targets",
        2024,
        1,
        30,
        "wire.example",
        2.6,
    ),
    (
        "https://wire.example/amazon-quarter",
        "Amazon posts quarterly results",
        2024,
        2,
        1,
        "wire.example",
        0.4,
    ),
    (
        "https://daily.example/exxon-spill-fine",
        "Exxon fined over pollution spill; shareholder revolt on governance",
        2023,
        11,
        8,
        "daily.example",
        -7.8,
    ),
];

pub fn search(req: &NewsRequest) -> Vec<NewsArticle> {
    let q = req.query().to_lowercase();
    ROWS.iter()
        .filter(|row| row.1.to_lowercase().contains(&q))
        .take(usize::try_from(req.limit()).unwrap_or(usize::MAX))
        .map(|&(url, title, y, m, d, domain, tone)| NewsArticle {
            url: url.to_string(),
            title: title.to_string(),
            date: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).single(),
            source: Some(domain.to_string()),
            tone: Some(tone),
        })
        .collect()
}
