#![allow(dead_code)]


pub use mock_connector::MockConnector;

use esgboard_core::{NewsArticle, PillarScores};

pub const APPLE: &str = "Apple";
pub const TESLA: &str = "Tesla";
pub const ACME: &str = "Acme";

/// All three pillars present.
pub const fn scores(e: f64, s: f64, g: f64) -> PillarScores {
    PillarScores::new(e, s, g)
}

/// Minimal article fixture.
pub fn article(url: &str, title: &str, tone: Option<f64>) -> NewsArticle {
    NewsArticle {
        url: url.to_string(),
        title: title.to_string(),
        date: None,
        source: None,
        tone,
    }
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}
