use esgboard_core::{EsgRecord, PillarScores};

// (name, ticker, environmental, social, governance)
const ROWS: &[(&str, &str, f64, f64, f64)] = &[
    ("Apple", "AAPL", 80.0, 84.0, 82.0),
    ("Microsoft", "MSFT", 88.0, 86.0, 90.0),
    ("Tesla", "TSLA", 78.0, 70.0, 74.0),
    ("Amazon", "AMZN", 76.0, 80.0, 81.0),
    ("Alphabet", "GOOGL", 83.0, 72.0, 68.0),
    ("Exxon Mobil", "XOM", 41.0, 63.0, 70.0),
];

/// Number of rows forming the demo table.
const SAMPLE_LEN: usize = 4;

pub fn by_company(company: &str) -> Option<PillarScores> {
    let needle = company.trim();
    ROWS.iter()
        .find(|(name, ticker, ..)| {
            name.eq_ignore_ascii_case(needle) || ticker.eq_ignore_ascii_case(needle)
        })
        .map(|&(_, _, e, s, g)| PillarScores::new(e, s, g))
}

pub fn sample() -> Vec<EsgRecord> {
    ROWS[..SAMPLE_LEN]
        .iter()
        .map(|&(name, _, e, s, g)| EsgRecord::new(name, PillarScores::new(e, s, g)))
        .collect()
}
