use std::sync::Arc;

use esgboard::{EsgBoard, EsgError, Grade, ScoreSource};
use esgboard_mock::MockConnector;

use crate::helpers::names;

fn board() -> EsgBoard {
    EsgBoard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn ranks_fetched_companies_in_input_order() {
    let report = board()
        .leaderboard(&names(&["AAPL", "MSFT", "TSLA"]))
        .await
        .unwrap();

    assert!(report.warnings.is_empty());
    let rows: Vec<(&str, f64, usize, Grade)> = report
        .companies
        .iter()
        .map(|c| (c.company.as_str(), c.overall_score, c.rank, c.grade))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("AAPL", 82.0, 2, Grade::Aa),
            ("MSFT", 88.0, 1, Grade::Aaa),
            ("TSLA", 74.0, 3, Grade::A),
        ]
    );
    assert!(
        report
            .companies
            .iter()
            .all(|c| c.source == ScoreSource::Provider(MockConnector::NAME.into()))
    );
    assert_eq!(report.leader().map(|c| c.company.as_str()), Some("MSFT"));
}

#[tokio::test]
async fn failed_lookups_are_skipped_with_a_warning() {
    let report = board()
        .leaderboard(&names(&["AAPL", "NOPE", "FAIL", "MSFT"]))
        .await
        .unwrap();

    let companies: Vec<&str> = report.companies.iter().map(|c| c.company.as_str()).collect();
    assert_eq!(companies, vec!["AAPL", "MSFT"]);
    assert_eq!(report.warnings.len(), 2);
    assert_eq!(
        report.warnings[0],
        EsgError::Data(format!("NOPE: {}", EsgError::not_found("esg for NOPE")))
    );
    assert!(
        matches!(&report.warnings[1], EsgError::Data(msg) if msg.starts_with("FAIL: ") && msg.contains("forced failure")),
        "got {:?}",
        report.warnings[1]
    );
    assert_eq!(report.company("msft").map(|c| c.rank), Some(1));
}

#[tokio::test]
async fn each_warning_names_the_company_that_was_dropped() {
    let report = board()
        .leaderboard(&names(&["FAIL", "AAPL", "NOPE"]))
        .await
        .unwrap();

    assert_eq!(report.companies.len(), 1);
    let prefixes: Vec<String> = report
        .warnings
        .iter()
        .map(|w| match w {
            EsgError::Data(msg) => msg.split(':').next().unwrap_or_default().to_string(),
            other => panic!("unexpected warning {other:?}"),
        })
        .collect();
    assert_eq!(prefixes, vec!["FAIL", "NOPE"]);
}

#[tokio::test]
async fn empty_company_list_is_invalid() {
    let err = board().leaderboard(&[]).await.unwrap_err();
    assert!(matches!(err, EsgError::InvalidArg(_)), "got {err:?}");
}

#[tokio::test]
async fn nothing_scorable_is_not_found() {
    let err = board()
        .leaderboard(&names(&["NOPE", "FAIL"]))
        .await
        .unwrap_err();
    assert_eq!(err, EsgError::not_found("esg scores for any of: NOPE, FAIL"));
}
