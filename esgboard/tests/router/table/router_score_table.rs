use std::sync::Arc;

use esgboard::{EsgBoard, EsgError, EsgRecord, Grade, PillarScores, ScoreSource, score_table};
use esgboard_core::ScoreTable;
use esgboard_mock::MockConnector;

use crate::helpers::scores;

fn board(fill: bool) -> EsgBoard {
    EsgBoard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .fill_missing_pillars(fill)
        .build()
        .unwrap()
}

const CSV: &str = "\
Company,Environmental,Social,Governance
Apple,80,84,82
Tesla,90,60,55
Microsoft,88,86,90
";

#[test]
fn scores_a_loaded_table() {
    let table = ScoreTable::from_reader(CSV.as_bytes()).unwrap();
    let report = board(true).score_table(&table.records()).unwrap();

    assert!(report.warnings.is_empty());
    let got: Vec<(&str, usize, Grade)> = report
        .companies
        .iter()
        .map(|c| (c.company.as_str(), c.rank, c.grade))
        .collect();
    assert_eq!(
        got,
        vec![
            ("Apple", 2, Grade::Aa),
            ("Tesla", 3, Grade::A),
            ("Microsoft", 1, Grade::Aaa),
        ]
    );
    assert!(report.companies.iter().all(|c| c.source == ScoreSource::Table));

    let mut out = Vec::new();
    table.write_scored(&report.companies, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(
        "Company,Environmental,Social,Governance,Overall Score,Rank,Grade\n"
    ));
    assert!(text.contains("Tesla,90.00,60.00,55.00,68.33,3,A\n"));
}

#[test]
fn absent_pillars_are_zero_filled_by_default() {
    let records = vec![
        EsgRecord::new("Full", scores(60.0, 60.0, 60.0)),
        EsgRecord::new(
            "Partial",
            PillarScores {
                environmental: Some(90.0),
                social: None,
                governance: Some(90.0),
            },
        ),
    ];

    let report = board(true).score_table(&records).unwrap();
    let partial = report.company("Partial").unwrap();
    assert_eq!(partial.social, 0.0);
    assert_eq!(partial.overall_score, 60.0);
    // tie with Full; input order wins
    assert_eq!(partial.rank, 2);
}

#[test]
fn absent_pillars_skip_when_not_filling() {
    let records = vec![
        EsgRecord::new("Full", scores(60.0, 60.0, 60.0)),
        EsgRecord::new("Empty", PillarScores::default()),
    ];

    let report = board(false).score_table(&records).unwrap();
    assert_eq!(report.companies.len(), 1);
    assert_eq!(report.warnings.len(), 1);
    assert!(matches!(&report.warnings[0], EsgError::Data(m) if m.contains("Empty")));
}

#[test]
fn empty_and_unscorable_tables_fail() {
    let err = board(true).score_table(&[]).unwrap_err();
    assert!(matches!(err, EsgError::InvalidArg(_)), "got {err:?}");

    let only_partial = vec![EsgRecord::new("Empty", PillarScores::default())];
    let err = board(false).score_table(&only_partial).unwrap_err();
    assert!(matches!(err, EsgError::NotFound { .. }), "got {err:?}");
}

#[test]
fn table_scoring_needs_no_connectors() {
    assert!(EsgBoard::builder().build().is_err());

    let table = ScoreTable::from_reader(CSV.as_bytes()).unwrap();
    let records = table.records();
    let standalone = score_table(&records, true).unwrap();
    assert_eq!(standalone, board(true).score_table(&records).unwrap());
    assert_eq!(standalone.leader().map(|c| c.company.as_str()), Some("Microsoft"));

    let partial = vec![
        EsgRecord::new("Full", scores(60.0, 60.0, 60.0)),
        EsgRecord::new("Empty", PillarScores::default()),
    ];
    let report = score_table(&partial, false).unwrap();
    assert_eq!(report.companies.len(), 1);
    assert_eq!(report.warnings.len(), 1);
}
