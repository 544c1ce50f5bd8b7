use std::sync::Arc;

use esgboard::{EsgBoard, MissingDataPolicy, ScoreSource};
use esgboard_mock::MockConnector;

use crate::helpers::names;

fn board(seed: u64) -> EsgBoard {
    EsgBoard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .missing_data(MissingDataPolicy::Placeholder)
        .placeholder_seed(seed)
        .build()
        .unwrap()
}

#[tokio::test]
async fn failed_lookups_get_flagged_placeholders() {
    let report = board(7)
        .leaderboard(&names(&["AAPL", "NOPE", "ALSO-NOPE"]))
        .await
        .unwrap();

    assert_eq!(report.companies.len(), 3);
    assert_eq!(report.warnings.len(), 2);

    let aapl = report.company("AAPL").unwrap();
    assert!(matches!(aapl.source, ScoreSource::Provider(_)));

    for name in ["NOPE", "ALSO-NOPE"] {
        let c = report.company(name).unwrap();
        assert_eq!(c.source, ScoreSource::Placeholder);
        for v in [c.environmental, c.social, c.governance] {
            assert!((50.0..=90.0).contains(&v), "{name}: {v}");
            assert_eq!(v.fract(), 0.0);
        }
    }

    let mut ranks: Vec<usize> = report.companies.iter().map(|c| c.rank).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[tokio::test]
async fn same_seed_reproduces_placeholders() {
    let list = names(&["X1", "X2", "X3"]);
    let a = board(42).leaderboard(&list).await.unwrap();
    let b = board(42).leaderboard(&list).await.unwrap();
    assert_eq!(a.companies, b.companies);
}

#[tokio::test]
async fn custom_range_is_honored() {
    let board = EsgBoard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .missing_data(MissingDataPolicy::Placeholder)
        .placeholder_range(60, 60)
        .build()
        .unwrap();
    let report = board.leaderboard(&names(&["NOPE"])).await.unwrap();
    let c = &report.companies[0];
    assert_eq!(c.overall_score, 60.0);
    assert_eq!(c.rank, 1);
}
