use std::sync::Arc;

use esgboard::EsgBoard;
use esgboard_mock::{DynamicMockConnector, MockBehavior, MockConnector};

use crate::helpers::scores;

#[tokio::test]
async fn mock_fixture_by_name_and_ticker() {
    let board = EsgBoard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();

    let by_name = board.sustainability("Apple").await.unwrap();
    let by_ticker = board.sustainability("aapl").await.unwrap();
    assert_eq!(by_name, by_ticker);
    assert_eq!(by_name, scores(80.0, 84.0, 82.0));
}

#[tokio::test]
async fn attribution_names_the_answering_connector() {
    let (dynamic, ctl) = DynamicMockConnector::new_with_controller("dynamic");
    ctl.set_esg_behavior("Acme", MockBehavior::Return(scores(60.0, 70.0, 80.0)))
        .await;

    let board = EsgBoard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .with_connector(dynamic)
        .build()
        .unwrap();

    // the fixture connector does not know Acme, so routing falls through
    let (s, by) = board.sustainability_with_attribution("ACME").await.unwrap();
    assert_eq!(by, "dynamic");
    assert_eq!(s, scores(60.0, 70.0, 80.0));
    assert_eq!(ctl.esg_calls().await, vec!["ACME".to_string()]);
}
