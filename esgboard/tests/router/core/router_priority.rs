use esgboard::EsgBoard;

use crate::helpers::{APPLE, MockConnector, TESLA, scores};

#[tokio::test]
async fn global_priority_overrides_registration_order() {
    let low = MockConnector::builder()
        .name("low")
        .returns_esg_ok(scores(1.0, 1.0, 1.0))
        .build();
    let high = MockConnector::builder()
        .name("high")
        .returns_esg_ok(scores(2.0, 2.0, 2.0))
        .build();

    let board = EsgBoard::builder()
        .with_connector(low.clone())
        .with_connector(high.clone())
        .prefer(&[high, low])
        .build()
        .unwrap();

    let (_, by) = board.sustainability_with_attribution(APPLE).await.unwrap();
    assert_eq!(by, "high");
}

#[tokio::test]
async fn per_company_priority_overrides_global() {
    let a = MockConnector::builder()
        .name("a")
        .returns_esg_ok(scores(1.0, 1.0, 1.0))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .returns_esg_ok(scores(2.0, 2.0, 2.0))
        .build();

    let board = EsgBoard::builder()
        .with_connector(a.clone())
        .with_connector(b.clone())
        .prefer(&[a])
        .prefer_company("  tesla ", &[b])
        .build()
        .unwrap();

    let (_, for_tesla) = board.sustainability_with_attribution(TESLA).await.unwrap();
    let (_, for_apple) = board.sustainability_with_attribution(APPLE).await.unwrap();
    assert_eq!(for_tesla, "b");
    assert_eq!(for_apple, "a");
}

#[tokio::test]
async fn unlisted_connectors_are_still_tried() {
    let listed = MockConnector::builder()
        .name("listed")
        .with_esg_fn(|c| Err(esgboard::EsgError::not_found(format!("esg for {c}"))))
        .build();
    let unlisted = MockConnector::builder()
        .name("unlisted")
        .returns_esg_ok(scores(3.0, 3.0, 3.0))
        .build();

    let board = EsgBoard::builder()
        .with_connector(unlisted)
        .with_connector(listed.clone())
        .prefer(&[listed])
        .build()
        .unwrap();

    let (s, by) = board.sustainability_with_attribution(APPLE).await.unwrap();
    assert_eq!(by, "unlisted");
    assert_eq!(s, scores(3.0, 3.0, 3.0));
}
