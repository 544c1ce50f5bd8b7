use std::sync::Arc;
use std::time::Duration;

use esgboard::{EsgBoard, EsgError, FetchStrategy};
use esgboard_mock::{DynamicMockConnector, MockBehavior, MockConnector};

use crate::helpers::{ACME, MockConnector as TestConnector, article};

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let (a, _ca) = DynamicMockConnector::new_with_controller("a");
    let (b, _cb) = DynamicMockConnector::new_with_controller("b");
    let board = EsgBoard::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = board.sustainability(" Acme ").await.unwrap_err();
    assert_eq!(err, EsgError::not_found("esg for Acme"));
}

#[tokio::test]
async fn not_found_collapses_under_latency_too() {
    let (a, _ca) = DynamicMockConnector::new_with_controller("a");
    let (b, _cb) = DynamicMockConnector::new_with_controller("b");
    let board = EsgBoard::builder()
        .with_connector(a)
        .with_connector(b)
        .fetch_strategy(FetchStrategy::Latency)
        .build()
        .unwrap();

    let err = board.sustainability(ACME).await.unwrap_err();
    assert!(matches!(err, EsgError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn timeout_mixed_with_not_found_is_an_aggregate() {
    let (a, ca) = DynamicMockConnector::new_with_controller("a");
    ca.set_esg_behavior(ACME, MockBehavior::Hang).await;
    let board = EsgBoard::builder()
        .with_connector(a)
        .with_connector(Arc::new(MockConnector::new()))
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = board.sustainability("TIMEOUT").await.unwrap_err();
    // "a" has no rule for TIMEOUT, so it answers NotFound; the mock sleeps.
    assert!(matches!(err, EsgError::AllProvidersFailed(_)), "got {err:?}");

    let err = board.sustainability(ACME).await.unwrap_err();
    assert!(matches!(err, EsgError::AllProvidersFailed(_)), "got {err:?}");
}

#[tokio::test]
async fn single_hanging_provider_times_out() {
    let (a, ca) = DynamicMockConnector::new_with_controller("a");
    ca.set_esg_behavior(ACME, MockBehavior::Hang).await;
    let board = EsgBoard::builder()
        .with_connector(a)
        .provider_timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    let err = board.sustainability(ACME).await.unwrap_err();
    assert_eq!(
        err,
        EsgError::AllProvidersTimedOut {
            capability: "esg".into()
        }
    );
}

#[tokio::test]
async fn mixed_failures_keep_connector_context() {
    let board = EsgBoard::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .with_connector(
            TestConnector::builder()
                .name("broken")
                .with_esg_fn(|_| Err(EsgError::Data("garbled".into())))
                .build(),
        )
        .build()
        .unwrap();

    let err = board.sustainability("FAIL").await.unwrap_err();
    let EsgError::AllProvidersFailed(errors) = err else {
        panic!("expected aggregate, got {err:?}");
    };
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| matches!(e, EsgError::Connector { .. })));
    assert!(errors.iter().any(
        |e| matches!(e, EsgError::Connector { connector, .. } if connector == "broken")
    ));
}

#[tokio::test]
async fn no_esg_capable_connector_is_unsupported() {
    let news_only = TestConnector::builder()
        .name("news_only")
        .returns_news_ok(vec![article("https://n/1", "x", None)])
        .build();
    let board = EsgBoard::builder()
        .with_connector(news_only)
        .build()
        .unwrap();

    let err = board.sustainability(ACME).await.unwrap_err();
    assert_eq!(err, EsgError::unsupported("esg"));
}
