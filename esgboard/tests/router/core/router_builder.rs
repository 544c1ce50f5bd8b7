use esgboard::{EsgBoard, EsgError, FetchStrategy};

use crate::helpers::{MockConnector, scores};

#[test]
fn build_without_connectors_is_invalid() {
    let err = EsgBoard::builder().build().err().expect("must fail");
    assert!(matches!(err, EsgError::InvalidArg(_)), "got {err:?}");
}

#[test]
fn unknown_preference_names_are_dropped() {
    let a = MockConnector::builder()
        .name("a")
        .returns_esg_ok(scores(1.0, 1.0, 1.0))
        .build();
    let stray = MockConnector::builder().name("stray").build();

    let board = EsgBoard::builder()
        .with_connector(a.clone())
        .prefer(&[stray, a.clone(), a])
        .build()
        .unwrap();

    assert_eq!(board.config().provider_priority, vec!["a".to_string()]);
    assert_eq!(board.connector_names(), vec!["a"]);
}

#[test]
fn inverted_placeholder_range_is_normalized() {
    let a = MockConnector::builder().name("a").build();
    let board = EsgBoard::builder()
        .with_connector(a)
        .placeholder_range(90, 50)
        .fetch_strategy(FetchStrategy::Latency)
        .build()
        .unwrap();
    let r = board.config().placeholder_range;
    assert_eq!((r.min, r.max), (50, 90));
    assert_eq!(board.config().fetch_strategy, FetchStrategy::Latency);
    assert!(!board.has_cache());
}

#[test]
fn config_replaces_defaults_wholesale() {
    let a = MockConnector::builder()
        .name("a")
        .returns_esg_ok(scores(40.0, 50.0, 60.0))
        .build();
    let cfg = esgboard::EsgConfig {
        fill_missing_pillars: false,
        ..esgboard::EsgConfig::default()
    };
    let board = EsgBoard::builder()
        .config(cfg)
        .with_connector(a)
        .build()
        .unwrap();
    assert!(!board.config().fill_missing_pillars);

    let s = tokio_test::block_on(board.sustainability("anything")).unwrap();
    assert_eq!(s, scores(40.0, 50.0, 60.0));
}
