use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use esgboard::{CacheConfig, EsgBoard, NewsRequest};

use crate::helpers::{APPLE, MockConnector, article, scores};

fn counted(calls: &Arc<AtomicUsize>) -> Arc<dyn esgboard::EsgConnector> {
    MockConnector::builder()
        .name("counted")
        .counter(calls.clone())
        .returns_esg_ok(scores(70.0, 71.0, 72.0))
        .returns_news_ok(vec![article("https://n/1", "Apple opens depot", Some(1.0))])
        .build()
}

#[tokio::test]
async fn repeated_lookups_hit_the_cache_until_cleared() {
    let calls = Arc::new(AtomicUsize::new(0));
    let board = EsgBoard::builder()
        .with_connector(counted(&calls))
        .with_cache(CacheConfig::default())
        .build()
        .unwrap();
    assert!(board.has_cache());

    let first = board.sustainability(APPLE).await.unwrap();
    let second = board.sustainability("  apple ").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    board.clear_cache();
    board.sustainability(APPLE).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn news_is_cached_per_query_and_limit() {
    let calls = Arc::new(AtomicUsize::new(0));
    let board = EsgBoard::builder()
        .with_connector(counted(&calls))
        .with_cache(CacheConfig::default())
        .build()
        .unwrap();

    let req = NewsRequest::new(APPLE).unwrap();
    board.news_report(&req).await.unwrap();
    board.news_report(&req).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    board.news(&req.clone().max_records(5)).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn attribution_survives_caching() {
    let calls = Arc::new(AtomicUsize::new(0));
    let board = EsgBoard::builder()
        .with_connector(counted(&calls))
        .with_cache(CacheConfig::default())
        .build()
        .unwrap();

    let (_, by) = board.sustainability_with_attribution(APPLE).await.unwrap();
    assert_eq!(by, "counted");
}

#[tokio::test]
async fn without_cache_every_lookup_reaches_the_provider() {
    let calls = Arc::new(AtomicUsize::new(0));
    let board = EsgBoard::builder()
        .with_connector(counted(&calls))
        .build()
        .unwrap();

    board.sustainability(APPLE).await.unwrap();
    board.sustainability(APPLE).await.unwrap();
    board.clear_cache();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
