use std::sync::Arc;

use esgboard::{EsgBoard, EsgError, NewsRequest, SentimentMode};
use esgboard_file::NewsArchiveConnector;
use esgboard_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{ACME, MockConnector, article};

fn req(q: &str) -> NewsRequest {
    NewsRequest::new(q).unwrap()
}

#[tokio::test]
async fn report_dedupes_by_url_and_scores() {
    let (dynamic, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_news_behavior(
        ACME,
        MockBehavior::Return(vec![
            article("https://n/1", "Acme carbon pledge", Some(10.0)),
            article("https://n/1", "Acme carbon pledge (syndicated)", Some(-10.0)),
            article("https://n/2", "Acme opens depot", Some(0.0)),
        ]),
    )
    .await;

    let board = EsgBoard::builder()
        .with_connector(dynamic)
        .build()
        .unwrap();
    let report = board.news_report(&req(ACME)).await.unwrap();

    assert_eq!(report.query, ACME);
    assert!(report.warnings.is_empty());
    assert_eq!(report.articles.len(), 2);

    let first = &report.articles[0];
    assert_eq!(first.article.title, "Acme carbon pledge");
    assert_eq!(first.sentiment, 1.0);
    assert_eq!(first.esg_strength, 1);
    assert_eq!(first.score, 66.67);

    let second = &report.articles[1];
    assert_eq!(second.esg_strength, 0);
    assert_eq!(second.score, 25.0);
}

#[tokio::test]
async fn missing_tone_is_neutral_and_warned() {
    let archive = NewsArchiveConnector::from_articles(vec![
        article("https://n/1", "Acme opens depot", None),
        article("https://n/2", "Acme opens another depot", Some(10.0)),
    ]);
    let board = EsgBoard::builder()
        .with_connector(Arc::new(archive))
        .build()
        .unwrap();

    let report = board.news_report(&req("acme")).await.unwrap();
    assert_eq!(report.articles[0].sentiment, 0.5);
    assert_eq!(report.warnings.len(), 1);
    assert!(matches!(&report.warnings[0], EsgError::Data(m) if m.contains("https://n/1")));
}

#[tokio::test]
async fn heuristic_mode_ignores_tone_and_does_not_warn() {
    let source = MockConnector::builder()
        .name("titles")
        .returns_news_ok(vec![article(
            "https://n/1",
            "Acme wins sustainability award",
            None,
        )])
        .build();
    let board = EsgBoard::builder()
        .with_connector(source)
        .sentiment(SentimentMode::Heuristic)
        .build()
        .unwrap();

    let report = board.news_report(&req(ACME)).await.unwrap();
    assert!(report.warnings.is_empty());
    let a = &report.articles[0];
    // "wins" and "award" are favourable, nothing unfavourable
    assert_eq!(a.sentiment, 1.0);
    assert_eq!(a.esg_strength, 1);
}

#[tokio::test]
async fn empty_result_is_not_found() {
    let empty = MockConnector::builder()
        .name("empty")
        .returns_news_ok(Vec::new())
        .build();
    let board = EsgBoard::builder().with_connector(empty).build().unwrap();

    let err = board.news_report(&req(ACME)).await.unwrap_err();
    assert_eq!(err, EsgError::not_found("news for Acme"));
}

#[tokio::test]
async fn news_falls_back_to_next_source() {
    let down = MockConnector::builder()
        .name("down")
        .with_news_fn(|_| Err(EsgError::Other("503".into())))
        .build();
    let up = MockConnector::builder()
        .name("up")
        .returns_news_ok(vec![article("https://n/9", "Acme opens depot", Some(2.0))])
        .build();
    let board = EsgBoard::builder()
        .with_connector(down)
        .with_connector(up)
        .build()
        .unwrap();

    let got = board.news(&req(ACME)).await.unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].url, "https://n/9");
}
