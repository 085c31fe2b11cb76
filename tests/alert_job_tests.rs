//! End-to-end behavior of a single alert run against in-memory services.

use std::sync::Arc;

use rust_decimal_macros::dec;
use stockwatch::application::{AlertJob, RunOutcome};
use stockwatch::domain::{calculate_move, Article, Direction};
use stockwatch::testkit::config::watch_config;
use stockwatch::testkit::domain::{article, closes, trading_day};
use stockwatch::testkit::ports::{RecordingSms, StaticNews, StaticQuotes};

struct Harness {
    quotes: StaticQuotes,
    news: StaticNews,
    sms: RecordingSms,
}

impl Harness {
    fn new(quotes: StaticQuotes, news: StaticNews, sms: RecordingSms) -> Self {
        Self { quotes, news, sms }
    }

    fn job(&self) -> AlertJob {
        AlertJob::new(
            watch_config(),
            Arc::new(self.quotes.clone()),
            Arc::new(self.news.clone()),
            Arc::new(self.sms.clone()),
        )
    }
}

fn tesla_headlines(n: usize) -> Vec<Article> {
    (0..n)
        .map(|i| article(&format!("Tesla headline {i}")))
        .collect()
}

#[tokio::test]
async fn small_move_skips_news_and_sms() {
    let h = Harness::new(
        StaticQuotes::returning(closes(dec!(104), dec!(100))),
        StaticNews::returning(tesla_headlines(5)),
        RecordingSms::new(),
    );

    let outcome = h.job().run().await;

    assert_eq!(
        outcome,
        RunOutcome::BelowThreshold(calculate_move(dec!(104), dec!(100)))
    );
    assert!(h.news.searches().is_empty(), "news must not be fetched");
    assert!(h.sms.is_empty(), "no SMS must be sent");
}

#[tokio::test]
async fn small_drop_skips_news_and_sms() {
    let h = Harness::new(
        StaticQuotes::returning(closes(dec!(96), dec!(100))),
        StaticNews::returning(tesla_headlines(5)),
        RecordingSms::new(),
    );

    assert!(matches!(h.job().run().await, RunOutcome::BelowThreshold(_)));
    assert!(h.news.searches().is_empty());
    assert!(h.sms.is_empty());
}

#[tokio::test]
async fn unchanged_price_is_below_threshold() {
    let h = Harness::new(
        StaticQuotes::returning(closes(dec!(251.52), dec!(251.52))),
        StaticNews::returning(tesla_headlines(1)),
        RecordingSms::new(),
    );

    match h.job().run().await {
        RunOutcome::BelowThreshold(movement) => {
            assert_eq!(movement.direction, Direction::Same);
            assert_eq!(movement.percentage, dec!(0));
        }
        other => panic!("expected below threshold, got {other:?}"),
    }
}

#[tokio::test]
async fn large_move_sends_at_most_three_messages() {
    let h = Harness::new(
        StaticQuotes::returning(closes(dec!(110), dec!(100))),
        StaticNews::returning(tesla_headlines(5)),
        RecordingSms::new(),
    );

    let outcome = h.job().run().await;

    assert_eq!(
        outcome,
        RunOutcome::Alerted {
            movement: calculate_move(dec!(110), dec!(100)),
            attempted: 3,
            delivered: 3,
        }
    );
    let bodies = h.sms.bodies();
    assert_eq!(bodies.len(), 3);
    assert_eq!(
        bodies[0],
        "Tesla stocks increase by 9.52%\nTesla headline 0\nAbout: Tesla headline 0."
    );
    assert!(bodies[2].contains("Tesla headline 2"));
}

#[tokio::test]
async fn fewer_relevant_articles_send_exactly_that_many() {
    let articles = vec![
        article("Tesla cuts prices in China"),
        article("[Removed]"),
        article("Nvidia hits record"),
        article("Elon Musk responds to analysts"),
    ];
    let h = Harness::new(
        StaticQuotes::returning(closes(dec!(95), dec!(100))),
        StaticNews::returning(articles),
        RecordingSms::new(),
    );

    let outcome = h.job().run().await;

    assert!(matches!(
        outcome,
        RunOutcome::Alerted {
            attempted: 2,
            delivered: 2,
            ..
        }
    ));
    let bodies = h.sms.bodies();
    assert!(bodies[0].starts_with("Tesla stocks decrease by 5.13%\nTesla cuts prices in China"));
    assert!(bodies[1].contains("Elon Musk responds to analysts"));
}

#[tokio::test]
async fn threshold_boundary_triggers_alert() {
    // 5 / 100 * 100 = 5.00 exactly
    let h = Harness::new(
        StaticQuotes::returning(closes(dec!(102.5), dec!(97.5))),
        StaticNews::returning(tesla_headlines(1)),
        RecordingSms::new(),
    );

    let outcome = h.job().run().await;

    assert!(matches!(outcome, RunOutcome::Alerted { attempted: 1, .. }));
}

#[tokio::test]
async fn news_is_searched_from_latest_trading_day() {
    let h = Harness::new(
        StaticQuotes::returning(closes(dec!(110), dec!(100))),
        StaticNews::returning(tesla_headlines(1)),
        RecordingSms::new(),
    );

    h.job().run().await;

    assert_eq!(h.news.searches(), vec![("tesla".to_string(), trading_day())]);
}

#[tokio::test]
async fn no_relevant_news_sends_nothing() {
    let h = Harness::new(
        StaticQuotes::returning(closes(dec!(110), dec!(100))),
        StaticNews::returning(vec![article("[Removed]"), article("Ford earnings")]),
        RecordingSms::new(),
    );

    let outcome = h.job().run().await;

    assert!(matches!(outcome, RunOutcome::NoRelevantNews(_)));
    assert!(h.sms.is_empty());
}

#[tokio::test]
async fn news_failure_degrades_to_no_news() {
    let h = Harness::new(
        StaticQuotes::returning(closes(dec!(110), dec!(100))),
        StaticNews::failing("connection reset"),
        RecordingSms::new(),
    );

    let outcome = h.job().run().await;

    assert!(matches!(outcome, RunOutcome::NoRelevantNews(_)));
    assert!(h.sms.is_empty());
}

#[tokio::test]
async fn stock_failure_stops_before_news() {
    let h = Harness::new(
        StaticQuotes::failing("timeout"),
        StaticNews::returning(tesla_headlines(3)),
        RecordingSms::new(),
    );

    let outcome = h.job().run().await;

    assert_eq!(outcome, RunOutcome::StockUnavailable);
    assert_eq!(h.quotes.calls(), 1);
    assert!(h.news.searches().is_empty());
    assert!(h.sms.is_empty());
}

#[tokio::test]
async fn failed_send_does_not_stop_the_next() {
    let h = Harness::new(
        StaticQuotes::returning(closes(dec!(110), dec!(100))),
        StaticNews::returning(tesla_headlines(3)),
        RecordingSms::failing_on([0]),
    );

    let outcome = h.job().run().await;

    assert!(matches!(
        outcome,
        RunOutcome::Alerted {
            attempted: 3,
            delivered: 2,
            ..
        }
    ));
    assert_eq!(h.sms.len(), 3);
}

#[tokio::test]
async fn every_send_failing_still_attempts_all() {
    let h = Harness::new(
        StaticQuotes::returning(closes(dec!(95), dec!(100))),
        StaticNews::returning(tesla_headlines(2)),
        RecordingSms::failing_on([0, 1]),
    );

    let outcome = h.job().run().await;

    assert!(matches!(
        outcome,
        RunOutcome::Alerted {
            attempted: 2,
            delivered: 0,
            ..
        }
    ));
}

#[tokio::test]
async fn outcome_display_summarizes_the_run() {
    let h = Harness::new(
        StaticQuotes::returning(closes(dec!(110), dec!(100))),
        StaticNews::returning(tesla_headlines(1)),
        RecordingSms::failing_on([0]),
    );

    let outcome = h.job().run().await;

    assert_eq!(outcome.to_string(), "increase by 9.52%, 0/1 messages sent");
}
