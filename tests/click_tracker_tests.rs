//! Click tracking, analytics and action log tests

use std::sync::Arc;

use callboard::config::{AuthConfig, DatabaseConfig};
use callboard::errors::CallboardError;
use callboard::services::{
    ActionLog, AnalyticsAggregator, CallQueue, CapabilityGate, ClickTracker, OfferCatalog,
    RECENT_LOG_WINDOW, Session,
};
use callboard::storage::{ACTION_CALL_CREATED, ActionLogEntry, OfferFields, SeaOrmStorage};
use chrono::Utc;
use futures_util::future::join_all;
use tempfile::TempDir;

const TEST_MARKER: &str = "tracker-marker";

struct Fixture {
    catalog: OfferCatalog,
    clicks: Arc<ClickTracker>,
    calls: CallQueue,
    analytics: AnalyticsAggregator,
    action_log: ActionLog,
    storage: Arc<SeaOrmStorage>,
    _dir: TempDir,
}

async fn fixture() -> Fixture {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("clicks.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = Arc::new(
        SeaOrmStorage::new(&db_url, "sqlite", &DatabaseConfig::default())
            .await
            .expect("Failed to create storage"),
    );
    let gate = Arc::new(CapabilityGate::new(&AuthConfig {
        session_marker: Some(TEST_MARKER.to_string()),
        ..AuthConfig::default()
    }));

    Fixture {
        catalog: OfferCatalog::new(storage.clone(), gate.clone()),
        clicks: Arc::new(ClickTracker::new(storage.clone())),
        calls: CallQueue::new(storage.clone(), gate.clone()),
        analytics: AnalyticsAggregator::new(storage.clone(), gate.clone()),
        action_log: ActionLog::new(storage.clone(), gate),
        storage,
        _dir: temp_dir,
    }
}

fn admin() -> Session {
    Session::from_marker(Some(TEST_MARKER.to_string()))
}

fn fields(title: &str) -> OfferFields {
    OfferFields {
        title: title.to_string(),
        bonus: "500%".to_string(),
        description: String::new(),
        color: "#e63946".to_string(),
        logo: String::new(),
        link: "http://example.com".to_string(),
        tags: Vec::new(),
    }
}

#[tokio::test]
async fn test_click_increments_counter_and_records() {
    let f = fixture().await;
    let offer = f.catalog.create(&admin(), fields("X7Casino")).await.unwrap();

    let record = f
        .clicks
        .record_click(&offer.id, Some("203.0.113.5".to_string()))
        .await
        .unwrap();
    assert_eq!(record.offer_id, offer.id);
    assert_eq!(record.source_address.as_deref(), Some("203.0.113.5"));

    let stored = f.catalog.get(&offer.id).await.unwrap();
    assert_eq!(stored.clicks, 1);
    assert_eq!(stored.updated_at, offer.updated_at);
    assert_eq!(f.clicks.record_count(&offer.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_click_on_unknown_offer() {
    let f = fixture().await;

    let err = f.clicks.record_click("nope", None).await.unwrap_err();
    assert!(matches!(err, CallboardError::NotFound(_)));
    assert_eq!(f.clicks.record_count("nope").await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_clicks_are_not_lost() {
    let f = fixture().await;
    let offer = f.catalog.create(&admin(), fields("Fast Slots")).await.unwrap();
    const N: u64 = 40;

    let tasks = (0..N).map(|i| {
        let clicks = f.clicks.clone();
        let id = offer.id.clone();
        tokio::spawn(async move { clicks.record_click(&id, Some(format!("10.0.0.{}", i))).await })
    });
    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    assert_eq!(f.catalog.get(&offer.id).await.unwrap().clicks, N);
    assert_eq!(f.clicks.record_count(&offer.id).await.unwrap(), N);
}

#[tokio::test]
async fn test_click_records_survive_offer_deletion() {
    let f = fixture().await;
    let offer = f.catalog.create(&admin(), fields("Samba Slots")).await.unwrap();
    f.clicks.record_click(&offer.id, None).await.unwrap();
    f.clicks.record_click(&offer.id, None).await.unwrap();

    f.catalog.delete(&admin(), &offer.id).await.unwrap();

    assert_eq!(f.clicks.record_count(&offer.id).await.unwrap(), 2);
    assert!(matches!(
        f.clicks.record_click(&offer.id, None).await,
        Err(CallboardError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_analytics_counts_current_offers_only() {
    let f = fixture().await;
    let kept = f.catalog.create(&admin(), fields("Betify")).await.unwrap();
    let removed = f.catalog.create(&admin(), fields("Winningz")).await.unwrap();

    for _ in 0..3 {
        f.clicks.record_click(&kept.id, None).await.unwrap();
    }
    for _ in 0..5 {
        f.clicks.record_click(&removed.id, None).await.unwrap();
    }
    f.catalog.delete(&admin(), &removed.id).await.unwrap();

    f.calls.append("slot".to_string(), "u1".to_string()).await.unwrap();
    f.calls.append("slot".to_string(), "u2".to_string()).await.unwrap();

    let summary = f.analytics.summarize(&admin()).await.unwrap();
    assert_eq!(summary.offers_stats.len(), 1);
    assert_eq!(summary.offers_stats[0].id, kept.id);
    assert_eq!(summary.offers_stats[0].title, "Betify");
    assert_eq!(summary.offers_stats[0].clicks, 3);
    assert_eq!(summary.total_clicks, 3);
    assert_eq!(summary.total_calls, 2);
}

#[tokio::test]
async fn test_analytics_and_logs_require_session() {
    let f = fixture().await;

    assert!(matches!(
        f.analytics.summarize(&Session::anonymous()).await,
        Err(CallboardError::Forbidden(_))
    ));
    assert!(matches!(
        f.action_log.recent(&Session::anonymous()).await,
        Err(CallboardError::Forbidden(_))
    ));
}

#[tokio::test]
async fn test_action_log_newest_first_with_window() {
    let f = fixture().await;

    let total = RECENT_LOG_WINDOW as usize + 5;
    for i in 0..total {
        f.action_log
            .record_call_created(Some("198.51.100.1".to_string()), "slot", &format!("user-{}", i))
            .await
            .unwrap();
    }

    let logs = f.action_log.recent(&admin()).await.unwrap();
    assert_eq!(logs.len(), RECENT_LOG_WINDOW as usize);
    assert_eq!(logs[0].username, format!("user-{}", total - 1));
    assert!(logs.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    assert!(logs.iter().all(|l| l.action == ACTION_CALL_CREATED));
    assert_eq!(logs[0].ip.as_deref(), Some("198.51.100.1"));
}

#[tokio::test]
async fn test_action_log_same_timestamp_newest_insert_first() {
    let f = fixture().await;
    let stamp = Utc::now();

    for i in 0..5 {
        let entry = ActionLogEntry {
            id: format!("log-{}", i),
            timestamp: stamp,
            ip: None,
            slot: "slot".to_string(),
            username: format!("user-{}", i),
            action: ACTION_CALL_CREATED.to_string(),
        };
        f.storage.insert_action_log(&entry).await.unwrap();
    }

    let logs = f.action_log.recent(&admin()).await.unwrap();
    let users: Vec<&str> = logs.iter().map(|l| l.username.as_str()).collect();
    assert_eq!(users, vec!["user-4", "user-3", "user-2", "user-1", "user-0"]);
}
