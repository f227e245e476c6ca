//! Offer catalog tests

use std::sync::Arc;

use callboard::config::{AuthConfig, DatabaseConfig};
use callboard::errors::CallboardError;
use callboard::services::{CapabilityGate, OfferCatalog, Session};
use callboard::storage::{OfferFields, SeaOrmStorage};
use tempfile::TempDir;

const TEST_MARKER: &str = "catalog-marker";

async fn create_catalog() -> (OfferCatalog, Arc<SeaOrmStorage>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("offers.db");
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

    (OfferCatalog::new(storage.clone(), gate), storage, temp_dir)
}

fn admin() -> Session {
    Session::from_marker(Some(TEST_MARKER.to_string()))
}

fn fields(title: &str) -> OfferFields {
    OfferFields {
        title: title.to_string(),
        bonus: "200% jusqu'à 7500€".to_string(),
        description: "50 Free Spins".to_string(),
        color: "linear-gradient(to right, #007e33, #808080)".to_string(),
        logo: "https://example.com/logo.png".to_string(),
        link: "https://example.com/go".to_string(),
        tags: vec!["Crypto".to_string(), "CB".to_string(), "CB".to_string()],
    }
}

#[tokio::test]
async fn test_create_starts_with_zero_clicks() {
    let (catalog, _storage, _dir) = create_catalog().await;

    let offer = catalog.create(&admin(), fields("BetBlast")).await.unwrap();
    assert_eq!(offer.clicks, 0);
    assert_eq!(offer.created_at, offer.updated_at);

    let stored = catalog.get(&offer.id).await.unwrap();
    assert_eq!(stored.clicks, 0);
    assert_eq!(stored.created_at, stored.updated_at);
    // 标签保持顺序，不去重
    assert_eq!(stored.tags, vec!["Crypto", "CB", "CB"]);
}

#[tokio::test]
async fn test_update_refreshes_timestamp_and_keeps_clicks() {
    let (catalog, storage, _dir) = create_catalog().await;
    let offer = catalog.create(&admin(), fields("Winningz")).await.unwrap();

    assert!(storage.increment_offer_clicks(&offer.id).await.unwrap());
    assert!(storage.increment_offer_clicks(&offer.id).await.unwrap());
    let clicked = catalog.get(&offer.id).await.unwrap();
    assert_eq!(clicked.updated_at, offer.updated_at);

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let mut changed = fields("Winningz VIP");
    changed.tags = vec!["VIP Rank".to_string()];
    let updated = catalog.update(&admin(), &offer.id, changed).await.unwrap();

    assert_eq!(updated.id, offer.id);
    assert_eq!(updated.title, "Winningz VIP");
    assert_eq!(updated.tags, vec!["VIP Rank"]);
    assert_eq!(updated.clicks, 2);
    assert_eq!(updated.created_at, offer.created_at);
    assert!(updated.updated_at > offer.updated_at);
}

#[tokio::test]
async fn test_repeated_identical_update_succeeds() {
    let (catalog, storage, _dir) = create_catalog().await;
    let offer = catalog.create(&admin(), fields("Fast Slots")).await.unwrap();

    let first = catalog
        .update(&admin(), &offer.id, fields("Fast Slots"))
        .await
        .unwrap();
    let second = catalog
        .update(&admin(), &offer.id, fields("Fast Slots"))
        .await
        .unwrap();
    assert_eq!(second.id, offer.id);
    assert_eq!(second.title, "Fast Slots");

    // 同一 updated_at 再写一次：没有任何列变化，仍然算存在
    let unchanged = storage
        .update_offer_fields(&offer.id, &fields("Fast Slots"), first.updated_at)
        .await
        .unwrap();
    assert!(unchanged.is_some());

    let missing = storage
        .update_offer_fields("missing", &fields("Fast Slots"), first.updated_at)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_update_and_delete_unknown_id() {
    let (catalog, _storage, _dir) = create_catalog().await;

    let err = catalog
        .update(&admin(), "missing", fields("Ghost"))
        .await
        .unwrap_err();
    assert!(matches!(err, CallboardError::NotFound(_)));

    let err = catalog.delete(&admin(), "missing").await.unwrap_err();
    assert!(matches!(err, CallboardError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_removes_offer() {
    let (catalog, _storage, _dir) = create_catalog().await;
    let keep = catalog.create(&admin(), fields("Keep")).await.unwrap();
    let gone = catalog.create(&admin(), fields("Gone")).await.unwrap();

    catalog.delete(&admin(), &gone.id).await.unwrap();

    let offers = catalog.list().await.unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].id, keep.id);
}

#[tokio::test]
async fn test_mutations_require_session() {
    let (catalog, _storage, _dir) = create_catalog().await;
    let offer = catalog.create(&admin(), fields("Betify")).await.unwrap();
    let anonymous = Session::anonymous();

    assert!(matches!(
        catalog.create(&anonymous, fields("Intruder")).await,
        Err(CallboardError::Forbidden(_))
    ));
    assert!(matches!(
        catalog.update(&anonymous, &offer.id, fields("Hacked")).await,
        Err(CallboardError::Forbidden(_))
    ));
    assert!(matches!(
        catalog.delete(&anonymous, &offer.id).await,
        Err(CallboardError::Forbidden(_))
    ));

    let offers = catalog.list().await.unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0], offer);
}

#[tokio::test]
async fn test_seed_runs_only_on_empty_catalog() {
    let (catalog, _storage, _dir) = create_catalog().await;

    assert_eq!(catalog.seed_defaults_if_empty().await.unwrap(), 7);
    assert_eq!(catalog.seed_defaults_if_empty().await.unwrap(), 0);

    let offers = catalog.list().await.unwrap();
    let titles: Vec<&str> = offers.iter().map(|o| o.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Betify",
            "Winningz",
            "Samba Slots",
            "BetBlast",
            "Fast Slots",
            "Golden Panda",
            "X7Casino"
        ]
    );
    assert!(offers.iter().all(|o| o.clicks == 0));
}

#[tokio::test]
async fn test_seed_skipped_when_catalog_has_offers() {
    let (catalog, _storage, _dir) = create_catalog().await;
    catalog.create(&admin(), fields("Custom")).await.unwrap();

    assert_eq!(catalog.seed_defaults_if_empty().await.unwrap(), 0);
    assert_eq!(catalog.list().await.unwrap().len(), 1);
}
