//! Generic repository properties against the in-memory provider

use std::sync::Arc;

use gatehouse_interfaces::{CrudRepository, StorageError};
use gatehouse_storage::testing::{ClientBuilder, InMemoryProvider, ZoneBuilder};
use gatehouse_storage::TableRepository;
use gatehouse_types::{Client, Zone};

fn zone_repo() -> TableRepository<Zone> {
    TableRepository::new(Arc::new(InMemoryProvider::new()))
}

#[tokio::test]
async fn create_then_find_round_trips_all_non_key_fields() {
    let repo = zone_repo();
    let zone = ZoneBuilder::new().with_name("West Gardens").with_capacity(420).build();

    let created = repo.create(zone.clone()).await.unwrap();
    assert_ne!(created.id, 0);

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created.clone()));

    // Every non-key field survives unchanged
    assert_eq!(created.name, zone.name);
    assert_eq!(created.capacity, zone.capacity);
    assert_eq!(created.is_open, zone.is_open);
}

#[tokio::test]
async fn create_assigns_unique_keys() {
    let repo = zone_repo();

    let first = repo.create(ZoneBuilder::new().build()).await.unwrap();
    let second = repo.create(ZoneBuilder::new().build()).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn find_by_id_missing_row_is_none() {
    let repo = zone_repo();
    assert_eq!(repo.find_by_id(41).await.unwrap(), None);
}

#[tokio::test]
async fn update_replaces_non_key_fields() {
    let repo = zone_repo();
    let created = repo.create(ZoneBuilder::new().build()).await.unwrap();

    let mut changed = created.clone();
    changed.capacity = 999;
    changed.is_open = false;

    assert!(repo.update(&changed).await.unwrap());
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(changed));
}

#[tokio::test]
async fn update_missing_row_returns_false() {
    let repo = zone_repo();
    let mut ghost = ZoneBuilder::new().build();
    ghost.id = 404;

    assert!(!repo.update(&ghost).await.unwrap());
}

#[tokio::test]
async fn delete_twice_then_lookup() {
    let repo = zone_repo();
    let created = repo.create(ZoneBuilder::new().build()).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
}

#[tokio::test]
async fn pagination_concatenation_covers_every_row_once() {
    let repo = zone_repo();
    for i in 0..7 {
        repo.create(ZoneBuilder::new().with_name(format!("Zone {i}")).build())
            .await
            .unwrap();
    }

    let mut paged = Vec::new();
    for page in 1..=3 {
        let chunk = repo.find_page(page, 3).await.unwrap();
        assert!(chunk.len() <= 3);
        paged.extend(chunk);
    }

    let all = repo.find_all().await.unwrap();
    assert_eq!(paged, all);
    assert_eq!(paged.len(), 7);

    let mut ids: Vec<i32> = paged.iter().map(|zone| zone.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 7);
}

#[tokio::test]
async fn find_page_rejects_zero_arguments_before_io() {
    let repo = zone_repo();

    assert!(matches!(
        repo.find_page(0, 10).await,
        Err(StorageError::Validation(_))
    ));
    assert!(matches!(
        repo.find_page(1, 0).await,
        Err(StorageError::Validation(_))
    ));
}

#[tokio::test]
async fn count_tracks_inserts_and_deletes() {
    let repo = zone_repo();
    assert_eq!(repo.count().await.unwrap(), 0);

    let created = repo.create(ZoneBuilder::new().build()).await.unwrap();
    repo.create(ZoneBuilder::new().build()).await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 2);

    repo.delete(created.id).await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn duplicate_unique_column_propagates_constraint_error() {
    let provider = Arc::new(InMemoryProvider::new().with_unique("clients", "email"));
    let repo: TableRepository<Client> = TableRepository::new(provider);

    let client = ClientBuilder::new().with_email("dup@example.com").build();
    repo.create(client.clone()).await.unwrap();

    let result = repo.create(client).await;
    assert!(matches!(result, Err(StorageError::Constraint(_))));
}

#[tokio::test]
async fn date_fields_round_trip_through_json_rows() {
    let provider = Arc::new(InMemoryProvider::new());
    let repo: TableRepository<Client> = TableRepository::new(provider);

    let client = ClientBuilder::new()
        .with_full_name("Ada Raine")
        .with_is_active(false)
        .build();

    let created = repo.create(client).await.unwrap();
    let found = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(found.date_of_birth, created.date_of_birth);
    assert_eq!(found.created_at, created.created_at);
    assert!(!found.is_active);
}
