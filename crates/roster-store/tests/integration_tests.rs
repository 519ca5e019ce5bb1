//! Integration tests for roster-store
//!
//! These tests verify the create/read cycle for players.

use chrono::NaiveDate;
use roster_domain::traits::PlayerRepository;
use roster_domain::{PlayerId, PlayerRecord};
use roster_store::SqliteStore;

fn player(first: &str, last: &str, dob: (i32, u32, u32), team: &str) -> PlayerRecord {
    PlayerRecord::new(
        first,
        last,
        NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2).unwrap(),
        team,
        false,
        false,
    )
}

#[test]
fn test_store_initialization() {
    let store = SqliteStore::new(":memory:");
    assert!(store.is_ok(), "Store should initialize successfully");
}

#[test]
fn test_create_and_get_player() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let mut record = player("Kobe", "Bryant", (1978, 8, 23), "Los Angeles Lakers");
    record.retired = true;

    let id = store.create(&record).unwrap();

    let retrieved = store.get(id).unwrap();
    assert!(retrieved.is_some(), "Should retrieve the player");

    let stored = retrieved.unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.record, record);
}

#[test]
fn test_get_missing_player() {
    let store = SqliteStore::new(":memory:").unwrap();
    let result = store.get(PlayerId::from_value(42)).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_create_many_preserves_order() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let players = vec![
        player("LeBron", "James", (1984, 12, 30), "Los Angeles Lakers"),
        player("Stephen", "Curry", (1988, 3, 14), "Golden State Warriors"),
        player("Nikola", "Jokic", (1995, 2, 19), "Denver Nuggets"),
    ];

    let ids = store.create_many(&players).unwrap();
    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "Ids should ascend");

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 3);
    for (stored, (expected, id)) in all.iter().zip(players.iter().zip(&ids)) {
        assert_eq!(&stored.record, expected);
        assert_eq!(&stored.id, id);
    }
}

#[test]
fn test_create_many_empty_batch() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let ids = store.create_many(&[]).unwrap();
    assert!(ids.is_empty());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_list_all_empty() {
    let store = SqliteStore::new(":memory:").unwrap();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_persistence_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");

    {
        let mut store = SqliteStore::new(&path).unwrap();
        store
            .create_many(&[
                player("Tim", "Duncan", (1976, 4, 25), "San Antonio Spurs"),
                player("Dirk", "Nowitzki", (1978, 6, 19), "Dallas Mavericks"),
            ])
            .unwrap();
    }

    let store = SqliteStore::new(&path).unwrap();
    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].record.last_name, "Duncan");
    assert_eq!(all[1].record.team, "Dallas Mavericks");
}

#[test]
fn test_flags_round_trip() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let mut record = player("Derrick", "Rose", (1988, 10, 4), "Chicago Bulls");
    record.retired = true;
    record.injured = true;

    let id = store.create(&record).unwrap();
    let stored = store.get(id).unwrap().unwrap();
    assert!(stored.record.retired);
    assert!(stored.record.injured);
}
