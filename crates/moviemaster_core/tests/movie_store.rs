use moviemaster_core::{MovieRecord, MovieStore, StoreError};
use std::collections::HashSet;
use std::sync::Arc;
use time::macros::datetime;

fn seeded_store() -> MovieStore {
    MovieStore::from_records(vec![
        MovieRecord::with_id("1", "Encanto", "2013")
            .with_actors("Laz")
            .with_rating("6.7"),
        MovieRecord::with_id("2", "Inception", "2014")
            .with_actors("Fedric")
            .with_rating("7.2"),
        MovieRecord::with_id("3", "King Kong", "2013")
            .with_actors("Jazz")
            .with_rating("5.7"),
    ])
    .unwrap()
}

fn ids(records: &[MovieRecord]) -> Vec<&str> {
    records.iter().map(|record| record.id.as_str()).collect()
}

#[test]
fn all_returns_seed_order() {
    let store = seeded_store();
    assert_eq!(ids(&store.all()), vec!["1", "2", "3"]);
}

#[test]
fn all_is_stable_without_writes() {
    let store = seeded_store();
    assert_eq!(store.all(), store.all());
}

#[test]
fn get_is_exact_key_lookup() {
    let store = seeded_store();
    assert_eq!(store.get("2").unwrap().title, "Inception");
    assert!(store.get("9").is_none());
    assert!(store.get("").is_none());
}

#[test]
fn by_year_matches_substring_in_insertion_order() {
    let store = seeded_store();
    assert_eq!(ids(&store.by_year("2013").unwrap()), vec!["1", "3"]);
    assert_eq!(ids(&store.by_year("201").unwrap()), vec!["1", "2", "3"]);
    assert_eq!(ids(&store.by_year("14").unwrap()), vec!["2"]);
}

#[test]
fn by_year_without_matches_is_absent() {
    let store = seeded_store();
    assert!(store.by_year("INVALID_YEAR").is_none());
}

#[test]
fn insert_appends_and_is_retrievable() {
    let store = seeded_store();
    store
        .insert(MovieRecord::with_id("4", "Fast", "2005"))
        .unwrap();

    assert_eq!(store.get("4").unwrap().title, "Fast");
    assert_eq!(ids(&store.all()), vec!["1", "2", "3", "4"]);
}

#[test]
fn insert_collision_fails_without_overwriting() {
    let store = seeded_store();
    let err = store
        .insert(MovieRecord::with_id("1", "Impostor", "1999"))
        .unwrap_err();

    assert_eq!(err, StoreError::Collision("1".to_string()));
    assert_eq!(store.get("1").unwrap().title, "Encanto");
    assert_eq!(store.len(), 3);
}

#[test]
fn replace_overwrites_title_year_actors_and_stamps_time() {
    let store = seeded_store();
    let now = datetime!(2030-01-01 00:00:00 UTC);
    let details = MovieRecord::with_id("ignored", "New Title", "2022")
        .with_actors("Someone")
        .with_rating("1.0");

    let updated = store.replace("2", &details, now).unwrap();

    assert_eq!(updated.id, "2");
    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.year, "2022");
    assert_eq!(updated.actors, "Someone");
    assert_eq!(updated.rating, "7.2", "rating is not touched by replace");
    assert_eq!(updated.last_updated, now);
    assert_eq!(store.get("2").unwrap(), updated);
    assert!(store.get("ignored").is_none());
}

#[test]
fn replace_keeps_position_in_order() {
    let store = seeded_store();
    store
        .replace(
            "1",
            &MovieRecord::with_id("", "Renamed", "2013"),
            datetime!(2030-01-01 00:00:00 UTC),
        )
        .unwrap();

    assert_eq!(ids(&store.all()), vec!["1", "2", "3"]);
    assert_eq!(store.all()[0].title, "Renamed");
}

#[test]
fn replace_missing_id_is_absent_and_changes_nothing() {
    let store = seeded_store();
    let before = store.all();

    let result = store.replace(
        "INVALID_ID",
        &MovieRecord::with_id("", "New Title", "2022"),
        datetime!(2030-01-01 00:00:00 UTC),
    );

    assert!(result.is_none());
    assert_eq!(store.all(), before);
}

#[test]
fn concurrent_inserts_keep_every_record_once() {
    let store = Arc::new(MovieStore::new());
    let handles = (0..8)
        .map(|worker| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for n in 0..50 {
                    store
                        .insert(MovieRecord::with_id(
                            format!("{worker}-{n}"),
                            "Title",
                            "2000",
                        ))
                        .unwrap();
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().unwrap();
    }

    let all = store.all();
    assert_eq!(all.len(), 400);
    let unique = all.iter().map(|record| &record.id).collect::<HashSet<_>>();
    assert_eq!(unique.len(), 400);
}

#[test]
fn concurrent_insert_of_same_id_admits_exactly_one() {
    let store = Arc::new(MovieStore::new());
    let handles = (0..8)
        .map(|worker| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                store
                    .insert(MovieRecord::with_id("contested", format!("w{worker}"), "2000"))
                    .is_ok()
            })
        })
        .collect::<Vec<_>>();

    let winners = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|won| *won)
        .count();
    assert_eq!(winners, 1);
    assert_eq!(store.len(), 1);
}
