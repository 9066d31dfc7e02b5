//! Record creation and validation tests
//!
//! Exercises the write-path contract: field persistence, the fixed
//! validation order, character-counted limits, and the guarantee that
//! a rejected create leaves storage untouched.

use chirpdb::{AuthorId, Chirp, Error, ManualClock, RecordId, StoreOptions, Timestamp};
use std::sync::Arc;

fn db_at(secs: i64) -> Chirp {
    let options =
        StoreOptions::default().clock(Arc::new(ManualClock::new(Timestamp::from_secs(secs))));
    Chirp::with_options(options)
}

#[test]
fn create_persists_all_fields() {
    let db = db_at(1_700_000_000);
    let id = RecordId::new();
    let author = AuthorId::new();

    let created = db.create(id, author, "veganism", "Vegans rocks").unwrap();
    assert_eq!(created.id, id);
    assert_eq!(created.author, author);
    assert_eq!(created.topic, "veganism");
    assert_eq!(created.content, "Vegans rocks");
    assert_eq!(created.created_at, Timestamp::from_secs(1_700_000_000));

    // Fetching by id returns the record exactly as persisted
    let fetched = db.fetch(&id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn create_without_topic() {
    let db = db_at(1_700_000_000);
    let id = RecordId::new();
    let author = AuthorId::new();

    db.create(id, author, "", "gm").unwrap();

    let fetched = db.fetch(&id).unwrap();
    assert_eq!(fetched.author, author);
    assert_eq!(fetched.topic, "");
    assert_eq!(fetched.content, "gm");
    assert!(fetched.created_at.is_after(Timestamp::EPOCH));
}

#[test]
fn create_from_different_authors() {
    let db = db_at(1_700_000_000);
    let author_a = AuthorId::new();
    let author_b = AuthorId::new();

    db.create(RecordId::new(), author_a, "veganism", "Vegans rocks")
        .unwrap();
    let id = RecordId::new();
    db.create(id, author_b, "veganism", "Yay Tofu!").unwrap();

    let fetched = db.fetch(&id).unwrap();
    assert_eq!(fetched.author, author_b);
    assert_eq!(fetched.content, "Yay Tofu!");
}

#[test]
fn topic_over_50_chars_rejected_storage_unchanged() {
    let db = db_at(1_700_000_000);
    let id = RecordId::new();
    let topic = "x".repeat(100);

    let result = db.create(id, AuthorId::new(), &topic, "Yay Tofu!");
    match result {
        Err(Error::TopicTooLong) => {
            assert_eq!(
                Error::TopicTooLong.to_string(),
                "The provided topic should be 50 characters long maximum."
            );
        }
        other => panic!("expected TopicTooLong, got {:?}", other),
    }

    assert_eq!(db.len(), 0);
    assert_eq!(db.get(&id).unwrap(), None);
}

#[test]
fn content_over_280_chars_rejected_storage_unchanged() {
    let db = db_at(1_700_000_000);
    let id = RecordId::new();
    let content = "x".repeat(281);

    let result = db.create(id, AuthorId::new(), "veganism", &content);
    match result {
        Err(Error::ContentTooLong) => {
            assert_eq!(
                Error::ContentTooLong.to_string(),
                "The provided content should be 280 characters long maximum."
            );
        }
        other => panic!("expected ContentTooLong, got {:?}", other),
    }

    assert_eq!(db.len(), 0);
}

#[test]
fn boundary_lengths_accepted() {
    let db = db_at(1_700_000_000);

    let topic = "t".repeat(50);
    let content = "c".repeat(280);
    let record = db
        .create(RecordId::new(), AuthorId::new(), &topic, &content)
        .unwrap();
    assert_eq!(record.topic, topic);
    assert_eq!(record.content, content);
}

#[test]
fn limits_count_characters_not_bytes() {
    let db = db_at(1_700_000_000);

    // 50 two-byte characters: valid topic despite 100 bytes
    let topic = "é".repeat(50);
    db.create(RecordId::new(), AuthorId::new(), &topic, "ok")
        .unwrap();

    // 51 characters: rejected
    let over = "é".repeat(51);
    assert!(matches!(
        db.create(RecordId::new(), AuthorId::new(), &over, "ok"),
        Err(Error::TopicTooLong)
    ));
}

#[test]
fn failed_create_does_not_consume_identifier() {
    let db = db_at(1_700_000_000);
    let id = RecordId::new();

    let result = db.create(id, AuthorId::new(), &"x".repeat(51), "content");
    assert!(result.is_err());

    // The identifier is still fresh and usable
    db.create(id, AuthorId::new(), "ok", "content").unwrap();
    assert_eq!(db.len(), 1);
}

#[test]
fn duplicate_identifier_rejected_first_write_wins() {
    let db = db_at(1_700_000_000);
    let id = RecordId::new();

    db.create(id, AuthorId::new(), "first", "one").unwrap();
    let result = db.create(id, AuthorId::new(), "second", "two");
    assert!(matches!(result, Err(Error::RecordExists(existing)) if existing == id));

    let fetched = db.fetch(&id).unwrap();
    assert_eq!(fetched.topic, "first");
    assert_eq!(db.len(), 1);
}

#[test]
fn fetch_unknown_identifier() {
    let db = db_at(1_700_000_000);
    let id = RecordId::new();

    assert_eq!(db.get(&id).unwrap(), None);
    assert!(matches!(db.fetch(&id), Err(Error::RecordNotFound(missing)) if missing == id));
}

#[test]
fn created_at_tracks_injected_clock() {
    let clock = Arc::new(ManualClock::new(Timestamp::from_secs(100)));
    let db = Chirp::with_options(StoreOptions::default().clock(clock.clone()));

    let first = db
        .create(RecordId::new(), AuthorId::new(), "", "one")
        .unwrap();
    clock.advance_secs(60);
    let second = db
        .create(RecordId::new(), AuthorId::new(), "", "two")
        .unwrap();

    assert_eq!(first.created_at, Timestamp::from_secs(100));
    assert_eq!(second.created_at, Timestamp::from_secs(160));
}
