use slow_listen::{
    DefaultCatalog, KindPolicy, Ownership, PartialStory, StoreConfig, StoryKind, ANONYMOUS,
    ELLIPSIS, UNTITLED,
};

use crate::support::{fixed_store, store_over};

#[test]
fn create_fills_defaults() {
    let store = fixed_store();
    let story = store
        .create(PartialStory::new().with_title("T").with_content("hello world"))
        .unwrap();

    assert_eq!(story.excerpt, "hello world");
    assert_eq!(story.kind, StoryKind::Story);
    assert_eq!(story.author.as_deref(), Some(ANONYMOUS));
    assert_eq!(story.date, "2025-10-09");
    let longest_default = DefaultCatalog::bundled().max_id_len();
    assert!(story.id.len() > longest_default);
}

#[test]
fn created_story_is_first_and_sanitized() {
    let store = fixed_store();
    store.create(PartialStory::new().with_title("older")).unwrap();

    let partial = PartialStory::new()
        .with_id("1760000000999")
        .with_content("x".repeat(80));
    let created = store.create(partial.clone()).unwrap();

    let custom = store.list_custom();
    assert_eq!(custom[0], created);
    assert_eq!(custom[0], store.sanitize(partial));
    assert_eq!(custom[0].title, UNTITLED);
    assert_eq!(custom[0].excerpt, format!("{}{}", "x".repeat(50), ELLIPSIS));
}

#[test]
fn sanitize_is_idempotent() {
    let store = fixed_store();
    let once = store.sanitize(PartialStory::new().with_title("calm").with_content("a".repeat(120)));
    let twice = store.sanitize(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn ids_are_unique_within_one_millisecond() {
    let store = fixed_store();
    let a = store.create(PartialStory::new()).unwrap();
    let b = store.create(PartialStory::new()).unwrap();
    let c = store.create(PartialStory::new()).unwrap();
    assert_ne!(a.id, b.id);
    assert_ne!(b.id, c.id);
    assert_ne!(a.id, c.id);
}

#[test]
fn create_then_delete_removes_id() {
    let store = fixed_store();
    let story = store.create(PartialStory::new().with_title("brief")).unwrap();

    assert!(store.delete(&story.id).unwrap());
    assert!(store.list_custom().iter().all(|s| s.id != story.id));
    assert!(!store.delete(&story.id).unwrap());
}

#[test]
fn deleting_a_default_has_no_effect() {
    let store = fixed_store();
    assert!(!store.delete("1").unwrap());
    assert!(store.find("1").is_some());
    assert_eq!(store.ownership("1"), Ownership::Default);
}

#[test]
fn update_replaces_custom_in_place() {
    let store = fixed_store();
    let first = store.create(PartialStory::new().with_title("first")).unwrap();
    store.create(PartialStory::new().with_title("second")).unwrap();

    let mut edited = first.clone();
    edited.title = "first, revised".into();
    let outcome = store.update(edited).unwrap();

    assert!(!outcome.is_fork());
    let custom = store.list_custom();
    assert_eq!(custom.len(), 2);
    assert_eq!(custom[1].id, first.id);
    assert_eq!(custom[1].title, "first, revised");
}

#[test]
fn update_of_default_forks() {
    let store = fixed_store();
    let original = store.catalog().get("1").cloned().unwrap();

    let outcome = store
        .update(PartialStory::from(original.clone()).with_title("New"))
        .unwrap();
    assert!(outcome.is_fork());

    let fork = outcome.story();
    assert_ne!(fork.id, "1");
    assert_eq!(fork.title, "New");
    assert_eq!(fork.date, "2025-10-09");
    assert_eq!(store.ownership(&fork.id), Ownership::Custom);

    // Catalog entry is unchanged and both are visible.
    assert_eq!(store.find("1"), Some(original));
    let all = store.all_stories();
    assert!(all.iter().any(|s| s.id == "1"));
    assert!(all.iter().any(|s| s.id == fork.id));
}

#[test]
fn update_of_unknown_id_adds_one() {
    let store = fixed_store();
    store.create(PartialStory::new()).unwrap();

    let outcome = store
        .update(PartialStory::new().with_id("no-such-story").with_title("orphan"))
        .unwrap();
    assert!(outcome.is_fork());
    assert_ne!(outcome.story().id, "no-such-story");
    assert_eq!(store.list_custom().len(), 2);
}

#[test]
fn preserve_policy_keeps_quotes() {
    let store = store_over(
        slow_listen::InMemoryKeyValueStore::new(),
        StoreConfig::default().with_kind_policy(KindPolicy::Preserve),
    );
    let quote = store
        .create(PartialStory::new().with_kind(StoryKind::Quote).with_content("Listen."))
        .unwrap();
    assert!(quote.is_quote());

    let forced = crate::support::fixed_store()
        .create(PartialStory::new().with_kind(StoryKind::Quote))
        .unwrap();
    assert!(!forced.is_quote());
}

#[test]
fn custom_storage_key_is_used() {
    let store = store_over(
        slow_listen::InMemoryKeyValueStore::new(),
        StoreConfig::default().with_storage_key("gallery"),
    );
    store.create(PartialStory::new()).unwrap();

    use slow_listen::KeyValueStore;
    assert!(store.kv().get("gallery").unwrap().is_some());
    assert!(store.kv().get(slow_listen::STORAGE_KEY).unwrap().is_none());
}

#[test]
fn records_written_elsewhere_survive_unrelated_writes() {
    use serde_json::Value;
    use slow_listen::{KeyValueStore, STORAGE_KEY};

    let store = fixed_store();
    store
        .kv()
        .set(
            STORAGE_KEY,
            r#"[
                {"title":"kept by the old app","content":"precious"},
                {"id":"1700000000000","type":"QUOTE","title":"Q","content":"Hush."},
                {"id":"1700000000001","title":"B"}
            ]"#,
        )
        .unwrap();

    let read = store.list_custom();
    assert_eq!(read.len(), 3);
    assert_eq!(read[0].content, "precious");
    assert_eq!(read[1].kind, StoryKind::Quote);
    assert_eq!(read[2].title, "B");

    let created = store.create(PartialStory::new().with_title("new")).unwrap();
    let doomed = store.create(PartialStory::new().with_title("doomed")).unwrap();
    assert!(store.delete(&doomed.id).unwrap());

    let raw = store.kv().get(STORAGE_KEY).unwrap().unwrap();
    let stored: Vec<Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), 4);
    assert_eq!(stored[0]["id"], created.id.as_str());
    assert_eq!(stored[1]["id"], read[0].id.as_str());
    assert_eq!(stored[1]["content"], "precious");
    assert_eq!(stored[2]["type"], "QUOTE");
    assert_eq!(stored[3]["title"], "B");
    assert_eq!(store.list_custom()[1..], read[..]);
}

#[test]
fn create_with_taken_id_gets_a_fresh_one() {
    let store = fixed_store();
    let story = store.create(PartialStory::new().with_id("1").with_title("mine")).unwrap();

    assert_ne!(story.id, "1");
    assert_eq!(store.find("1"), store.catalog().get("1").cloned());
    let all = store.all_stories();
    let mut ids: Vec<&str> = all.iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), all.len());
}
