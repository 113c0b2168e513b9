use slow_listen::{looks_custom, KeyValueStore, Ownership, PartialStory, STORAGE_KEY};

use crate::support::fixed_store;

#[test]
fn empty_storage_is_exactly_the_catalog() {
    let store = fixed_store();
    assert_eq!(store.all_stories(), store.catalog().stories());
}

#[test]
fn custom_stories_come_first() {
    let store = fixed_store();
    let a = store.create(PartialStory::new().with_title("a")).unwrap();
    let b = store.create(PartialStory::new().with_title("b")).unwrap();

    let all = store.all_stories();
    assert_eq!(all.len(), store.list_custom().len() + store.catalog().len());
    assert_eq!(all[0], b);
    assert_eq!(all[1], a);
    assert_eq!(&all[2..], store.catalog().stories());
}

#[test]
fn custom_record_shadows_default_in_find() {
    let store = fixed_store();
    store
        .kv()
        .set(STORAGE_KEY, r#"[{"id":"3","title":"Local copy"}]"#)
        .unwrap();

    assert_eq!(store.find("3").unwrap().title, "Local copy");
    assert_eq!(store.ownership("3"), Ownership::Custom);
    assert_eq!(store.all_stories().len(), store.catalog().len() + 1);
}

#[test]
fn ownership_uses_membership_not_length() {
    let store = fixed_store();
    assert_eq!(store.ownership("123456"), Ownership::Unknown);
    assert!(looks_custom("123456"));
    assert!(!looks_custom("6"));

    let story = store.create(PartialStory::new()).unwrap();
    assert!(store.is_custom(&story.id));
    assert!(!store.is_custom("6"));
}

#[test]
fn unreadable_storage_still_shows_catalog() {
    let store = fixed_store();
    store.kv().set(STORAGE_KEY, "[{\"id\":").unwrap();
    assert_eq!(store.all_stories(), store.catalog().stories());
}
