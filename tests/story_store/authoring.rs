use slow_listen::{first_image, AvatarChoice, ContentBlock, Ownership, StoryForm, StoryKind};

use crate::support::fixed_store;

#[test]
fn saving_a_new_form_creates_a_story() {
    let store = fixed_store();
    let mut form = StoryForm::new("42");
    form.title = "Harbor Bells".into();
    form.author = "Mara".into();
    form.content = "The bells rang at low tide.".into();
    form.append_content_image("data:image/jpeg;base64,AAAA");

    let saved = form.save(&store, None).unwrap();
    assert_eq!(saved.date, "OCT 09, 2025");
    assert_eq!(saved.author.as_deref(), Some("Mara"));
    assert_eq!(saved.avatar_url, "https://picsum.photos/id/42/200/200");
    assert_eq!(saved.cover_image(), "data:image/jpeg;base64,AAAA");
    assert_eq!(
        saved.blocks(),
        vec![
            ContentBlock::Paragraph("The bells rang at low tide.".into()),
            ContentBlock::Image("data:image/jpeg;base64,AAAA".into()),
        ]
    );
    assert_eq!(store.list_custom(), vec![saved]);
}

#[test]
fn editing_a_custom_story_keeps_identity() {
    let store = fixed_store();
    let mut form = StoryForm::new("1");
    form.title = "Draft".into();
    let saved = form.save(&store, None).unwrap();

    let mut form = StoryForm::edit(&saved);
    form.title = "Final".into();
    form.set_uploaded_avatar("data:image/jpeg;base64,BBBB");
    let edited = form.save(&store, Some(&saved)).unwrap();

    assert_eq!(edited.id, saved.id);
    assert_eq!(edited.date, saved.date);
    assert_eq!(edited.title, "Final");
    assert_eq!(store.list_custom().len(), 1);
    assert_eq!(
        AvatarChoice::from_url(&edited.avatar_url),
        Some(AvatarChoice::Upload("data:image/jpeg;base64,BBBB".into()))
    );
}

#[test]
fn editing_a_default_story_forks_it() {
    let store = fixed_store();
    let original = store.find("2").unwrap();
    assert_eq!(original.kind, StoryKind::Quote);

    let mut form = StoryForm::edit(&original);
    form.title = "On Patience, again".into();
    let fork = form.save(&store, Some(&original)).unwrap();

    assert_ne!(fork.id, original.id);
    assert_eq!(fork.date, "2025-10-09");
    assert_eq!(store.ownership(&fork.id), Ownership::Custom);
    assert_eq!(store.find("2"), Some(original));
    assert!(first_image(&fork.content).is_none());
}
