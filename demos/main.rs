use std::env;

use slow_listen::{
    FileKeyValueStore, PartialStory, StoryForm, StoryStore, STORY_CREATED, STORY_FORKED,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Persist next to the system temp dir unless a path is given
    let path = env::args()
        .nth(1)
        .map(Into::into)
        .unwrap_or_else(|| env::temp_dir().join("slow_listen_stories.json"));
    let store = StoryStore::new(FileKeyValueStore::new(path));

    // Add event listeners
    store.on(STORY_CREATED, |json: String| {
        println!("Story created: {}", json);
    });
    store.on(STORY_FORKED, |json: String| {
        println!("Default story forked: {}", json);
    });

    // Write a new story
    let story = store.create(
        PartialStory::new()
            .with_title("Listening to the Kettle")
            .with_author("Demo")
            .with_content("It hums long before it sings. I never noticed until today."),
    )?;
    println!("Created {} ({})", story.title, story.id);

    // Edit a default story through the form; it becomes a custom copy
    if let Some(original) = store.find("1") {
        let mut form = StoryForm::edit(&original);
        form.title = format!("{} (my version)", original.title);
        let fork = form.save(&store, Some(&original))?;
        println!("Forked default {} into {}", original.id, fork.id);
    }

    for story in store.all_stories() {
        let owner = if store.is_custom(&story.id) { "custom" } else { "default" };
        println!("[{owner:>7}] {:<40} {}", story.title, story.excerpt);
    }

    // Give emitter threads a moment to print
    std::thread::sleep(std::time::Duration::from_millis(50));
    Ok(())
}
