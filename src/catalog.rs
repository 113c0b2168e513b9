//! DefaultCatalog - the stories bundled with the site.
//!
//! The catalog is built once and never mutated. Locally authored stories are
//! shown in front of it; editing one of its records forks a new custom record
//! instead of changing it.

use crate::story::{Story, StoryKind};

pub struct DefaultCatalog {
    stories: Vec<Story>,
}

impl DefaultCatalog {
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    /// The exhibition's bundled stories, in display order.
    pub fn bundled() -> Self {
        Self::new(BUNDLED.iter().map(BundledStory::to_story).collect())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Story> {
        self.stories.iter().find(|story| story.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Length of the longest id in the catalog (0 when empty).
    pub fn max_id_len(&self) -> usize {
        self.stories.iter().map(|story| story.id.len()).max().unwrap_or(0)
    }
}

impl Default for DefaultCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}

struct BundledStory {
    id: &'static str,
    kind: StoryKind,
    title: &'static str,
    author: Option<&'static str>,
    avatar_url: &'static str,
    excerpt: &'static str,
    content: &'static str,
    date: &'static str,
}

impl BundledStory {
    fn to_story(&self) -> Story {
        Story {
            id: self.id.to_string(),
            kind: self.kind,
            title: self.title.to_string(),
            author: self.author.map(str::to_string),
            avatar_url: self.avatar_url.to_string(),
            excerpt: self.excerpt.to_string(),
            content: self.content.to_string(),
            date: self.date.to_string(),
        }
    }
}

const BUNDLED: &[BundledStory] = &[
    BundledStory {
        id: "1",
        kind: StoryKind::Story,
        title: "The Sound of Rain on Tin",
        author: Some("Elena Marsh"),
        avatar_url: "https://picsum.photos/id/64/200/200",
        excerpt: "For years I slept through storms. Then one night I stayed awake and listened.",
        content: "For years I slept through storms. Then one night I stayed awake and listened.\n\nThe rain did not fall all at once. It arrived in waves, first a few heavy drops on the tin roof of the shed, then a hush, then a rush that filled every corner of the dark.\n\nI had always called it noise. That night it sounded like a conversation I had been too busy to join.",
        date: "MAR 12, 2025",
    },
    BundledStory {
        id: "2",
        kind: StoryKind::Quote,
        title: "On Patience",
        author: Some("Anonymous Gardener"),
        avatar_url: "https://picsum.photos/id/106/200/200",
        excerpt: "Nothing in the garden hurries, and yet everything arrives.",
        content: "Nothing in the garden hurries, and yet everything arrives. I learned to wait by watching seeds that never once asked me what time it was.",
        date: "APR 02, 2025",
    },
    BundledStory {
        id: "3",
        kind: StoryKind::Story,
        title: "My Grandfather's Radio",
        author: Some("Kenji Watanabe"),
        avatar_url: "https://picsum.photos/id/91/200/200",
        excerpt: "He tuned it slowly, as if the stations were shy and had to be coaxed out.",
        content: "He tuned it slowly, as if the stations were shy and had to be coaxed out.\n\nBetween the voices there was static, and he would stop there too, head tilted, smiling. When I asked what he was listening to, he said: the space where the music waits.\n\nI still keep the radio. I still stop between the stations.",
        date: "APR 20, 2025",
    },
    BundledStory {
        id: "4",
        kind: StoryKind::Quote,
        title: "Rhythm",
        author: None,
        avatar_url: "https://picsum.photos/id/177/200/200",
        excerpt: "Slowness is not the absence of rhythm. It is rhythm you can finally hear.",
        content: "Slowness is not the absence of rhythm. It is rhythm you can finally hear.",
        date: "MAY 05, 2025",
    },
    BundledStory {
        id: "5",
        kind: StoryKind::Story,
        title: "The Night Train",
        author: Some("Lucía Ferrer"),
        avatar_url: "https://picsum.photos/id/219/200/200",
        excerpt: "Every night at eleven the freight train crossed the valley, and the whole town held its breath.",
        content: "Every night at eleven the freight train crossed the valley, and the whole town held its breath.\n\nNobody talked about it. Conversations simply paused, forks hovered, the dogs lifted their heads. For two long minutes we all listened to the same thing.\n\nWhen they closed the line, the town grew louder. I think we had forgotten how to be quiet together.",
        date: "JUN 18, 2025",
    },
    BundledStory {
        id: "6",
        kind: StoryKind::Story,
        title: "Breathing Lessons",
        author: Some("Priya Raman"),
        avatar_url: "https://picsum.photos/id/338/200/200",
        excerpt: "The first thing the instructor asked us to do was nothing at all.",
        content: "The first thing the instructor asked us to do was nothing at all.\n\nClose your eyes, she said. Count the sounds in the room. I counted the air conditioner, a cough, my own heartbeat.\n\nBy the end of the hour I had counted forty-one. I had been sitting in that room for years and had only ever heard one.",
        date: "JUL 09, 2025",
    },
];
