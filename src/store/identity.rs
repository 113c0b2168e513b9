//! Who owns a story: the local store or the bundled catalog.

/// Owner of a story id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Authored or forked locally; may be edited in place and deleted.
    Custom,
    /// Bundled with the site; edits fork, deletes are no-ops.
    Default,
    /// Not present anywhere.
    Unknown,
}

impl Ownership {
    /// Whether edit/delete controls should be offered.
    pub fn is_editable(&self) -> bool {
        matches!(self, Ownership::Custom)
    }
}

/// Ids longer than this were historically assumed to be locally authored.
pub const LEGACY_DEFAULT_ID_MAX_LEN: usize = 5;

/// Id-shape guess at ownership: custom ids are millisecond timestamps and
/// therefore longer than hand-assigned default ids.
///
/// Display hint only. Breaks as soon as a default id grows past
/// [`LEGACY_DEFAULT_ID_MAX_LEN`]; mutations go through
/// [`StoryStore::ownership`](crate::StoryStore::ownership) instead.
pub fn looks_custom(id: &str) -> bool {
    id.len() > LEGACY_DEFAULT_ID_MAX_LEN
}
