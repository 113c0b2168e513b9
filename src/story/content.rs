//! Inline image markers embedded in story content.
//!
//! Content is plain text with paragraphs separated by a blank line. Images are
//! embedded as `![img](<url-or-data-uri>)`, each on a paragraph of its own.

use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[img\]\((.*?)\)").expect("image marker pattern is valid"));

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// One renderable piece of story content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Paragraph(String),
    Image(String),
}

/// Marker text for an embedded image.
pub fn image_marker(uri: &str) -> String {
    format!("![img]({})", uri)
}

/// Source of the first embedded image, if any.
pub fn first_image(content: &str) -> Option<&str> {
    IMAGE_MARKER
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|uri| !uri.is_empty())
}

/// Split content into paragraphs and images.
///
/// A paragraph containing a marker renders as that image alone. Blank
/// paragraphs are dropped.
pub fn parse_content(content: &str) -> Vec<ContentBlock> {
    content
        .split(PARAGRAPH_SEPARATOR)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .map(|paragraph| match first_image(paragraph) {
            Some(uri) => ContentBlock::Image(uri.to_string()),
            None => ContentBlock::Paragraph(paragraph.to_string()),
        })
        .collect()
}
