//! Configuration options for the Markdown and plain-text renderers

use std::ops::RangeInclusive;

/// Options for Markdown rendering
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Levels added to every source heading before clamping.
    ///
    /// Message headings are demoted so they never compete with the headings
    /// of the document the message is embedded in.
    pub heading_shift: u8,

    /// Allowed output heading levels
    pub heading_levels: RangeInclusive<u8>,

    /// Indentation added per list nesting level
    pub list_indent: String,

    /// Marker for unordered list items (including the trailing space)
    pub bullet_marker: String,

    /// Fence string for code blocks
    pub fence: String,

    /// Horizontal rule string
    pub hr: String,

    /// Prefix for column names synthesized when a table has no header row
    pub column_prefix: String,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            heading_shift: 3,
            heading_levels: 4..=6,
            list_indent: "  ".to_string(),
            bullet_marker: "- ".to_string(),
            fence: "```".to_string(),
            hr: "---".to_string(),
            column_prefix: "列".to_string(),
        }
    }
}

impl MarkdownOptions {
    /// Output level for a source heading level
    pub fn heading_level(&self, level: u8) -> usize {
        clamp_level(level.saturating_add(self.heading_shift), &self.heading_levels)
    }
}

/// Options for plain-text rendering
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Allowed output heading levels (rendered as `#` cues)
    pub heading_levels: RangeInclusive<u8>,

    /// Indentation added per list nesting level
    pub list_indent: String,

    /// Marker for unordered list items (including the trailing space)
    pub bullet_marker: String,

    /// Fence string for code blocks
    pub fence: String,

    /// Horizontal rule string
    pub hr: String,

    /// Separator placed between table cells
    pub cell_separator: String,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            heading_levels: 2..=4,
            list_indent: "  ".to_string(),
            bullet_marker: "- ".to_string(),
            fence: "```".to_string(),
            hr: "-".repeat(24),
            cell_separator: " | ".to_string(),
        }
    }
}

impl TextOptions {
    /// Output level for a source heading level
    pub fn heading_level(&self, level: u8) -> usize {
        clamp_level(level, &self.heading_levels)
    }
}

fn clamp_level(level: u8, range: &RangeInclusive<u8>) -> usize {
    level.max(*range.start()).min(*range.end()) as usize
}
