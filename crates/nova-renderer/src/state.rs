//! Event-processing state for the renderer.

use std::collections::HashMap;

use pulldown_cmark::Alignment;

/// Lowest heading level included in the table of contents.
const TOC_MIN_LEVEL: u8 = 2;

/// State for tracking code block rendering.
#[derive(Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    language: Option<String>,
    buffer: String,
}

impl CodeBlockState {
    pub(crate) fn start(&mut self, language: Option<String>) {
        self.active = true;
        self.language = language;
        self.buffer.clear();
    }

    /// End the current code block and return (language, content).
    pub(crate) fn end(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.language.take(), std::mem::take(&mut self.buffer))
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// State for tracking table rendering.
#[derive(Default)]
pub(crate) struct TableState {
    /// Whether we're inside the table header row.
    in_head: bool,
    alignments: Vec<Alignment>,
    cell_index: usize,
    /// Number of tables seen so far in the document.
    count: usize,
}

impl TableState {
    pub(crate) fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
        self.count += 1;
    }

    pub(crate) fn start_head(&mut self) {
        self.in_head = true;
        self.cell_index = 0;
    }

    pub(crate) fn end_head(&mut self) {
        self.in_head = false;
    }

    pub(crate) fn start_row(&mut self) {
        self.cell_index = 0;
    }

    pub(crate) fn next_cell(&mut self) {
        self.cell_index += 1;
    }

    pub(crate) fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// Take the table count, resetting it for the next document.
    pub(crate) fn take_count(&mut self) -> usize {
        std::mem::take(&mut self.count)
    }

    /// Alignment style attribute for the current cell.
    pub(crate) fn current_alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// State for tracking image alt text capture.
#[derive(Default)]
pub(crate) struct ImageState {
    active: bool,
    alt_text: String,
}

impl ImageState {
    pub(crate) fn start(&mut self) {
        self.active = true;
        self.alt_text.clear();
    }

    pub(crate) fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.alt_text)
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.alt_text.push_str(text);
    }
}

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TocEntry {
    /// Heading level (2-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
}

/// A heading that has been fully collected.
pub(crate) struct CompletedHeading {
    pub(crate) level: u8,
    pub(crate) id: String,
    pub(crate) html: String,
}

/// State for tracking headings, their ids and the table of contents.
#[derive(Default)]
pub(crate) struct HeadingState {
    /// Level of the heading being collected (None outside headings).
    current_level: Option<u8>,
    /// Plain text buffer (for the id and the table of contents).
    text: String,
    /// HTML buffer (with inline formatting).
    html: String,
    toc: Vec<TocEntry>,
    id_counts: HashMap<String, usize>,
}

impl HeadingState {
    pub(crate) fn is_active(&self) -> bool {
        self.current_level.is_some()
    }

    pub(crate) fn start_heading(&mut self, level: u8) {
        self.current_level = Some(level);
        self.text.clear();
        self.html.clear();
    }

    /// Complete the current heading, assign its id and record it in the table of contents.
    pub(crate) fn complete_heading(&mut self) -> Option<CompletedHeading> {
        let level = self.current_level.take()?;
        let text = std::mem::take(&mut self.text);
        let html = std::mem::take(&mut self.html);
        let id = self.generate_id(&text);

        if level >= TOC_MIN_LEVEL {
            self.toc.push(TocEntry {
                level,
                title: text.trim().to_owned(),
                id: id.clone(),
            });
        }

        Some(CompletedHeading { level, id, html })
    }

    fn generate_id(&mut self, text: &str) -> String {
        let base_id = slugify(text);
        let count = self.id_counts.entry(base_id.clone()).or_default();
        let id = match *count {
            0 => base_id,
            n => format!("{base_id}-{n}"),
        };
        *count += 1;
        id
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    /// Take the table of contents, resetting id bookkeeping for the next document.
    pub(crate) fn take_toc(&mut self) -> Vec<TocEntry> {
        self.id_counts.clear();
        std::mem::take(&mut self.toc)
    }
}

/// Convert heading text to an anchor id.
///
/// Lowercases ASCII alphanumerics, turns runs of whitespace, `-` and `_` into a
/// single dash, and drops everything else.
pub(crate) fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Security Mitigation"), "security-mitigation");
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("  Spaces  "), "spaces");
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("snake_case"), "snake-case");
        assert_eq!(slugify("Phase 1 - Q3"), "phase-1-q3");
    }

    #[test]
    fn test_table_state_alignment() {
        let mut state = TableState::default();
        state.start(vec![Alignment::Left, Alignment::None, Alignment::Right]);

        state.start_head();
        assert!(state.is_in_head());
        assert_eq!(
            state.current_alignment_style(),
            r#" style="text-align:left""#
        );
        state.next_cell();
        assert_eq!(state.current_alignment_style(), "");
        state.next_cell();
        assert_eq!(
            state.current_alignment_style(),
            r#" style="text-align:right""#
        );
        state.end_head();
        assert!(!state.is_in_head());
        assert_eq!(state.take_count(), 1);
        assert_eq!(state.take_count(), 0);
    }

    #[test]
    fn test_heading_state_dedups_ids() {
        let mut state = HeadingState::default();

        for _ in 0..3 {
            state.start_heading(2);
            state.push_text("Overview");
            state.complete_heading();
        }

        let ids: Vec<String> = state.take_toc().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["overview", "overview-1", "overview-2"]);
    }

    #[test]
    fn test_heading_state_h1_not_in_toc() {
        let mut state = HeadingState::default();

        state.start_heading(1);
        state.push_text("Tokenomics");
        let heading = state.complete_heading().unwrap();
        assert_eq!(heading.level, 1);
        assert_eq!(heading.id, "tokenomics");

        assert!(state.take_toc().is_empty());
    }

    #[test]
    fn test_image_state() {
        let mut state = ImageState::default();
        state.start();
        assert!(state.is_active());
        state.push_str("alt text");
        assert_eq!(state.end(), "alt text");
        assert!(!state.is_active());
    }
}
