//! Styled text for the floating label.
//!
//! The label draws its text in a single base color, optionally overridden on
//! sub-ranges by [`TextRun`]s. Ranges are expressed in grapheme clusters so a
//! marker like `*` is always one visible character, whatever it is attached to.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::color::Color;

/// The marker that flags a field as required when it ends the placeholder.
pub const REQUIRED_MARKER: &str = "*";

/// A color override for a range of graphemes.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Grapheme range the override applies to.
    pub range: Range<usize>,
    /// Color for the graphemes in `range`.
    pub color: Color,
}

/// Text plus per-range color overrides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledText {
    text: String,
    runs: Vec<TextRun>,
}

impl StyledText {
    /// Plain text with no overrides.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    /// The underlying string.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The color overrides, in ascending range order.
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of grapheme clusters in the text.
    pub fn grapheme_len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    /// Add a color override. Out-of-range or empty ranges are ignored.
    pub fn push_run(&mut self, range: Range<usize>, color: Color) {
        if range.start < range.end && range.end <= self.grapheme_len() {
            self.runs.push(TextRun { range, color });
            self.runs.sort_by_key(|run| run.range.start);
        }
    }

    /// Resolve the color of the grapheme at `index`, given the base color.
    pub fn color_at(&self, index: usize, base: Color) -> Color {
        self.runs
            .iter()
            .rev()
            .find(|run| run.range.contains(&index))
            .map_or(base, |run| run.color)
    }

    /// Split into `(grapheme, color)` pairs for rendering.
    pub fn segments(&self, base: Color) -> Vec<(&str, Color)> {
        self.text
            .graphemes(true)
            .enumerate()
            .map(|(i, g)| (g, self.color_at(i, base)))
            .collect()
    }
}

/// Decorate a placeholder, coloring a trailing required marker.
///
/// If `placeholder` ends with [`REQUIRED_MARKER`], exactly its final grapheme
/// gets `marker_color`; everything else keeps the label's base color. Any
/// other string is returned undecorated.
///
/// ```ignore
/// let text = decorate_required_marker("Email*", Color::RED);
/// assert_eq!(text.runs()[0].range, 5..6);
/// ```
pub fn decorate_required_marker(placeholder: &str, marker_color: Color) -> StyledText {
    let mut styled = StyledText::plain(placeholder);
    if placeholder.graphemes(true).next_back() == Some(REQUIRED_MARKER) {
        let last = styled.grapheme_len() - 1;
        styled.push_run(last..last + 1, marker_color);
    }
    styled
}

/// Convert a grapheme range into a byte range of `text`, clamped to its end.
pub(crate) fn grapheme_byte_range(text: &str, range: Range<usize>) -> Range<usize> {
    let offsets: Vec<usize> = text
        .grapheme_indices(true)
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();
    let last = offsets.len() - 1;
    let start = offsets[range.start.min(last)];
    let end = offsets[range.end.clamp(range.start.min(last), last)];
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_marker_is_colored() {
        let text = decorate_required_marker("Email*", Color::RED);
        assert_eq!(text.as_str(), "Email*");
        assert_eq!(
            text.runs(),
            &[TextRun {
                range: 5..6,
                color: Color::RED
            }]
        );
        for i in 0..5 {
            assert_eq!(text.color_at(i, Color::BLACK), Color::BLACK);
        }
        assert_eq!(text.color_at(5, Color::BLACK), Color::RED);
    }

    #[test]
    fn test_no_marker_no_runs() {
        assert!(decorate_required_marker("Email", Color::RED).runs().is_empty());
        assert!(decorate_required_marker("", Color::RED).runs().is_empty());
        assert!(decorate_required_marker("*Email", Color::RED).runs().is_empty());
    }

    #[test]
    fn test_only_last_marker_colored() {
        let text = decorate_required_marker("Pass**", Color::RED);
        assert_eq!(text.runs().len(), 1);
        assert_eq!(text.runs()[0].range, 5..6);
        assert_eq!(text.color_at(4, Color::BLACK), Color::BLACK);
    }

    #[test]
    fn test_marker_only_string() {
        let text = decorate_required_marker("*", Color::RED);
        assert_eq!(text.runs()[0].range, 0..1);
    }

    #[test]
    fn test_multibyte_graphemes() {
        let text = decorate_required_marker("Café*", Color::RED);
        assert_eq!(text.grapheme_len(), 5);
        assert_eq!(text.runs()[0].range, 4..5);

        let segments = text.segments(Color::BLACK);
        assert_eq!(segments[3], ("é", Color::BLACK));
        assert_eq!(segments[4], ("*", Color::RED));
    }

    #[test]
    fn test_push_run_rejects_out_of_range() {
        let mut text = StyledText::plain("abc");
        text.push_run(2..5, Color::RED);
        text.push_run(1..1, Color::RED);
        assert!(text.runs().is_empty());
    }

    #[test]
    fn test_grapheme_byte_range() {
        assert_eq!(grapheme_byte_range("héllo", 1..3), 1..4);
        assert_eq!(grapheme_byte_range("abc", 1..10), 1..3);
        assert_eq!(grapheme_byte_range("abc", 7..9), 3..3);
        assert_eq!(grapheme_byte_range("", 0..0), 0..0);
    }
}
