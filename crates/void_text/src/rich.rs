//! Rich text values

use crate::style::TextStyle;
use crate::TextError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A run of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSegment {
    pub text: String,
    #[serde(default, skip_serializing_if = "TextStyle::is_plain")]
    pub style: TextStyle,
}

/// Styled text
///
/// Segments never hold empty text and neighbouring segments never share a
/// style, so two values with the same rendering and styling compare equal
/// however they were built. The empty value has no segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<TextSegment>", into = "Vec<TextSegment>")]
pub struct RichText {
    segments: Vec<TextSegment>,
}

impl RichText {
    /// The empty value
    pub const fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Unstyled text
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, TextStyle::new())
    }

    /// A single styled segment
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        let mut rich = Self::empty();
        rich.push(text, style);
        rich
    }

    /// Append a segment. Empty text is dropped; text styled like the last
    /// segment extends it.
    pub fn push(&mut self, text: impl Into<String>, style: TextStyle) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&text),
            _ => self.segments.push(TextSegment { text, style }),
        }
    }

    /// Append a segment (builder pattern)
    pub fn with_segment(mut self, text: impl Into<String>, style: TextStyle) -> Self {
        self.push(text, style);
        self
    }

    /// The styled segments in order
    pub fn segments(&self) -> &[TextSegment] {
        &self.segments
    }

    /// Rendered text with all formatting stripped
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Rendered length in characters
    pub fn char_len(&self) -> usize {
        self.segments.iter().map(|s| s.text.chars().count()).sum()
    }

    /// Whether the rendering is empty
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Keep at most `max_chars` rendered characters, dropping the rest.
    /// Styles of the kept characters are unchanged.
    pub fn truncated(&self, max_chars: usize) -> Self {
        let mut remaining = max_chars;
        let mut out = Self::empty();
        for segment in &self.segments {
            if remaining == 0 {
                break;
            }
            let len = segment.text.chars().count();
            if len <= remaining {
                out.push(segment.text.as_str(), segment.style);
                remaining -= len;
            } else {
                let cut: String = segment.text.chars().take(remaining).collect();
                out.push(cut, segment.style);
                remaining = 0;
            }
        }
        out
    }

    /// Serialize to the JSON form
    pub fn to_json(&self) -> Result<String, TextError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the JSON form
    pub fn from_json(json: &str) -> Result<Self, TextError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Vec<TextSegment>> for RichText {
    fn from(segments: Vec<TextSegment>) -> Self {
        let mut rich = Self::empty();
        for segment in segments {
            rich.push(segment.text, segment.style);
        }
        rich
    }
}

impl From<RichText> for Vec<TextSegment> {
    fn from(rich: RichText) -> Self {
        rich.segments
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextColor;

    #[test]
    fn test_empty_equals_blank_plain() {
        assert_eq!(RichText::plain(""), RichText::empty());
        assert!(RichText::plain("").is_empty());
        assert_eq!(RichText::empty().plain_text(), "");
    }

    #[test]
    fn test_same_style_segments_merge() {
        assert_eq!(
            RichText::plain("ab"),
            RichText::plain("a").with_segment("b", TextStyle::new())
        );
        let bold = TextStyle::new().bold();
        let built = RichText::styled("x", bold).with_segment("y", bold).with_segment("z", TextStyle::new());
        assert_eq!(built.segments().len(), 2);
        assert_eq!(built.segments()[0].text, "xy");

        let parsed = RichText::from_json(r#"[{"text":"a"},{"text":"b"}]"#).expect("parse");
        assert_eq!(parsed, RichText::plain("ab"));
    }

    #[test]
    fn test_plain_rendering_strips_style() {
        let text = RichText::plain("Shop: ")
            .with_segment("OPEN", TextStyle::new().with_color(TextColor::Green).bold());
        assert_eq!(text.plain_text(), "Shop: OPEN");
        assert_eq!(text.to_string(), "Shop: OPEN");
        assert_eq!(text.char_len(), 10);
    }

    #[test]
    fn test_truncated_across_segments() {
        let red = TextStyle::new().with_color(TextColor::Red);
        let text = RichText::plain("abcd").with_segment("efghij", red);

        let cut = text.truncated(6);
        assert_eq!(cut.plain_text(), "abcdef");
        assert_eq!(cut.segments().len(), 2);
        assert_eq!(cut.segments()[1].style, red);

        let cut = text.truncated(4);
        assert_eq!(cut, RichText::plain("abcd"));

        assert_eq!(text.truncated(100), text);
        assert!(text.truncated(0).is_empty());
    }

    #[test]
    fn test_truncated_counts_characters() {
        let text = RichText::plain("ääääé");
        assert_eq!(text.truncated(3).plain_text(), "äää");
    }

    #[test]
    fn test_json_form() {
        let text = RichText::plain("Hi ")
            .with_segment("there", TextStyle::new().italic());
        let json = text.to_json().expect("serialize");
        assert_eq!(
            json,
            r#"[{"text":"Hi "},{"text":"there","style":{"italic":true}}]"#
        );
        assert_eq!(RichText::from_json(&json).expect("parse"), text);
    }

    #[test]
    fn test_json_drops_empty_segments() {
        let parsed = RichText::from_json(r#"[{"text":""},{"text":"x"}]"#).expect("parse");
        assert_eq!(parsed, RichText::plain("x"));
    }

    #[test]
    fn test_json_error() {
        assert!(matches!(
            RichText::from_json("{not json"),
            Err(TextError::Json(_))
        ));
    }
}
