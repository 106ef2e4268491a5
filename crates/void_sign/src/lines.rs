//! Line normalization
//!
//! Every write path funnels through here so the stored lines always number
//! exactly [`SIGN_LINES`] and never render longer than
//! [`SIGN_LINE_MAX_CHARS`].

use void_text::RichText;
use void_world::{SIGN_LINES, SIGN_LINE_MAX_CHARS};

/// Map a public line number to a slot index; `None` when out of range
pub fn slot_index(line: i32) -> Option<usize> {
    usize::try_from(line).ok().filter(|&index| index < SIGN_LINES)
}

/// First [`SIGN_LINE_MAX_CHARS`] characters of `text`
pub fn clamp_text(text: &str) -> &str {
    match text.char_indices().nth(SIGN_LINE_MAX_CHARS) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Unstyled line from optional text
pub fn text_line(text: Option<&str>) -> RichText {
    RichText::plain(clamp_text(text.unwrap_or("")))
}

/// Stored line from an optional rich value
pub fn component_line(component: Option<&RichText>) -> RichText {
    component.map_or_else(RichText::empty, |c| c.truncated(SIGN_LINE_MAX_CHARS))
}

/// Pad or cut `input` to exactly four lines of clamped unstyled text.
/// Missing and `None` entries become empty lines.
pub fn normalize_text<S: AsRef<str>>(input: &[Option<S>]) -> [RichText; SIGN_LINES] {
    std::array::from_fn(|index| {
        text_line(input.get(index).and_then(|entry| entry.as_ref().map(|s: &S| s.as_ref())))
    })
}

/// Pad or cut `input` to exactly four truncated rich lines.
/// Missing and `None` entries become the empty value.
pub fn normalize_components(input: &[Option<RichText>]) -> [RichText; SIGN_LINES] {
    std::array::from_fn(|index| component_line(input.get(index).and_then(Option::as_ref)))
}
