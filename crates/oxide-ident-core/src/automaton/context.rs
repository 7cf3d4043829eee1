//! Per-parse mutable state.

use std::collections::BTreeMap;

use super::node::CaptureId;

/// Everything a walk mutates: the cursor, the last match result and the
/// capture buffers. One context serves exactly one input string.
#[derive(Debug, Clone)]
pub struct MatchContext<'a> {
    input: &'a str,
    /// Byte offset of the current character.
    cursor: usize,
    matched: bool,
    captures: BTreeMap<CaptureId, String>,
    active_capture: Option<CaptureId>,
}

impl<'a> MatchContext<'a> {
    /// Creates a context positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: 0,
            matched: false,
            captures: BTreeMap::new(),
            active_capture: None,
        }
    }

    /// Returns the text being matched.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the cursor as a byte offset into the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Returns the character under the cursor, or `None` at end of input.
    #[must_use]
    pub fn current_character(&self) -> Option<char> {
        self.input[self.cursor..].chars().next()
    }

    /// Moves past the current character. A no-op at end of input.
    pub fn advance(&mut self) {
        if let Some(ch) = self.current_character() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Returns true once every character has been consumed.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.cursor >= self.input.len()
    }

    /// Returns the result of the most recently evaluated node.
    #[must_use]
    pub const fn matched(&self) -> bool {
        self.matched
    }

    pub(crate) fn set_matched(&mut self, matched: bool) {
        self.matched = matched;
    }

    /// Empties the buffer for `id` and makes it the active capture.
    /// `None` deactivates capturing.
    pub fn begin_capture(&mut self, id: Option<CaptureId>) {
        if let Some(id) = id {
            self.captures.entry(id).or_default().clear();
        }
        self.active_capture = id;
    }

    /// Appends `ch` to the active capture, if any.
    pub fn append_to_active_capture(&mut self, ch: char) {
        if let Some(buf) = self
            .active_capture
            .and_then(|id| self.captures.get_mut(&id))
        {
            buf.push(ch);
        }
    }

    /// Returns the active capture id.
    #[must_use]
    pub const fn active_capture(&self) -> Option<CaptureId> {
        self.active_capture
    }

    /// Returns the text captured under `id`, or `""` if none was.
    #[must_use]
    pub fn capture(&self, id: CaptureId) -> &str {
        self.captures.get(&id).map_or("", String::as_str)
    }

    /// Consumes the context, returning the capture buffers.
    #[must_use]
    pub fn into_captures(self) -> BTreeMap<CaptureId, String> {
        self.captures
    }
}
