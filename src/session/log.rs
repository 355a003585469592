// ABOUTME: Session log buffer: the human-readable text shown in the log pane.
// ABOUTME: Append-only during a session; replaced wholesale on restore, emptied on clear.

/// Newline-terminated log text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogBuffer {
    text: String,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append one line. A trailing newline is added.
    pub fn append(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_adds_newline_terminated_lines() {
        let mut log = LogBuffer::new();
        log.append("first");
        log.append("second");
        assert_eq!(log.text(), "first\nsecond\n");
        assert_eq!(log.line_count(), 2);
        assert_eq!(log.lines().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn set_text_replaces_and_append_continues() {
        let mut log = LogBuffer::new();
        log.append("old");
        log.set_text("restored\n");
        log.append("new");
        assert_eq!(log.text(), "restored\nnew\n");
    }

    #[test]
    fn clear_empties_buffer() {
        let mut log = LogBuffer::new();
        log.append("x");
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.line_count(), 0);
    }
}
