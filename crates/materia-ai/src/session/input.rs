//! Not-yet-submitted input text.

/// Text typed but not yet submitted. Supports multi-line entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingInput {
    text: String,
}

impl PendingInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffer contents.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append a line, separated from existing text by a newline.
    pub fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the buffer holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Take the contents, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}
