use serde::{Deserialize, Serialize};

/// Running or finalized text of one spoken order.
///
/// Mutable while a capture is in progress; once `finalized` is set the
/// capture is handed to the session by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptCapture {
    pub text: String,
    pub finalized: bool,
}

impl TranscriptCapture {
    /// A capture that is still receiving recognition updates.
    pub fn live(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finalized: false,
        }
    }

    /// A capture whose text is frozen.
    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finalized: true,
        }
    }

    /// Freeze the current text.
    #[must_use]
    pub fn finalize(mut self) -> Self {
        self.finalized = true;
        self
    }

    /// The transcript with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Whether this capture may be forwarded to the order gateway.
    pub fn is_submittable(&self) -> bool {
        self.finalized && !self.trimmed().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_capture_is_never_submittable() {
        assert!(!TranscriptCapture::live("two coke").is_submittable());
    }

    #[test]
    fn finalized_whitespace_only_capture_is_not_submittable() {
        let capture = TranscriptCapture::live("   ").finalize();
        assert!(capture.finalized);
        assert!(!capture.is_submittable());
    }

    #[test]
    fn finalized_capture_with_text_is_submittable() {
        let capture = TranscriptCapture::finalized(" one mango juice ");
        assert_eq!(capture.trimmed(), "one mango juice");
        assert!(capture.is_submittable());
    }
}
