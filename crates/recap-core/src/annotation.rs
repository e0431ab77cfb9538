//! Annotation: a single timestamped text observation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One short text annotation captured at a wall-clock instant.
///
/// Immutable after construction: the text is trimmed once, the capture
/// instant is assigned once. Whitespace-only input trims to an empty
/// annotation, which is still valid — content quality belongs to the
/// producer, not to the windowing engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    text: String,
    captured_at: DateTime<Utc>,
}

impl Annotation {
    pub fn new(text: impl Into<String>, captured_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into().trim().to_string(),
            captured_at,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Display form used for live view and summarization input.
    pub fn display_line(&self) -> String {
        format!("[{}] {}", self.captured_at.format("%H:%M:%S"), self.text)
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_line())
    }
}

// ─── Tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 5).unwrap()
    }

    #[test]
    fn text_is_trimmed_on_construction() {
        let a = Annotation::new("  a person enters the room \n", at_noon());
        assert_eq!(a.text(), "a person enters the room");
    }

    #[test]
    fn whitespace_only_text_is_valid_and_empty() {
        let a = Annotation::new("   \t\n", at_noon());
        assert_eq!(a.text(), "");
    }

    #[test]
    fn display_line_format() {
        let a = Annotation::new("laptop on the desk", at_noon());
        assert_eq!(a.display_line(), "[12:30:05] laptop on the desk");
        assert_eq!(a.to_string(), a.display_line());
    }

    #[test]
    fn serde_roundtrip() {
        let a = Annotation::new("cup moved left", at_noon());
        let json = serde_json::to_string(&a).expect("serialize");
        let back: Annotation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(a, back);
    }
}
