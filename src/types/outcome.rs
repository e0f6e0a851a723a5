use std::fmt;

use super::extracted::ExtractedData;

/// Result of attempting one rule against one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct MatchOutcome {
    matched: bool,
    extracted: ExtractedData,
    display_text: String,
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matched {
            write!(f, "matched: \"{}\"", self.display_text)
        } else {
            write!(f, "no match")
        }
    }
}

impl MatchOutcome {
    pub fn matched(extracted: ExtractedData, display_text: impl Into<String>) -> Self {
        Self {
            matched: true,
            extracted,
            display_text: display_text.into(),
        }
    }

    pub fn no_match() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_match(&self) -> bool {
        self.matched
    }

    #[must_use]
    pub fn extracted(&self) -> &ExtractedData {
        &self.extracted
    }

    /// The rendered display template. Empty unless [`is_match`](Self::is_match).
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    #[must_use]
    pub fn into_parts(self) -> (bool, ExtractedData, String) {
        (self.matched, self.extracted, self.display_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_is_empty() {
        let outcome = MatchOutcome::no_match();
        assert!(!outcome.is_match());
        assert!(outcome.extracted().is_empty());
        assert_eq!(outcome.display_text(), "");
    }

    #[test]
    fn matched_accessors() {
        let data: ExtractedData = [("minutes", "15")].into_iter().collect();
        let outcome = MatchOutcome::matched(data.clone(), "🍔 15m");
        assert!(outcome.is_match());
        assert_eq!(outcome.extracted(), &data);
        assert_eq!(outcome.display_text(), "🍔 15m");
    }

    #[test]
    fn display_formats() {
        assert_eq!(MatchOutcome::no_match().to_string(), "no match");
        let outcome = MatchOutcome::matched(ExtractedData::new(), "📦");
        assert_eq!(outcome.to_string(), "matched: \"📦\"");
    }
}
