use super::rule::PatternType;

/// Limits and strategy selection for a [`MatchingEngine`](crate::MatchingEngine).
///
/// Patterns are end-user data, so the limits bound how much work compiling a
/// single pattern may do. Matching with the `regex` crate is linear in the
/// input once a pattern compiles.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Longest accepted pattern source, in bytes.
    pub max_pattern_len: usize,
    /// Passed to [`regex::RegexBuilder::size_limit`].
    pub regex_size_limit: usize,
    /// Passed to [`regex::RegexBuilder::dfa_size_limit`].
    pub dfa_size_limit: usize,
    /// Pattern types that get a matcher. Rules of any other type never match.
    pub pattern_types: Vec<PatternType>,
}

impl EngineConfig {
    pub const DEFAULT_MAX_PATTERN_LEN: usize = 4096;
    pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 1 << 20;
    pub const DEFAULT_DFA_SIZE_LIMIT: usize = 2 << 20;

    #[must_use]
    pub fn enables(&self, pattern_type: PatternType) -> bool {
        self.pattern_types.contains(&pattern_type)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_pattern_len: Self::DEFAULT_MAX_PATTERN_LEN,
            regex_size_limit: Self::DEFAULT_REGEX_SIZE_LIMIT,
            dfa_size_limit: Self::DEFAULT_DFA_SIZE_LIMIT,
            pattern_types: PatternType::ALL.to_vec(),
        }
    }
}
