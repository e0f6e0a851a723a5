use regex::{Regex, RegexBuilder};

use crate::matcher::{CompiledRule, MatcherTable};
use crate::{EngineConfig, PatternError, Rule, RuleSet};

/// Per-pattern compile limits, copied out of [`EngineConfig`] into each matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Limits {
    pub(crate) max_pattern_len: usize,
    pub(crate) regex_size_limit: usize,
    pub(crate) dfa_size_limit: usize,
}

impl From<&EngineConfig> for Limits {
    fn from(config: &EngineConfig) -> Self {
        Self {
            max_pattern_len: config.max_pattern_len,
            regex_size_limit: config.regex_size_limit,
            dfa_size_limit: config.dfa_size_limit,
        }
    }
}

impl Limits {
    pub(crate) fn check_len(&self, pattern: &str) -> Result<(), PatternError> {
        if pattern.len() > self.max_pattern_len {
            return Err(PatternError::TooLong {
                len: pattern.len(),
                max: self.max_pattern_len,
            });
        }
        Ok(())
    }

    /// Build a case-insensitive regex. `pattern` is the user's source text,
    /// reported on failure; `source` is what actually gets compiled.
    pub(crate) fn build_regex(&self, source: &str, pattern: &str) -> Result<Regex, PatternError> {
        RegexBuilder::new(source)
            .case_insensitive(true)
            .size_limit(self.regex_size_limit)
            .dfa_size_limit(self.dfa_size_limit)
            .build()
            .map_err(|source| PatternError::InvalidRegex {
                pattern: pattern.to_owned(),
                source,
            })
    }
}

/// Compile every rule up front. Rules that cannot run are recorded as
/// rejected; the relative order of the remaining rules is preserved.
pub(crate) fn compile(matchers: &MatcherTable, rules: impl IntoIterator<Item = Rule>) -> RuleSet {
    let mut compiled = Vec::new();
    let mut rejected = Vec::new();

    for rule in rules {
        let result = match matchers.get(rule.pattern_type) {
            Some(matcher) => matcher.compile(&rule),
            None => Err(PatternError::NoMatcher {
                pattern_type: rule.pattern_type,
            }),
        };
        match result {
            Ok(pattern) => compiled.push(CompiledRule { rule, pattern }),
            Err(err) => {
                tracing::warn!(rule = rule.id, error = %err, "rejecting rule");
                rejected.push((rule.id, err));
            }
        }
    }

    RuleSet {
        rules: compiled,
        rejected,
    }
}
