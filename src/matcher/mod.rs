//! The three matching strategies and the closed dispatch over them.
//!
//! Each strategy compiles a rule's pattern into a [`CompiledPattern`] and
//! evaluates it against text. Compilation is the only fallible step; a
//! compile error always ends as a non-matching outcome at this boundary.

mod keyword;
mod regexp;
mod template;

use crate::compile::Limits;
use crate::parse::KeywordExpr;
use crate::{EngineConfig, MatchOutcome, PatternError, PatternType, Rule};

pub(crate) use keyword::KeywordMatcher;
pub(crate) use regexp::RegexMatcher;
pub(crate) use template::{CompiledTemplate, TemplateMatcher};

/// A rule's pattern, ready to evaluate.
#[derive(Debug, Clone)]
pub(crate) enum CompiledPattern {
    Template(CompiledTemplate),
    Regex(regex::Regex),
    Keyword(KeywordExpr),
}

impl CompiledPattern {
    pub(crate) fn evaluate(&self, text: &str, rule: &Rule) -> MatchOutcome {
        match self {
            CompiledPattern::Template(compiled) => template::evaluate(compiled, text, rule),
            CompiledPattern::Regex(re) => regexp::evaluate(re, text, rule),
            CompiledPattern::Keyword(expr) => keyword::evaluate(expr, text, rule),
        }
    }
}

/// A rule stored together with its compiled pattern.
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    pub(crate) rule: Rule,
    pub(crate) pattern: CompiledPattern,
}

#[derive(Debug, Clone)]
pub(crate) enum Matcher {
    Template(TemplateMatcher),
    Regex(RegexMatcher),
    Keyword(KeywordMatcher),
}

impl Matcher {
    fn for_type(pattern_type: PatternType, limits: Limits) -> Self {
        match pattern_type {
            PatternType::Template => Matcher::Template(TemplateMatcher::new(limits)),
            PatternType::Regex => Matcher::Regex(RegexMatcher::new(limits)),
            PatternType::Keyword => Matcher::Keyword(KeywordMatcher::new(limits)),
        }
    }

    pub(crate) fn compile(&self, rule: &Rule) -> Result<CompiledPattern, PatternError> {
        match self {
            Matcher::Template(m) => m.compile(&rule.pattern).map(CompiledPattern::Template),
            Matcher::Regex(m) => m.compile(&rule.pattern).map(CompiledPattern::Regex),
            Matcher::Keyword(m) => m.compile(&rule.pattern).map(CompiledPattern::Keyword),
        }
    }

    /// Compile and evaluate in one step. Never fails.
    pub(crate) fn match_rule(&self, text: &str, rule: &Rule) -> MatchOutcome {
        match self.compile(rule) {
            Ok(pattern) => pattern.evaluate(text, rule),
            Err(err) => {
                tracing::debug!(rule = rule.id, error = %err, "pattern does not compile, no match");
                MatchOutcome::no_match()
            }
        }
    }
}

/// At most one matcher per [`PatternType`], fixed at construction.
#[derive(Debug, Clone)]
pub(crate) struct MatcherTable {
    slots: [Option<Matcher>; 3],
}

impl MatcherTable {
    pub(crate) fn new(config: &EngineConfig) -> Self {
        let limits = Limits::from(config);
        let slot = |t: PatternType| config.enables(t).then(|| Matcher::for_type(t, limits));
        Self {
            slots: [
                slot(PatternType::Template),
                slot(PatternType::Regex),
                slot(PatternType::Keyword),
            ],
        }
    }

    pub(crate) fn get(&self, pattern_type: PatternType) -> Option<&Matcher> {
        self.slots[pattern_type as usize].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_slots_follow_pattern_type() {
        let table = MatcherTable::new(&EngineConfig::default());
        assert!(matches!(table.get(PatternType::Template), Some(Matcher::Template(_))));
        assert!(matches!(table.get(PatternType::Regex), Some(Matcher::Regex(_))));
        assert!(matches!(table.get(PatternType::Keyword), Some(Matcher::Keyword(_))));
    }

    #[test]
    fn table_leaves_disabled_slots_empty() {
        let config = EngineConfig {
            pattern_types: vec![PatternType::Regex],
            ..EngineConfig::default()
        };
        let table = MatcherTable::new(&config);
        assert!(table.get(PatternType::Template).is_none());
        assert!(table.get(PatternType::Regex).is_some());
        assert!(table.get(PatternType::Keyword).is_none());
    }

    #[test]
    fn match_rule_swallows_compile_errors() {
        let table = MatcherTable::new(&EngineConfig::default());
        let rule = Rule::regex("(unclosed", "x");
        let matcher = table.get(PatternType::Regex).unwrap();
        assert!(matcher.compile(&rule).is_err());
        assert!(!matcher.match_rule("(unclosed", &rule).is_match());
    }
}
