use crate::compile::Limits;
use crate::parse::{KeywordExpr, KeywordTerm, parse_keyword};
use crate::{ExtractedData, MatchOutcome, PatternError, Rule};

/// Boolean keyword containment. Keyword rules declare no variables, so a
/// match always carries empty data and the display template as-is.
#[derive(Debug, Clone)]
pub(crate) struct KeywordMatcher {
    limits: Limits,
}

impl KeywordMatcher {
    pub(crate) fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub(crate) fn compile(&self, pattern: &str) -> Result<KeywordExpr, PatternError> {
        self.limits.check_len(pattern)?;
        Ok(parse_keyword(pattern))
    }
}

fn holds(expr: &KeywordExpr, text: &str) -> bool {
    match expr {
        KeywordExpr::Any(keywords) => keywords.iter().any(|k| text.contains(k.as_str())),
        KeywordExpr::All(terms) => terms.iter().all(|term| match term {
            KeywordTerm::Present(k) => text.contains(k.as_str()),
            KeywordTerm::Absent(k) => !text.contains(k.as_str()),
        }),
        KeywordExpr::Absent(k) => !text.contains(k.as_str()),
        KeywordExpr::Contains(k) => text.contains(k.as_str()),
    }
}

pub(super) fn evaluate(expr: &KeywordExpr, text: &str, rule: &Rule) -> MatchOutcome {
    if holds(expr, &text.to_lowercase()) {
        MatchOutcome::matched(ExtractedData::new(), rule.display_template.as_str())
    } else {
        MatchOutcome::no_match()
    }
}
