use regex::Regex;

use crate::compile::Limits;
use crate::render::render;
use crate::{ExtractedData, MatchOutcome, PatternError, Rule};

/// Matches a user-supplied regular expression, case-insensitively, and names
/// its capture groups after the rule's declared variables.
#[derive(Debug, Clone)]
pub(crate) struct RegexMatcher {
    limits: Limits,
}

impl RegexMatcher {
    pub(crate) fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub(crate) fn compile(&self, pattern: &str) -> Result<Regex, PatternError> {
        self.limits.check_len(pattern)?;
        self.limits.build_regex(pattern, pattern)
    }
}

/// Name of capture group `index` (1-based): the declared variable at
/// `index - 1`, or `var<index>` when there is none.
fn group_name(rule: &Rule, index: usize) -> String {
    rule.variables
        .get(index - 1)
        .cloned()
        .unwrap_or_else(|| format!("var{index}"))
}

pub(super) fn evaluate(re: &Regex, text: &str, rule: &Rule) -> MatchOutcome {
    let Some(caps) = re.captures(text) else {
        return MatchOutcome::no_match();
    };

    let mut extracted = ExtractedData::new();
    for index in 1..caps.len() {
        // Groups that did not take part in the match extract an empty string.
        let value = caps.get(index).map_or("", |m| m.as_str());
        extracted.insert(group_name(rule, index), value);
    }

    let display = render(&rule.display_template, &extracted);
    MatchOutcome::matched(extracted, display)
}
