use std::time::Instant;

use crate::matcher::CompiledRule;
use crate::{MatchOutcome, MatchReport, Rule, RuleId};

impl AsRef<Rule> for Rule {
    fn as_ref(&self) -> &Rule {
        self
    }
}

impl AsRef<Rule> for CompiledRule {
    fn as_ref(&self) -> &Rule {
        &self.rule
    }
}

/// First-match dispatch. `attempt` runs one candidate and returns `None` when
/// no matcher can run it, in which case the candidate is skipped.
pub(crate) fn first_match<'a, C, F>(
    candidates: impl IntoIterator<Item = &'a C>,
    mut attempt: F,
) -> Option<(&'a Rule, MatchOutcome)>
where
    C: AsRef<Rule> + 'a,
    F: FnMut(&'a C) -> Option<MatchOutcome>,
{
    for candidate in candidates {
        let rule = candidate.as_ref();
        let Some(outcome) = attempt(candidate) else {
            tracing::debug!(rule = rule.id, pattern_type = %rule.pattern_type, "no matcher, skipping rule");
            continue;
        };
        tracing::trace!(rule = rule.id, pattern_type = %rule.pattern_type, matched = outcome.is_match(), "attempted rule");
        if outcome.is_match() {
            tracing::debug!(rule = rule.id, display = outcome.display_text(), "rule matched");
            return Some((rule, outcome));
        }
    }
    None
}

/// Same dispatch as [`first_match`], recording every attempt and skip.
/// `skipped` seeds the skip list with rules excluded before dispatch.
pub(crate) fn first_match_detailed<'a, C, F>(
    candidates: impl IntoIterator<Item = &'a C>,
    mut attempt: F,
    mut skipped: Vec<RuleId>,
) -> MatchReport
where
    C: AsRef<Rule> + 'a,
    F: FnMut(&'a C) -> Option<MatchOutcome>,
{
    let start = Instant::now();
    let mut attempted = Vec::new();
    let mut winner = None;

    for candidate in candidates {
        let rule = candidate.as_ref();
        let Some(outcome) = attempt(candidate) else {
            skipped.push(rule.id);
            continue;
        };
        attempted.push(rule.id);
        if outcome.is_match() {
            winner = Some((rule.id, outcome));
            break;
        }
    }

    MatchReport::new(winner, attempted, skipped, start.elapsed())
}
