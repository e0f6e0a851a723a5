use std::fmt;

use super::error::PatternError;
use super::outcome::MatchOutcome;
use super::report::MatchReport;
use super::rule::{Rule, RuleId};
use crate::evaluate::{first_match, first_match_detailed};
use crate::matcher::CompiledRule;

/// A rule list compiled once, ready to match many texts.
///
/// Built by [`MatchingEngine::compile`](crate::MatchingEngine::compile).
/// Rules keep the order they were given in, so pass them sorted by priority,
/// descending. Rules that could never match are held apart in
/// [`rejected()`](Self::rejected). Thread-safe and designed to live behind
/// `Arc`.
///
/// # Example
///
/// ```
/// use notimatch::{MatchingEngine, Rule};
///
/// let ruleset = MatchingEngine::new().compile(vec![
///     Rule::template("arriving in {minutes} min", "🍔 {minutes}m").with_id(1).with_priority(9),
///     Rule::keyword("delivered or arrived", "📦").with_id(2),
/// ]);
///
/// let (rule, outcome) = ruleset.find_match("Order arriving in 15 min").unwrap();
/// assert_eq!(rule.id, 1);
/// assert_eq!(outcome.display_text(), "🍔 15m");
/// ```
#[derive(Debug)]
pub struct RuleSet {
    pub(crate) rules: Vec<CompiledRule>,
    pub(crate) rejected: Vec<(RuleId, PatternError)>,
}

impl RuleSet {
    /// The first rule, in order, whose pattern matches `text`, with its
    /// outcome. `None` when nothing matches.
    #[must_use]
    pub fn find_match(&self, text: &str) -> Option<(&Rule, MatchOutcome)> {
        first_match(&self.rules, |compiled| {
            Some(compiled.pattern.evaluate(text, &compiled.rule))
        })
    }

    /// Match with diagnostics. Rejected rules are reported as skipped.
    pub fn find_match_detailed(&self, text: &str) -> MatchReport {
        first_match_detailed(
            &self.rules,
            |compiled| Some(compiled.pattern.evaluate(text, &compiled.rule)),
            self.rejected.iter().map(|(id, _)| *id).collect(),
        )
    }

    /// Accepted rules in dispatch order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().map(|c| &c.rule)
    }

    #[must_use]
    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.rules().find(|rule| rule.id == id)
    }

    /// Rules left out at compile time, with the reason.
    #[must_use]
    pub fn rejected(&self) -> &[(RuleId, PatternError)] {
        &self.rejected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RuleSet({} rules, {} rejected)",
            self.rules.len(),
            self.rejected.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{MatchingEngine, PatternError, Rule};

    fn ruleset() -> super::RuleSet {
        MatchingEngine::new().compile(vec![
            Rule::regex(r"ETA: (\d+):(\d+)", "{h}:{m}")
                .with_id(1)
                .with_priority(9)
                .with_variables(["h", "m"]),
            Rule::regex("(", "broken").with_id(2).with_priority(7),
            Rule::keyword("order and not cancelled", "✅").with_id(3),
        ])
    }

    #[test]
    fn find_match_in_order() {
        let rs = ruleset();
        let (rule, outcome) = rs.find_match("Order ETA: 10:30").unwrap();
        assert_eq!(rule.id, 1);
        assert_eq!(outcome.display_text(), "10:30");

        let (rule, outcome) = rs.find_match("order confirmed").unwrap();
        assert_eq!(rule.id, 3);
        assert_eq!(outcome.display_text(), "✅");

        assert!(rs.find_match("order cancelled").is_none());
    }

    #[test]
    fn rejected_rules_are_kept_apart() {
        let rs = ruleset();
        assert_eq!(rs.len(), 2);
        assert!(rs.get(2).is_none());
        assert!(matches!(rs.rejected(), [(2, PatternError::InvalidRegex { .. })]));
    }

    #[test]
    fn detailed_reports_rejected_as_skipped() {
        let report = ruleset().find_match_detailed("order confirmed");
        assert_eq!(report.winner(), Some(3));
        assert_eq!(report.attempted(), &[1, 3]);
        assert_eq!(report.skipped(), &[2]);
    }

    #[test]
    fn display() {
        assert_eq!(ruleset().to_string(), "RuleSet(2 rules, 1 rejected)");
    }

    #[test]
    fn empty_ruleset_matches_nothing() {
        let rs = MatchingEngine::new().compile(Vec::new());
        assert!(rs.is_empty());
        assert!(rs.find_match("anything").is_none());
        assert_eq!(rs.find_match_detailed("anything").winner(), None);
    }
}
