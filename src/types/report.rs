use std::fmt;
use std::time::Duration;

use super::outcome::MatchOutcome;
use super::rule::RuleId;

/// Detailed dispatch report returned by
/// [`MatchingEngine::find_match_detailed()`](crate::MatchingEngine::find_match_detailed)
/// and [`RuleSet::find_match_detailed()`](crate::RuleSet::find_match_detailed).
///
/// Contains the winning rule (if any), which rules were attempted and skipped,
/// and the wall-clock duration of the dispatch.
#[derive(Debug, Clone)]
#[must_use]
pub struct MatchReport {
    winner: Option<(RuleId, MatchOutcome)>,
    attempted: Vec<RuleId>,
    skipped: Vec<RuleId>,
    duration: Duration,
}

impl MatchReport {
    pub(crate) fn new(
        winner: Option<(RuleId, MatchOutcome)>,
        attempted: Vec<RuleId>,
        skipped: Vec<RuleId>,
        duration: Duration,
    ) -> Self {
        Self {
            winner,
            attempted,
            skipped,
            duration,
        }
    }

    /// Id of the winning rule, same rule as `find_match` would return.
    #[must_use]
    pub fn winner(&self) -> Option<RuleId> {
        self.winner.as_ref().map(|(id, _)| *id)
    }

    /// Outcome of the winning rule.
    #[must_use]
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.winner.as_ref().map(|(_, outcome)| outcome)
    }

    /// Rules whose matcher ran, in dispatch order. The winner is last.
    #[must_use]
    pub fn attempted(&self) -> &[RuleId] {
        &self.attempted
    }

    /// Rules passed over because no matcher could run them.
    #[must_use]
    pub fn skipped(&self) -> &[RuleId] {
        &self.skipped
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.winner {
            Some((id, outcome)) => write!(f, "winner: rule {id} ({outcome})")?,
            None => write!(f, "winner: none")?,
        }
        write!(f, ", attempted: {}", self.attempted.len())?;
        write!(f, ", skipped: {}", self.skipped.len())?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExtractedData;

    #[test]
    fn report_accessors() {
        let outcome = MatchOutcome::matched(ExtractedData::new(), "📦");
        let report = MatchReport::new(
            Some((2, outcome.clone())),
            vec![1, 2],
            vec![3],
            Duration::from_nanos(500),
        );

        assert_eq!(report.winner(), Some(2));
        assert_eq!(report.outcome(), Some(&outcome));
        assert_eq!(report.attempted(), &[1, 2]);
        assert_eq!(report.skipped(), &[3]);
        assert_eq!(report.duration(), Duration::from_nanos(500));
    }

    #[test]
    fn report_display_with_winner() {
        let outcome = MatchOutcome::matched(ExtractedData::new(), "📦");
        let report = MatchReport::new(Some((4, outcome)), vec![4], vec![], Duration::ZERO);
        let s = report.to_string();
        assert!(s.contains("winner: rule 4"));
        assert!(s.contains("attempted: 1"));
    }

    #[test]
    fn report_display_no_winner() {
        let report = MatchReport::new(None, vec![1], vec![], Duration::from_nanos(100));
        assert!(report.to_string().contains("winner: none"));
    }
}
