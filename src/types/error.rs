use thiserror::Error;

use super::rule::PatternType;
use crate::parse::ParseError;

/// Reasons a rule's pattern can never match.
///
/// These surface only from validation ([`MatchingEngine::validate`](crate::MatchingEngine::validate))
/// and from [`RuleSet::rejected`](crate::RuleSet::rejected). Matching itself turns
/// every one of them into a non-matching outcome.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid regular expression '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("pattern is {len} bytes long; the limit is {max}")]
    TooLong { len: usize, max: usize },

    #[error("no matcher registered for pattern type {pattern_type}")]
    NoMatcher { pattern_type: PatternType },

    #[error("unknown pattern type '{name}'")]
    UnknownPatternType { name: String },
}
