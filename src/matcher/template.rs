use regex::Regex;

use crate::compile::Limits;
use crate::parse::{Segment, parse_pattern};
use crate::render::render;
use crate::{ExtractedData, MatchOutcome, PatternError, Rule};

/// Matches `{name}` templates. Literal text must appear verbatim (ignoring
/// case); each placeholder captures a non-greedy run of at least one
/// character.
#[derive(Debug, Clone)]
pub(crate) struct TemplateMatcher {
    limits: Limits,
}

/// A template translated into a regex, with one name per capture group.
///
/// A name repeated in the pattern gets one group per occurrence.
#[derive(Debug, Clone)]
pub(crate) struct CompiledTemplate {
    regex: Regex,
    names: Vec<String>,
}

impl TemplateMatcher {
    pub(crate) fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub(crate) fn compile(&self, pattern: &str) -> Result<CompiledTemplate, PatternError> {
        self.limits.check_len(pattern)?;

        let mut source = String::with_capacity(pattern.len() + 16);
        let mut names = Vec::new();
        for segment in parse_pattern(pattern)? {
            match segment {
                Segment::Literal(text) => source.push_str(&regex::escape(text)),
                Segment::Placeholder(name) => {
                    source.push_str("(.+?)");
                    names.push(name.to_owned());
                }
            }
        }

        let regex = self.limits.build_regex(&source, pattern)?;
        Ok(CompiledTemplate { regex, names })
    }
}

pub(super) fn evaluate(compiled: &CompiledTemplate, text: &str, rule: &Rule) -> MatchOutcome {
    let Some(caps) = compiled.regex.captures(text) else {
        return MatchOutcome::no_match();
    };

    let mut extracted = ExtractedData::new();
    for (i, name) in compiled.names.iter().enumerate() {
        if let Some(m) = caps.get(i + 1) {
            extracted.insert(name.as_str(), m.as_str());
        }
    }

    let display = render(&rule.display_template, &extracted);
    MatchOutcome::matched(extracted, display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineConfig;

    fn run(pattern: &str, display: &str, text: &str) -> MatchOutcome {
        let matcher = TemplateMatcher::new(Limits::from(&EngineConfig::default()));
        let rule = Rule::template(pattern, display);
        let compiled = matcher.compile(&rule.pattern).unwrap();
        evaluate(&compiled, text, &rule)
    }

    #[test]
    fn extracts_and_renders() {
        let outcome = run("arriving in {minutes} min", "🍔 {minutes}m", "Order arriving in 15 min");
        assert!(outcome.is_match());
        assert_eq!(outcome.extracted().get("minutes"), Some("15"));
        assert_eq!(outcome.display_text(), "🍔 15m");
    }

    #[test]
    fn literal_text_is_case_insensitive() {
        let outcome = run("ARRIVING IN {m} MIN", "{m}", "order arriving in 7 min");
        assert_eq!(outcome.display_text(), "7");
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let outcome = run("total: ${amount} (incl. tax)", "{amount}", "Total: $12.50 (incl. tax)");
        assert_eq!(outcome.extracted().get("amount"), Some("12.50"));

        let miss = run("a.c", "", "abc");
        assert!(!miss.is_match());
    }

    #[test]
    fn zero_placeholders_is_substring_match() {
        let outcome = run("out for delivery", "🚚", "Your order is OUT FOR DELIVERY now");
        assert!(outcome.is_match());
        assert!(outcome.extracted().is_empty());
        assert_eq!(outcome.display_text(), "🚚");
    }

    #[test]
    fn two_placeholders() {
        let outcome = run("{driver} arrives at {time}.", "{driver} @ {time}", "Sam arrives at 10:30.");
        assert_eq!(outcome.extracted().get("driver"), Some("Sam"));
        assert_eq!(outcome.extracted().get("time"), Some("10:30"));
        assert_eq!(outcome.display_text(), "Sam @ 10:30");
    }

    #[test]
    fn trailing_placeholder_captures_one_char() {
        let outcome = run("arriving in {minutes}", "{minutes}", "arriving in 15");
        assert_eq!(outcome.extracted().get("minutes"), Some("1"));
    }

    #[test]
    fn duplicate_placeholder_last_occurrence_wins() {
        let outcome = run("{x} then {x}!", "[{x}]", "a then b!");
        assert!(outcome.is_match());
        assert_eq!(outcome.extracted().len(), 1);
        assert_eq!(outcome.extracted().get("x"), Some("b"));
        assert_eq!(outcome.display_text(), "[b]");
    }

    #[test]
    fn placeholder_needs_at_least_one_char() {
        let outcome = run("in {m} min", "", "in  min");
        assert!(!outcome.is_match());
    }

    #[test]
    fn missing_display_names_stay_literal() {
        let outcome = run("in {m} min", "{m}m {eta}", "in 5 min");
        assert_eq!(outcome.display_text(), "5m {eta}");
    }

    #[test]
    fn empty_text_does_not_match_placeholder() {
        assert!(!run("{x}", "", "").is_match());
    }

    #[test]
    fn too_long_pattern_is_rejected() {
        let limits = Limits {
            max_pattern_len: 4,
            ..Limits::from(&EngineConfig::default())
        };
        let err = TemplateMatcher::new(limits).compile("{abc}").unwrap_err();
        assert!(matches!(err, PatternError::TooLong { .. }));
    }
}
