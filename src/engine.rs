use crate::evaluate::{first_match, first_match_detailed};
use crate::matcher::MatcherTable;
use crate::{EngineConfig, MatchOutcome, MatchReport, PatternError, PatternType, Rule, RuleSet};

/// Matches notification text against user-authored rules.
///
/// The engine holds one matcher per enabled [`PatternType`], built at
/// construction and never changed afterwards, so a single engine can be
/// shared across threads. Construct it once and pass it to whoever needs it.
///
/// # Example
///
/// ```
/// use notimatch::{MatchingEngine, Rule};
///
/// let engine = MatchingEngine::new();
/// let rules = vec![
///     Rule::keyword("order and not cancelled", "✅").with_priority(9),
///     Rule::template("arriving in {minutes} min", "🍔 {minutes}m"),
/// ];
///
/// let (rule, outcome) = engine.find_match("Order arriving in 15 min", &rules).unwrap();
/// assert_eq!(rule.priority, 9);
/// assert_eq!(outcome.display_text(), "✅");
/// ```
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    config: EngineConfig,
    matchers: MatcherTable,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl MatchingEngine {
    /// An engine with every pattern type enabled and default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let matchers = MatcherTable::new(&config);
        Self { config, matchers }
    }

    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Try `rules` in the given order and return the first rule that matches
    /// `text`, paired with its outcome.
    ///
    /// The caller owns ordering: pass rules sorted by priority, descending,
    /// and already filtered to enabled ones. Rules whose pattern type has no
    /// matcher are skipped.
    pub fn find_match<'r>(
        &self,
        text: &str,
        rules: impl IntoIterator<Item = &'r Rule>,
    ) -> Option<(&'r Rule, MatchOutcome)> {
        first_match(rules, |rule| {
            self.matchers
                .get(rule.pattern_type)
                .map(|matcher| matcher.match_rule(text, rule))
        })
    }

    /// [`find_match`](Self::find_match) with a [`MatchReport`] of what ran.
    pub fn find_match_detailed<'r>(
        &self,
        text: &str,
        rules: impl IntoIterator<Item = &'r Rule>,
    ) -> MatchReport {
        first_match_detailed(
            rules,
            |rule| {
                self.matchers
                    .get(rule.pattern_type)
                    .map(|matcher| matcher.match_rule(text, rule))
            },
            Vec::new(),
        )
    }

    /// Match a single rule. A rule whose pattern type has no matcher, or
    /// whose pattern does not compile, simply does not match.
    pub fn match_pattern(&self, text: &str, rule: &Rule) -> MatchOutcome {
        match self.matchers.get(rule.pattern_type) {
            Some(matcher) => matcher.match_rule(text, rule),
            None => {
                tracing::debug!(rule = rule.id, pattern_type = %rule.pattern_type, "no matcher for pattern type");
                MatchOutcome::no_match()
            }
        }
    }

    /// Check that `rule` could ever match.
    ///
    /// # Errors
    ///
    /// Returns the [`PatternError`] that [`match_pattern`](Self::match_pattern)
    /// would otherwise swallow.
    pub fn validate(&self, rule: &Rule) -> Result<(), PatternError> {
        let matcher = self
            .matchers
            .get(rule.pattern_type)
            .ok_or(PatternError::NoMatcher {
                pattern_type: rule.pattern_type,
            })?;
        matcher.compile(rule)?;
        Ok(())
    }

    /// Run one rule against a batch of sample texts, compiling it once.
    pub fn test_pattern<I>(&self, rule: &Rule, samples: I) -> Vec<MatchOutcome>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let compiled = match self.matchers.get(rule.pattern_type) {
            Some(matcher) => matcher.compile(rule).ok(),
            None => None,
        };
        samples
            .into_iter()
            .map(|sample| match &compiled {
                Some(pattern) => pattern.evaluate(sample.as_ref(), rule),
                None => MatchOutcome::no_match(),
            })
            .collect()
    }

    /// Compile `rules` once into a [`RuleSet`]. Never fails as a whole: rules
    /// that cannot match are listed in [`RuleSet::rejected`].
    #[must_use]
    pub fn compile(&self, rules: impl IntoIterator<Item = Rule>) -> RuleSet {
        crate::compile::compile(&self.matchers, rules)
    }
}

/// Builder for a [`MatchingEngine`] with non-default limits or a reduced set
/// of pattern types.
///
/// ```
/// use notimatch::{MatchingEngine, PatternType, Rule};
///
/// let engine = MatchingEngine::builder()
///     .max_pattern_len(256)
///     .disable(PatternType::Regex)
///     .build();
///
/// let rule = Rule::regex("anything", "x");
/// assert!(!engine.match_pattern("anything", &rule).is_match());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one loaded with serde.
    #[must_use]
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn max_pattern_len(mut self, bytes: usize) -> Self {
        self.config.max_pattern_len = bytes;
        self
    }

    #[must_use]
    pub fn regex_size_limit(mut self, bytes: usize) -> Self {
        self.config.regex_size_limit = bytes;
        self
    }

    #[must_use]
    pub fn dfa_size_limit(mut self, bytes: usize) -> Self {
        self.config.dfa_size_limit = bytes;
        self
    }

    /// Replace the set of pattern types that get a matcher.
    #[must_use]
    pub fn pattern_types(mut self, types: impl IntoIterator<Item = PatternType>) -> Self {
        self.config.pattern_types = types.into_iter().collect();
        self
    }

    #[must_use]
    pub fn disable(mut self, pattern_type: PatternType) -> Self {
        self.config.pattern_types.retain(|t| *t != pattern_type);
        self
    }

    #[must_use]
    pub fn build(self) -> MatchingEngine {
        MatchingEngine::with_config(self.config)
    }
}
