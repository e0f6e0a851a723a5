use std::fmt;
use std::str::FromStr;

use super::error::PatternError;

/// Identifier assigned to a rule by whatever store owns it.
pub type RuleId = u64;

/// Selects which matching algorithm applies to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PatternType {
    /// `{name}` placeholders inside otherwise literal text.
    Template,
    /// A user-supplied regular expression.
    Regex,
    /// Boolean keyword containment (`or`, `and`, `not`).
    Keyword,
}

impl PatternType {
    pub const ALL: [PatternType; 3] = [PatternType::Template, PatternType::Regex, PatternType::Keyword];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PatternType::Template => "TEMPLATE",
            PatternType::Regex => "REGEX",
            PatternType::Keyword => "KEYWORD",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternType {
    type Err = PatternError;

    /// Parses the stored name of a pattern type, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PatternError::UnknownPatternType { name: s.to_owned() })
    }
}

/// One user-authored match rule.
///
/// Rules are plain values: the engine only ever reads them. Create one with
/// [`Rule::template`], [`Rule::regex`] or [`Rule::keyword`] and refine it with
/// the `with_*` methods.
///
/// ```
/// use notimatch::{PatternType, Rule};
///
/// let rule = Rule::template("arriving in {minutes} min", "🍔 {minutes}m")
///     .with_id(7)
///     .with_priority(9)
///     .with_source("com.food.app");
/// assert_eq!(rule.pattern_type, PatternType::Template);
/// assert_eq!(rule.template_variables(), vec!["minutes"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub id: RuleId,
    /// Originating application the rule applies to. Opaque to the engine.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: String,
    pub pattern_type: PatternType,
    pub pattern: String,
    /// Declared variable names. Only the regex strategy reads these, as names
    /// for its capture groups.
    #[cfg_attr(feature = "serde", serde(default))]
    pub variables: Vec<String>,
    pub display_template: String,
    /// Higher values are tried first. Lists handed to the engine must already
    /// be sorted by this field, descending.
    pub priority: i32,
    pub enabled: bool,
    pub display_duration_seconds: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub delay_seconds: u32,
}

impl Rule {
    pub const DEFAULT_PRIORITY: i32 = 5;
    pub const DEFAULT_DISPLAY_SECONDS: u32 = 30;

    pub fn new(
        pattern_type: PatternType,
        pattern: impl Into<String>,
        display_template: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            source: String::new(),
            pattern_type,
            pattern: pattern.into(),
            variables: Vec::new(),
            display_template: display_template.into(),
            priority: Self::DEFAULT_PRIORITY,
            enabled: true,
            display_duration_seconds: Self::DEFAULT_DISPLAY_SECONDS,
            delay_seconds: 0,
        }
    }

    pub fn template(pattern: impl Into<String>, display_template: impl Into<String>) -> Self {
        Self::new(PatternType::Template, pattern, display_template)
    }

    pub fn regex(pattern: impl Into<String>, display_template: impl Into<String>) -> Self {
        Self::new(PatternType::Regex, pattern, display_template)
    }

    pub fn keyword(pattern: impl Into<String>, display_template: impl Into<String>) -> Self {
        Self::new(PatternType::Keyword, pattern, display_template)
    }

    #[must_use]
    pub fn with_id(mut self, id: RuleId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_variables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_timing(mut self, display_duration_seconds: u32, delay_seconds: u32) -> Self {
        self.display_duration_seconds = display_duration_seconds;
        self.delay_seconds = delay_seconds;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Placeholder names of a template pattern, in declaration order and
    /// without duplicates. Empty for regex and keyword rules.
    #[must_use]
    pub fn template_variables(&self) -> Vec<String> {
        if self.pattern_type != PatternType::Template {
            return Vec::new();
        }
        let Ok(segments) = crate::parse::parse_pattern(&self.pattern) else {
            return Vec::new();
        };
        let mut names: Vec<String> = Vec::new();
        for name in segments.iter().filter_map(|s| s.placeholder()) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_owned());
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_type_from_str_ignores_case() {
        assert_eq!("regex".parse::<PatternType>().unwrap(), PatternType::Regex);
        assert_eq!("TEMPLATE".parse::<PatternType>().unwrap(), PatternType::Template);
        assert_eq!(" Keyword ".parse::<PatternType>().unwrap(), PatternType::Keyword);
    }

    #[test]
    fn pattern_type_from_str_unknown() {
        let err = "glob".parse::<PatternType>().unwrap_err();
        assert!(matches!(err, PatternError::UnknownPatternType { name } if name == "glob"));
    }

    #[test]
    fn pattern_type_display_round_trips() {
        for t in PatternType::ALL {
            assert_eq!(t.to_string().parse::<PatternType>().unwrap(), t);
        }
    }

    #[test]
    fn new_rule_defaults() {
        let rule = Rule::keyword("delivered", "📦");
        assert_eq!(rule.id, 0);
        assert_eq!(rule.priority, 5);
        assert!(rule.enabled);
        assert_eq!(rule.display_duration_seconds, 30);
        assert_eq!(rule.delay_seconds, 0);
        assert!(rule.variables.is_empty());
    }

    #[test]
    fn builder_methods_set_fields() {
        let rule = Rule::regex(r"ETA: (\d+)", "{eta}")
            .with_id(3)
            .with_source("com.rides")
            .with_priority(9)
            .with_variables(["eta"])
            .with_timing(10, 2)
            .with_enabled(false);
        assert_eq!(rule.id, 3);
        assert_eq!(rule.source, "com.rides");
        assert_eq!(rule.priority, 9);
        assert_eq!(rule.variables, vec!["eta".to_owned()]);
        assert_eq!(rule.display_duration_seconds, 10);
        assert_eq!(rule.delay_seconds, 2);
        assert!(!rule.enabled);
    }

    #[test]
    fn template_variables_in_order_without_duplicates() {
        let rule = Rule::template("{driver} arrives in {min} min, {driver} says hi", "");
        assert_eq!(rule.template_variables(), vec!["driver", "min"]);
    }

    #[test]
    fn template_variables_empty_for_other_types() {
        let rule = Rule::regex("{x}", "");
        assert!(rule.template_variables().is_empty());
    }
}
