//! The collaborators around the engine: where rules come from, what a
//! notification looks like, and who shows the result.

use std::time::Duration;

use crate::{MatchingEngine, Rule, RuleId};

/// Supplies the rules for one source application.
///
/// Implementations must return only enabled rules, sorted by priority,
/// descending. The engine relies on that order and never re-sorts.
pub trait RuleSource {
    fn rules_for(&self, source: &str) -> Vec<Rule>;
}

/// Consumes a finished display request. The only collaborator with side
/// effects.
pub trait Renderer {
    fn render(&self, request: &DisplayRequest);
}

impl<F: Fn(&DisplayRequest)> Renderer for F {
    fn render(&self, request: &DisplayRequest) {
        self(request);
    }
}

/// A notification as delivered by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identifier of the posting application; rules are looked up by it.
    pub source: String,
    /// Human readable application name.
    pub source_name: String,
    pub title: String,
    /// The text that rules are matched against.
    pub text: String,
}

impl Notification {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            source_name: source.clone(),
            source,
            title: String::new(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }
}

/// What to show, for how long, and after what delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRequest {
    pub rule_id: RuleId,
    pub text: String,
    pub duration: Duration,
    pub delay: Duration,
}

impl DisplayRequest {
    fn new(rule: &Rule, text: impl Into<String>) -> Self {
        Self {
            rule_id: rule.id,
            text: text.into(),
            duration: Duration::from_secs(u64::from(rule.display_duration_seconds)),
            delay: Duration::from_secs(u64::from(rule.delay_seconds)),
        }
    }
}

/// A rule store kept in memory. Assigns ids on insert, starting at 1.
#[derive(Debug, Clone)]
pub struct InMemoryRuleStore {
    rules: Vec<Rule>,
    next_id: RuleId,
}

impl Default for InMemoryRuleStore {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            next_id: 1,
        }
    }
}

impl InMemoryRuleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `rule` under a fresh id, ignoring whatever id it carried.
    pub fn insert(&mut self, mut rule: Rule) -> RuleId {
        let id = self.next_id;
        self.next_id += 1;
        rule.id = id;
        self.rules.push(rule);
        id
    }

    /// Replace the stored rule with the same id. Returns `false` if there is
    /// none.
    pub fn update(&mut self, rule: Rule) -> bool {
        match self.rules.iter_mut().find(|r| r.id == rule.id) {
            Some(slot) => {
                *slot = rule;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: RuleId) -> Option<Rule> {
        let index = self.rules.iter().position(|r| r.id == id)?;
        Some(self.rules.remove(index))
    }

    pub fn set_enabled(&mut self, id: RuleId, enabled: bool) -> bool {
        match self.rules.iter_mut().find(|r| r.id == id) {
            Some(rule) => {
                rule.enabled = enabled;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Every stored rule, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
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

impl RuleSource for InMemoryRuleStore {
    /// Enabled rules of `source`, highest priority first. Equal priorities
    /// keep insertion order.
    fn rules_for(&self, source: &str) -> Vec<Rule> {
        let mut rules: Vec<Rule> = self
            .rules
            .iter()
            .filter(|r| r.enabled && r.source == source)
            .cloned()
            .collect();
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));
        rules
    }
}

/// Glue between a rule source, the engine and a renderer.
///
/// ```
/// use std::cell::RefCell;
/// use notimatch::{DisplayRequest, Dispatcher, InMemoryRuleStore, MatchingEngine, Notification, Rule};
///
/// let mut store = InMemoryRuleStore::new();
/// store.insert(Rule::template("arriving in {minutes} min", "🍔 {minutes}m").with_source("food"));
///
/// let shown = RefCell::new(Vec::new());
/// let dispatcher = Dispatcher::new(MatchingEngine::new(), store, |r: &DisplayRequest| {
///     shown.borrow_mut().push(r.text.clone());
/// });
///
/// dispatcher.dispatch(&Notification::new("food", "Order arriving in 15 min"));
/// assert_eq!(shown.borrow().as_slice(), ["🍔 15m"]);
/// ```
#[derive(Debug)]
pub struct Dispatcher<S, R> {
    engine: MatchingEngine,
    source: S,
    renderer: R,
}

impl<S: RuleSource, R: Renderer> Dispatcher<S, R> {
    pub fn new(engine: MatchingEngine, source: S, renderer: R) -> Self {
        Self {
            engine,
            source,
            renderer,
        }
    }

    /// Match one notification. On a match the request is handed to the
    /// renderer and also returned.
    pub fn dispatch(&self, notification: &Notification) -> Option<DisplayRequest> {
        if notification.text.is_empty() {
            tracing::trace!(source = %notification.source, "ignoring notification without text");
            return None;
        }

        let rules = self.source.rules_for(&notification.source);
        if rules.is_empty() {
            tracing::debug!(source = %notification.source, "no rules for source");
            return None;
        }

        let (rule, outcome) = self.engine.find_match(&notification.text, &rules)?;
        let request = DisplayRequest::new(rule, outcome.display_text());
        tracing::info!(
            source = %notification.source,
            rule = request.rule_id,
            text = %request.text,
            delay_secs = request.delay.as_secs(),
            "notification matched"
        );
        self.renderer.render(&request);
        Some(request)
    }

    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the rule source, e.g. to edit stored rules.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
