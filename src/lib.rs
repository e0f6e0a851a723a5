mod compile;
mod dispatch;
mod engine;
mod evaluate;
mod matcher;
pub mod parse;
mod render;
mod types;

pub use dispatch::{DisplayRequest, Dispatcher, InMemoryRuleStore, Notification, Renderer, RuleSource};
pub use engine::{EngineBuilder, MatchingEngine};
pub use render::render;
pub use types::{
    EngineConfig, ExtractedData, MatchOutcome, MatchReport, PatternError, PatternType, Rule,
    RuleId, RuleSet,
};
