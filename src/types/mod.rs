mod config;
mod error;
mod extracted;
mod outcome;
mod report;
mod rule;
mod ruleset;

pub use config::EngineConfig;
pub use error::PatternError;
pub use extracted::ExtractedData;
pub use outcome::MatchOutcome;
pub use report::MatchReport;
pub use rule::{PatternType, Rule, RuleId};
pub use ruleset::RuleSet;
