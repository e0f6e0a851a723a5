mod error;
mod keyword;
mod template;

pub use error::ParseError;
pub use keyword::{KeywordExpr, KeywordTerm, parse_keyword};
pub use template::{Segment, parse_display, parse_pattern};
