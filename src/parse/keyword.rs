use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

/// A single AND-ed keyword, possibly negated with a leading `not `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordTerm {
    Present(String),
    Absent(String),
}

/// Parsed keyword expression. All keywords are lowercased.
///
/// The grammar is one level deep: a pattern is an OR list, an AND list, a
/// single negation, or a plain keyword. The forms are tried in that order and
/// never nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordExpr {
    Any(Vec<String>),
    All(Vec<KeywordTerm>),
    Absent(String),
    Contains(String),
}

const NOT_PREFIX: &str = "not ";

// -- Separators (`\s+or\s+`, `\s+and\s+`) -------------------------------------

fn separator(input: &mut &str, word: &'static str) -> ModalResult<()> {
    (
        take_while(1.., char::is_whitespace),
        word,
        take_while(1.., char::is_whitespace),
    )
        .void()
        .parse_next(input)
}

/// Split `input` at every leftmost `<ws>+word<ws>+` run. Empty pieces are kept.
fn split_on<'i>(input: &'i str, word: &'static str) -> Vec<&'i str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    while let Some(c) = input[pos..].chars().next() {
        let mut rest = &input[pos..];
        if separator(&mut rest, word).is_ok() {
            pieces.push(&input[start..pos]);
            pos = input.len() - rest.len();
            start = pos;
        } else {
            pos += c.len_utf8();
        }
    }
    pieces.push(&input[start..]);
    pieces
}

fn term(keyword: &str) -> KeywordTerm {
    let trimmed = keyword.trim();
    match trimmed.strip_prefix(NOT_PREFIX) {
        Some(rest) => KeywordTerm::Absent(rest.trim().to_owned()),
        None => KeywordTerm::Present(trimmed.to_owned()),
    }
}

/// Parse a keyword pattern. Never fails: every string is a valid pattern.
#[must_use]
pub fn parse_keyword(pattern: &str) -> KeywordExpr {
    let lowered = pattern.to_lowercase();
    if lowered.contains(" or ") {
        KeywordExpr::Any(
            split_on(&lowered, "or")
                .into_iter()
                .map(|k| k.trim().to_owned())
                .collect(),
        )
    } else if lowered.contains(" and ") {
        KeywordExpr::All(split_on(&lowered, "and").into_iter().map(term).collect())
    } else if let Some(rest) = lowered.strip_prefix(NOT_PREFIX) {
        KeywordExpr::Absent(rest.trim().to_owned())
    } else {
        KeywordExpr::Contains(lowered.trim().to_owned())
    }
}
