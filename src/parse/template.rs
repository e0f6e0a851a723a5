use winnow::combinator::{delimited, opt};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::stream::Stream;
use winnow::token::{take_till, take_while};

use super::error::ParseError;

/// A piece of a template: literal text or a `{name}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'i> {
    Literal(&'i str),
    Placeholder(&'i str),
}

impl<'i> Segment<'i> {
    #[must_use]
    pub fn placeholder(&self) -> Option<&'i str> {
        match self {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal(_) => None,
        }
    }
}

// -- Name characters ---------------------------------------------------------

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_display_name_char(c: char) -> bool {
    c != '{' && c != '}'
}

// -- Segments ----------------------------------------------------------------

fn placeholder<'i>(input: &mut &'i str, is_name: fn(char) -> bool) -> ModalResult<&'i str> {
    delimited('{', take_while(1.., is_name), '}').parse_next(input)
}

/// Literal text up to the next `{`. A `{` that does not open a placeholder
/// is kept as literal text.
fn literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (opt('{'), take_till(0.., '{')).take().parse_next(input)
}

fn segment<'i>(input: &mut &'i str, is_name: fn(char) -> bool) -> ModalResult<Segment<'i>> {
    let checkpoint = input.checkpoint();
    if let Ok(name) = placeholder(input, is_name) {
        return Ok(Segment::Placeholder(name));
    }
    input.reset(&checkpoint);
    literal.map(Segment::Literal).parse_next(input)
}

fn segments<'i>(source: &'i str, is_name: fn(char) -> bool) -> Result<Vec<Segment<'i>>, ParseError> {
    let mut input = source;
    let mut out = Vec::new();
    while !input.is_empty() {
        let offset = source.len() - input.len();
        let seg = segment(&mut input, is_name)
            .map_err(|_| ParseError::new(offset, "unreadable template text"))?;
        out.push(seg);
    }
    Ok(out)
}

// -- Entry points ------------------------------------------------------------

/// Split a template pattern into literals and `{identifier}` placeholders.
/// Identifiers are one or more alphanumeric or `_` characters; any other
/// brace is literal text.
///
/// # Errors
///
/// Returns [`ParseError`] if the grammar cannot make progress.
pub fn parse_pattern(source: &str) -> Result<Vec<Segment<'_>>, ParseError> {
    segments(source, is_word_char)
}

/// Split a display template into literals and `{name}` placeholders, where a
/// name is any non-empty text without braces.
///
/// # Errors
///
/// Returns [`ParseError`] if the grammar cannot make progress.
pub fn parse_display(source: &str) -> Result<Vec<Segment<'_>>, ParseError> {
    segments(source, is_display_name_char)
}
