//! Cursor based parsers for the statements of a linear program.
//!
//! Every parser takes the line and an explicit byte position and returns the
//! parsed value together with the position right after it. Internally the
//! parsers run `nom` combinators on the remainder of the line.

mod expression;
mod statement;

pub use expression::{parse_expression, parse_term};
pub use statement::{
    parse_objective, parse_relational_sign, parse_restriction, parse_sign_restriction,
};

use crate::error::{ParseError, ParseErrorKind};

use nom::bytes::complete::take_while;
use nom::character::complete::{one_of, satisfy};
use nom::combinator::recognize;
use nom::sequence::pair;
use nom::IResult;

//positions past the end or inside a multibyte char read as end of line
pub(crate) fn rest_of(line: &str, pos: usize) -> &str {
    line.get(pos..).unwrap_or("")
}

//rest must be a suffix of line
pub(crate) fn offset_of(line: &str, rest: &str) -> usize {
    line.len() - rest.len()
}

fn whitespace(i: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(i)
}

fn identifier(i: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric()),
    ))(i)
}

pub fn skip_whitespace(line: &str, pos: usize) -> usize {
    match whitespace(rest_of(line, pos)) {
        Ok((rest, _ws)) => offset_of(line, rest),
        Err(_) => pos,
    }
}

/// Recognizes a single `+` or `-` at `pos`, returning `1.` or `-1.`.
pub fn parse_sign(line: &str, pos: usize) -> Option<(f64, usize)> {
    let (rest, sign) = one_of::<_, _, nom::error::Error<&str>>("+-")(rest_of(line, pos)).ok()?;
    let factor = if sign == '-' { -1. } else { 1. };
    Some((factor, offset_of(line, rest)))
}

/// Recognizes a variable name, `[A-Za-z][A-Za-z0-9]*`.
pub fn parse_variable(line: &str, pos: usize) -> Result<(String, usize), ParseError> {
    match identifier(rest_of(line, pos)) {
        Ok((rest, name)) => Ok((name.to_string(), offset_of(line, rest))),
        Err(_) => Err(ParseError::new(ParseErrorKind::InvalidVariable, line, pos)),
    }
}
