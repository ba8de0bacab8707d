use super::{offset_of, parse_expression, parse_variable, rest_of, skip_whitespace};
use crate::error::{ParseError, ParseErrorKind};
use crate::problem::{Expression, RelationalSign, Restriction, SignRestriction};

use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case, take_while1};
use nom::character::complete::one_of;
use nom::combinator::{all_consuming, eof, map, opt, peek, value};
use nom::number::complete::double;
use nom::sequence::{pair, terminated};
use nom::IResult;

use log::warn;

//"max" or "min", followed by whitespace or the end of the line
fn direction(i: &str) -> IResult<&str, &str> {
    terminated(
        alt((tag("max"), tag("min"))),
        peek(alt((take_while1(char::is_whitespace), eof))),
    )(i)
}

fn relational_sign(i: &str) -> IResult<&str, RelationalSign> {
    alt((
        value(RelationalSign::LessOrEqual, alt((tag("<="), tag("<")))),
        value(RelationalSign::GreaterOrEqual, alt((tag(">="), tag(">")))),
        value(RelationalSign::Equal, tag("=")),
    ))(i)
}

//signed "inf", "infinity" and "nan", which `double` only takes unsigned
fn special_bound(i: &str) -> IResult<&str, f64> {
    map(
        pair(
            opt(one_of("+-")),
            alt((
                value(f64::INFINITY, tag_no_case("infinity")),
                value(f64::INFINITY, tag_no_case("inf")),
                value(f64::NAN, tag_no_case("nan")),
            )),
        ),
        |(sign, bound)| if sign == Some('-') { -bound } else { bound },
    )(i)
}

fn bound(i: &str) -> IResult<&str, f64> {
    all_consuming(alt((special_bound, double)))(i)
}

/// Parses an objective function and returns it in minimization form.
///
/// A `max` objective has all of its coefficients negated.
pub fn parse_objective(line: &str) -> Result<Expression, ParseError> {
    let pos = skip_whitespace(line, 0);

    let (rest, keyword) = direction(rest_of(line, pos))
        .map_err(|_| ParseError::new(ParseErrorKind::MissingDirectionKeyword, line, pos))?;

    let mut objective = parse_expression(line, offset_of(line, rest))?;

    if keyword == "max" {
        objective.negate();
    }

    let trailing = rest_of(line, objective.end);

    if !trailing.is_empty() {
        warn!("ignoring text after the objective function: `{}`", trailing);
    }

    Ok(objective)
}

pub fn parse_relational_sign(line: &str, pos: usize) -> Result<(RelationalSign, usize), ParseError> {
    match relational_sign(rest_of(line, pos)) {
        Ok((rest, sign)) => Ok((sign, offset_of(line, rest))),
        Err(_) => Err(ParseError::new(
            ParseErrorKind::MissingRelationalSign,
            line,
            pos,
        )),
    }
}

pub fn parse_restriction(line: &str) -> Result<Restriction, ParseError> {
    let expression = parse_expression(line, 0)?;
    let pos = skip_whitespace(line, expression.end);
    let (sign, pos) = parse_relational_sign(line, pos)?;

    let (_, bound) = bound(rest_of(line, pos).trim())
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidBound, line, pos))?;

    Ok(Restriction {
        expression,
        sign,
        bound,
    })
}

/// Parses `VAR >= 0`, the only sign restriction the model can express.
pub fn parse_sign_restriction(line: &str) -> Result<SignRestriction, ParseError> {
    let pos = skip_whitespace(line, 0);
    let (variable, pos) = parse_variable(line, pos)?;
    let pos = skip_whitespace(line, pos);
    let (sign, end) = parse_relational_sign(line, pos)?;

    if sign != RelationalSign::GreaterOrEqual || rest_of(line, end).trim() != "0" {
        return Err(ParseError::new(
            ParseErrorKind::InvalidSignRestriction,
            line,
            pos,
        ));
    }

    Ok(SignRestriction { variable })
}
