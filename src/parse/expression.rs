use super::{offset_of, parse_sign, parse_variable, rest_of, skip_whitespace};
use crate::error::ParseError;
use crate::problem::{Expression, Term};

use nom::branch::alt;
use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{map, map_res, opt, recognize};
use nom::sequence::{pair, terminated};
use nom::IResult;

//digits with an optional fraction, or a bare fraction like ".5"
fn magnitude(i: &str) -> IResult<&str, f64> {
    map_res(
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            recognize(pair(char('.'), digit1)),
        )),
        |text: &str| text.parse::<f64>(),
    )(i)
}

//optional sign and magnitude, then the optional '*' separator
fn coefficient(i: &str) -> IResult<&str, f64> {
    map(
        terminated(pair(opt(one_of("+-")), opt(magnitude)), opt(char('*'))),
        |(sign, magnitude)| {
            let magnitude = magnitude.unwrap_or(1.);

            if sign == Some('-') {
                -magnitude
            } else {
                magnitude
            }
        },
    )(i)
}

pub fn parse_term(line: &str, pos: usize) -> Result<Term, ParseError> {
    let rest = rest_of(line, pos);

    //every part of a coefficient is optional, so this never fails
    let (rest, coefficient) = coefficient(rest).unwrap_or((rest, 1.));

    let (variable, end) = parse_variable(line, offset_of(line, rest))?;

    Ok(Term {
        variable,
        coefficient,
        end,
    })
}

pub fn parse_expression(line: &str, pos: usize) -> Result<Expression, ParseError> {
    let mut expr = Expression::default();

    let term = parse_term(line, skip_whitespace(line, pos))?;
    expr.accumulate(term.variable, term.coefficient);
    let mut pos = skip_whitespace(line, term.end);

    while let Some((factor, after_sign)) = parse_sign(line, pos) {
        let term = parse_term(line, skip_whitespace(line, after_sign))?;
        expr.accumulate(term.variable, factor * term.coefficient);
        pos = skip_whitespace(line, term.end);
    }

    expr.end = pos;
    Ok(expr)
}
