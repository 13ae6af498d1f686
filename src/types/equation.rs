//! Text form of hyperplane equations, e.g. `x_1 - 2.5x_2 + x_3 = 4`.
//!
//! Rendering rounds coefficients to three decimal places, drops zero terms,
//! omits the sign of the first term when positive and omits coefficients of
//! magnitude one. Coefficients and the constant term are printed without
//! trailing zeros, so a constant of `1.210` renders as `1.21`. Parsing accepts
//! the same form.

use std::fmt;
use std::str::FromStr;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, multispace0, one_of};
use nom::combinator::{all_consuming, map, map_res, opt, recognize, value};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded, separated_pair, tuple};
use nom::IResult;
use rust_decimal::Decimal;

use super::{Hyperplane, Vector};
use crate::error::{LinAlgError, Result};

const DECIMAL_PLACES: u32 = 3;

fn rounded(x: Decimal) -> Decimal {
    x.round_dp(DECIMAL_PLACES).normalize()
}

fn write_term(out: &mut String, coefficient: Decimal, index: usize, is_initial: bool) {
    if coefficient.is_sign_negative() {
        out.push('-');
    } else if !is_initial {
        out.push('+');
    }
    if !is_initial {
        out.push(' ');
    }
    let magnitude = coefficient.abs();
    if magnitude != Decimal::ONE {
        out.push_str(&magnitude.to_string());
    }
    out.push_str(&format!("x_{}", index + 1));
}

impl<const N: usize> fmt::Display for Hyperplane<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lhs = String::new();
        let terms = self
            .normal_vector()
            .iter()
            .enumerate()
            .map(|(i, &c)| (i, rounded(c)))
            .filter(|(_, c)| !c.is_zero());
        for (position, (index, coefficient)) in terms.enumerate() {
            if position > 0 {
                lhs.push(' ');
            }
            write_term(&mut lhs, coefficient, index, position == 0);
        }
        if lhs.is_empty() {
            lhs.push('0');
        }
        write!(f, "{} = {}", lhs, rounded(self.constant_term()))
    }
}

fn unsigned_number(input: &str) -> IResult<&str, Decimal> {
    map_res(
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        Decimal::from_str,
    )(input)
}

fn variable(input: &str) -> IResult<&str, usize> {
    map_res(preceded(tag("x_"), digit1), usize::from_str)(input)
}

fn term(input: &str) -> IResult<&str, (Decimal, usize)> {
    map(pair(opt(unsigned_number), variable), |(c, index)| {
        (c.unwrap_or(Decimal::ONE), index)
    })(input)
}

fn first_term(input: &str) -> IResult<&str, (Decimal, usize)> {
    map(pair(opt(char('-')), term), |(minus, (c, index))| {
        (if minus.is_some() { -c } else { c }, index)
    })(input)
}

fn signed_term(input: &str) -> IResult<&str, (Decimal, usize)> {
    map(
        pair(delimited(multispace0, one_of("+-"), multispace0), term),
        |(sign, (c, index))| (if sign == '-' { -c } else { c }, index),
    )(input)
}

fn left_side(input: &str) -> IResult<&str, Vec<(Decimal, usize)>> {
    alt((
        map(pair(first_term, many0(signed_term)), |(first, rest)| {
            std::iter::once(first).chain(rest).collect()
        }),
        value(Vec::new(), char('0')),
    ))(input)
}

fn constant(input: &str) -> IResult<&str, Decimal> {
    map(pair(opt(char('-')), unsigned_number), |(minus, k)| {
        if minus.is_some() {
            -k
        } else {
            k
        }
    })(input)
}

fn equation(input: &str) -> IResult<&str, (Vec<(Decimal, usize)>, Decimal)> {
    all_consuming(delimited(
        multispace0,
        separated_pair(left_side, tuple((multispace0, char('='), multispace0)), constant),
        multispace0,
    ))(input)
}

impl<const N: usize> FromStr for Hyperplane<N> {
    type Err = LinAlgError;

    fn from_str(s: &str) -> Result<Self> {
        let (_, (terms, constant_term)) =
            equation(s).map_err(|e| LinAlgError::Parse(e.to_string()))?;

        let mut coefficients = vec![Decimal::ZERO; N];
        for (coefficient, index) in terms {
            if index == 0 || index > N {
                return Err(LinAlgError::Parse(format!(
                    "variable x_{} outside x_1..x_{}",
                    index, N
                )));
            }
            coefficients[index - 1] = coefficients[index - 1]
                .checked_add(coefficient)
                .ok_or_else(|| LinAlgError::Parse(format!("coefficient of x_{index} overflows")))?;
        }
        Hyperplane::new(Vector::new(coefficients)?, constant_term)
    }
}
