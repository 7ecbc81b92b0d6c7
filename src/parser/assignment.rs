// Parser for `key: value` override expressions (the CLI's --set grammar)

use super::lexer::{boolean_literal, number_literal, option_key, string_literal, ws};
use crate::options::{OptionValue, Overrides};
use anyhow::{bail, Result};
use nom::{
    branch::alt,
    character::complete::char,
    combinator::map,
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};

/// Parse `[width, height]`.
fn pair_literal(input: &str) -> IResult<&str, [f64; 2]> {
    let (input, _) = ws(char('['))(input)?;
    let (input, first) = ws(number_literal)(input)?;
    let (input, _) = ws(char(','))(input)?;
    let (input, second) = ws(number_literal)(input)?;
    let (input, _) = ws(char(']'))(input)?;
    Ok((input, [first, second]))
}

fn option_value(input: &str) -> IResult<&str, OptionValue> {
    alt((
        map(boolean_literal, OptionValue::Bool),
        map(pair_literal, OptionValue::Pair),
        map(string_literal, OptionValue::Text),
        map(number_literal, OptionValue::Num),
    ))(input)
}

/// Parse a single `key: value` assignment.
pub fn parse_assignment(input: &str) -> IResult<&str, (String, OptionValue)> {
    separated_pair(ws(option_key), char(':'), ws(option_value))(input)
}

/// Parse one or more comma-separated assignments into overrides.
///
/// The whole input must parse; trailing garbage is an error rather than a
/// silent truncation.
pub fn parse_assignments(input: &str) -> Result<Overrides> {
    match separated_list1(ws(char(',')), parse_assignment)(input) {
        Ok((rest, entries)) if rest.trim().is_empty() => {
            let mut overrides = Overrides::new();
            for (key, value) in entries {
                overrides.push(key, value);
            }
            Ok(overrides)
        }
        Ok((rest, _)) => bail!("unparsed input in override expression: '{}'", rest),
        Err(e) => bail!("invalid override expression '{}': {}", input, e),
    }
}
