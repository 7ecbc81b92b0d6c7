// Token-level helpers shared by the override parsers

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, value},
    number::complete::double,
    sequence::delimited,
    IResult,
};

/// Wrap a parser so it consumes surrounding whitespace.
pub fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Parse an option key like `figure.figsize` or `font.sans-serif`.
pub fn option_key(input: &str) -> IResult<&str, String> {
    map(
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-'),
        |s: &str| s.to_string(),
    )(input)
}

/// Parse a double-quoted string literal.
pub fn string_literal(input: &str) -> IResult<&str, String> {
    map(
        delimited(char('"'), take_while(|c| c != '"'), char('"')),
        |s: &str| s.to_string(),
    )(input)
}

/// Parse a numeric literal.
pub fn number_literal(input: &str) -> IResult<&str, f64> {
    double(input)
}

/// Parse `true` or `false`.
pub fn boolean_literal(input: &str) -> IResult<&str, bool> {
    alt((value(true, tag("true")), value(false, tag("false"))))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_key() {
        let (rest, key) = option_key("figure.figsize: [10, 5]").unwrap();
        assert_eq!(key, "figure.figsize");
        assert_eq!(rest, ": [10, 5]");
    }

    #[test]
    fn test_option_key_with_dash() {
        let (_, key) = option_key("font.sans-serif").unwrap();
        assert_eq!(key, "font.sans-serif");
    }

    #[test]
    fn test_string_literal() {
        let (_, s) = string_literal("\"sans-serif\"").unwrap();
        assert_eq!(s, "sans-serif");
    }

    #[test]
    fn test_string_literal_unterminated() {
        assert!(string_literal("\"sans-serif").is_err());
    }

    #[test]
    fn test_number_literal() {
        assert_eq!(number_literal("5.625").unwrap().1, 5.625);
        assert_eq!(number_literal("-2").unwrap().1, -2.0);
    }

    #[test]
    fn test_boolean_literal() {
        assert_eq!(boolean_literal("true").unwrap().1, true);
        assert_eq!(boolean_literal("false").unwrap().1, false);
        assert!(boolean_literal("yes").is_err());
    }

    #[test]
    fn test_ws_wrapping() {
        let (rest, key) = ws(option_key)("  font.size  :").unwrap();
        assert_eq!(key, "font.size");
        assert_eq!(rest, ":");
    }
}
