//! Value parsing for KSS properties.
//!
//! This module handles parsing of property values:
//!
//! - Colors: `red`, `#ff0000`, `rgb(255,0,0)`, `hsl(0,100%,50%)`
//! - Lengths: `16px`, `1.25rem`, `1.2em`, `80%`, bare numbers
//! - Font weights: `300`, `normal`, `bold`
//! - Font families: the raw comma-separated stack, verbatim

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_till, take_while1},
    character::complete::{char, digit1},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, tuple},
};

use crate::types::{Color, Length, LineHeight, Unit};

/// Parses a CSS identifier (alphanumeric characters, dashes, and underscores).
///
/// Identifiers are used for property names and class names.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parse a floating point or integer number.
fn parse_number(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f32>(),
    )(input)
}

/// Parse the unit suffix (px, rem, em, %).
fn parse_unit_suffix(input: &str) -> IResult<&str, Unit> {
    alt((
        map(tag("px"), |_| Unit::Px),
        map(tag("rem"), |_| Unit::Rem),
        map(tag("em"), |_| Unit::Em),
        map(char('%'), |_| Unit::Percent),
    ))(input)
}

/// Parse a single length value (e.g., "16px", "1.25rem", "1.5").
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    let input = input.trim_start();
    let (input, value) = parse_number(input)?;
    let (input, unit) = opt(parse_unit_suffix)(input)?;

    Ok((
        input,
        Length {
            value,
            unit: unit.unwrap_or(Unit::None),
        },
    ))
}

/// Parse a line-height value.
///
/// A bare number is a multiplier of the element's font size; anything
/// with a unit is an ordinary length.
pub fn parse_line_height(input: &str) -> IResult<&str, LineHeight> {
    let (input, length) = parse_length(input)?;
    let line_height = match length.unit {
        Unit::None => LineHeight::Multiple(length.value),
        _ => LineHeight::Length(length),
    };
    Ok((input, line_height))
}

/// Parse a font-weight value: a number on the 1-1000 scale, `normal`, or
/// `bold`.
pub fn parse_font_weight(input: &str) -> IResult<&str, u16> {
    let input = input.trim_start();

    if let Ok((remaining, digits)) = digit1::<&str, nom::error::Error<&str>>(input) {
        let value = digits.parse::<u16>().map_err(|_| {
            nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
        })?;
        if !(1..=1000).contains(&value) {
            return Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Digit,
            )));
        }
        return Ok((remaining, value));
    }

    let (remaining, ident) = parse_ident(input)?;
    match ident {
        "normal" => Ok((remaining, 400)),
        "bold" => Ok((remaining, 700)),
        _ => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

/// Take the raw text of a declaration value: everything up to the next
/// `;` or `}`, trimmed.
pub fn parse_value_text(input: &str) -> IResult<&str, String> {
    let (input, raw) = take_till(|c| c == ';' || c == '}')(input)?;
    Ok((input, raw.trim().to_string()))
}

/// Parse a color value in any of the formats [`Color::parse`] accepts.
pub fn parse_color_value(input: &str) -> IResult<&str, Color> {
    let (remaining, raw) = parse_value_text(input)?;
    match Color::parse(&raw) {
        Ok(color) => Ok((remaining, color)),
        Err(_) => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_px() {
        let (_, length) = parse_length("16px").unwrap();
        assert_eq!(length, Length::px(16.0));
    }

    #[test]
    fn test_length_rem() {
        let (_, length) = parse_length("1.25rem").unwrap();
        assert_eq!(length, Length::rem(1.25));
    }

    #[test]
    fn test_length_em() {
        let (_, length) = parse_length("1.2em").unwrap();
        assert_eq!(length.unit, Unit::Em);
        assert_eq!(length.value, 1.2);
    }

    #[test]
    fn test_length_percent() {
        let (_, length) = parse_length("80%").unwrap();
        assert_eq!(length.unit, Unit::Percent);
    }

    #[test]
    fn test_line_height_multiplier() {
        let (_, lh) = parse_line_height("1.5").unwrap();
        assert_eq!(lh, LineHeight::Multiple(1.5));
    }

    #[test]
    fn test_line_height_length() {
        let (_, lh) = parse_line_height("1.75rem").unwrap();
        assert_eq!(lh, LineHeight::Length(Length::rem(1.75)));
    }

    #[test]
    fn test_font_weight_number() {
        assert_eq!(parse_font_weight("300").unwrap().1, 300);
        assert_eq!(parse_font_weight("700;").unwrap().1, 700);
    }

    #[test]
    fn test_font_weight_keywords() {
        assert_eq!(parse_font_weight("normal").unwrap().1, 400);
        assert_eq!(parse_font_weight("bold").unwrap().1, 700);
    }

    #[test]
    fn test_font_weight_out_of_range() {
        assert!(parse_font_weight("1001").is_err());
        assert!(parse_font_weight("0").is_err());
    }

    #[test]
    fn test_color_value() {
        let (_, color) = parse_color_value("#3b82f6; ").unwrap();
        assert_eq!(color.hex(), "#3b82f6");
    }

    #[test]
    fn test_value_text_stops_at_terminators() {
        let (rest, value) = parse_value_text("ui-monospace, Menlo, monospace; next").unwrap();
        assert_eq!(value, "ui-monospace, Menlo, monospace");
        assert!(rest.starts_with(';'));
    }
}
