//! KSS parsing and stylesheet data structures.
//!
//! This module provides the core parsing functionality for KSS
//! stylesheets, including:
//!
//! - [`parse_stylesheet`]: Main entry point for parsing KSS source
//! - [`StyleSheet`]: Represents a complete parsed stylesheet
//! - [`Rule`]: A rule with class selectors and declarations
//! - [`Declaration`]: A property-value pair like `background-color: #000`
//!
//! ## Submodules
//!
//! - [`cascade`]: Style computation from a class list
//! - [`stylesheet`]: Core data structures for rules and declarations
//! - [`values`]: Color, length, and font value parsing
//!
//! ## Example
//!
//! ```rust
//! use kss::parser::{parse_stylesheet, Declaration};
//!
//! let stylesheet = parse_stylesheet(".bg-black { background-color: #000; }").unwrap();
//! let rule = &stylesheet.rules[0];
//!
//! assert_eq!(rule.selectors, vec!["bg-black".to_string()]);
//! assert_eq!(rule.declarations.len(), 1);
//! ```

pub mod cascade;
pub mod stylesheet;
pub mod values;

pub use crate::parser::cascade::compute_style;
pub use crate::parser::stylesheet::{Declaration, Rule, StyleSheet};

use crate::KssError;
use crate::parser::values::{
    parse_color_value, parse_font_weight, parse_ident, parse_length, parse_line_height,
    parse_value_text,
};

use nom::{
    IResult,
    character::complete::{char, multispace0},
    combinator::{map, opt},
    multi::many0,
    sequence::{delimited, preceded, tuple},
};

/// Parses a full KSS stylesheet.
///
/// `/* */` comments are stripped first; anything the rule grammar cannot
/// consume afterwards is a syntax error.
pub fn parse_stylesheet(source: &str) -> Result<StyleSheet, KssError> {
    let stripped = strip_comments(source);

    let (remaining, rules) =
        many0(parse_rule)(stripped.as_str()).map_err(|e| KssError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(KssError::InvalidSyntax(format!(
            "unexpected tokens at end of stylesheet: {}",
            remaining.trim()
        )));
    }

    Ok(StyleSheet { rules })
}

/// Removes `/* ... */` comments. Unterminated comments run to the end of
/// the source.
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start..].find("*/") {
            Some(end) => rest = &rest[start + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Top-level parser for a rule (e.g., ".bg-black { background-color: #000; }").
fn parse_rule(input: &str) -> IResult<&str, Rule> {
    let (input, _) = multispace0(input)?;
    let (input, selectors) = parse_selector_list(input)?;
    let (input, _) = multispace0(input)?;

    let (input, declarations) = delimited(
        char('{'),
        parse_declarations,
        preceded(multispace0, char('}')),
    )(input)?;

    Ok((input, Rule::new(selectors, declarations)))
}

/// Parses a comma-separated list of class selectors.
fn parse_selector_list(input: &str) -> IResult<&str, Vec<String>> {
    let (input, first) = parse_class_selector(input)?;
    let (input, rest) = many0(preceded(
        tuple((multispace0, char(','), multispace0)),
        parse_class_selector,
    ))(input)?;

    let mut selectors = vec![first];
    selectors.extend(rest);
    Ok((input, selectors))
}

/// Parses a single class selector (`.name`), returning the bare name.
fn parse_class_selector(input: &str) -> IResult<&str, String> {
    let (input, name) = preceded(char('.'), parse_ident)(input)?;
    Ok((input, name.to_string()))
}

/// Parses multiple declarations inside a block.
fn parse_declarations(input: &str) -> IResult<&str, Vec<Declaration>> {
    many0(parse_single_declaration)(input)
}

/// Dispatches parsing based on property name.
fn parse_single_declaration(input: &str) -> IResult<&str, Declaration> {
    let (input, _) = multispace0(input)?;
    let (input, property) = parse_ident(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;

    let (input, declaration) = match property {
        "color" => map(parse_color_value, Declaration::Color)(input)?,
        "background-color" => map(parse_color_value, Declaration::BackgroundColor)(input)?,
        "font-size" => map(parse_length, Declaration::FontSize)(input)?,
        "line-height" => map(parse_line_height, Declaration::LineHeight)(input)?,
        "font-weight" => map(parse_font_weight, Declaration::FontWeight)(input)?,
        "font-family" => map(parse_value_text, Declaration::FontFamily)(input)?,
        "max-width" => map(parse_length, Declaration::MaxWidth)(input)?,
        _ => map(parse_value_text, |_| Declaration::Unknown(property.to_string()))(input)?,
    };

    let (input, _) = preceded(multispace0, opt(char(';')))(input)?;
    Ok((input, declaration))
}
