//! Integration tests for KSS rule parsing.
//!
//! Covers the rule grammar: class selectors, selector lists, comments,
//! unknown properties, and syntax errors.

use kss::parser::{Declaration, parse_stylesheet};
use kss::types::{Color, Length, LineHeight};

#[test]
fn test_single_rule() {
    let sheet = parse_stylesheet(".bg-black { background-color: #000000; }").unwrap();
    assert_eq!(sheet.rules.len(), 1);

    let rule = &sheet.rules[0];
    assert_eq!(rule.selectors, vec!["bg-black".to_string()]);
    assert_eq!(
        rule.declarations,
        vec![Declaration::BackgroundColor(Color::black())]
    );
}

#[test]
fn test_multiple_rules() {
    let source = r#"
        .font-light { font-weight: 300; }
        .text-xl { font-size: 1.25rem; line-height: 1.75rem; }
    "#;
    let sheet = parse_stylesheet(source).unwrap();
    assert_eq!(sheet.rules.len(), 2);
    assert_eq!(
        sheet.rules[1].declarations,
        vec![
            Declaration::FontSize(Length::rem(1.25)),
            Declaration::LineHeight(LineHeight::Length(Length::rem(1.75))),
        ]
    );
}

#[test]
fn test_selector_list() {
    let sheet = parse_stylesheet(".text-fg, .text-fg-light { color: #111827; }").unwrap();
    assert_eq!(
        sheet.rules[0].selectors,
        vec!["text-fg".to_string(), "text-fg-light".to_string()]
    );
}

#[test]
fn test_comments_are_stripped() {
    let source = r#"
        /* palette */
        .bg-white { background-color: #ffffff; /* pure white */ }
    "#;
    let sheet = parse_stylesheet(source).unwrap();
    assert_eq!(sheet.rules.len(), 1);
    assert_eq!(
        sheet.rules[0].declarations,
        vec![Declaration::BackgroundColor(Color::white())]
    );
}

#[test]
fn test_unknown_property_is_retained() {
    let sheet = parse_stylesheet(".swatch { border-radius: 0.5rem; color: red; }").unwrap();
    assert_eq!(
        sheet.rules[0].declarations,
        vec![
            Declaration::Unknown("border-radius".to_string()),
            Declaration::Color(Color::rgb(255, 0, 0)),
        ]
    );
}

#[test]
fn test_font_family_verbatim() {
    let sheet =
        parse_stylesheet(".font-mono { font-family: ui-monospace, Menlo, monospace; }").unwrap();
    assert_eq!(
        sheet.rules[0].declarations,
        vec![Declaration::FontFamily(
            "ui-monospace, Menlo, monospace".to_string()
        )]
    );
}

#[test]
fn test_missing_semicolon_before_brace() {
    let sheet = parse_stylesheet(".bg-black { background-color: #000000 }").unwrap();
    assert_eq!(
        sheet.rules[0].declarations,
        vec![Declaration::BackgroundColor(Color::black())]
    );
}

#[test]
fn test_empty_stylesheet() {
    assert!(parse_stylesheet("").unwrap().rules.is_empty());
    assert!(parse_stylesheet("   \n  ").unwrap().rules.is_empty());
}

#[test]
fn test_invalid_syntax() {
    assert!(parse_stylesheet(".a { color }").is_err());
    assert!(parse_stylesheet(".a { color: }").is_err());
    assert!(parse_stylesheet("stray tokens").is_err());
    assert!(parse_stylesheet(".a { color: red;").is_err());
}
