use crate::types::{Color, Length, LineHeight};

/// A property-value pair like `background-color: #000000`.
///
/// Properties the engine does not understand are preserved as
/// [`Declaration::Unknown`] so a stylesheet written against a richer CSS
/// dialect still parses; they are skipped at computation time.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    Color(Color),
    BackgroundColor(Color),
    FontSize(Length),
    LineHeight(LineHeight),
    FontWeight(u16),
    FontFamily(String),
    MaxWidth(Length),
    Unknown(String),
}

/// A rule: one or more class selectors and their declarations.
///
/// Selectors are stored without the leading dot.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selectors: Vec<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selectors,
            declarations,
        }
    }
}

/// A parsed stylesheet: rules in source order.
#[derive(Clone, Debug, Default)]
pub struct StyleSheet {
    pub rules: Vec<Rule>,
}

impl StyleSheet {
    /// Computes the resolved style for an element with the given class
    /// list. See [`crate::parser::cascade::compute_style`].
    pub fn computed(&self, classes: &[&str]) -> crate::types::ComputedStyle {
        crate::parser::cascade::compute_style(classes, self)
    }
}
