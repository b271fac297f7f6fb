use hilite_core::Stage;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::TokenClass;

/// Shortest run between two double quotes on one line. Backslash escapes are
/// not understood: `\"` ends the literal.
static STRING_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r#"".*?""#).unwrap());

/// Wraps double-quoted string literals in red spans.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighlightStringStage;

impl Stage for HighlightStringStage {
    fn id(&self) -> &'static str {
        "highlight.string.v1"
    }

    fn run(&self, input: &str) -> String {
        STRING_LITERAL
            .replace_all(input, TokenClass::StringLiteral.template("${0}").as_str())
            .into_owned()
    }
}
