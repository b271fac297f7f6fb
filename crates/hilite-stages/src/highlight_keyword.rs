use hilite_core::Stage;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::TokenClass;

/// Keywords highlighted as whole words
pub const KEYWORDS: &[&str] = &[
    "int", "float", "double", "if", "else", "for", "while", "return", "class", "public",
    "private", "protected", "void", "const",
];

static KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b(?:{})\b", KEYWORDS.join("|"))).unwrap()
});

/// Wraps every whole-word keyword in a blue span.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighlightKeywordStage;

impl Stage for HighlightKeywordStage {
    fn id(&self) -> &'static str {
        "highlight.keyword.v1"
    }

    fn run(&self, input: &str) -> String {
        KEYWORD
            .replace_all(input, TokenClass::Keyword.template("${0}").as_str())
            .into_owned()
    }
}
