use hilite_core::Stage;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{TokenClass, PRE_CLOSE};

/// `//` to end of line. A comment on the last input line runs into the
/// closing `</pre>`; the optional `tail` group keeps that tag outside the span.
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?mR)(?P<body>//.*?)(?P<tail>{})?$",
        regex::escape(PRE_CLOSE)
    ))
    .unwrap()
});

/// `/*` to the nearest `*/`, across lines.
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Wraps line comments, then block comments, in green spans.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighlightCommentStage;

impl Stage for HighlightCommentStage {
    fn id(&self) -> &'static str {
        "highlight.comment.v1"
    }

    fn run(&self, input: &str) -> String {
        let line_template = format!("{}${{tail}}", TokenClass::Comment.template("${body}"));
        let lines = LINE_COMMENT.replace_all(input, line_template.as_str());

        BLOCK_COMMENT
            .replace_all(&lines, TokenClass::Comment.template("${0}").as_str())
            .into_owned()
    }
}
