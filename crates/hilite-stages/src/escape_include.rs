use hilite_core::Stage;
use once_cell::sync::Lazy;
use regex::Regex;

/// `#include <header>`, keeping the spacing between directive and bracket.
/// The header may already carry keyword spans (`<float.h>`), so span tags
/// are accepted inside the brackets.
static INCLUDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#include(?P<ws>[ \t]*)<(?P<header>(?:<span[^>]*>|</span>|[^<>\n])*)>").unwrap()
});

/// Splits the `#include` token with a hyphen and escapes the angle brackets
/// of the header so browsers show it instead of parsing a tag.
#[derive(Debug, Default, Clone, Copy)]
pub struct EscapeIncludeStage;

impl Stage for EscapeIncludeStage {
    fn id(&self) -> &'static str {
        "escape.include.v1"
    }

    fn run(&self, input: &str) -> String {
        INCLUDE
            .replace_all(input, "#in-clude${ws}&lt;${header}&gt;")
            .into_owned()
    }
}
