//! hilite stages: the concrete highlighting passes and pipeline builders.
//!
//! Each stage is a single regex substitution over the whole text produced by
//! the stage before it. Order matters: later stages see the markup that
//! earlier ones injected, so injected attributes use single quotes only.
//!
//! # Pipeline Flow
//!
//! ```text
//! Source → wrap → keyword → comment → string → [include] → HTML
//!           ↓        ↓          ↓         ↓          ↓
//!         <pre>    blue       green      red     #in-clude &lt;…&gt;
//! ```

mod escape_include;
mod highlight_comment;
mod highlight_keyword;
mod highlight_string;
mod wrap_pre;

pub use escape_include::EscapeIncludeStage;
pub use highlight_comment::HighlightCommentStage;
pub use highlight_keyword::{HighlightKeywordStage, KEYWORDS};
pub use highlight_string::HighlightStringStage;
pub use wrap_pre::WrapPreStage;

use hilite_core::Pipeline;

pub const PRE_OPEN: &str = "<pre>";
pub const PRE_CLOSE: &str = "</pre>";
pub const SPAN_CLOSE: &str = "</span>";

/// Category of highlighted construct, each with its own color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Keyword,
    Comment,
    StringLiteral,
}

impl TokenClass {
    pub fn color(self) -> &'static str {
        match self {
            TokenClass::Keyword => "blue",
            TokenClass::Comment => "green",
            TokenClass::StringLiteral => "red",
        }
    }

    /// Opening span tag. Attribute values use single quotes so the string
    /// stage cannot match inside them.
    pub fn open_tag(self) -> String {
        format!("<span style='color: {};'>", self.color())
    }

    /// `inner` wrapped in this class's span; `inner` may be a `$group` reference
    pub fn template(self, inner: &str) -> String {
        format!("{}{}{}", self.open_tag(), inner, SPAN_CLOSE)
    }
}

/// Which stage set to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// wrap → keyword → comment → string
    #[default]
    Standard,
    /// Standard followed by include-directive escaping
    WithIncludes,
}

// ============================================================================
// CONVENIENCE BUILDERS
// ============================================================================

/// wrap → keyword → comment → string
pub fn standard_pipeline() -> Pipeline {
    Pipeline::new()
        .add_stage(Box::new(WrapPreStage))
        .add_stage(Box::new(HighlightKeywordStage))
        .add_stage(Box::new(HighlightCommentStage))
        .add_stage(Box::new(HighlightStringStage))
}

/// The standard pipeline plus the include-directive escape as the last stage
pub fn include_pipeline() -> Pipeline {
    standard_pipeline().add_stage(Box::new(EscapeIncludeStage))
}

pub fn pipeline_for(variant: Variant) -> Pipeline {
    match variant {
        Variant::Standard => standard_pipeline(),
        Variant::WithIncludes => include_pipeline(),
    }
}

/// Renders `text` once with the standard pipeline
pub fn render(text: &str) -> String {
    standard_pipeline().render(text)
}
