use hilite_core::Stage;

use crate::{PRE_CLOSE, PRE_OPEN};

/// Encloses the whole text in a `<pre>` block. Always the first stage.
#[derive(Debug, Default, Clone, Copy)]
pub struct WrapPreStage;

impl Stage for WrapPreStage {
    fn id(&self) -> &'static str {
        "wrap.pre.v1"
    }

    fn run(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() + PRE_OPEN.len() + PRE_CLOSE.len());
        out.push_str(PRE_OPEN);
        out.push_str(input);
        out.push_str(PRE_CLOSE);
        out
    }
}
