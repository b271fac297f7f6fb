//! Stage trait: the single contract every highlighting pass implements

/// One text-to-text pass of the highlighting pipeline.
///
/// A stage sees the whole text produced by the previous stage, including any
/// markup injected earlier, and returns a freshly derived text. Stages hold
/// no state beyond their fixed pattern and replacement template.
pub trait Stage: Send + Sync {
    /// Unique stage id (ex: "highlight.keyword.v1")
    fn id(&self) -> &'static str;

    /// Whether the stage is a pure function of its input (default: true)
    fn deterministic(&self) -> bool {
        true
    }

    /// Runs the stage. Total over all input: unmatched text passes through.
    fn run(&self, input: &str) -> String;
}

/// Boxes a closure as a stage, for ad hoc pipelines in tests.
#[cfg(test)]
pub fn from_fn<F>(id: &'static str, f: F) -> Box<dyn Stage>
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    Box::new(FnStage { id, f })
}

#[cfg(test)]
struct FnStage<F> {
    id: &'static str,
    f: F,
}

#[cfg(test)]
impl<F> Stage for FnStage<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn id(&self) -> &'static str {
        self.id
    }

    fn run(&self, input: &str) -> String {
        (self.f)(input)
    }
}
