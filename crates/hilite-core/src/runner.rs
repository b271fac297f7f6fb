//! Pipeline: chains stages in a fixed order and optionally traces each pass
use crate::data_model::{Rendered, StageTrace};
use crate::stage::Stage;
use std::time::Instant;

/// Ordered composition of stages, applied exactly once per raw input.
///
/// Output of one stage is the input of the next. Rendering a rendered
/// result again re-highlights the injected markup; the pipeline is not
/// idempotent.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage; it runs after every stage already added
    pub fn add_stage(mut self, stage: Box<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Applies every stage to `text` in order
    pub fn render(&self, text: &str) -> String {
        self.stages
            .iter()
            .fold(text.to_string(), |current, stage| stage.run(&current))
    }

    /// Same output as [`Pipeline::render`], plus one trace entry per stage
    pub fn render_traced(&self, text: &str) -> Rendered {
        let mut current = text.to_string();
        let mut trace = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let start = Instant::now();
            let in_hash = hash_text(&current);

            let result = stage.run(&current);

            let out_hash = hash_text(&result);
            let latency_us = start.elapsed().as_micros() as u64;
            let changed = in_hash != out_hash;

            tracing::debug!(
                stage = stage.id(),
                changed,
                latency_us,
                in_len = current.len(),
                out_len = result.len(),
                "stage complete"
            );

            trace.push(StageTrace {
                id: stage.id().to_string(),
                in_hash,
                out_hash,
                deterministic: stage.deterministic(),
                latency_us,
                changed,
            });

            current = result;
        }

        Rendered {
            html: current,
            pipeline_id: self.pipeline_id(),
            trace,
        }
    }

    /// Stage id prefixes joined with an arrow (ex: "wrap→highlight→escape")
    pub fn pipeline_id(&self) -> String {
        self.stages
            .iter()
            .map(|s| s.id().split('.').next().unwrap_or("?"))
            .collect::<Vec<_>>()
            .join("→")
    }

    pub fn stage_ids(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

fn hash_text(text: &str) -> String {
    format!("blake3:{}", blake3::hash(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::from_fn;

    fn sample() -> Pipeline {
        Pipeline::new()
            .add_stage(from_fn("wrap.test.v1", |s| format!("[{}]", s)))
            .add_stage(from_fn("upper.test.v1", |s| s.to_uppercase()))
            .add_stage(from_fn("noop.test.v1", |s| s.to_string()))
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = Pipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.render("int x;"), "int x;");
        assert_eq!(pipeline.pipeline_id(), "");
    }

    #[test]
    fn test_stages_run_in_insertion_order() {
        let pipeline = sample();
        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline.render("ab"), "[AB]");

        let order_sensitive = Pipeline::new()
            .add_stage(from_fn("wrap.test.v1", |s| format!("<{}>", s)))
            .add_stage(from_fn("strip.test.v1", |s| s.replace('<', "")));
        assert_eq!(order_sensitive.render("a"), "a>");
    }

    #[test]
    fn test_pipeline_id_uses_prefixes() {
        assert_eq!(sample().pipeline_id(), "wrap→upper→noop");
        assert_eq!(
            sample().stage_ids(),
            vec!["wrap.test.v1", "upper.test.v1", "noop.test.v1"]
        );
    }

    #[test]
    fn test_traced_run_matches_plain_render() {
        let pipeline = sample();
        let rendered = pipeline.render_traced("ab");

        assert_eq!(rendered.html, pipeline.render("ab"));
        assert_eq!(rendered.pipeline_id, "wrap→upper→noop");
        assert_eq!(rendered.trace.len(), 3);
        assert_eq!(rendered.changed_stages(), vec!["wrap.test.v1", "upper.test.v1"]);

        let noop = &rendered.trace[2];
        assert_eq!(noop.in_hash, noop.out_hash);
        assert!(noop.in_hash.starts_with("blake3:"));
        assert_eq!(rendered.trace[0].out_hash, rendered.trace[1].in_hash);
    }
}
