//! File job: read a source file, render it, write the HTML, read it back.
use hilite_core::{HiliteError, Rendered, RunConfig, StageTrace, HILITE_VERSION};
use hilite_stages::{pipeline_for, Variant};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Outcome of a successful file job
#[derive(Debug, Clone)]
pub struct JobReport {
    /// Content read back from the output file
    pub echoed: String,
    pub rendered: Rendered,
}

/// JSON document written when a trace path is configured
#[derive(Debug, Serialize)]
struct TraceReport<'a> {
    engine: &'static str,
    version: &'static str,
    input: &'a Path,
    output: &'a Path,
    pipeline_id: &'a str,
    stages: &'a [StageTrace],
}

pub fn variant_for(config: &RunConfig) -> Variant {
    if config.include_directives {
        Variant::WithIncludes
    } else {
        Variant::Standard
    }
}

/// Runs the whole job. The output file is never touched when the input
/// cannot be read.
pub fn run(config: &RunConfig) -> Result<JobReport, HiliteError> {
    let source = read_source(&config.input_path)?;

    let pipeline = pipeline_for(variant_for(config));
    let rendered = pipeline.render_traced(&source);
    tracing::info!(
        pipeline = %rendered.pipeline_id,
        changed = ?rendered.changed_stages(),
        "rendered {}",
        config.input_path.display()
    );

    fs::write(&config.output_path, rendered.html.as_bytes()).map_err(|source| {
        HiliteError::OutputWrite {
            path: config.output_path.clone(),
            source,
        }
    })?;
    tracing::info!(bytes = rendered.html.len(), "wrote {}", config.output_path.display());

    if let Some(trace_path) = &config.trace_path {
        write_trace(trace_path, config, &rendered)?;
    }

    let echoed = fs::read_to_string(&config.output_path).map_err(|source| HiliteError::Echo {
        path: config.output_path.clone(),
        source,
    })?;

    Ok(JobReport { echoed, rendered })
}

fn read_source(path: &Path) -> Result<String, HiliteError> {
    let bytes = fs::read(path).map_err(|source| HiliteError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("{} is not valid UTF-8, replacing bad bytes", path.display());
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}

fn write_trace(path: &Path, config: &RunConfig, rendered: &Rendered) -> Result<(), HiliteError> {
    let report = TraceReport {
        engine: "hilite",
        version: HILITE_VERSION,
        input: &config.input_path,
        output: &config.output_path,
        pipeline_id: &rendered.pipeline_id,
        stages: &rendered.trace,
    };

    let json = serde_json::to_vec_pretty(&report).map_err(|e| HiliteError::Trace(e.to_string()))?;
    fs::write(path, json)
        .map_err(|e| HiliteError::Trace(format!("cannot write {}: {}", path.display(), e)))?;
    tracing::debug!("wrote stage trace to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_follows_include_flag() {
        let mut config = RunConfig::default();
        assert_eq!(variant_for(&config), Variant::WithIncludes);
        config.include_directives = false;
        assert_eq!(variant_for(&config), Variant::Standard);
    }
}
