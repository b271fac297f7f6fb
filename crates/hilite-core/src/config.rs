//! Run configuration: fixed file names with environment overrides
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "input.cpp";
pub const DEFAULT_OUTPUT: &str = "output.html";

pub const ENV_INPUT: &str = "HILITE_INPUT";
pub const ENV_OUTPUT: &str = "HILITE_OUTPUT";
pub const ENV_INCLUDES: &str = "HILITE_INCLUDES";
pub const ENV_TRACE: &str = "HILITE_TRACE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Run the include-directive stage after string highlighting
    pub include_directives: bool,
    /// Where to write the JSON stage trace, if anywhere
    pub trace_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            include_directives: true,
            trace_path: None,
        }
    }
}

impl RunConfig {
    /// Defaults overridden by `HILITE_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] but reading from an arbitrary source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = non_empty(lookup(ENV_INPUT)) {
            config.input_path = PathBuf::from(path);
        }
        if let Some(path) = non_empty(lookup(ENV_OUTPUT)) {
            config.output_path = PathBuf::from(path);
        }
        if let Some(raw) = non_empty(lookup(ENV_INCLUDES)) {
            match parse_bool(&raw) {
                Some(flag) => config.include_directives = flag,
                None => tracing::warn!(
                    "ignoring {}={:?}: expected a boolean",
                    ENV_INCLUDES,
                    raw
                ),
            }
        }
        config.trace_path = non_empty(lookup(ENV_TRACE)).map(PathBuf::from);

        config
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
