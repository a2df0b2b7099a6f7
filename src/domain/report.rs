use serde::Serialize;

/// Diagnostics report emitted when `--emit-pipeline` is enabled.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PipelineReport {
    pub command: String,
    pub input: PipelineInput,
    pub parameters: PipelineParameters,
    pub steps: Vec<String>,
    pub deterministic_guards: Vec<String>,
}

impl PipelineReport {
    pub fn new(
        command: impl Into<String>,
        input: PipelineInput,
        parameters: PipelineParameters,
        steps: Vec<String>,
        deterministic_guards: Vec<String>,
    ) -> Self {
        Self {
            command: command.into(),
            input,
            parameters,
            steps,
            deterministic_guards,
        }
    }
}

/// Input-source descriptors used in pipeline diagnostics.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PipelineInput {
    pub sources: Vec<PipelineInputSource>,
}

impl PipelineInput {
    pub fn new(sources: Vec<PipelineInputSource>) -> Self {
        Self { sources }
    }
}

/// Single input source descriptor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PipelineInputSource {
    pub label: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub kind: String,
}

impl PipelineInputSource {
    pub fn stdin(label: impl Into<String>, kind: &str) -> Self {
        Self {
            label: label.into(),
            source: "stdin".to_string(),
            path: None,
            kind: kind.to_string(),
        }
    }

    pub fn path(label: impl Into<String>, path: impl Into<String>, kind: &str) -> Self {
        Self {
            label: label.into(),
            source: "path".to_string(),
            path: Some(path.into()),
            kind: kind.to_string(),
        }
    }
}

/// Knot parameters the command ran with.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PipelineParameters {
    pub ring_size: usize,
    pub rounds: usize,
    pub suffix_appended: bool,
}
