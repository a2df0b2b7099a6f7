use std::io::{Read, Write};

use crate::domain::error::HashError;
use crate::domain::report::PipelineParameters;
use crate::engine::digest::Digest;
use crate::engine::knot::{ROUNDS, knot_hash};
use crate::engine::ring::RING_SIZE;
use crate::io::{InputKind, reader};

/// Execute `hash` from input stream to output stream.
///
/// Reads the first line, hashes its bytes and writes the 32-character digest
/// without a trailing newline.
pub fn run<R: Read, W: Write>(input: R, mut output: W) -> Result<Digest, HashError> {
    let line = reader::read_first_line(input).map_err(|source| HashError::ReadInput {
        kind: InputKind::Line,
        source,
    })?;
    let digest = knot_hash(&line);
    output
        .write_all(digest.to_hex().as_bytes())
        .and_then(|()| output.flush())
        .map_err(|source| HashError::WriteOutput { source })?;
    Ok(digest)
}

pub fn parameters() -> PipelineParameters {
    PipelineParameters {
        ring_size: RING_SIZE,
        rounds: ROUNDS,
        suffix_appended: true,
    }
}

/// Ordered pipeline-step names used for `--emit-pipeline` diagnostics.
pub fn pipeline_steps() -> Vec<String> {
    vec![
        "read_input_line".to_string(),
        "strip_line_terminator".to_string(),
        "build_length_sequence".to_string(),
        "run_knot_rounds".to_string(),
        "fold_sparse_hash".to_string(),
        "write_hex_digest".to_string(),
    ]
}

/// Determinism guards planned for the `hash` command.
pub fn deterministic_guards() -> Vec<String> {
    vec![
        "rust_native_execution".to_string(),
        "fresh_ring_per_computation".to_string(),
        "fixed_length_suffix".to_string(),
    ]
}
