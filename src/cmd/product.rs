use std::io::{Read, Write};

use crate::domain::error::ProductError;
use crate::domain::report::PipelineParameters;
use crate::engine::knot::first_two_product;
use crate::engine::ring::RING_SIZE;
use crate::io::{InputKind, reader};

/// Command-level options for the single-round product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCommandOptions {
    pub size: usize,
}

impl Default for ProductCommandOptions {
    fn default() -> Self {
        Self { size: RING_SIZE }
    }
}

/// Execute `product` from input stream to output stream.
///
/// Reads a comma-separated length list from the first line, runs one round
/// over a ring of `options.size` and writes the product of its first two
/// elements in decimal.
pub fn run<R: Read, W: Write>(
    input: R,
    mut output: W,
    options: ProductCommandOptions,
) -> Result<u64, ProductError> {
    let lengths = reader::read_lengths(input).map_err(|source| ProductError::ReadInput {
        kind: InputKind::Lengths,
        source,
    })?;
    let product =
        first_two_product(&lengths, options.size).map_err(|source| ProductError::Knot { source })?;
    output
        .write_all(product.to_string().as_bytes())
        .and_then(|()| output.flush())
        .map_err(|source| ProductError::WriteOutput { source })?;
    Ok(product)
}

pub fn parameters(options: ProductCommandOptions) -> PipelineParameters {
    PipelineParameters {
        ring_size: options.size,
        rounds: 1,
        suffix_appended: false,
    }
}

/// Ordered pipeline-step names used for `--emit-pipeline` diagnostics.
pub fn pipeline_steps() -> Vec<String> {
    vec![
        "read_input_line".to_string(),
        "parse_length_list".to_string(),
        "validate_lengths".to_string(),
        "run_single_round".to_string(),
        "write_first_two_product".to_string(),
    ]
}

/// Determinism guards planned for the `product` command.
pub fn deterministic_guards() -> Vec<String> {
    vec![
        "rust_native_execution".to_string(),
        "fresh_ring_per_computation".to_string(),
        "lengths_validated_before_reversal".to_string(),
    ]
}
