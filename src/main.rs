use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use knotq::cmd::{hash, product};
use knotq::domain::error::{HashError, ProductError};
use knotq::domain::report::{
    PipelineInput, PipelineInputSource, PipelineParameters, PipelineReport,
};
use knotq::engine::ring::RING_SIZE;
use knotq::io::{InputKind, IoError};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(
    name = "knotq",
    version,
    about = "Knot hash over a circular buffer of 256 integers"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    emit_pipeline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hash the first input line into a 32-character hex digest.
    Hash(HashArgs),
    /// Run one round over a comma-separated length list and multiply the first two elements.
    Product(ProductArgs),
}

#[derive(Debug, clap::Args)]
struct HashArgs {
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
struct ProductArgs {
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, default_value_t = RING_SIZE)]
    size: usize,
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    let emit_pipeline = cli.emit_pipeline;
    match cli.command {
        Commands::Hash(args) => run_hash(args, emit_pipeline),
        Commands::Product(args) => run_product(args, emit_pipeline),
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn run_hash(args: HashArgs, emit_pipeline: bool) -> i32 {
    let pipeline_report = build_pipeline_report(
        "hash",
        args.input.as_ref(),
        InputKind::Line,
        hash::parameters(),
        hash::pipeline_steps(),
        hash::deterministic_guards(),
    );

    let exit_code = match open_input(args.input.as_ref(), "hash") {
        Ok(input) => {
            let stdout = io::stdout();
            match hash::run(input, stdout.lock()) {
                Ok(_) => 0,
                Err(error) => {
                    let (exit_code, error_kind) = map_hash_error(&error);
                    emit_error(
                        error_kind,
                        error.to_string(),
                        json!({"command": "hash"}),
                        exit_code,
                    );
                    exit_code
                }
            }
        }
        Err(exit_code) => exit_code,
    };

    if emit_pipeline {
        emit_pipeline_report(&pipeline_report);
    }
    exit_code
}

fn run_product(args: ProductArgs, emit_pipeline: bool) -> i32 {
    let options = product::ProductCommandOptions { size: args.size };
    let pipeline_report = build_pipeline_report(
        "product",
        args.input.as_ref(),
        InputKind::Lengths,
        product::parameters(options),
        product::pipeline_steps(),
        product::deterministic_guards(),
    );

    let exit_code = match open_input(args.input.as_ref(), "product") {
        Ok(input) => {
            let stdout = io::stdout();
            match product::run(input, stdout.lock(), options) {
                Ok(_) => 0,
                Err(error) => {
                    let (exit_code, error_kind) = map_product_error(&error);
                    emit_error(
                        error_kind,
                        error.to_string(),
                        json!({"command": "product", "size": options.size}),
                        exit_code,
                    );
                    exit_code
                }
            }
        }
        Err(exit_code) => exit_code,
    };

    if emit_pipeline {
        emit_pipeline_report(&pipeline_report);
    }
    exit_code
}

/// Open `--input` or fall back to stdin; reports the failure and returns its exit code.
fn open_input(path: Option<&PathBuf>, command: &'static str) -> Result<Box<dyn Read>, i32> {
    let Some(path) = path else {
        return Ok(Box::new(io::stdin().lock()));
    };
    match File::open(path) {
        Ok(file) => Ok(Box::new(file)),
        Err(err) => {
            emit_error(
                "input_usage_error",
                format!("failed to open input file `{}`: {err}", path.display()),
                json!({"command": command, "input": path}),
                3,
            );
            Err(3)
        }
    }
}

fn map_hash_error(error: &HashError) -> (i32, &'static str) {
    match error {
        HashError::ReadInput { source, .. } => map_read_error(source),
        HashError::WriteOutput { .. } => (1, "internal_error"),
    }
}

fn map_product_error(error: &ProductError) -> (i32, &'static str) {
    match error {
        ProductError::ReadInput { source, .. } => map_read_error(source),
        ProductError::Knot { .. } => (3, "input_usage_error"),
        ProductError::WriteOutput { .. } => (1, "internal_error"),
    }
}

fn map_read_error(error: &IoError) -> (i32, &'static str) {
    match error {
        IoError::Io(_) | IoError::Utf8(_) | IoError::InvalidLength { .. } => {
            (3, "input_usage_error")
        }
    }
}

fn build_pipeline_report(
    command: &str,
    input: Option<&PathBuf>,
    kind: InputKind,
    parameters: PipelineParameters,
    steps: Vec<String>,
    deterministic_guards: Vec<String>,
) -> PipelineReport {
    let source = if let Some(path) = input {
        PipelineInputSource::path("input", path.display().to_string(), kind.as_str())
    } else {
        PipelineInputSource::stdin("input", kind.as_str())
    };
    PipelineReport::new(
        command,
        PipelineInput::new(vec![source]),
        parameters,
        steps,
        deterministic_guards,
    )
}

fn emit_pipeline_report(report: &PipelineReport) {
    match serde_json::to_string(report) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(error) => emit_error(
            "internal_error",
            format!("failed to serialize pipeline report: {error}"),
            json!({"command": "emit_pipeline"}),
            1,
        ),
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
