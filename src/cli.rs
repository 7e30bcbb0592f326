//! The `sobel_bands <input> <output> <num_workers>` command.
//!
//! Configuration errors (argument count, worker count) are caught before any
//! file is read. Resource errors (unreadable input, output allocation) abort
//! the run. A failed write of the result is only logged as a warning and the
//! run still succeeds, so the process exits with status 0 in that case.
use crate::bands::{filter_with_report, WorkerCount, MAX_WORKERS};
use crate::diagnostics::DispatchReport;
use crate::error::FilterError;
use crate::image::io::{load_grayscale_image, save_grayscale_u8};
use log::warn;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub workers: WorkerCount,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage: {program} <input_image> <output_image> <num_workers>")]
    Usage { program: String },
    #[error("Number of workers must be between 1 and {max}, got `{value}`")]
    WorkerCount { value: String, max: usize },
    #[error("{0}")]
    Load(String),
    #[error(transparent)]
    Filter(#[from] FilterError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// Bad invocation; no work was attempted.
    Configuration,
    /// Input or memory could not be acquired.
    Resource,
}

impl CliError {
    pub fn class(&self) -> ErrorClass {
        match self {
            CliError::Usage { .. }
            | CliError::WorkerCount { .. }
            | CliError::Filter(FilterError::InvalidWorkerCount { .. }) => {
                ErrorClass::Configuration
            }
            CliError::Load(_) | CliError::Filter(_) => ErrorClass::Resource,
        }
    }
}

/// Parse `argv` (program name first) into validated arguments.
pub fn parse_args<I>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let program = args.next().unwrap_or_else(|| "sobel_bands".to_string());
    let rest: Vec<String> = args.collect();
    let [input, output, workers] = <[String; 3]>::try_from(rest)
        .map_err(|_| CliError::Usage { program })?;

    let workers = workers
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| WorkerCount::new(n).ok())
        .ok_or(CliError::WorkerCount {
            value: workers,
            max: MAX_WORKERS,
        })?;

    Ok(CliArgs {
        input: PathBuf::from(input),
        output: PathBuf::from(output),
        workers,
    })
}

/// Outcome of a run that did not fail.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub report: DispatchReport,
    /// `false` when writing the output image failed.
    pub saved: bool,
}

/// Load, filter, report the dispatch time on stdout, save.
pub fn run(args: &CliArgs) -> Result<RunSummary, CliError> {
    let gray = load_grayscale_image(&args.input).map_err(CliError::Load)?;
    let (edges, report) = filter_with_report(&gray.as_view(), args.workers.get())?;

    println!(
        "Execution time with {} workers: {:.6} ms",
        report.workers, report.elapsed_ms
    );

    let saved = match save_grayscale_u8(&edges, &args.output) {
        Ok(()) => true,
        Err(err) => {
            warn!("{err}");
            false
        }
    };
    Ok(RunSummary { report, saved })
}
