use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::AppError;
use crate::services::{naming, ProcessOutcome, ProcessRequest, ProcessingService};

/// Per-file results of a batch run, in input order
#[derive(Debug)]
pub struct BatchReport {
    pub results: Vec<(PathBuf, Result<ProcessOutcome, AppError>)>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&PathBuf, &AppError)> {
        self.results
            .iter()
            .filter_map(|(path, r)| r.as_ref().err().map(|e| (path, e)))
    }
}

/// Process independent files in parallel.
///
/// Each file gets its own buffer and its own copy of the parameters. An
/// explicit output path in `request` is ignored; every file is named from
/// its input, and inputs sharing a stem get `_2`, `_3`, ... suffixes so no
/// two files write the same output. `jobs` limits the worker threads
/// (default: one per core).
pub fn run_batch(
    service: &ProcessingService,
    inputs: &[PathBuf],
    request: &ProcessRequest,
    jobs: Option<usize>,
) -> Result<BatchReport, AppError> {
    request.validate()?;
    let request = ProcessRequest {
        output: None,
        unique_preview_names: true,
        ..request.clone()
    };
    let stems = naming::unique_stems(inputs);

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder
        .build()
        .map_err(|e| AppError::Batch(format!("Failed to configure thread pool: {e}")))?;

    let done = AtomicUsize::new(0);
    let total = inputs.len();
    tracing::info!(files = total, threads = pool.current_num_threads(), "Starting batch");

    let results = pool.install(|| {
        inputs
            .par_iter()
            .zip(stems)
            .map(|(input, stem)| {
                let request = ProcessRequest {
                    name: Some(stem),
                    ..request.clone()
                };
                let result = service.process_file(input, &request);
                let count = done.fetch_add(1, Ordering::SeqCst) + 1;
                match &result {
                    Ok(_) => tracing::info!(count, total, input = %input.display(), "Done"),
                    Err(e) => {
                        tracing::error!(count, total, input = %input.display(), %e, "Failed")
                    }
                }
                (input.clone(), result)
            })
            .collect()
    });

    Ok(BatchReport { results })
}
