use std::path::{Path, PathBuf};

use tone_stretch::output::{encode, preview_png};
use tone_stretch::{Branch, OutputFormat, StretchParams, StretchReport};

use crate::error::AppError;
use crate::models::AppConfig;
use crate::services::naming;

/// Where (and whether) to write the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewTarget {
    /// No preview
    Disabled,
    /// Timestamped name in the output directory
    Auto,
    /// Explicit path
    Path(PathBuf),
}

/// Everything one pipeline run needs besides the input file
#[derive(Debug, Clone)]
pub struct ProcessRequest {
    pub params: StretchParams,
    pub output: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub preview: PreviewTarget,
    pub preview_width: usize,
    /// Add the input stem to generated preview names
    pub unique_preview_names: bool,
    /// Stem for generated names instead of the input's sanitized stem
    pub name: Option<String>,
}

impl ProcessRequest {
    /// Request built from configuration defaults
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            params: config.params.clone(),
            output: None,
            output_dir: config.output_dir.clone(),
            format: config.output_format,
            preview: if config.preview.enabled {
                PreviewTarget::Auto
            } else {
                PreviewTarget::Disabled
            },
            preview_width: config.preview.max_width,
            unique_preview_names: false,
            name: None,
        }
    }

    /// Check settings the pipeline parameters do not cover
    pub fn validate(&self) -> Result<(), AppError> {
        if self.preview != PreviewTarget::Disabled && self.preview_width == 0 {
            return Err(AppError::InvalidValue {
                key: "preview.max_width".to_string(),
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Result of processing one file
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub preview: Option<PathBuf>,
    pub width: usize,
    pub height: usize,
    pub report: StretchReport,
}

/// Loads an input, runs the pipeline and writes the artifacts.
///
/// The input file is only read, so the same file can be reprocessed with
/// different parameters.
#[derive(Debug, Default, Clone)]
pub struct ProcessingService;

impl ProcessingService {
    pub fn new() -> Self {
        Self
    }

    pub fn process_file(
        &self,
        input: &Path,
        request: &ProcessRequest,
    ) -> Result<ProcessOutcome, AppError> {
        let start = std::time::Instant::now();
        request.validate()?;

        let outcome = tone_stretch::process_path(input, &request.params)?;
        let (width, height) = (outcome.image.width(), outcome.image.height());
        log_report(input, &outcome.report);

        // Encode everything before touching the file system
        let bytes = encode(&outcome.image, request.format)?;
        let preview_bytes = match request.preview {
            PreviewTarget::Disabled => None,
            _ => Some(preview_png(&outcome.image, request.preview_width)?),
        };

        let timestamp = naming::timestamp();
        let stem = request
            .name
            .clone()
            .unwrap_or_else(|| naming::secure_stem(input));
        let output = match &request.output {
            Some(path) => path.clone(),
            None => request
                .output_dir
                .join(naming::output_file_name(&stem, &timestamp, request.format)),
        };
        write_file(&output, &bytes)?;

        let preview = match (preview_bytes, &request.preview) {
            (Some(png), target) => {
                let path = match target {
                    PreviewTarget::Path(path) => path.clone(),
                    _ => {
                        let suffix = request.unique_preview_names.then_some(stem.as_str());
                        request
                            .output_dir
                            .join(naming::preview_file_name(&timestamp, suffix))
                    }
                };
                write_file(&path, &png)?;
                Some(path)
            }
            (None, _) => None,
        };

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            width,
            height,
            branch = %outcome.report.branch,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Processed image"
        );

        Ok(ProcessOutcome {
            input: input.to_path_buf(),
            output,
            preview,
            width,
            height,
            report: outcome.report,
        })
    }
}

fn log_report(input: &Path, report: &StretchReport) {
    tracing::debug!(
        input = %input.display(),
        max = report.input_max,
        mean = report.input_mean,
        branch = %report.branch,
        "Selected processing branch"
    );

    if report.branch == Branch::Raw {
        for channel in report.degenerate_channels() {
            tracing::warn!(
                input = %input.display(),
                %channel,
                "Channel has no dynamic range, output channel will be black"
            );
        }
    }

    if let Some(jump) = report.mid_discontinuity.filter(|j| j.abs() > f32::EPSILON) {
        tracing::debug!(jump, "Tone curve is discontinuous at mid_threshold");
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }
    std::fs::write(path, bytes).map_err(|e| AppError::io(path, e))
}
