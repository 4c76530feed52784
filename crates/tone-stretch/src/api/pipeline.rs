//! The end-to-end pipeline.

use std::path::Path;

use super::StretchError;
use crate::buffer::{Channel, RgbBuffer};
use crate::correct::apply_channel_correction;
use crate::decode;
use crate::output::Rgb8Image;
use crate::params::StretchParams;
use crate::stretch::{auto_stretch, Branch, ChannelRange};
use crate::tone::{apply_tone_stage, ToneCurve};

/// What the pipeline decided and observed while processing one image.
#[derive(Debug, Clone, PartialEq)]
pub struct StretchReport {
    /// Path taken after normalization.
    pub branch: Branch,
    /// Global maximum of the normalized input.
    pub input_max: f32,
    /// Global mean of the normalized input.
    pub input_mean: f64,
    /// Per-channel clip ranges, present on the raw branch only.
    pub channel_ranges: Option<[ChannelRange; 3]>,
    /// Jump of the tone curve at `mid_threshold`, present on the standard
    /// branch only. Zero for a continuous curve.
    pub mid_discontinuity: Option<f32>,
}

impl StretchReport {
    /// Channels with no dynamic range during auto-stretch. They come out
    /// (near) black.
    pub fn degenerate_channels(&self) -> Vec<Channel> {
        self.channel_ranges
            .iter()
            .flatten()
            .filter(|range| range.is_degenerate())
            .map(|range| range.channel)
            .collect()
    }
}

/// Pipeline result: the 8-bit image plus its [`StretchReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct StretchOutcome {
    pub image: Rgb8Image,
    pub report: StretchReport,
}

/// Run the full pipeline on a buffer.
///
/// 1. Validate `params` (nothing is touched on failure)
/// 2. Normalize into `[0, 1]` by the global maximum if needed
/// 3. Pick the [`Branch`] from the buffer's max and mean
/// 4. Raw: auto-stretch then channel correction, quantize
/// 5. Standard: channel correction, tone curve, quantize, saturation boost
///
/// # Example
///
/// ```
/// use tone_stretch::{process, Branch, RgbBuffer, StretchParams};
///
/// let buffer = RgbBuffer::filled(4, 4, [0.5, 0.5, 0.5]).unwrap();
/// let outcome = process(buffer, &StretchParams::neutral_correction()).unwrap();
/// assert_eq!(outcome.report.branch, Branch::Standard);
/// assert_eq!(outcome.image.pixel(0, 0), [140, 140, 140]);
/// ```
pub fn process(mut buffer: RgbBuffer, params: &StretchParams) -> Result<StretchOutcome, StretchError> {
    params.validate()?;

    buffer.normalize();
    let input_max = buffer.max();
    let input_mean = buffer.mean();
    let branch = Branch::detect(&buffer);

    let outcome = match branch {
        Branch::Raw => {
            let ranges = auto_stretch(&mut buffer);
            apply_channel_correction(&mut buffer, params);
            StretchOutcome {
                image: buffer.to_rgb8(),
                report: StretchReport {
                    branch,
                    input_max,
                    input_mean,
                    channel_ranges: Some(ranges),
                    mid_discontinuity: None,
                },
            }
        }
        Branch::Standard => {
            apply_channel_correction(&mut buffer, params);
            let mid_discontinuity = ToneCurve::new(params).mid_discontinuity();
            StretchOutcome {
                image: apply_tone_stage(buffer, params),
                report: StretchReport {
                    branch,
                    input_max,
                    input_mean,
                    channel_ranges: None,
                    mid_discontinuity: Some(mid_discontinuity),
                },
            }
        }
    };

    Ok(outcome)
}

/// Decode an in-memory raster and run [`process`].
///
/// Parameters are validated before decoding.
pub fn process_bytes(bytes: &[u8], params: &StretchParams) -> Result<StretchOutcome, StretchError> {
    params.validate()?;
    let buffer = decode::load_bytes(bytes)?;
    process(buffer, params)
}

/// Read a raster file and run [`process`].
pub fn process_path(
    path: impl AsRef<Path>,
    params: &StretchParams,
) -> Result<StretchOutcome, StretchError> {
    params.validate()?;
    let buffer = decode::load_path(path)?;
    process(buffer, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamError;

    #[test]
    fn test_invalid_params_rejected_before_processing() {
        let buffer = RgbBuffer::filled(2, 2, [0.5, 0.5, 0.5]).unwrap();
        let err = process(buffer, &StretchParams::new().gamma_red(-1.0)).unwrap_err();
        assert!(matches!(
            err,
            StretchError::Params(ParamError::NonPositive { field: "gamma_red", .. })
        ));
    }

    #[test]
    fn test_process_bytes_validates_first() {
        // Invalid params win over an unreadable input
        let err = process_bytes(b"garbage", &StretchParams::new().saturation_boost(-1.0))
            .unwrap_err();
        assert!(matches!(err, StretchError::Params(_)));
    }

    #[test]
    fn test_raw_branch_report() {
        let buffer = RgbBuffer::filled(4, 4, [0.05, 0.05, 0.05]).unwrap();
        let outcome = process(buffer, &StretchParams::default()).unwrap();
        let report = &outcome.report;

        assert_eq!(report.branch, Branch::Raw);
        assert!(report.mid_discontinuity.is_none());
        assert_eq!(
            report.degenerate_channels(),
            vec![Channel::Red, Channel::Green, Channel::Blue]
        );
        assert!(outcome.image.as_raw().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_standard_branch_report() {
        let buffer = RgbBuffer::filled(4, 4, [0.5, 0.5, 0.5]).unwrap();
        let outcome = process(buffer, &StretchParams::default()).unwrap();
        let report = &outcome.report;

        assert_eq!(report.branch, Branch::Standard);
        assert!(report.channel_ranges.is_none());
        assert!(report.degenerate_channels().is_empty());
        let jump = report.mid_discontinuity.unwrap();
        assert!((jump - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_unnormalized_buffer_is_normalized() {
        // Max 4.0 -> scaled to 1.0, so the buffer is standard, not raw
        let buffer = RgbBuffer::new(2, 1, vec![4.0, 4.0, 4.0, 0.0, 0.0, 0.0]).unwrap();
        let outcome = process(buffer, &StretchParams::default()).unwrap();
        assert_eq!(outcome.report.input_max, 1.0);
        assert_eq!(outcome.report.branch, Branch::Standard);
    }

    #[test]
    fn test_output_dimensions_match_input() {
        let buffer = RgbBuffer::filled(7, 3, [0.3, 0.6, 0.2]).unwrap();
        let outcome = process(buffer, &StretchParams::default()).unwrap();
        assert_eq!(outcome.image.width(), 7);
        assert_eq!(outcome.image.height(), 3);
        assert_eq!(outcome.image.as_raw().len(), 7 * 3 * 3);
    }
}
