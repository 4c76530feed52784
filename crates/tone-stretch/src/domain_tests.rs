//! Domain-critical regression tests for tone-stretch.
//!
//! These tests pin down the behavior a user sees in the final image, not
//! individual helpers. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::process;
    use crate::buffer::{Channel, RgbBuffer};
    use crate::correct::correct_pixel;
    use crate::params::StretchParams;
    use crate::stretch::{needs_autostretch, Branch};
    use crate::tone::{boost_saturation, Hsv, ToneCurve};

    // ========================================================================
    // Branch selection
    // ========================================================================

    /// If this breaks, it means: a flat, dim frame no longer takes the raw
    /// branch, or the constant-channel epsilon path produces garbage instead
    /// of black.
    #[test]
    fn test_uniform_dim_frame_goes_black() {
        let buffer = RgbBuffer::filled(16, 16, [0.05, 0.05, 0.05]).unwrap();
        let outcome = process(buffer, &StretchParams::default()).unwrap();

        assert_eq!(outcome.report.branch, Branch::Raw);
        assert_eq!(outcome.report.degenerate_channels().len(), 3);
        assert!(
            outcome.image.as_raw().iter().all(|&v| v <= 1),
            "REGRESSION: constant dim frame should come out black"
        );
    }

    /// If this breaks, it means: the tone stage no longer applies
    /// `bright_multiplier` to a mid-gray frame, or quantization rounds
    /// instead of truncating (0.55 * 255 = 140.25).
    #[test]
    fn test_uniform_mid_gray_maps_to_140() {
        let buffer = RgbBuffer::filled(8, 8, [0.5, 0.5, 0.5]).unwrap();
        let outcome = process(buffer, &StretchParams::neutral_correction()).unwrap();

        assert_eq!(outcome.report.branch, Branch::Standard);
        for px in outcome.image.as_raw().chunks_exact(3) {
            assert_eq!(px, &[140, 140, 140], "REGRESSION: 0.5 gray must map to 140");
        }
    }

    /// If this breaks, it means: detection depends on something besides the
    /// global max and mean, so a one-pixel change flips the branch even
    /// when it barely moves the mean.
    #[test]
    fn test_single_pixel_change_keeps_branch() {
        let (w, h) = (32, 32);
        let mut data = vec![0.04f32; w * h * 3];
        let before = RgbBuffer::new(w, h, data.clone()).unwrap();

        data[100] = 0.5;
        let after = RgbBuffer::new(w, h, data).unwrap();

        let mean_shift = (after.mean() - before.mean()).abs();
        assert!(mean_shift <= 1.0 / (w * h) as f64);
        assert_eq!(Branch::detect(&before), Branch::detect(&after));
        assert!(needs_autostretch(after.max(), after.mean()));
    }

    /// If this breaks, it means: normalization rescales buffers that are
    /// already in range, brightening or darkening pre-normalized input.
    #[test]
    fn test_normalization_noop_in_range() {
        let data = vec![0.1, 0.2, 0.3, 0.9, 0.8, 1.0];
        let mut buffer = RgbBuffer::new(2, 1, data.clone()).unwrap();
        assert!(!buffer.normalize());
        assert_eq!(buffer.as_slice(), data.as_slice());

        let mut big = RgbBuffer::new(2, 1, vec![2.0, 4.0, 8.0, 0.0, 0.0, 0.0]).unwrap();
        assert!(big.normalize());
        let once = big.clone();
        assert!(!big.normalize());
        assert_eq!(big, once);
    }

    // ========================================================================
    // Channel correction
    // ========================================================================

    /// If this breaks, it means: the green gain is applied before gamma or
    /// inverted, so raising it no longer brightens green.
    #[test]
    fn test_green_multiplier_monotonic() {
        let base = StretchParams::default();
        for &g in &[0.05f32, 0.3, 0.7, 1.0] {
            let lo = correct_pixel([g, g, g], &base.clone().green_multiplier(0.9))[1];
            let hi = correct_pixel([g, g, g], &base.clone().green_multiplier(1.1))[1];
            assert!(hi > lo, "REGRESSION: green gain not monotonic at {g}");
        }
    }

    // ========================================================================
    // Tone curve
    // ========================================================================

    /// If this breaks, it means: the ratio clamp is gone and a steep curve
    /// can blow pixels up, or black pixels divide by zero.
    #[test]
    fn test_ratio_bounded_and_finite() {
        let curves = [
            ToneCurve::new(&StretchParams::default()),
            ToneCurve::new(&StretchParams::default().dark_multiplier(10.0).mid_boost(9.0)),
        ];
        for curve in curves {
            assert!(curve.ratio(0.0).is_finite());
            for i in 0..=200 {
                let r = curve.ratio(i as f32 / 200.0);
                assert!((0.0..=3.0).contains(&r), "REGRESSION: ratio {r} outside [0, 3]");
            }
        }
    }

    /// If this breaks, it means: someone "fixed" the curve formula. With
    /// default parameters the curve jumps by 0.02 at mid_threshold; the
    /// formula is kept as-is and the jump is only reported.
    #[test]
    fn test_default_curve_jump_is_preserved() {
        let curve = ToneCurve::new(&StretchParams::default());
        let jump = curve.mid_discontinuity();
        assert!(
            (jump - 0.02).abs() < 1e-6,
            "REGRESSION: default curve jump at mid_threshold changed to {jump}"
        );
        assert!((curve.value(0.4) - 0.44).abs() < 1e-6);
        assert!((curve.value(0.399_999) - 0.42).abs() < 1e-5);
    }

    // ========================================================================
    // HSV saturation
    // ========================================================================

    /// If this breaks, it means: the HSV round trip lost precision (e.g.
    /// hue quantized to 8 bits), shifting colors even with no boost.
    #[test]
    fn test_hsv_round_trip_exhaustive_within_one() {
        for r in (0..=255u16).step_by(5) {
            for g in (0..=255u16).step_by(5) {
                for b in (0..=255u16).step_by(5) {
                    let rgb = [r as u8, g as u8, b as u8];
                    let back = Hsv::from_rgb8(rgb).to_rgb8();
                    for c in 0..3 {
                        assert!(
                            (rgb[c] as i16 - back[c] as i16).abs() <= 1,
                            "REGRESSION: {rgb:?} round-tripped to {back:?}"
                        );
                    }
                }
            }
        }
    }

    /// If this breaks, it means: saturation_boost = 0 no longer leaves the
    /// standard-branch output untouched.
    #[test]
    fn test_zero_boost_matches_quantized_tone_output() {
        let data: Vec<f32> = (0..64 * 3).map(|i| 0.2 + (i % 29) as f32 / 40.0).collect();
        let buffer = RgbBuffer::new(8, 8, data).unwrap();
        let params = StretchParams::default().saturation_boost(0.0);

        let mut expected = buffer.clone();
        crate::correct::apply_channel_correction(&mut expected, &params);
        ToneCurve::new(&params).apply(&mut expected);
        let expected = expected.to_rgb8();

        let outcome = process(buffer, &params).unwrap();
        assert_eq!(outcome.report.branch, Branch::Standard);
        for (a, b) in outcome.image.as_raw().iter().zip(expected.as_raw()) {
            assert!((*a as i16 - *b as i16).abs() <= 1);
        }
    }

    /// If this breaks, it means: the boost is no longer weighted by
    /// brightness, so dark noisy background gets as saturated as stars.
    #[test]
    fn test_boost_weighted_by_brightness() {
        let mut dark = crate::output::Rgb8Image::new(1, 1, vec![40, 30, 30]);
        let mut bright = crate::output::Rgb8Image::new(1, 1, vec![240, 180, 180]);
        boost_saturation(&mut dark, 1.0);
        boost_saturation(&mut bright, 1.0);

        let sat = |px: [u8; 3]| Hsv::from_rgb8(px).s;
        let dark_gain = sat(dark.pixel(0, 0)) / sat([40, 30, 30]);
        let bright_gain = sat(bright.pixel(0, 0)) / sat([240, 180, 180]);
        assert!(
            bright_gain > dark_gain,
            "REGRESSION: bright gain {bright_gain} should exceed dark gain {dark_gain}"
        );
    }

    // ========================================================================
    // Auto-stretch
    // ========================================================================

    /// If this breaks, it means: the stretch uses min/max instead of
    /// percentiles, so one hot pixel crushes the whole frame.
    #[test]
    fn test_hot_pixel_does_not_crush_frame() {
        let (w, h) = (400, 400);
        let mut data: Vec<f32> = (0..w * h * 3).map(|i| 0.01 + (i % 7) as f32 * 0.002).collect();
        data[0] = 0.85;
        let buffer = RgbBuffer::new(w, h, data).unwrap();
        let outcome = process(buffer, &StretchParams::neutral_correction()).unwrap();

        assert_eq!(outcome.report.branch, Branch::Raw);
        let mean: f64 = outcome.image.as_raw().iter().map(|&v| v as f64).sum::<f64>()
            / outcome.image.as_raw().len() as f64;
        assert!(mean > 100.0, "REGRESSION: stretched frame too dark (mean {mean})");
        assert!(outcome.report.degenerate_channels().is_empty());
        let red = outcome.report.channel_ranges.unwrap()[Channel::Red.index()];
        assert!(red.high < 0.1, "hot pixel leaked into the clip range");
    }
}
