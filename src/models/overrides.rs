use clap::Args;
use tone_stretch::StretchParams;

/// Per-invocation parameter overrides, applied on top of the configured params
#[derive(Debug, Clone, Default, PartialEq, Args)]
pub struct ParamOverrides {
    /// Red channel gamma
    #[arg(long)]
    pub gamma_red: Option<f32>,

    /// Green channel gamma
    #[arg(long)]
    pub gamma_green: Option<f32>,

    /// Blue channel gamma
    #[arg(long)]
    pub gamma_blue: Option<f32>,

    /// Green gain after gamma
    #[arg(long)]
    pub green_multiplier: Option<f32>,

    /// Blue gain after gamma
    #[arg(long)]
    pub blue_multiplier: Option<f32>,

    /// Luminosity where the dark segment of the tone curve ends
    #[arg(long)]
    pub dark_threshold: Option<f32>,

    /// Slope of the dark segment
    #[arg(long)]
    pub dark_multiplier: Option<f32>,

    /// Luminosity where the bright segment starts
    #[arg(long)]
    pub mid_threshold: Option<f32>,

    /// Slope of the middle segment
    #[arg(long)]
    pub mid_boost: Option<f32>,

    /// Slope of the bright segment
    #[arg(long)]
    pub bright_multiplier: Option<f32>,

    /// Strength of the saturation boost (0 disables it)
    #[arg(long)]
    pub saturation_boost: Option<f32>,
}

impl ParamOverrides {
    /// Replace every field of `base` that has an override
    pub fn apply(&self, base: &StretchParams) -> StretchParams {
        let mut params = base.clone();
        let fields = [
            (&mut params.gamma_red, self.gamma_red),
            (&mut params.gamma_green, self.gamma_green),
            (&mut params.gamma_blue, self.gamma_blue),
            (&mut params.green_multiplier, self.green_multiplier),
            (&mut params.blue_multiplier, self.blue_multiplier),
            (&mut params.dark_threshold, self.dark_threshold),
            (&mut params.dark_multiplier, self.dark_multiplier),
            (&mut params.mid_threshold, self.mid_threshold),
            (&mut params.mid_boost, self.mid_boost),
            (&mut params.bright_multiplier, self.bright_multiplier),
            (&mut params.saturation_boost, self.saturation_boost),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        params
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
