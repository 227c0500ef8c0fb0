use serde::Serialize;

use crate::options::{NEUTRAL_PERCENT, ProcessingOptions};

/// Gaussian blur radius in pixels. Not configurable.
pub const BLUR_RADIUS: f32 = 1.0;

/// One cosmetic adjustment. Every variant has a neutral setting at which it
/// leaves the buffer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum FilterStep {
    Blur { enabled: bool },
    Brightness { percent: i32 },
    Contrast { percent: i32 },
    Grayscale { enabled: bool },
}

impl FilterStep {
    #[must_use]
    pub fn is_identity(&self) -> bool {
        match *self {
            Self::Blur { enabled } | Self::Grayscale { enabled } => !enabled,
            Self::Brightness { percent } | Self::Contrast { percent } => percent == NEUTRAL_PERCENT,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Blur { .. } => "blur",
            Self::Brightness { .. } => "brightness",
            Self::Contrast { .. } => "contrast",
            Self::Grayscale { .. } => "grayscale",
        }
    }
}

/// Converts a percentage option into a multiplicative enhancement factor.
#[must_use]
pub fn percent_to_factor(percent: i32) -> f64 {
    f64::from(percent) / 100.0
}

/// The fixed blur -> brightness -> contrast -> grayscale sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterChain {
    steps: [FilterStep; 4],
}

impl FilterChain {
    #[must_use]
    pub fn from_options(options: &ProcessingOptions) -> Self {
        Self {
            steps: [
                FilterStep::Blur {
                    enabled: options.apply_blur,
                },
                FilterStep::Brightness {
                    percent: options.brightness,
                },
                FilterStep::Contrast {
                    percent: options.contrast,
                },
                FilterStep::Grayscale {
                    enabled: options.grayscale,
                },
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterStep> {
        self.steps.iter()
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.steps.iter().all(FilterStep::is_identity)
    }

    #[must_use]
    pub fn active_step_names(&self) -> Vec<&'static str> {
        self.steps
            .iter()
            .filter(|step| !step.is_identity())
            .map(FilterStep::name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_order_is_fixed() {
        let chain = ProcessingOptions::default().filter_chain();
        let names: Vec<_> = chain.iter().map(FilterStep::name).collect();
        assert_eq!(names, ["blur", "brightness", "contrast", "grayscale"]);
    }

    #[test]
    fn default_options_only_blur() {
        let chain = ProcessingOptions::default().filter_chain();
        assert!(!chain.is_identity());
        assert_eq!(chain.active_step_names(), ["blur"]);
    }

    #[test]
    fn steps_are_identity_at_neutral_values() {
        assert!(FilterStep::Blur { enabled: false }.is_identity());
        assert!(FilterStep::Brightness { percent: 100 }.is_identity());
        assert!(FilterStep::Contrast { percent: 100 }.is_identity());
        assert!(FilterStep::Grayscale { enabled: false }.is_identity());

        assert!(!FilterStep::Blur { enabled: true }.is_identity());
        assert!(!FilterStep::Brightness { percent: 0 }.is_identity());
        assert!(!FilterStep::Contrast { percent: -20 }.is_identity());
        assert!(!FilterStep::Grayscale { enabled: true }.is_identity());
    }

    #[test]
    fn every_step_active_when_all_options_set() {
        let options = ProcessingOptions {
            brightness: 150,
            contrast: 80,
            grayscale: true,
            ..ProcessingOptions::default()
        };
        assert_eq!(
            options.filter_chain().active_step_names(),
            ["blur", "brightness", "contrast", "grayscale"]
        );
    }

    #[test]
    fn factors_scale_from_percent() {
        assert!((percent_to_factor(100) - 1.0).abs() < f64::EPSILON);
        assert!((percent_to_factor(0)).abs() < f64::EPSILON);
        assert!((percent_to_factor(250) - 2.5).abs() < f64::EPSILON);
        assert!((percent_to_factor(-50) + 0.5).abs() < f64::EPSILON);
    }
}
