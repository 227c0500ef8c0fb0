use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use crate::error::{DomainError, DomainResult};

/// Images narrower than this width/height ratio are treated as portrait.
///
/// The cut-off sits below 1.0 on purpose: near-square images (0.9 up to 1.0)
/// land on the landscape branch.
pub const PORTRAIT_ASPECT_THRESHOLD: f64 = 0.9;

pub const MAX_RESOLUTION_SIDE: u32 = 16_384;

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const FULL_HD_LANDSCAPE: Self = Self::new(1920, 1080);
    pub const FULL_HD_PORTRAIT: Self = Self::new(1080, 1920);

    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> DomainResult<()> {
        let in_range = |side: u32| (1..=MAX_RESOLUTION_SIDE).contains(&side);
        if in_range(self.width) && in_range(self.height) {
            Ok(())
        } else {
            Err(DomainError::InvalidResolution(format!(
                "{self} is outside 1x1..={MAX_RESOLUTION_SIDE}x{MAX_RESOLUTION_SIDE}"
            )))
        }
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidResolution(format!("expected WIDTHxHEIGHT, got '{value}'"));

        let (width, height) = value
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width = width.trim().parse::<u32>().map_err(|_| invalid())?;
        let height = height.trim().parse::<u32>().map_err(|_| invalid())?;

        let resolution = Self::new(width, height);
        resolution.validate()?;
        Ok(resolution)
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    #[must_use]
    pub fn classify(width: u32, height: u32) -> Self {
        if Resolution::new(width, height).aspect_ratio() < PORTRAIT_ASPECT_THRESHOLD {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetResolutions {
    pub landscape: Resolution,
    pub portrait: Resolution,
}

impl TargetResolutions {
    #[must_use]
    pub fn new(landscape: Resolution, portrait: Resolution) -> Self {
        Self {
            landscape,
            portrait,
        }
    }

    #[must_use]
    pub fn for_orientation(&self, orientation: Orientation) -> Resolution {
        match orientation {
            Orientation::Landscape => self.landscape,
            Orientation::Portrait => self.portrait,
        }
    }

    /// Classifies the source dimensions and picks the matching target.
    #[must_use]
    pub fn select(&self, width: u32, height: u32) -> (Orientation, Resolution) {
        let orientation = Orientation::classify(width, height);
        (orientation, self.for_orientation(orientation))
    }
}

impl Default for TargetResolutions {
    fn default() -> Self {
        Self::new(Resolution::FULL_HD_LANDSCAPE, Resolution::FULL_HD_PORTRAIT)
    }
}
