//! Settings suggestions derived from the size and shape of an upload.
//!
//! This policy is advisory only and never feeds the pipeline on its own:
//! callers show the suggestion and decide what to submit.

use serde::Serialize;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use crate::resolution::Resolution;

/// Height must exceed width by this factor before the mobile presets apply.
const MOBILE_PORTRAIT_RATIO: f64 = 1.2;

const SMALL_SIDE: u32 = 1000;
const LARGE_WIDTH: u32 = 3000;
const LARGE_HEIGHT: u32 = 2000;

type Tier = (Resolution, &'static str);

const MOBILE_PORTRAIT_TIERS: [Tier; 5] = [
    (Resolution::new(1440, 3200), "Mobile QHD+ Portrait (1440x3200)"),
    (Resolution::new(1170, 2532), "iPhone 13/14 Portrait (1170x2532)"),
    (Resolution::new(1284, 2778), "iPhone 14 Pro Max Portrait (1284x2778)"),
    (Resolution::new(1080, 2400), "Mobile FHD+ Portrait (1080x2400)"),
    (Resolution::new(1080, 1920), "Mobile Full HD Portrait (1080x1920)"),
];
const MOBILE_PORTRAIT_FALLBACK: Tier = (
    Resolution::new(720, 1280),
    "Mobile HD Portrait (720x1280) - Image is small",
);

const MIXED_LANDSCAPE_LIMIT: Resolution = Resolution::new(2560, 1440);
const MIXED_LANDSCAPE_TIERS: [Tier; 2] = [
    (Resolution::new(2400, 1080), "Landscape FHD+ (2400x1080)"),
    (Resolution::new(1920, 1080), "Full HD Landscape (1920x1080)"),
];
const MIXED_LANDSCAPE_FALLBACK: Tier = (Resolution::new(1280, 720), "HD Landscape (1280x720)");

const DESKTOP_TIERS: [Tier; 3] = [
    (Resolution::new(3840, 2160), "Desktop 4K (3840x2160)"),
    (Resolution::new(2560, 1440), "Desktop QHD (2560x1440)"),
    (Resolution::new(1920, 1080), "Desktop Full HD (1920x1080)"),
];
const DESKTOP_FALLBACK: Tier = (
    Resolution::new(1280, 720),
    "Desktop HD (1280x720) - Image is small",
);

const SQUARE_DEFAULT: Tier = (Resolution::new(1920, 1080), "Default resolution (1920x1080)");

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestedFilters {
    pub apply_blur: bool,
    pub brightness: i32,
    pub contrast: i32,
    pub grayscale: bool,
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSuggestion {
    pub source: Resolution,
    pub resolution: Resolution,
    pub resolution_label: String,
    /// `None` means the current filter settings are fine as they are.
    pub filters: Option<SuggestedFilters>,
    pub filter_note: String,
}

#[must_use]
pub fn suggest_settings(source: Resolution) -> SettingsSuggestion {
    let (resolution, label) = suggest_resolution(source);
    let (filters, filter_note) = suggest_filters(source);

    SettingsSuggestion {
        source,
        resolution,
        resolution_label: label.to_string(),
        filters,
        filter_note: filter_note.to_string(),
    }
}

fn suggest_resolution(source: Resolution) -> Tier {
    let Resolution { width, height } = source;

    if f64::from(height) > f64::from(width) * MOBILE_PORTRAIT_RATIO {
        return first_fitting(&MOBILE_PORTRAIT_TIERS, source).unwrap_or(MOBILE_PORTRAIT_FALLBACK);
    }

    if width > height {
        let within_mixed_range =
            width <= MIXED_LANDSCAPE_LIMIT.width && height <= MIXED_LANDSCAPE_LIMIT.height;
        return if within_mixed_range {
            first_fitting(&MIXED_LANDSCAPE_TIERS, source).unwrap_or(MIXED_LANDSCAPE_FALLBACK)
        } else {
            first_fitting(&DESKTOP_TIERS, source).unwrap_or(DESKTOP_FALLBACK)
        };
    }

    SQUARE_DEFAULT
}

fn first_fitting(tiers: &[Tier], source: Resolution) -> Option<Tier> {
    tiers
        .iter()
        .find(|(target, _)| source.width >= target.width && source.height >= target.height)
        .copied()
}

fn suggest_filters(source: Resolution) -> (Option<SuggestedFilters>, &'static str) {
    if source.width < SMALL_SIDE || source.height < SMALL_SIDE {
        return (
            Some(SuggestedFilters {
                apply_blur: false,
                brightness: 110,
                contrast: 120,
                grayscale: false,
            }),
            "Increased contrast (+20%) and brightness (+10%), blur disabled.",
        );
    }

    if source.width > LARGE_WIDTH && source.height > LARGE_HEIGHT {
        return (
            Some(SuggestedFilters {
                apply_blur: true,
                brightness: 100,
                contrast: 100,
                grayscale: false,
            }),
            "Light blur applied. Default contrast/brightness retained.",
        );
    }

    (None, "Default filters applied.")
}
