//! Parameter types for image operations.
//!
//! These types describe *what* to do, not *how* to do it. The option sets are
//! closed, so they are enums rather than lookup tables.
//!
//! ## Types
//!
//! - [`Platform`]: Social network target canvas. Parsed case-insensitively.
//! - [`FilterChoice`] / [`Filter`]: Menu filter codes 1-10.
//! - [`Normalization`]: How the equalization CDF is scaled.

use super::error::ImagingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Social network whose recommended canvas a resize targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Youtube,
    Instagram,
    Twitter,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Youtube,
        Platform::Instagram,
        Platform::Twitter,
        Platform::Facebook,
    ];

    /// Lowercase name, as used in output filenames.
    pub fn name(self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
        }
    }

    /// Target canvas as `(width, height)`.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Platform::Youtube => (1280, 720),
            Platform::Instagram => (1080, 1080),
            Platform::Twitter => (1200, 675),
            Platform::Facebook => (1200, 630),
        }
    }

    /// Comma-separated list of valid names, for error messages and prompts.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = ImagingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| ImagingError::UnsupportedPlatform {
                name: s.trim().to_string(),
                valid: Self::valid_names(),
            })
    }
}

/// Named convolution filters, in menu order (codes 2-10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Blur,
    Contour,
    Detail,
    EdgeEnhance,
    EdgeEnhanceMore,
    Emboss,
    FindEdges,
    Sharpen,
    Smooth,
}

impl Filter {
    pub const ALL: [Filter; 9] = [
        Filter::Blur,
        Filter::Contour,
        Filter::Detail,
        Filter::EdgeEnhance,
        Filter::EdgeEnhanceMore,
        Filter::Emboss,
        Filter::FindEdges,
        Filter::Sharpen,
        Filter::Smooth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Filter::Blur => "Blur",
            Filter::Contour => "Contour",
            Filter::Detail => "Detail",
            Filter::EdgeEnhance => "Edge Enhance",
            Filter::EdgeEnhanceMore => "Edge Enhance More",
            Filter::Emboss => "Emboss",
            Filter::FindEdges => "Find Edges",
            Filter::Sharpen => "Sharpen",
            Filter::Smooth => "Smooth",
        }
    }
}

/// A menu filter selection: keep the original or apply one [`Filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChoice {
    Original,
    Apply(Filter),
}

impl FilterChoice {
    /// Map a menu code (1 = original, 2-10 = filters) to a choice.
    pub fn from_code(code: i64) -> Result<Self, ImagingError> {
        match code {
            1 => Ok(FilterChoice::Original),
            2..=10 => Ok(FilterChoice::Apply(Filter::ALL[(code - 2) as usize])),
            _ => Err(ImagingError::InvalidFilter(code)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterChoice::Original => "Original",
            FilterChoice::Apply(filter) => filter.label(),
        }
    }
}

/// Scaling applied to the cumulative histogram before remapping.
///
/// `PeakBucket` scales the CDF so its maximum equals the tallest histogram
/// bucket, which is what earlier releases of the tool produced. `Standard`
/// scales to 255, i.e. textbook histogram equalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Normalization {
    #[default]
    PeakBucket,
    Standard,
}
