use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Numeric proxy persisted for confidence text that matches no band.
pub const UNKNOWN_BAND_PROXY: u8 = 50;

/// Human-readable confidence band shown in place of the raw score.
///
/// Forward mapping (score → band) uses inclusive lower bounds of 80, 50,
/// and 20. The reverse mapping (band → proxy score) is lossy; persisted
/// suggestions only ever carry the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ConfidenceBand {
    #[serde(rename = "Very low confidence")]
    VeryLow,
    #[serde(rename = "Low confidence")]
    Low,
    #[serde(rename = "Moderate confidence")]
    Moderate,
    #[serde(rename = "High confidence")]
    High,
}

impl ConfidenceBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::High
        } else if score >= 50 {
            Self::Moderate
        } else if score >= 20 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very low confidence",
            Self::Low => "Low confidence",
            Self::Moderate => "Moderate confidence",
            Self::High => "High confidence",
        }
    }

    /// The numeric stand-in stored alongside a persisted band.
    pub fn proxy_score(&self) -> u8 {
        match self {
            Self::VeryLow => 10,
            Self::Low => 30,
            Self::Moderate => 60,
            Self::High => 85,
        }
    }

    /// Reverse-map free confidence text to its stored numeric proxy.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Text that names no band maps to [`UNKNOWN_BAND_PROXY`].
    pub fn proxy_for_label(text: &str) -> u8 {
        text.parse::<Self>()
            .map(|band| band.proxy_score())
            .unwrap_or(UNKNOWN_BAND_PROXY)
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConfidenceBand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "very low confidence" => Ok(Self::VeryLow),
            "low confidence" => Ok(Self::Low),
            "moderate confidence" => Ok(Self::Moderate),
            "high confidence" => Ok(Self::High),
            _ => Err(CoreError::UnknownConfidenceBand(s.to_string())),
        }
    }
}
