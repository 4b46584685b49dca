//! Frequency bands and the classifier seam used to resolve them.
//!
//! Band classification belongs to the regulatory layer; the scorer only
//! needs to know which of the three Wi-Fi bands a candidate operates on.
//!
//! # Examples
//! ```
//! use airwave_core::{Band, BandClassifier, FrequencyBandClassifier};
//!
//! assert_eq!(FrequencyBandClassifier.classify(2437), Some(Band::TwoGhz));
//! assert_eq!(FrequencyBandClassifier.classify(5955), Some(Band::SixGhz));
//! assert_eq!(Band::FiveGhz.to_string(), "5GHz");
//! ```

use std::fmt;
use std::ops::RangeInclusive;

/// Wi-Fi operating band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Band {
    /// 2.4 GHz band.
    #[cfg_attr(feature = "serde", serde(rename = "2.4GHz"))]
    TwoGhz,
    /// 5 GHz band.
    #[cfg_attr(feature = "serde", serde(rename = "5GHz"))]
    FiveGhz,
    /// 6 GHz band.
    #[cfg_attr(feature = "serde", serde(rename = "6GHz"))]
    SixGhz,
}

impl Band {
    /// Position of this band in the per-index band table.
    ///
    /// Index 3 of the table is reserved.
    #[must_use]
    pub const fn table_index(self) -> usize {
        match self {
            Self::TwoGhz => 0,
            Self::FiveGhz => 1,
            Self::SixGhz => 2,
        }
    }

    /// Return the band as a short label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TwoGhz => "2.4GHz",
            Self::FiveGhz => "5GHz",
            Self::SixGhz => "6GHz",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the band of an operating frequency.
///
/// Implementations return `None` for frequencies outside every known band;
/// the scorer awards no band preference to such candidates.
pub trait BandClassifier: Send + Sync {
    /// Classify `frequency_mhz` into a [`Band`].
    fn classify(&self, frequency_mhz: u32) -> Option<Band>;
}

/// Classifier based on the channel-centre frequency ranges of each band.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyBandClassifier;

const TWO_GHZ_MHZ: RangeInclusive<u32> = 2400..=2500;
// Includes the 4.9 GHz public-safety channels.
const FIVE_GHZ_MHZ: RangeInclusive<u32> = 4900..=5900;
const SIX_GHZ_MHZ: RangeInclusive<u32> = 5925..=7125;

impl BandClassifier for FrequencyBandClassifier {
    fn classify(&self, frequency_mhz: u32) -> Option<Band> {
        if TWO_GHZ_MHZ.contains(&frequency_mhz) {
            Some(Band::TwoGhz)
        } else if FIVE_GHZ_MHZ.contains(&frequency_mhz) {
            Some(Band::FiveGhz)
        } else if SIX_GHZ_MHZ.contains(&frequency_mhz) {
            Some(Band::SixGhz)
        } else {
            None
        }
    }
}
