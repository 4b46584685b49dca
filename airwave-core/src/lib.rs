//! Core domain types for the Airwave candidate scoring engine.
//!
//! The crate models the inputs of a ranking pass: the immutable
//! [`ScoringConfig`] snapshot, the per-BSS [`CandidateRecord`] produced by
//! discovery, and the collaborator traits the scorer consults for band
//! classification, OCE attribute decoding, station stream counts and
//! preferred-channel weights. The arithmetic lives in `airwave-scorer`; this
//! crate only carries data, validation and the [`CandidateScorer`] seam.
//!
//! # Examples
//!
//! ```
//! use airwave_core::{Bssid, CandidateRecord, ChannelWidth, ScoringConfig};
//!
//! # fn main() -> Result<(), airwave_core::ConfigError> {
//! let config = ScoringConfig::default().validate()?;
//! let candidate = CandidateRecord::new(Bssid::new([0, 1, 2, 3, 4, 5]), 5180, -58)
//!     .with_channel_width(ChannelWidth::Mhz80)
//!     .with_nss(2);
//! assert_eq!(candidate.bss_score, 0);
//! assert_eq!(config.rssi.best_dbm(), -55);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod band;
pub mod candidate;
pub mod config;
mod error;
pub mod nss;
pub mod oce;
pub mod pcl;
pub mod scorer;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use band::{Band, BandClassifier, FrequencyBandClassifier};
pub use candidate::{Bssid, CandidateRecord, ChannelWidth};
pub use config::{
    Capabilities, MAX_SLOT_INDEX, PerIndexTable, RssiConfig, ScoringConfig, SlotTable,
    WeightConfig,
};
pub use error::{BssidParseError, ConfigError};
pub use nss::{PlatformNss, StationNssProbe};
pub use oce::{NoOceParser, OceIeParser, WanMetrics};
pub use pcl::{PclEntry, PclProvider, PreferredChannelList};
pub use scorer::{CandidateScorer, is_better, preference_order};
