//! Facade crate for the Airwave candidate scoring engine.
//!
//! This crate re-exports the core domain types and the composite scorer so
//! callers can depend on a single crate.
//!
//! # Examples
//!
//! ```
//! use airwave_engine::{Bssid, BssScorer, CandidateRecord, CandidateScorer, ScoringConfig};
//!
//! let config = ScoringConfig::default();
//! let candidate = CandidateRecord::new(Bssid::new([2, 0, 0, 0, 0, 1]), 5180, -60);
//! assert!(BssScorer::standard().score(&config, &candidate, 0) > 0);
//! ```

#![forbid(unsafe_code)]

pub use airwave_core::{
    Band, BandClassifier, Bssid, BssidParseError, CandidateRecord, CandidateScorer, Capabilities,
    ChannelWidth, ConfigError, FrequencyBandClassifier, NoOceParser, OceIeParser, PclEntry,
    PclProvider, PerIndexTable, PlatformNss, PreferredChannelList, RssiConfig, ScoringConfig,
    SlotTable, StationNssProbe, WanMetrics, WeightConfig, is_better, preference_order,
};
pub use airwave_scorer::{BssScorer, ScoreBreakdown};

#[cfg(feature = "test-support")]
pub use airwave_core::test_support;
