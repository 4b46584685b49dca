//! Composite scoring for wireless access-point candidates.
//!
//! The crate turns a [`CandidateRecord`](airwave_core::CandidateRecord) and a
//! [`ScoringConfig`](airwave_core::ScoringConfig) snapshot into a signed
//! preference score. The score is the sum of independently weighted
//! sub-scores:
//! - **Signal**: the RSSI ladder, plus the prorated percentage that scales
//!   capability bonuses by signal quality.
//! - **Capabilities**: HT, VHT, HE, channel width, spatial streams and VHT
//!   beamforming.
//! - **Channel**: preferred-channel-list weight, congestion and band
//!   preference.
//! - **OCE**: WAN capacity, AP transmit power and subnet identifier hints.
//!
//! [`BssScorer`] implements [`CandidateScorer`](airwave_core::CandidateScorer),
//! so ranking a scan result is a single call.
//!
//! # Examples
//!
//! ```
//! use airwave_core::{
//!     Bssid, CandidateRecord, CandidateScorer, PclEntry, PreferredChannelList, ScoringConfig,
//! };
//! use airwave_scorer::BssScorer;
//!
//! # fn main() -> Result<(), airwave_core::ConfigError> {
//! let config = ScoringConfig::default().validate()?;
//! let pcl = PreferredChannelList::new(vec![PclEntry { frequency_mhz: 2437, weight: 255 }]);
//! let mut candidates = vec![
//!     CandidateRecord::new(Bssid::new([2, 0, 0, 0, 0, 1]), 2437, -75),
//!     CandidateRecord::new(Bssid::new([2, 0, 0, 0, 0, 2]), 5180, -52).with_vht(true),
//! ];
//!
//! let scorer = BssScorer::standard();
//! scorer.rank(&config, &mut candidates, &pcl);
//! assert_eq!(candidates[0].frequency_mhz, 5180);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod breakdown;
mod engine;
mod factors;
mod ladder;
mod slots;

pub use breakdown::ScoreBreakdown;
pub use engine::BssScorer;
pub use factors::{
    band_score, bandwidth_score, beamforming_score, capability_score, nss_index, nss_score,
    pcl_score, subnet_id_score,
};
pub use ladder::{BucketWindow, SignalLadder, ap_tx_power_score, rssi_score, same_bucket};
pub use slots::{
    CONGESTION_THRESHOLD, congestion_percentage, congestion_score, oce_wan_score, usable_slots,
};
