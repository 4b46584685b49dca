//! Test doubles for the collaborator traits.
//!
//! Available to this crate's tests and, through the `test-support` feature,
//! to downstream crates that need deterministic OCE decoding or station
//! stream counts.

use crate::{
    Band, Capabilities, CandidateRecord, CandidateScorer, OceIeParser, ScoringConfig,
    StationNssProbe, WanMetrics,
};

/// OCE parser returning fixed attributes for any non-empty element.
///
/// An empty element decodes to nothing, matching a candidate that carries no
/// MBO/OCE IE payload.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StaticOceParser {
    /// Reduced WAN metrics to report.
    pub wan_metrics: Option<WanMetrics>,
    /// Whether the subnet-ID attribute is present.
    pub subnet_id: bool,
    /// AP transmit power to report.
    pub ap_tx_power: Option<i8>,
}

impl StaticOceParser {
    /// Parser reporting only a downlink capacity.
    #[must_use]
    pub const fn with_downlink_capacity(downlink_capacity: u8) -> Self {
        Self {
            wan_metrics: Some(WanMetrics { downlink_capacity }),
            subnet_id: false,
            ap_tx_power: None,
        }
    }
}

impl OceIeParser for StaticOceParser {
    fn reduced_wan_metrics(&self, ie: &[u8]) -> Option<WanMetrics> {
        self.wan_metrics.filter(|_| !ie.is_empty())
    }

    fn subnet_id_present(&self, ie: &[u8]) -> bool {
        self.subnet_id && !ie.is_empty()
    }

    fn ap_tx_power(&self, ie: &[u8]) -> Option<i8> {
        self.ap_tx_power.filter(|_| !ie.is_empty())
    }
}

/// Probe reporting the same stream count for every band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedNss(pub u8);

impl StationNssProbe for FixedNss {
    fn station_nss(&self, _capabilities: &Capabilities, _band: Option<Band>) -> u8 {
        self.0
    }
}

/// Scorer ranking by signal strength plus the PCL weight.
///
/// The score is `rssi + 100 + pcl_weight`, which keeps ranking tests
/// independent of the real scoring arithmetic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SignalOnlyScorer;

impl CandidateScorer for SignalOnlyScorer {
    fn score(&self, _config: &ScoringConfig, candidate: &CandidateRecord, pcl_weight: u8) -> i32 {
        i32::from(candidate.rssi_dbm) + 100 + i32::from(pcl_weight)
    }
}
