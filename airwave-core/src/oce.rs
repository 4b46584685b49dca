//! OCE attribute decoding seam.
//!
//! Candidates may carry an opaque MBO/OCE information element. Decoding the
//! attribute TLVs is the job of the frame-parsing layer; the scorer asks an
//! [`OceIeParser`] for the three attributes it cares about.

/// Reduced WAN metrics advertised by an OCE access point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WanMetrics {
    /// Available downlink capacity, expressed as a 4-bit index (`0..=15`).
    pub downlink_capacity: u8,
}

/// Decode OCE attributes from a raw MBO/OCE information element.
pub trait OceIeParser: Send + Sync {
    /// Reduced WAN metrics attribute, if present.
    fn reduced_wan_metrics(&self, ie: &[u8]) -> Option<WanMetrics>;

    /// Whether the subnet-ID attribute is present.
    fn subnet_id_present(&self, ie: &[u8]) -> bool;

    /// AP transmit power in dBm, if advertised.
    fn ap_tx_power(&self, ie: &[u8]) -> Option<i8>;
}

/// Parser that never finds an attribute.
///
/// Used when no decoder is wired in; OCE sub-scores then take their
/// fallback values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoOceParser;

impl OceIeParser for NoOceParser {
    fn reduced_wan_metrics(&self, _ie: &[u8]) -> Option<WanMetrics> {
        None
    }

    fn subnet_id_present(&self, _ie: &[u8]) -> bool {
        false
    }

    fn ap_tx_power(&self, _ie: &[u8]) -> Option<i8> {
        None
    }
}
