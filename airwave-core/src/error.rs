//! Error types raised while validating scoring inputs.

use thiserror::Error;

use crate::Band;

/// Errors returned by [`ScoringConfig::validate`](crate::ScoringConfig::validate).
///
/// Every variant describes a configuration defect that would otherwise make
/// the scoring arithmetic meaningless, so callers should reject the snapshot
/// at load time rather than evaluate candidates against it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An RSSI bucket size was zero.
    #[error("RSSI bucket size `{field}` must be greater than zero")]
    ZeroBucketSize {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A percentage-like value exceeded 100.
    #[error("percentage `{field}` must be within 0..=100, found {value}")]
    PercentageOutOfRange {
        /// Name of the offending field or table slot.
        field: &'static str,
        /// Value found in the configuration.
        value: u8,
    },
    /// A factor weight exceeded 100.
    #[error("weight `{field}` must be within 0..=100, found {value}")]
    WeightOutOfRange {
        /// Name of the offending weight.
        field: &'static str,
        /// Value found in the configuration.
        value: u8,
    },
    /// The RSSI thresholds were not ordered best, good, bad.
    #[error(
        "RSSI thresholds must satisfy best ({best}) <= good ({good}) <= bad ({bad}) as magnitudes"
    )]
    ThresholdsOutOfOrder {
        /// Best threshold magnitude.
        best: u8,
        /// Good threshold magnitude.
        good: u8,
        /// Bad threshold magnitude.
        bad: u8,
    },
    /// The good-signal floor was below the bad-signal floor.
    #[error("good RSSI percentage ({good}) must not be below bad RSSI percentage ({bad})")]
    PercentagesOutOfOrder {
        /// Good-signal percentage floor.
        good: u8,
        /// Bad-signal percentage floor.
        bad: u8,
    },
    /// A station spatial-stream count was outside `1..=4`.
    #[error("station NSS for {band} must be within 1..=4, found {value}")]
    StationNssOutOfRange {
        /// Band the count applies to.
        band: Band,
        /// Value found in the configuration.
        value: u8,
    },
}

/// Errors returned when parsing a [`Bssid`](crate::Bssid) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BssidParseError {
    /// The text did not contain exactly six octets.
    #[error("BSSID must contain six colon-separated octets")]
    OctetCount,
    /// An octet was not a two-digit hexadecimal number.
    #[error("BSSID octet `{octet}` is not valid hexadecimal")]
    InvalidOctet {
        /// Offending octet text.
        octet: String,
    },
}
