//! Station spatial-stream resolution.
//!
//! The scorer compares a candidate's advertised stream count with what the
//! station can use on the candidate's band. Dual-band-simultaneous (DBS)
//! hardware without 2x2 support on both radios falls back to one stream when
//! the candidate would sit on the other band from the current connection.

use crate::{Band, Capabilities};

/// Report the spatial streams the station can use for a candidate.
pub trait StationNssProbe: Send + Sync {
    /// Streams available on `band` given the configured `capabilities`.
    fn station_nss(&self, capabilities: &Capabilities, band: Option<Band>) -> u8;
}

/// Platform DBS state used to resolve station streams.
///
/// # Examples
/// ```
/// use airwave_core::{Band, Capabilities, PlatformNss, StationNssProbe};
///
/// let platform = PlatformNss {
///     dbs_capable: true,
///     dbs_2x2_capable: false,
///     current_band: Some(Band::FiveGhz),
/// };
/// let caps = Capabilities::default();
/// assert_eq!(platform.station_nss(&caps, Some(Band::TwoGhz)), 1);
/// assert_eq!(platform.station_nss(&caps, Some(Band::FiveGhz)), 2);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PlatformNss {
    /// The hardware supports dual-band simultaneous operation.
    pub dbs_capable: bool,
    /// Both DBS radios support two streams.
    pub dbs_2x2_capable: bool,
    /// Band of the station's current connection, if any.
    pub current_band: Option<Band>,
}

impl PlatformNss {
    fn downgrades(&self, band: Option<Band>) -> bool {
        let crosses_band = matches!(
            (self.current_band, band),
            (Some(current), Some(candidate)) if current != candidate
        );
        self.dbs_capable && !self.dbs_2x2_capable && crosses_band
    }
}

impl StationNssProbe for PlatformNss {
    fn station_nss(&self, capabilities: &Capabilities, band: Option<Band>) -> u8 {
        if self.downgrades(band) {
            1
        } else {
            capabilities.nss_for(band)
        }
    }
}
