//! Candidate access-point observations.
//!
//! A [`CandidateRecord`] is produced by discovery for every BSS seen in a scan
//! and handed to the scorer read-only. The only field the scorer writes is
//! [`CandidateRecord::bss_score`].

use std::fmt;
use std::str::FromStr;

use crate::BssidParseError;

/// Six-octet BSS identifier.
///
/// # Examples
/// ```
/// use airwave_core::Bssid;
///
/// let bssid: Bssid = "00:1a:2b:3c:4d:5e".parse()?;
/// assert_eq!(bssid.octets(), [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]);
/// assert_eq!(bssid.to_string(), "00:1a:2b:3c:4d:5e");
/// # Ok::<(), airwave_core::BssidParseError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bssid([u8; 6]);

impl Bssid {
    /// Construct a BSSID from raw octets.
    #[must_use]
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Return the raw octets.
    #[must_use]
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl fmt::Display for Bssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl FromStr for Bssid {
    type Err = BssidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0_u8; 6];
        let mut parts = s.split(':');
        for slot in &mut octets {
            let part = parts.next().ok_or(BssidParseError::OctetCount)?;
            if part.len() != 2 {
                return Err(BssidParseError::InvalidOctet {
                    octet: part.to_owned(),
                });
            }
            *slot = u8::from_str_radix(part, 16).map_err(|_| BssidParseError::InvalidOctet {
                octet: part.to_owned(),
            })?;
        }
        if parts.next().is_some() {
            return Err(BssidParseError::OctetCount);
        }
        Ok(Self(octets))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Bssid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Bssid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Operating channel width advertised by a candidate.
///
/// Variants are ordered narrowest first so capability caps can use `min`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelWidth {
    /// 20 MHz, including legacy non-HT operation.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "20MHz"))]
    Mhz20,
    /// 40 MHz.
    #[cfg_attr(feature = "serde", serde(rename = "40MHz"))]
    Mhz40,
    /// 80 MHz.
    #[cfg_attr(feature = "serde", serde(rename = "80MHz"))]
    Mhz80,
    /// 160 MHz or 80+80 MHz.
    #[cfg_attr(feature = "serde", serde(rename = "160MHz"))]
    Mhz160,
}

impl ChannelWidth {
    /// Position of this width in the per-index bandwidth table.
    #[must_use]
    pub const fn table_index(self) -> usize {
        match self {
            Self::Mhz20 => 0,
            Self::Mhz40 => 1,
            Self::Mhz80 => 2,
            Self::Mhz160 => 3,
        }
    }

    /// Clamp the width to what the station can actually use.
    ///
    /// Without HT the station is limited to 20 MHz, without VHT to 40 MHz,
    /// and with channel bonding disabled to 20 MHz.
    ///
    /// # Examples
    /// ```
    /// use airwave_core::ChannelWidth;
    ///
    /// assert_eq!(ChannelWidth::Mhz160.capped(true, false, true), ChannelWidth::Mhz40);
    /// assert_eq!(ChannelWidth::Mhz80.capped(true, true, false), ChannelWidth::Mhz20);
    /// ```
    #[must_use]
    pub fn capped(self, ht: bool, vht: bool, channel_bonding: bool) -> Self {
        if !ht || !channel_bonding {
            return Self::Mhz20;
        }
        if vht { self } else { self.min(Self::Mhz40) }
    }
}

/// One observed BSS and its advertised parameters.
///
/// Construct with [`CandidateRecord::new`] and refine with the `with_*`
/// builders.
///
/// # Examples
/// ```
/// use airwave_core::{Bssid, CandidateRecord, ChannelWidth};
///
/// let candidate = CandidateRecord::new(Bssid::default(), 2437, -61)
///     .with_channel_width(ChannelWidth::Mhz40)
///     .with_ht(true)
///     .with_qbss_load(64);
/// assert_eq!(candidate.qbss_channel_load, Some(64));
/// assert!(candidate.air_time_fraction.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateRecord {
    /// BSS identifier.
    pub bssid: Bssid,
    /// Operating channel centre frequency in MHz.
    pub frequency_mhz: u32,
    /// Advertised channel width.
    #[cfg_attr(feature = "serde", serde(default))]
    pub channel_width: ChannelWidth,
    /// Raw received signal strength in dBm.
    pub rssi_dbm: i8,
    /// Advertised number of spatial streams.
    #[cfg_attr(feature = "serde", serde(default = "default_nss"))]
    pub nss: u8,
    /// Estimated air-time fraction from the ESP element, `0..=255`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub air_time_fraction: Option<u8>,
    /// QBSS channel load, `0..=255`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub qbss_channel_load: Option<u8>,
    /// HT capabilities element present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ht_present: bool,
    /// VHT capabilities element present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vht_present: bool,
    /// HE capabilities element present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub he_present: bool,
    /// VHT capabilities advertise a single-user beamformer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vht_su_beamformer: bool,
    /// Raw MBO/OCE element payload, decoded by an
    /// [`OceIeParser`](crate::OceIeParser).
    #[cfg_attr(feature = "serde", serde(default))]
    pub mbo_oce_ie: Option<Vec<u8>>,
    /// Composite preference score written by the scorer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bss_score: i32,
}

#[cfg(feature = "serde")]
const fn default_nss() -> u8 {
    1
}

impl CandidateRecord {
    /// Construct a single-stream 20 MHz candidate with no optional elements.
    #[must_use]
    pub const fn new(bssid: Bssid, frequency_mhz: u32, rssi_dbm: i8) -> Self {
        Self {
            bssid,
            frequency_mhz,
            channel_width: ChannelWidth::Mhz20,
            rssi_dbm,
            nss: 1,
            air_time_fraction: None,
            qbss_channel_load: None,
            ht_present: false,
            vht_present: false,
            he_present: false,
            vht_su_beamformer: false,
            mbo_oce_ie: None,
            bss_score: 0,
        }
    }

    /// Set the advertised channel width.
    #[must_use]
    pub const fn with_channel_width(mut self, width: ChannelWidth) -> Self {
        self.channel_width = width;
        self
    }

    /// Set the advertised spatial-stream count.
    #[must_use]
    pub const fn with_nss(mut self, nss: u8) -> Self {
        self.nss = nss;
        self
    }

    /// Record an ESP estimated air-time fraction.
    #[must_use]
    pub const fn with_air_time_fraction(mut self, fraction: u8) -> Self {
        self.air_time_fraction = Some(fraction);
        self
    }

    /// Record a QBSS channel load.
    #[must_use]
    pub const fn with_qbss_load(mut self, load: u8) -> Self {
        self.qbss_channel_load = Some(load);
        self
    }

    /// Mark the HT capabilities element as present or absent.
    #[must_use]
    pub const fn with_ht(mut self, present: bool) -> Self {
        self.ht_present = present;
        self
    }

    /// Mark the VHT capabilities element as present or absent.
    #[must_use]
    pub const fn with_vht(mut self, present: bool) -> Self {
        self.vht_present = present;
        self
    }

    /// Mark the HE capabilities element as present or absent.
    #[must_use]
    pub const fn with_he(mut self, present: bool) -> Self {
        self.he_present = present;
        self
    }

    /// Record whether the VHT capabilities advertise an SU beamformer.
    #[must_use]
    pub const fn with_su_beamformer(mut self, beamformer: bool) -> Self {
        self.vht_su_beamformer = beamformer;
        self
    }

    /// Attach a raw MBO/OCE element payload.
    #[must_use]
    pub fn with_mbo_oce_ie(mut self, payload: Vec<u8>) -> Self {
        self.mbo_oce_ie = Some(payload);
        self
    }
}
