//! Scoring configuration snapshot.
//!
//! A [`ScoringConfig`] is loaded once per ranking pass and shared read-only by
//! every candidate evaluation. Thresholds are stored as positive magnitudes
//! meaning negative dBm, mirroring how the tuning is usually expressed. Load
//! the snapshot through [`ScoringConfig::validate`] so that a zero bucket size
//! or an out-of-range percentage is rejected before scoring starts.
//!
//! With the `serde` feature every section deserialises with per-field defaults,
//! so a partial JSON document only overrides the values it names.

use crate::{Band, ConfigError};

/// Highest usable slot index in a [`SlotTable`].
pub const MAX_SLOT_INDEX: u8 = 15;

const MAX_PERCENTAGE: u8 = 100;
const MAX_WEIGHT: u8 = 100;
const MAX_STATION_NSS: u8 = 4;

/// Weight applied to each scoring factor, `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WeightConfig {
    /// Signal strength.
    pub rssi: u8,
    /// HT capability.
    pub ht: u8,
    /// VHT capability.
    pub vht: u8,
    /// HE capability.
    pub he: u8,
    /// Channel width.
    pub bandwidth: u8,
    /// VHT beamforming.
    pub beamforming: u8,
    /// Band preference.
    pub band: u8,
    /// Spatial streams.
    pub nss: u8,
    /// Preferred channel list membership.
    pub pcl: u8,
    /// Channel congestion.
    pub congestion: u8,
    /// OCE reduced WAN metrics.
    pub oce_wan: u8,
    /// OCE AP transmit power.
    pub oce_ap_tx_power: u8,
    /// OCE subnet identifier.
    pub oce_subnet_id: u8,
}

impl WeightConfig {
    fn fields(&self) -> [(&'static str, u8); 13] {
        [
            ("rssi", self.rssi),
            ("ht", self.ht),
            ("vht", self.vht),
            ("he", self.he),
            ("bandwidth", self.bandwidth),
            ("beamforming", self.beamforming),
            ("band", self.band),
            ("nss", self.nss),
            ("pcl", self.pcl),
            ("congestion", self.congestion),
            ("oce_wan", self.oce_wan),
            ("oce_ap_tx_power", self.oce_ap_tx_power),
            ("oce_subnet_id", self.oce_subnet_id),
        ]
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            rssi: 20,
            ht: 2,
            vht: 1,
            he: 2,
            bandwidth: 12,
            beamforming: 2,
            band: 2,
            nss: 16,
            pcl: 10,
            congestion: 25,
            oce_wan: 2,
            oce_ap_tx_power: 0,
            oce_subnet_id: 0,
        }
    }
}

/// RSSI thresholds, percentage floors and bucket sizes.
///
/// # Examples
/// ```
/// use airwave_core::RssiConfig;
///
/// let rssi = RssiConfig::default();
/// assert_eq!(rssi.best_dbm(), -55);
/// assert_eq!(rssi.pref_5g_dbm(), -76);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RssiConfig {
    /// Magnitude of the best-signal threshold.
    pub best_threshold: u8,
    /// Magnitude of the good-signal threshold.
    pub good_threshold: u8,
    /// Magnitude of the bad-signal threshold.
    pub bad_threshold: u8,
    /// Percentage awarded at the good threshold.
    pub good_pct: u8,
    /// Percentage awarded at and below the bad threshold.
    pub bad_pct: u8,
    /// Bucket granularity between the best and good thresholds, in dB.
    pub good_bucket_size: u8,
    /// Bucket granularity between the good and bad thresholds, in dB.
    pub bad_bucket_size: u8,
    /// Magnitude of the threshold above which 5 GHz is preferred.
    pub pref_5g_threshold: u8,
}

impl RssiConfig {
    /// Best-signal threshold in dBm.
    #[must_use]
    pub fn best_dbm(&self) -> i32 {
        -i32::from(self.best_threshold)
    }

    /// Good-signal threshold in dBm.
    #[must_use]
    pub fn good_dbm(&self) -> i32 {
        -i32::from(self.good_threshold)
    }

    /// Bad-signal threshold in dBm.
    #[must_use]
    pub fn bad_dbm(&self) -> i32 {
        -i32::from(self.bad_threshold)
    }

    /// 5 GHz-preference threshold in dBm.
    #[must_use]
    pub fn pref_5g_dbm(&self) -> i32 {
        -i32::from(self.pref_5g_threshold)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.good_bucket_size == 0 {
            return Err(ConfigError::ZeroBucketSize {
                field: "good_bucket_size",
            });
        }
        if self.bad_bucket_size == 0 {
            return Err(ConfigError::ZeroBucketSize {
                field: "bad_bucket_size",
            });
        }
        check_percentage("good_pct", self.good_pct)?;
        check_percentage("bad_pct", self.bad_pct)?;
        if self.best_threshold > self.good_threshold || self.good_threshold > self.bad_threshold {
            return Err(ConfigError::ThresholdsOutOfOrder {
                best: self.best_threshold,
                good: self.good_threshold,
                bad: self.bad_threshold,
            });
        }
        if self.good_pct < self.bad_pct {
            return Err(ConfigError::PercentagesOutOfOrder {
                good: self.good_pct,
                bad: self.bad_pct,
            });
        }
        Ok(())
    }
}

impl Default for RssiConfig {
    fn default() -> Self {
        Self {
            best_threshold: 55,
            good_threshold: 70,
            bad_threshold: 80,
            good_pct: 80,
            bad_pct: 20,
            good_bucket_size: 5,
            bad_bucket_size: 4,
            pref_5g_threshold: 76,
        }
    }
}

/// Four percentages looked up by a small index.
///
/// Used for the bandwidth (20/40/80/160 MHz), band (2.4/5/6 GHz, one
/// reserved) and spatial-stream (1..4) tables.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct PerIndexTable([u8; 4]);

impl PerIndexTable {
    /// Build a table from its four entries.
    #[must_use]
    pub const fn new(percentages: [u8; 4]) -> Self {
        Self(percentages)
    }

    /// Percentage stored at `index`, or zero past the end of the table.
    #[must_use]
    pub fn percentage(&self, index: usize) -> u8 {
        self.0.get(index).copied().unwrap_or(0)
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        self.0
            .iter()
            .try_for_each(|&value| check_percentage(field, value))
    }
}

/// Discrete score slots for congestion and OCE WAN capacity.
///
/// Slots are grouped in fours (0–3, 4–7, 8–11, 12–15); the groups are stored
/// flat so slot `n` is simply entry `n`.
///
/// # Examples
/// ```
/// use airwave_core::SlotTable;
///
/// let table = SlotTable::from_groups(3, [[100, 90, 80, 70], [60, 0, 0, 0], [0; 4], [0; 4]]);
/// assert_eq!(table.percentage(4), 60);
/// assert_eq!(table.effective_slots(), 3);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SlotTable {
    /// Number of slots in use; values above 15 are treated as 15.
    pub num_slot: u8,
    /// Percentage for each slot.
    pub percentages: [u8; 16],
}

impl SlotTable {
    /// Build a table from a slot count and a flat percentage array.
    #[must_use]
    pub const fn new(num_slot: u8, percentages: [u8; 16]) -> Self {
        Self {
            num_slot,
            percentages,
        }
    }

    /// Build a table from four groups of four slots.
    #[must_use]
    pub fn from_groups(num_slot: u8, groups: [[u8; 4]; 4]) -> Self {
        let mut percentages = [0_u8; 16];
        for (target, value) in percentages.iter_mut().zip(groups.iter().flatten()) {
            *target = *value;
        }
        Self::new(num_slot, percentages)
    }

    /// Slot count clamped to [`MAX_SLOT_INDEX`].
    #[must_use]
    pub fn effective_slots(&self) -> u8 {
        self.num_slot.min(MAX_SLOT_INDEX)
    }

    /// Percentage stored for `slot`, or zero past the last slot.
    #[must_use]
    pub fn percentage(&self, slot: u8) -> u8 {
        self.percentages
            .get(usize::from(slot))
            .copied()
            .unwrap_or(0)
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        self.percentages
            .iter()
            .try_for_each(|&value| check_percentage(field, value))
    }
}

/// What the station itself supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Capabilities {
    /// HT supported.
    pub ht: bool,
    /// VHT supported on 5 GHz and above.
    pub vht: bool,
    /// VHT supported on 2.4 GHz.
    pub vht_24g: bool,
    /// HE supported.
    pub he: bool,
    /// VHT beamformee supported.
    pub beamformee: bool,
    /// Channel bonding enabled on 2.4 GHz.
    pub channel_bonding_24g: bool,
    /// Channel bonding enabled on 5 GHz and above.
    pub channel_bonding_5g: bool,
    /// Station spatial streams on 2.4 GHz.
    pub nss_24g: u8,
    /// Station spatial streams on 5 GHz and above.
    pub nss_5g: u8,
}

impl Capabilities {
    /// Whether VHT applies to a candidate on `band`.
    ///
    /// 2.4 GHz candidates need `vht_24g`; every other band, including an
    /// unclassified one, needs `vht`.
    #[must_use]
    pub fn vht_for(&self, band: Option<Band>) -> bool {
        if band == Some(Band::TwoGhz) {
            self.vht_24g
        } else {
            self.vht
        }
    }

    /// Whether channel bonding is enabled for a candidate on `band`.
    ///
    /// Outside 2.4 GHz the bonding mode is only honoured when the station
    /// supports VHT.
    #[must_use]
    pub fn channel_bonding_for(&self, band: Option<Band>) -> bool {
        if band == Some(Band::TwoGhz) {
            self.channel_bonding_24g
        } else {
            self.vht && self.channel_bonding_5g
        }
    }

    /// Configured station spatial streams for a candidate on `band`.
    #[must_use]
    pub fn nss_for(&self, band: Option<Band>) -> u8 {
        if band == Some(Band::TwoGhz) {
            self.nss_24g
        } else {
            self.nss_5g
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (band, value) in [(Band::TwoGhz, self.nss_24g), (Band::FiveGhz, self.nss_5g)] {
            if !(1..=MAX_STATION_NSS).contains(&value) {
                return Err(ConfigError::StationNssOutOfRange { band, value });
            }
        }
        Ok(())
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            ht: true,
            vht: true,
            vht_24g: false,
            he: true,
            beamformee: true,
            channel_bonding_24g: false,
            channel_bonding_5g: true,
            nss_24g: 2,
            nss_5g: 2,
        }
    }
}

/// Complete scoring policy for one ranking pass.
///
/// # Examples
/// ```
/// use airwave_core::{ConfigError, ScoringConfig};
///
/// let mut config = ScoringConfig::default();
/// config.rssi.bad_bucket_size = 0;
/// assert_eq!(
///     config.validate(),
///     Err(ConfigError::ZeroBucketSize { field: "bad_bucket_size" })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ScoringConfig {
    /// Per-factor weights.
    pub weights: WeightConfig,
    /// RSSI ladder.
    pub rssi: RssiConfig,
    /// Percentages by channel width index.
    pub bandwidth: PerIndexTable,
    /// Percentages by band index.
    pub band: PerIndexTable,
    /// Percentages by spatial-stream index.
    pub nss: PerIndexTable,
    /// Congestion slots.
    pub congestion: SlotTable,
    /// OCE WAN capacity slots.
    pub oce_wan: SlotTable,
    /// Station capabilities.
    pub capabilities: Capabilities,
}

impl ScoringConfig {
    /// Check every configuration invariant and return the snapshot.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a bucket size is zero, a percentage or
    /// weight exceeds 100, the RSSI thresholds or floors are out of order, or
    /// a station spatial-stream count is outside `1..=4`.
    pub fn validate(self) -> Result<Self, ConfigError> {
        for (field, value) in self.weights.fields() {
            if value > MAX_WEIGHT {
                return Err(ConfigError::WeightOutOfRange { field, value });
            }
        }
        self.rssi.validate()?;
        self.bandwidth.validate("bandwidth")?;
        self.band.validate("band")?;
        self.nss.validate("nss")?;
        self.congestion.validate("congestion")?;
        self.oce_wan.validate("oce_wan")?;
        self.capabilities.validate()?;
        Ok(self)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: WeightConfig::default(),
            rssi: RssiConfig::default(),
            bandwidth: PerIndexTable::new([12, 25, 50, 100]),
            band: PerIndexTable::new([75, 100, 0, 0]),
            nss: PerIndexTable::new([12, 25, 50, 80]),
            congestion: SlotTable::from_groups(
                4,
                [
                    [100, 100, 90, 80],
                    [80, 75, 70, 60],
                    [50, 50, 40, 40],
                    [40, 30, 20, 10],
                ],
            ),
            oce_wan: SlotTable::from_groups(
                15,
                [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 3, 6], [12, 25, 50, 100]],
            ),
            capabilities: Capabilities::default(),
        }
    }
}

fn check_percentage(field: &'static str, value: u8) -> Result<(), ConfigError> {
    if value > MAX_PERCENTAGE {
        return Err(ConfigError::PercentageOutOfRange { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    #[rstest]
    fn defaults_are_valid(config: ScoringConfig) {
        assert!(config.validate().is_ok());
    }

    #[rstest]
    fn rejects_zero_good_bucket(mut config: ScoringConfig) {
        config.rssi.good_bucket_size = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroBucketSize {
                field: "good_bucket_size"
            })
        );
    }

    #[rstest]
    fn rejects_percentage_above_hundred(mut config: ScoringConfig) {
        config.congestion = SlotTable::from_groups(4, [[100, 90, 80, 101], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::PercentageOutOfRange {
                field: "congestion",
                value: 101
            })
        );
    }

    #[rstest]
    fn rejects_weight_above_hundred(mut config: ScoringConfig) {
        config.weights.oce_wan = 120;
        assert_eq!(
            config.validate(),
            Err(ConfigError::WeightOutOfRange {
                field: "oce_wan",
                value: 120
            })
        );
    }

    #[rstest]
    #[case(71, 70, 80)]
    #[case(55, 81, 80)]
    fn rejects_thresholds_out_of_order(
        mut config: ScoringConfig,
        #[case] best: u8,
        #[case] good: u8,
        #[case] bad: u8,
    ) {
        config.rssi.best_threshold = best;
        config.rssi.good_threshold = good;
        config.rssi.bad_threshold = bad;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ThresholdsOutOfOrder { best, good, bad })
        );
    }

    #[rstest]
    fn rejects_inverted_percentage_floors(mut config: ScoringConfig) {
        config.rssi.good_pct = 10;
        config.rssi.bad_pct = 30;
        assert_eq!(
            config.validate(),
            Err(ConfigError::PercentagesOutOfOrder { good: 10, bad: 30 })
        );
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    fn rejects_station_nss_out_of_range(mut config: ScoringConfig, #[case] nss: u8) {
        config.capabilities.nss_5g = nss;
        assert_eq!(
            config.validate(),
            Err(ConfigError::StationNssOutOfRange {
                band: Band::FiveGhz,
                value: nss
            })
        );
    }

    #[rstest]
    fn slot_groups_keep_their_boundaries() {
        let table = SlotTable::from_groups(
            15,
            [[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]],
        );
        for slot in 0..=MAX_SLOT_INDEX {
            assert_eq!(table.percentage(slot), slot);
        }
        assert_eq!(table.percentage(16), 0);
    }

    #[rstest]
    fn slot_count_is_clamped() {
        let table = SlotTable::new(40, [0; 16]);
        assert_eq!(table.effective_slots(), MAX_SLOT_INDEX);
    }

    #[rstest]
    fn per_index_lookup_past_end_is_zero() {
        let table = PerIndexTable::new([10, 20, 30, 40]);
        assert_eq!(table.percentage(3), 40);
        assert_eq!(table.percentage(4), 0);
    }

    #[rstest]
    fn capabilities_select_band_specific_values(config: ScoringConfig) {
        let caps = config.capabilities;
        assert!(!caps.vht_for(Some(Band::TwoGhz)));
        assert!(caps.vht_for(Some(Band::SixGhz)));
        assert!(caps.vht_for(None));
        assert!(!caps.channel_bonding_for(Some(Band::TwoGhz)));
        assert!(caps.channel_bonding_for(Some(Band::FiveGhz)));
    }

    #[rstest]
    fn bonding_above_two_ghz_needs_vht(config: ScoringConfig) {
        let caps = Capabilities {
            vht: false,
            channel_bonding_24g: true,
            ..config.capabilities
        };
        assert!(!caps.channel_bonding_for(Some(Band::FiveGhz)));
        assert!(!caps.channel_bonding_for(Some(Band::SixGhz)));
        assert!(!caps.channel_bonding_for(None));
        assert!(caps.channel_bonding_for(Some(Band::TwoGhz)));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn partial_json_overrides_named_fields() {
        let json = r#"{ "weights": { "rssi": 30 }, "rssi": { "bad_bucket_size": 2 } }"#;
        let config: ScoringConfig = serde_json::from_str(json).expect("decode config");
        assert_eq!(config.weights.rssi, 30);
        assert_eq!(config.weights.nss, WeightConfig::default().nss);
        assert_eq!(config.rssi.bad_bucket_size, 2);
        assert_eq!(config.rssi.good_bucket_size, 5);
        assert_eq!(config.congestion, ScoringConfig::default().congestion);
    }
}
