//! Per-candidate record of every sub-score.

use serde::{Deserialize, Serialize};

/// Sub-scores that make up a candidate's composite score.
///
/// `band` and `oce_wan` are computed only while the channel is below the
/// congestion threshold; above it they are `None` and left out of
/// [`ScoreBreakdown::total`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Prorated percentage applied to capability bonuses.
    pub prorated_pct: i32,
    /// Channel congestion in percent.
    pub congestion_pct: u8,
    /// Station spatial streams used for the NSS score.
    pub station_nss: u8,
    /// Signal strength.
    pub rssi: i32,
    /// Preferred channel list.
    pub pcl: i32,
    /// HT capability.
    pub ht: i32,
    /// VHT capability.
    pub vht: i32,
    /// HE capability.
    pub he: i32,
    /// Channel width.
    pub bandwidth: i32,
    /// VHT beamforming.
    pub beamforming: i32,
    /// Channel congestion.
    pub congestion: i32,
    /// Band preference.
    pub band: Option<i32>,
    /// OCE WAN capacity.
    pub oce_wan: Option<i32>,
    /// OCE AP transmit power.
    pub oce_ap_tx_power: i32,
    /// OCE subnet identifier.
    pub oce_subnet_id: i32,
    /// Spatial streams.
    pub nss: i32,
}

impl ScoreBreakdown {
    /// Sum of every applicable sub-score.
    ///
    /// # Examples
    /// ```
    /// use airwave_scorer::ScoreBreakdown;
    ///
    /// let breakdown = ScoreBreakdown {
    ///     rssi: 1500,
    ///     congestion: 2000,
    ///     band: None,
    ///     ..ScoreBreakdown::default()
    /// };
    /// assert_eq!(breakdown.total(), 3500);
    /// ```
    #[must_use]
    pub fn total(&self) -> i32 {
        [
            self.rssi,
            self.pcl,
            self.ht,
            self.vht,
            self.he,
            self.bandwidth,
            self.beamforming,
            self.congestion,
            self.band.unwrap_or_default(),
            self.oce_wan.unwrap_or_default(),
            self.oce_ap_tx_power,
            self.oce_subnet_id,
            self.nss,
        ]
        .iter()
        .sum()
    }
}
