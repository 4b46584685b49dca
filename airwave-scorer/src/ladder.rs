//! Signal-strength ladder shared by the RSSI-derived sub-scores.
//!
//! Thresholds arrive as positive magnitudes; everything here works in signed
//! dBm. The ladder maps a signal onto a percentage through the best, good and
//! bad thresholds, and the 5 GHz anchor decides whether a signal is strong
//! enough to earn capability and band bonuses.

use airwave_core::RssiConfig;
use log::trace;

pub(crate) const MAX_PCT: i32 = 100;

/// Divide a percentage product back down to score units.
pub(crate) fn scale_pct(product: i32) -> i32 {
    product.checked_div(MAX_PCT).unwrap_or_default()
}

/// One interpolation window of the ladder.
///
/// Signals between `low_dbm` and `high_dbm` are split into buckets of
/// `bucket_size` dB, each bucket stepping the percentage down from
/// `high_pct` towards `low_pct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketWindow {
    /// Upper signal threshold.
    pub high_dbm: i32,
    /// Lower signal threshold.
    pub low_dbm: i32,
    /// Percentage at the upper threshold.
    pub high_pct: i32,
    /// Floor percentage.
    pub low_pct: i32,
    /// Bucket width in dB.
    pub bucket_size: i32,
}

impl BucketWindow {
    /// Percentage awarded to `value` within this window.
    ///
    /// The step per bucket is rounded half up and the result never drops
    /// below `low_pct`. A zero bucket size yields `low_pct`.
    ///
    /// # Examples
    /// ```
    /// use airwave_scorer::BucketWindow;
    ///
    /// let window = BucketWindow {
    ///     high_dbm: -65,
    ///     low_dbm: -75,
    ///     high_pct: 100,
    ///     low_pct: 20,
    ///     bucket_size: 5,
    /// };
    /// assert_eq!(window.slot_percentage(-70), 46);
    /// assert_eq!(window.slot_percentage(-75), 20);
    /// ```
    #[must_use]
    pub fn slot_percentage(&self, value: i32) -> i32 {
        let Some(num_slots) = (self.high_dbm - self.low_dbm)
            .checked_div(self.bucket_size)
            .map(|slots| slots + 1)
        else {
            return self.low_pct;
        };
        let spread = self.high_pct - self.low_pct;
        let slot_size = (spread + num_slots.checked_div(2).unwrap_or_default())
            .checked_div(num_slots)
            .unwrap_or_default();
        let slot_index = (self.high_dbm - value)
            .checked_div(self.bucket_size)
            .unwrap_or_default()
            + 1;
        let pct = (self.high_pct - slot_size * slot_index).max(self.low_pct);
        trace!(
            "window {} -> {} pct {} -> {} bucket {}: value {value} slots {num_slots} step {slot_size} index {slot_index} pct {pct}",
            self.high_dbm,
            self.low_dbm,
            self.high_pct,
            self.low_pct,
            self.bucket_size
        );
        pct
    }
}

/// Whether two signals fall in the same bucket counted down from `top_dbm`.
///
/// Returns `false` when `bucket_size` is zero.
#[must_use]
pub fn same_bucket(top_dbm: i32, a: i32, b: i32, bucket_size: i32) -> bool {
    match (
        (top_dbm - a).checked_div(bucket_size),
        (top_dbm - b).checked_div(bucket_size),
    ) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

/// RSSI thresholds resolved to signed dBm.
///
/// # Examples
/// ```
/// use airwave_core::RssiConfig;
/// use airwave_scorer::SignalLadder;
///
/// let ladder = SignalLadder::new(&RssiConfig::default());
/// assert_eq!(ladder.percentage(-50), 100);
/// assert_eq!(ladder.percentage(-85), 20);
/// assert!(ladder.clears_5g_anchor(-65));
/// assert!(!ladder.clears_5g_anchor(-74));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalLadder {
    best: i32,
    good: i32,
    bad: i32,
    pref_5g: i32,
    good_pct: i32,
    bad_pct: i32,
    good_bucket: i32,
    bad_bucket: i32,
}

impl SignalLadder {
    /// Resolve the ladder from its configuration.
    #[must_use]
    pub fn new(rssi: &RssiConfig) -> Self {
        Self {
            best: rssi.best_dbm(),
            good: rssi.good_dbm(),
            bad: rssi.bad_dbm(),
            pref_5g: rssi.pref_5g_dbm(),
            good_pct: i32::from(rssi.good_pct),
            bad_pct: i32::from(rssi.bad_pct),
            good_bucket: i32::from(rssi.good_bucket_size),
            bad_bucket: i32::from(rssi.bad_bucket_size),
        }
    }

    /// Percentage earned by `value` on the best/good/bad ladder.
    ///
    /// At or above the best threshold the signal earns 100; at or below the
    /// bad threshold it earns the bad floor.
    #[must_use]
    pub fn percentage(&self, value: i32) -> i32 {
        if value >= self.best {
            MAX_PCT
        } else if value <= self.bad {
            self.bad_pct
        } else if value > self.good {
            self.upper_window().slot_percentage(value)
        } else {
            self.lower_window().slot_percentage(value)
        }
    }

    /// Whether `rssi` clears the 5 GHz-preference anchor.
    ///
    /// Gates the band preference and the beamforming bonus. The signal must
    /// be above the preference threshold and, once below the good threshold,
    /// must not share the anchor's bucket.
    #[must_use]
    pub fn clears_5g_anchor(&self, rssi: i32) -> bool {
        rssi > self.pref_5g && !(rssi < self.good && self.shares_anchor_bucket(rssi))
    }

    fn shares_anchor_bucket(&self, rssi: i32) -> bool {
        same_bucket(self.good, rssi, self.pref_5g, self.bad_bucket)
    }

    /// Scaling factor applied to capability bonuses.
    ///
    /// Full above the good threshold. Zero at or below the preference
    /// threshold, inside the anchor's bucket (the good threshold included) or
    /// at or below the bad threshold. Interpolated between the good and bad
    /// floors otherwise.
    #[must_use]
    pub fn prorated(&self, rssi: i32) -> i32 {
        if rssi > self.good {
            MAX_PCT
        } else if rssi <= self.pref_5g || self.shares_anchor_bucket(rssi) || rssi <= self.bad {
            0
        } else {
            self.lower_window().slot_percentage(rssi)
        }
    }

    const fn upper_window(&self) -> BucketWindow {
        BucketWindow {
            high_dbm: self.best,
            low_dbm: self.good,
            high_pct: MAX_PCT,
            low_pct: self.good_pct,
            bucket_size: self.good_bucket,
        }
    }

    const fn lower_window(&self) -> BucketWindow {
        BucketWindow {
            high_dbm: self.good,
            low_dbm: self.bad,
            high_pct: self.good_pct,
            low_pct: self.bad_pct,
            bucket_size: self.bad_bucket,
        }
    }
}

/// Weighted RSSI sub-score, at most `100 * weight`.
#[must_use]
pub fn rssi_score(ladder: &SignalLadder, rssi: i32, weight: u8) -> i32 {
    i32::from(weight) * ladder.percentage(rssi)
}

/// Weighted OCE AP transmit-power sub-score.
///
/// With an advertised AP power the uplink signal is estimated as
/// `20 - (ap_tx_power - rssi)` for a 20 dBm station; otherwise the uplink is
/// assumed to match the downlink `rssi`.
#[must_use]
pub fn ap_tx_power_score(
    ladder: &SignalLadder,
    rssi: i32,
    ap_tx_power_dbm: Option<i8>,
    weight: u8,
) -> i32 {
    const STATION_TX_POWER_DBM: i32 = 20;
    let uplink = ap_tx_power_dbm.map_or(rssi, |power| {
        STATION_TX_POWER_DBM - (i32::from(power) - rssi)
    });
    i32::from(weight) * ladder.percentage(uplink)
}
