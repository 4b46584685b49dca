//! Slot-table scorers for channel congestion and OCE WAN capacity.
//!
//! Both metrics are quantised into one of up to fifteen slots and the slot's
//! configured percentage is multiplied by the factor weight. Congestion
//! windows divide 100 percent; WAN windows divide the 4-bit capacity range of
//! 16. The two windows deliberately differ.

use airwave_core::{CandidateRecord, MAX_SLOT_INDEX, SlotTable, WanMetrics};
use log::warn;

/// Congestion percentage at or above which band and OCE WAN scores are
/// left out of the total.
pub const CONGESTION_THRESHOLD: u8 = 75;

const CONGESTION_WINDOW_SPAN: u8 = 100;
const OCE_WAN_WINDOW_SPAN: u8 = 16;
const MAX_METRIC: u16 = 255;

/// Slot count of `table`, clamped to [`MAX_SLOT_INDEX`].
///
/// Logs a warning when the configured count had to be clamped.
#[must_use]
pub fn usable_slots(table: &SlotTable, name: &str) -> u8 {
    if table.num_slot > MAX_SLOT_INDEX {
        warn!(
            "{name} slot count {} exceeds {MAX_SLOT_INDEX}; clamping",
            table.num_slot
        );
    }
    table.effective_slots()
}

/// Channel congestion advertised by a candidate, in percent.
///
/// The estimated air-time fraction wins over the QBSS channel load; with
/// neither present the channel is assumed idle.
///
/// # Examples
/// ```
/// use airwave_core::{Bssid, CandidateRecord};
/// use airwave_scorer::congestion_percentage;
///
/// let candidate = CandidateRecord::new(Bssid::new([0; 6]), 5180, -60).with_qbss_load(128);
/// assert_eq!(congestion_percentage(&candidate), 50);
/// ```
#[must_use]
pub fn congestion_percentage(candidate: &CandidateRecord) -> u8 {
    match (candidate.air_time_fraction, candidate.qbss_channel_load) {
        (Some(fraction), _) => {
            CONGESTION_WINDOW_SPAN.saturating_sub(scale_metric(fraction))
        }
        (None, Some(load)) => scale_metric(load),
        (None, None) => 0,
    }
}

fn scale_metric(value: u8) -> u8 {
    let pct = (u16::from(value) * u16::from(CONGESTION_WINDOW_SPAN))
        .checked_div(MAX_METRIC)
        .unwrap_or_default();
    u8::try_from(pct).unwrap_or(CONGESTION_WINDOW_SPAN)
}

/// Weighted congestion sub-score.
///
/// Signals at or below the good threshold take the last usable slot; an
/// idle channel takes slot 0; otherwise the slot is
/// `congestion / (100 / num_slot) + 1`, clamped to the slot count.
#[must_use]
pub fn congestion_score(
    table: &SlotTable,
    congestion_pct: u8,
    rssi: i32,
    good_dbm: i32,
    weight: u8,
) -> i32 {
    let slots = usable_slots(table, "congestion");
    if slots == 0 {
        return 0;
    }
    let slot = if rssi <= good_dbm {
        slots
    } else if congestion_pct == 0 {
        0
    } else {
        CONGESTION_WINDOW_SPAN
            .checked_div(slots)
            .and_then(|window| congestion_pct.checked_div(window))
            .map_or(slots, |index| index.saturating_add(1))
            .min(slots)
    };
    slot_score(table, slot, weight)
}

/// Weighted OCE WAN capacity sub-score.
///
/// Without WAN metrics the candidate takes slot 0; a reported capacity of
/// zero scores nothing. Otherwise the slot is
/// `capacity / (16 / num_slot)`, clamped to the slot count.
#[must_use]
pub fn oce_wan_score(table: &SlotTable, metrics: Option<WanMetrics>, weight: u8) -> i32 {
    let slots = usable_slots(table, "OCE WAN");
    if slots == 0 {
        return 0;
    }
    let slot = match metrics {
        None => 0,
        Some(WanMetrics {
            downlink_capacity: 0,
        }) => return 0,
        Some(WanMetrics { downlink_capacity }) => OCE_WAN_WINDOW_SPAN
            .checked_div(slots)
            .and_then(|window| downlink_capacity.checked_div(window))
            .unwrap_or(slots)
            .min(slots),
    };
    slot_score(table, slot, weight)
}

fn slot_score(table: &SlotTable, slot: u8, weight: u8) -> i32 {
    i32::from(weight) * i32::from(table.percentage(slot))
}
