//! Per-factor sub-scores.
//!
//! Each function turns one candidate attribute and its weight into score
//! units. Capability bonuses are scaled by the prorated percentage so that a
//! weak signal cannot win on features alone.

use airwave_core::{Band, PerIndexTable};

use crate::ladder::{MAX_PCT, scale_pct};

const MAX_PCL_WEIGHT: i32 = 255;
const PCL_GROUP_WEIGHT_STEP: i32 = 20;
const SUBNET_ID_PCT: i32 = 50;

/// Weighted preferred-channel-list sub-score.
///
/// Unlisted channels score nothing. Every 20 points of PCL weight below the
/// maximum of 255 costs one unit of the configured weight.
///
/// # Examples
/// ```
/// use airwave_scorer::pcl_score;
///
/// assert_eq!(pcl_score(0, 10), 0);
/// assert_eq!(pcl_score(255, 10), 1000);
/// assert_eq!(pcl_score(200, 10), 800);
/// ```
#[must_use]
pub fn pcl_score(pcl_weight: u8, weight: u8) -> i32 {
    if pcl_weight == 0 {
        return 0;
    }
    let reduction = (MAX_PCL_WEIGHT - i32::from(pcl_weight))
        .checked_div(PCL_GROUP_WEIGHT_STEP)
        .unwrap_or_default();
    (i32::from(weight) - reduction).max(0) * MAX_PCT
}

/// Capability bonus scaled by the prorated percentage.
///
/// Used for HT, VHT and HE; `applies` carries the capability gate.
#[must_use]
pub fn capability_score(applies: bool, prorated_pct: i32, weight: u8) -> i32 {
    if applies {
        prorated_pct * i32::from(weight)
    } else {
        0
    }
}

/// Weighted channel-width sub-score.
#[must_use]
pub fn bandwidth_score(
    table: &PerIndexTable,
    width_index: usize,
    prorated_pct: i32,
    weight: u8,
) -> i32 {
    let pct = i32::from(table.percentage(width_index));
    scale_pct(prorated_pct * pct * i32::from(weight))
}

/// Table index of a spatial-stream count.
#[must_use]
pub const fn nss_index(nss: u8) -> usize {
    match nss {
        4.. => 3,
        3 => 2,
        2 => 1,
        _ => 0,
    }
}

/// Weighted spatial-stream sub-score.
///
/// The usable stream count is the lower of what the AP advertises and what
/// the station can use on the candidate's band.
#[must_use]
pub fn nss_score(
    table: &PerIndexTable,
    ap_nss: u8,
    station_nss: u8,
    prorated_pct: i32,
    weight: u8,
) -> i32 {
    let pct = i32::from(table.percentage(nss_index(ap_nss.min(station_nss))));
    scale_pct(i32::from(weight) * pct * prorated_pct)
}

/// Weighted band-preference sub-score; unclassified frequencies score zero.
#[must_use]
pub fn band_score(table: &PerIndexTable, band: Option<Band>, weight: u8) -> i32 {
    band.map_or(0, |resolved| {
        i32::from(weight) * i32::from(table.percentage(resolved.table_index()))
    })
}

/// Full beamforming bonus when `applies`, otherwise zero.
#[must_use]
pub fn beamforming_score(applies: bool, weight: u8) -> i32 {
    if applies {
        MAX_PCT * i32::from(weight)
    } else {
        0
    }
}

/// Half the subnet-ID weight in score units when the attribute is present.
#[must_use]
pub fn subnet_id_score(present: bool, weight: u8) -> i32 {
    if present {
        i32::from(weight) * SUBNET_ID_PCT
    } else {
        0
    }
}
