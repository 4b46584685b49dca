//! Composite BSS scorer.
//!
//! [`BssScorer`] wires the per-factor scorers to the collaborators that
//! classify bands, decode OCE attributes and resolve station streams, and
//! implements [`CandidateScorer`] on top of [`BssScorer::breakdown`].

use airwave_core::{
    Band, BandClassifier, CandidateRecord, CandidateScorer, Capabilities, ChannelWidth,
    FrequencyBandClassifier, NoOceParser, OceIeParser, PlatformNss, ScoringConfig,
    StationNssProbe,
};
use log::debug;

use crate::ScoreBreakdown;
use crate::factors::{
    band_score, bandwidth_score, beamforming_score, capability_score, nss_score, pcl_score,
    subnet_id_score,
};
use crate::ladder::{SignalLadder, ap_tx_power_score, rssi_score};
use crate::slots::{CONGESTION_THRESHOLD, congestion_percentage, congestion_score, oce_wan_score};

/// Score wireless candidates against a [`ScoringConfig`] snapshot.
///
/// The scorer holds no state besides its collaborators, so one instance can
/// evaluate candidates from several threads at once.
///
/// # Examples
///
/// ```
/// use airwave_core::{Bssid, CandidateRecord, CandidateScorer, ChannelWidth, ScoringConfig};
/// use airwave_scorer::BssScorer;
///
/// let config = ScoringConfig::default();
/// let scorer = BssScorer::standard();
/// let mut near = CandidateRecord::new(Bssid::new([2, 0, 0, 0, 0, 1]), 5180, -50)
///     .with_ht(true)
///     .with_vht(true)
///     .with_channel_width(ChannelWidth::Mhz80)
///     .with_nss(2);
/// let mut far = CandidateRecord::new(Bssid::new([2, 0, 0, 0, 0, 2]), 2412, -82).with_ht(true);
///
/// scorer.evaluate(&config, &mut near, 0);
/// scorer.evaluate(&config, &mut far, 0);
/// assert!(near.bss_score > far.bss_score);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BssScorer<O = NoOceParser, B = FrequencyBandClassifier, N = PlatformNss> {
    oce: O,
    bands: B,
    nss: N,
}

impl BssScorer {
    /// Scorer using the default collaborators on a platform without DBS.
    #[must_use]
    pub const fn standard() -> Self {
        Self::with_platform(PlatformNss {
            dbs_capable: false,
            dbs_2x2_capable: false,
            current_band: None,
        })
    }

    /// Scorer using the default collaborators and the given platform state.
    #[must_use]
    pub const fn with_platform(platform: PlatformNss) -> Self {
        Self {
            oce: NoOceParser,
            bands: FrequencyBandClassifier,
            nss: platform,
        }
    }
}

impl<O, B, N> BssScorer<O, B, N>
where
    O: OceIeParser,
    B: BandClassifier,
    N: StationNssProbe,
{
    /// Build a scorer from its collaborators.
    #[must_use]
    pub const fn new(oce: O, bands: B, nss: N) -> Self {
        Self { oce, bands, nss }
    }

    /// Replace the OCE attribute decoder.
    #[must_use]
    pub fn with_oce_parser<P: OceIeParser>(self, oce: P) -> BssScorer<P, B, N> {
        BssScorer {
            oce,
            bands: self.bands,
            nss: self.nss,
        }
    }

    /// Replace the band classifier.
    #[must_use]
    pub fn with_band_classifier<C: BandClassifier>(self, bands: C) -> BssScorer<O, C, N> {
        BssScorer {
            oce: self.oce,
            bands,
            nss: self.nss,
        }
    }

    /// Replace the station stream probe.
    #[must_use]
    pub fn with_nss_probe<P: StationNssProbe>(self, nss: P) -> BssScorer<O, B, P> {
        BssScorer {
            oce: self.oce,
            bands: self.bands,
            nss,
        }
    }

    /// Compute every sub-score of `candidate`.
    ///
    /// `pcl_weight` is the preferred-channel-list weight of the candidate's
    /// frequency, zero when unlisted.
    #[must_use]
    pub fn breakdown(
        &self,
        config: &ScoringConfig,
        candidate: &CandidateRecord,
        pcl_weight: u8,
    ) -> ScoreBreakdown {
        let weights = &config.weights;
        let caps = &config.capabilities;
        let ladder = SignalLadder::new(&config.rssi);
        let rssi = i32::from(candidate.rssi_dbm);
        let band = self.bands.classify(candidate.frequency_mhz);
        let on_six_ghz = band == Some(Band::SixGhz);
        let vht_applies = caps.vht_for(band);
        let clears_anchor = ladder.clears_5g_anchor(rssi);
        let prorated_pct = ladder.prorated(rssi);
        let congestion_pct = congestion_percentage(candidate);
        let station_nss = self.nss.station_nss(caps, band);
        let ie = candidate.mbo_oce_ie.as_deref();

        let width = candidate.channel_width.capped(
            caps.ht,
            vht_applies,
            caps.channel_bonding_for(band),
        );
        let low_congestion = congestion_pct < CONGESTION_THRESHOLD;
        let band_preferred = if clears_anchor {
            matches!(band, Some(Band::FiveGhz | Band::SixGhz))
        } else {
            band == Some(Band::TwoGhz)
        };

        let breakdown = ScoreBreakdown {
            prorated_pct,
            congestion_pct,
            station_nss,
            rssi: rssi_score(&ladder, rssi, weights.rssi),
            pcl: pcl_score(pcl_weight, weights.pcl),
            ht: capability_score(
                caps.ht && (candidate.ht_present || on_six_ghz),
                prorated_pct,
                weights.ht,
            ),
            vht: capability_score(
                vht_applies && (candidate.vht_present || on_six_ghz),
                prorated_pct,
                weights.vht,
            ),
            he: capability_score(caps.he && candidate.he_present, prorated_pct, weights.he),
            bandwidth: bandwidth_score(
                &config.bandwidth,
                width.table_index(),
                prorated_pct,
                weights.bandwidth,
            ),
            beamforming: beamforming_score(
                vht_applies && candidate.vht_su_beamformer && clears_anchor,
                weights.beamforming,
            ),
            congestion: congestion_score(
                &config.congestion,
                congestion_pct,
                rssi,
                config.rssi.good_dbm(),
                weights.congestion,
            ),
            band: low_congestion.then(|| {
                if band_preferred {
                    band_score(&config.band, band, weights.band)
                } else {
                    0
                }
            }),
            oce_wan: low_congestion.then(|| {
                oce_wan_score(
                    &config.oce_wan,
                    ie.and_then(|bytes| self.oce.reduced_wan_metrics(bytes)),
                    weights.oce_wan,
                )
            }),
            oce_ap_tx_power: ap_tx_power_score(
                &ladder,
                rssi,
                ie.and_then(|bytes| self.oce.ap_tx_power(bytes)),
                weights.oce_ap_tx_power,
            ),
            oce_subnet_id: subnet_id_score(
                ie.is_some_and(|bytes| self.oce.subnet_id_present(bytes)),
                weights.oce_subnet_id,
            ),
            nss: nss_score(
                &config.nss,
                candidate.nss,
                station_nss,
                prorated_pct,
                weights.nss,
            ),
        };

        log_evaluation(caps, candidate, band, width, &breakdown);
        breakdown
    }
}

impl<O, B, N> CandidateScorer for BssScorer<O, B, N>
where
    O: OceIeParser,
    B: BandClassifier,
    N: StationNssProbe,
{
    fn score(&self, config: &ScoringConfig, candidate: &CandidateRecord, pcl_weight: u8) -> i32 {
        self.breakdown(config, candidate, pcl_weight).total()
    }
}

fn log_evaluation(
    caps: &Capabilities,
    candidate: &CandidateRecord,
    band: Option<Band>,
    width: ChannelWidth,
    breakdown: &ScoreBreakdown,
) {
    debug!(
        "station: ht {} vht {} he {} vht_24g {} bfee {} bonding_24g {} bonding_5g {} nss {}",
        caps.ht,
        caps.vht,
        caps.he,
        caps.vht_24g,
        caps.beamformee,
        caps.channel_bonding_24g,
        caps.channel_bonding_5g,
        breakdown.station_nss
    );
    debug!(
        "candidate {} freq {} band {}: rssi {} width {width:?} nss {} congestion {}% scores {breakdown:?} total {}",
        candidate.bssid,
        candidate.frequency_mhz,
        band.map_or("unknown", Band::as_str),
        candidate.rssi_dbm,
        candidate.nss,
        breakdown.congestion_pct,
        breakdown.total()
    );
}
