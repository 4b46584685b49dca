//! Score candidates and order them by preference.
//!
//! The [`CandidateScorer`] trait is the seam between the data model and the
//! scoring engine. Implementations compute a composite signed score for one
//! candidate; the provided methods write it back into the record and rank a
//! whole scan result.

use std::cmp::Ordering;

use crate::{CandidateRecord, PclProvider, ScoringConfig};

/// Compute a composite preference score for a candidate.
///
/// Implementations must be pure functions of their inputs and thread-safe
/// (`Send` + `Sync`) so a ranking pass can fan out across threads against one
/// configuration snapshot.
///
/// # Examples
///
/// ```rust
/// use airwave_core::{Bssid, CandidateRecord, CandidateScorer, ScoringConfig};
///
/// struct SignalOnly;
///
/// impl CandidateScorer for SignalOnly {
///     fn score(&self, _config: &ScoringConfig, candidate: &CandidateRecord, _pcl: u8) -> i32 {
///         i32::from(candidate.rssi_dbm) + 100
///     }
/// }
///
/// let config = ScoringConfig::default();
/// let mut candidate = CandidateRecord::new(Bssid::new([2, 0, 0, 0, 0, 1]), 2412, -60);
/// assert_eq!(SignalOnly.evaluate(&config, &mut candidate, 0), 40);
/// assert_eq!(candidate.bss_score, 40);
/// ```
pub trait CandidateScorer: Send + Sync {
    /// Return the composite score of `candidate` under `config`.
    ///
    /// `pcl_weight` is the preferred-channel-list weight of the candidate's
    /// frequency, zero when it is not listed.
    fn score(&self, config: &ScoringConfig, candidate: &CandidateRecord, pcl_weight: u8) -> i32;

    /// Score `candidate` and store the result in [`CandidateRecord::bss_score`].
    fn evaluate(
        &self,
        config: &ScoringConfig,
        candidate: &mut CandidateRecord,
        pcl_weight: u8,
    ) -> i32 {
        let score = self.score(config, candidate, pcl_weight);
        candidate.bss_score = score;
        score
    }

    /// Score every candidate and sort them best first.
    ///
    /// Candidates that tie on both score and signal keep their relative
    /// order.
    fn rank(
        &self,
        config: &ScoringConfig,
        candidates: &mut [CandidateRecord],
        pcl: &dyn PclProvider,
    ) {
        for candidate in candidates.iter_mut() {
            let weight = pcl.weight_for(candidate.frequency_mhz);
            self.evaluate(config, candidate, weight);
        }
        candidates.sort_by(preference_order);
    }
}

/// Order two scored candidates, best first.
///
/// Higher [`CandidateRecord::bss_score`] sorts earlier; equal scores fall back
/// to the stronger signal.
#[must_use]
pub fn preference_order(a: &CandidateRecord, b: &CandidateRecord) -> Ordering {
    b.bss_score
        .cmp(&a.bss_score)
        .then_with(|| b.rssi_dbm.cmp(&a.rssi_dbm))
}

/// Whether `a` should be preferred over `b`.
///
/// # Examples
/// ```
/// use airwave_core::{Bssid, CandidateRecord, is_better};
///
/// let mut a = CandidateRecord::new(Bssid::new([0; 6]), 5180, -60);
/// let mut b = CandidateRecord::new(Bssid::new([1; 6]), 5180, -70);
/// a.bss_score = 500;
/// b.bss_score = 500;
/// assert!(is_better(&a, &b));
/// assert!(!is_better(&a, &a));
/// ```
#[must_use]
pub fn is_better(a: &CandidateRecord, b: &CandidateRecord) -> bool {
    preference_order(a, b) == Ordering::Less
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SignalOnlyScorer;
    use crate::{Bssid, PclEntry, PreferredChannelList};
    use rstest::rstest;

    fn scored(id: u8, rssi: i8, score: i32) -> CandidateRecord {
        let mut candidate = CandidateRecord::new(Bssid::new([0, 0, 0, 0, 0, id]), 5180, rssi);
        candidate.bss_score = score;
        candidate
    }

    #[rstest]
    #[case(scored(1, -70, 900), scored(2, -50, 800), true)]
    #[case(scored(1, -70, 800), scored(2, -50, 900), false)]
    #[case(scored(1, -50, 800), scored(2, -70, 800), true)]
    #[case(scored(1, -70, 800), scored(2, -50, 800), false)]
    #[case(scored(1, -60, 800), scored(2, -60, 800), false)]
    fn comparator_prefers_score_then_signal(
        #[case] a: CandidateRecord,
        #[case] b: CandidateRecord,
        #[case] expected: bool,
    ) {
        assert_eq!(is_better(&a, &b), expected);
    }

    #[rstest]
    fn comparator_is_irreflexive() {
        let candidate = scored(1, -60, 700);
        assert!(!is_better(&candidate, &candidate));
    }

    #[rstest]
    fn rank_writes_scores_and_sorts_best_first() {
        let pcl = PreferredChannelList::new(vec![PclEntry {
            frequency_mhz: 2412,
            weight: 30,
        }]);
        let mut candidates = vec![
            CandidateRecord::new(Bssid::new([0, 0, 0, 0, 0, 1]), 5180, -70),
            CandidateRecord::new(Bssid::new([0, 0, 0, 0, 0, 2]), 2412, -80),
            CandidateRecord::new(Bssid::new([0, 0, 0, 0, 0, 3]), 5500, -60),
        ];
        SignalOnlyScorer.rank(&ScoringConfig::default(), &mut candidates, &pcl);

        let order: Vec<i32> = candidates.iter().map(|c| c.bss_score).collect();
        assert_eq!(order, vec![50, 40, 30]);
    }

    #[rstest]
    fn rank_keeps_exact_ties_in_input_order() {
        let mut candidates = vec![
            CandidateRecord::new(Bssid::new([0, 0, 0, 0, 0, 1]), 5180, -65),
            CandidateRecord::new(Bssid::new([0, 0, 0, 0, 0, 2]), 5180, -65),
        ];
        SignalOnlyScorer.rank(
            &ScoringConfig::default(),
            &mut candidates,
            &PreferredChannelList::default(),
        );
        let ids: Vec<String> = candidates.iter().map(|c| c.bssid.to_string()).collect();
        assert_eq!(ids, vec!["00:00:00:00:00:01", "00:00:00:00:00:02"]);
    }
}
