//! Benchmark support utilities for candidate ranking.
//!
//! Provides deterministic scan results that mix bands, widths and congestion
//! levels so the benchmark exercises every scoring branch.

use airwave_core::{Bssid, CandidateRecord, ChannelWidth, PclEntry, PreferredChannelList};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Channel centre frequencies drawn for generated candidates.
const FREQUENCIES: [u32; 8] = [2412, 2437, 2462, 5180, 5500, 5745, 5955, 6115];

const WIDTHS: [ChannelWidth; 4] = [
    ChannelWidth::Mhz20,
    ChannelWidth::Mhz40,
    ChannelWidth::Mhz80,
    ChannelWidth::Mhz160,
];

/// Generate `count` candidates from a seeded RNG.
#[must_use]
#[expect(
    clippy::indexing_slicing,
    reason = "indices are drawn within the array bounds"
)]
pub fn generate_candidates(count: usize, seed: u64) -> Vec<CandidateRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let bssid = Bssid::new([0x02, 0, rng.r#gen(), rng.r#gen(), rng.r#gen(), rng.r#gen()]);
            let frequency = FREQUENCIES[rng.gen_range(0..FREQUENCIES.len())];
            let mut candidate = CandidateRecord::new(bssid, frequency, rng.gen_range(-95..=-35))
                .with_channel_width(WIDTHS[rng.gen_range(0..WIDTHS.len())])
                .with_nss(rng.gen_range(1..=4))
                .with_ht(rng.gen_bool(0.9))
                .with_vht(rng.gen_bool(0.7))
                .with_he(rng.gen_bool(0.4))
                .with_su_beamformer(rng.gen_bool(0.5));
            if rng.gen_bool(0.5) {
                candidate = candidate.with_air_time_fraction(rng.r#gen());
            } else if rng.gen_bool(0.5) {
                candidate = candidate.with_qbss_load(rng.r#gen());
            }
            candidate
        })
        .collect()
}

/// Preferred channel list covering the 5 GHz frequencies.
#[must_use]
pub fn preferred_channels() -> PreferredChannelList {
    [(5180, 255), (5500, 200), (5745, 150)]
        .into_iter()
        .map(|(frequency_mhz, weight)| PclEntry {
            frequency_mhz,
            weight,
        })
        .collect()
}
