//! Scan-result fixtures shared by the rank CLI tests.

use airwave_core::{Bssid, CandidateRecord, ChannelWidth};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const STRONG_5GHZ: Bssid = Bssid::new([2, 0, 0, 0, 0, 1]);
pub(super) const WEAK_24GHZ: Bssid = Bssid::new([2, 0, 0, 0, 0, 2]);

/// Temporary directory holding the JSON inputs of one CLI invocation.
#[derive(Debug)]
pub(super) struct ScanDir {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl ScanDir {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_candidates(&self, candidates: &[CandidateRecord]) -> Utf8PathBuf {
        self.write_json("candidates.json", candidates)
    }

    pub(super) fn write_json<T: serde::Serialize + ?Sized>(
        &self,
        name: &str,
        value: &T,
    ) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_string_pretty(value).expect("serialize fixture");
        write_utf8(&path, payload.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture");
}

pub(super) fn strong_5ghz() -> CandidateRecord {
    CandidateRecord::new(STRONG_5GHZ, 5180, -50)
        .with_ht(true)
        .with_vht(true)
        .with_he(true)
        .with_channel_width(ChannelWidth::Mhz80)
        .with_nss(2)
        .with_su_beamformer(true)
        .with_qbss_load(51)
}

pub(super) fn weak_24ghz() -> CandidateRecord {
    CandidateRecord::new(WEAK_24GHZ, 2412, -78).with_ht(true)
}
