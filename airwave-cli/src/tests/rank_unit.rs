//! Focused unit tests covering rank CLI configuration and input handling.

use super::helpers::{ScanDir, WEAK_24GHZ, strong_5ghz, weak_24ghz, write_utf8};
use super::*;
use crate::rank::{RankConfig, config_from_layers_for_test, execute_rank};
use airwave_core::{Band, Bssid, CandidateRecord, ConfigError, PclEntry, PlatformNss};
use ortho_config::MergeComposer;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn scan() -> ScanDir {
    ScanDir::new()
}

fn config_for(candidates: camino::Utf8PathBuf) -> RankConfig {
    RankConfig {
        candidates,
        scoring_config: None,
        pcl: None,
        platform: PlatformNss::default(),
    }
}

#[rstest]
fn converting_rank_without_candidates_errors() {
    let err = RankConfig::try_from(RankArgs::default()).expect_err("missing candidates");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RANK_CANDIDATES);
            assert_eq!(env, ENV_RANK_CANDIDATES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::two_ghz(Some(2437), Some(Band::TwoGhz))]
#[case::five_ghz(Some(5180), Some(Band::FiveGhz))]
#[case::six_ghz(Some(5975), Some(Band::SixGhz))]
#[case::unknown(Some(900), None)]
#[case::disconnected(None, None)]
fn current_frequency_resolves_the_current_band(
    scan: ScanDir,
    #[case] frequency: Option<u32>,
    #[case] expected: Option<Band>,
) {
    let args = RankArgs {
        candidates: Some(scan.path("candidates.json")),
        current_frequency: frequency,
        dbs_capable: Some(true),
        ..RankArgs::default()
    };
    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(config.platform.current_band, expected);
    assert!(config.platform.dbs_capable);
    assert!(!config.platform.dbs_2x2_capable);
}

#[rstest]
fn validate_sources_accepts_existing_inputs(scan: ScanDir) {
    let mut config = config_for(scan.write_candidates(&[]));
    config.pcl = Some(scan.write_json("pcl.json", &Vec::<PclEntry>::new()));
    config.validate_sources().expect("inputs exist");
}

#[rstest]
fn validate_sources_reports_missing_pcl(scan: ScanDir) {
    let mut config = config_for(scan.write_candidates(&[]));
    config.pcl = Some(scan.path("absent.json"));
    match config.validate_sources().expect_err("missing pcl") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_RANK_PCL),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories(scan: ScanDir) {
    let nested = scan.path("configs");
    std::fs::create_dir(nested.as_std_path()).expect("create dir");
    let mut config = config_for(scan.write_candidates(&[]));
    config.scoring_config = Some(nested);
    match config.validate_sources().expect_err("directory is not a file") {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_RANK_SCORING_CONFIG),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn invalid_config_layers_map_to_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "current_frequency": "fast" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence(scan: ScanDir) {
    let file_candidates = scan.path("from-file.json");
    let env_candidates = scan.path("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "candidates": file_candidates.as_str(),
            "dbs_capable": true,
            "current_frequency": 2412,
        }),
        None,
    );
    composer.push_environment(json!({
        "candidates": env_candidates.as_str(),
    }));
    composer.push_cli(json!({
        "current_frequency": 5180,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.candidates, env_candidates);
    assert!(config.platform.dbs_capable);
    assert_eq!(config.platform.current_band, Some(Band::FiveGhz));
}

#[rstest]
fn ranking_orders_candidates_and_reports_breakdowns(scan: ScanDir) {
    let config = config_for(scan.write_candidates(&[weak_24ghz(), strong_5ghz()]));
    let ranking = execute_rank(&config).expect("ranking should succeed");

    let order: Vec<Bssid> = ranking.iter().map(|entry| entry.bssid).collect();
    assert_eq!(order, vec![strong_5ghz().bssid, WEAK_24GHZ]);
    let scores: Vec<i32> = ranking.iter().map(|entry| entry.bss_score).collect();
    assert_eq!(scores, vec![6400, 2550]);
    for entry in &ranking {
        assert_eq!(entry.breakdown.total(), entry.bss_score);
    }
}

#[rstest]
fn preferred_channels_break_otherwise_equal_candidates(scan: ScanDir) {
    let listed = CandidateRecord::new(Bssid::new([2, 0, 0, 0, 0, 9]), 2437, -60).with_ht(true);
    let unlisted = CandidateRecord::new(Bssid::new([2, 0, 0, 0, 0, 8]), 2412, -60).with_ht(true);
    let mut config = config_for(scan.write_candidates(&[unlisted, listed.clone()]));
    config.pcl = Some(scan.write_json(
        "pcl.json",
        &[PclEntry {
            frequency_mhz: 2437,
            weight: 255,
        }],
    ));

    let ranking = execute_rank(&config).expect("ranking should succeed");
    let first = ranking.first().expect("two candidates");
    let second = ranking.get(1).expect("two candidates");
    assert_eq!(first.bssid, listed.bssid);
    assert_eq!(first.breakdown.pcl, 1000);
    assert_eq!(second.breakdown.pcl, 0);
    assert_eq!(first.bss_score - second.bss_score, 1000);
}

#[rstest]
fn dbs_platform_limits_cross_band_streams(scan: ScanDir) {
    let candidate = CandidateRecord::new(WEAK_24GHZ, 2412, -50).with_nss(2);
    let mut config = config_for(scan.write_candidates(&[candidate]));
    config.platform = PlatformNss {
        dbs_capable: true,
        dbs_2x2_capable: false,
        current_band: Some(Band::FiveGhz),
    };

    let ranking = execute_rank(&config).expect("ranking should succeed");
    let entry = ranking.first().expect("one candidate");
    assert_eq!(entry.breakdown.station_nss, 1);
}

#[rstest]
fn invalid_scoring_configuration_is_rejected(scan: ScanDir) {
    let mut config = config_for(scan.write_candidates(&[strong_5ghz()]));
    config.scoring_config =
        Some(scan.write_json("scoring.json", &json!({ "weights": { "rssi": 101 } })));

    match execute_rank(&config).expect_err("weight above 100") {
        CliError::InvalidConfig(ConfigError::WeightOutOfRange { field, value }) => {
            assert_eq!(field, "rssi");
            assert_eq!(value, 101);
        }
        other => panic!("expected InvalidConfig, found {other:?}"),
    }
}

#[rstest]
fn malformed_pcl_reports_the_offending_input(scan: ScanDir) {
    let pcl = scan.path("pcl.json");
    write_utf8(&pcl, b"{ \"frequency_mhz\": ");
    let mut config = config_for(scan.write_candidates(&[]));
    config.pcl = Some(pcl.clone());

    match execute_rank(&config).expect_err("malformed pcl") {
        CliError::ParseInput { field, path, .. } => {
            assert_eq!(field, ARG_RANK_PCL);
            assert_eq!(path, pcl);
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}
