//! Rank command implementation for the Airwave CLI.

use airwave_core::{
    BandClassifier, Bssid, CandidateRecord, CandidateScorer, FrequencyBandClassifier, PclProvider,
    PlatformNss, PreferredChannelList, ScoringConfig,
};
use airwave_scorer::{BssScorer, ScoreBreakdown};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_RANK_CANDIDATES, ARG_RANK_CURRENT_FREQUENCY, ARG_RANK_DBS_2X2_CAPABLE,
    ARG_RANK_DBS_CAPABLE, ARG_RANK_PCL, ARG_RANK_SCORING_CONFIG, CliError, ENV_RANK_CANDIDATES,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a scan result and print the candidates best first. \
                 Candidates are a JSON array of BSS records; the scoring \
                 configuration and preferred channel list are optional JSON \
                 documents. Options can also come from configuration files \
                 or AIRWAVE_* environment variables.",
    about = "Rank scanned access points"
)]
#[ortho_config(prefix = "AIRWAVE")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of candidate records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// Path to a JSON scoring configuration; built-in defaults otherwise.
    #[arg(long = ARG_RANK_SCORING_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) scoring_config: Option<Utf8PathBuf>,
    /// Path to a JSON preferred channel list.
    #[arg(long = ARG_RANK_PCL, value_name = "path")]
    #[serde(default)]
    pub(crate) pcl: Option<Utf8PathBuf>,
    /// Frequency of the current connection in MHz.
    #[arg(long = ARG_RANK_CURRENT_FREQUENCY, value_name = "mhz")]
    #[serde(default)]
    pub(crate) current_frequency: Option<u32>,
    /// The radio supports dual-band simultaneous operation.
    #[arg(long = ARG_RANK_DBS_CAPABLE, value_name = "bool")]
    #[serde(default)]
    pub(crate) dbs_capable: Option<bool>,
    /// Both DBS radios support two spatial streams.
    #[arg(long = ARG_RANK_DBS_2X2_CAPABLE, value_name = "bool")]
    #[serde(default)]
    pub(crate) dbs_2x2_capable: Option<bool>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the candidate list.
    pub(crate) candidates: Utf8PathBuf,
    /// Optional scoring configuration file.
    pub(crate) scoring_config: Option<Utf8PathBuf>,
    /// Optional preferred channel list file.
    pub(crate) pcl: Option<Utf8PathBuf>,
    /// Platform state used to resolve station streams.
    pub(crate) platform: PlatformNss,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.candidates, ARG_RANK_CANDIDATES)?;
        if let Some(path) = &self.scoring_config {
            Self::require_existing(path, ARG_RANK_SCORING_CONFIG)?;
        }
        if let Some(path) = &self.pcl {
            Self::require_existing(path, ARG_RANK_PCL)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_RANK_CANDIDATES,
            env: ENV_RANK_CANDIDATES,
        })?;
        let platform = PlatformNss {
            dbs_capable: args.dbs_capable.unwrap_or_default(),
            dbs_2x2_capable: args.dbs_2x2_capable.unwrap_or_default(),
            current_band: args
                .current_frequency
                .and_then(|mhz| FrequencyBandClassifier.classify(mhz)),
        };
        Ok(Self {
            candidates,
            scoring_config: args.scoring_config,
            pcl: args.pcl,
            platform,
        })
    }
}

/// One ranked candidate as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RankedCandidate {
    pub(crate) bssid: Bssid,
    pub(crate) frequency_mhz: u32,
    pub(crate) rssi_dbm: i8,
    pub(crate) bss_score: i32,
    pub(crate) breakdown: ScoreBreakdown,
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let ranking = execute_rank(&config)?;
    write_ranking(writer, &ranking)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_rank(config: &RankConfig) -> Result<Vec<RankedCandidate>, CliError> {
    let scoring = match &config.scoring_config {
        Some(path) => load_json::<ScoringConfig>(path, ARG_RANK_SCORING_CONFIG)?,
        None => ScoringConfig::default(),
    }
    .validate()?;
    let pcl = match &config.pcl {
        Some(path) => load_json::<PreferredChannelList>(path, ARG_RANK_PCL)?,
        None => PreferredChannelList::default(),
    };
    let mut candidates: Vec<CandidateRecord> =
        load_json(&config.candidates, ARG_RANK_CANDIDATES)?;

    let scorer = BssScorer::with_platform(config.platform);
    scorer.rank(&scoring, &mut candidates, &pcl);
    info!(
        "ranked {} candidates from {}",
        candidates.len(),
        config.candidates
    );

    Ok(candidates
        .iter()
        .map(|candidate| RankedCandidate {
            bssid: candidate.bssid,
            frequency_mhz: candidate.frequency_mhz,
            rssi_dbm: candidate.rssi_dbm,
            bss_score: candidate.bss_score,
            breakdown: scorer
                .breakdown(&scoring, candidate, pcl.weight_for(candidate.frequency_mhz)),
        })
        .collect())
}

/// Loads a JSON document from disk.
pub(super) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn write_ranking(writer: &mut dyn Write, ranking: &[RankedCandidate]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(ranking).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
