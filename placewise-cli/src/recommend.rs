//! Recommend command implementation for the Placewise CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use geo::Coord;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placewise_core::{Place, ScoredPlace, coordinate::lat_lon_serde};
use placewise_notify::{DailyDigest, DigestSchedule};
use placewise_scorer::{Ranker, RankerConfig, ScoreWeights, WeightedScorer, build_profile};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::io::{load_request, require_existing, write_response};
use crate::{ARG_DAILY_RADIUS_KM, ARG_LIMIT, ARG_RECOMMEND_REQUEST, CliError, ENV_RECOMMEND_REQUEST};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank candidate places for a user. The request is a JSON \
                 file holding the user's location, favourite and visited \
                 places, and the candidates to rank.",
    about = "Recommend places from a user's history"
)]
#[ortho_config(prefix = "PLACEWISE")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing a recommendation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Maximum number of places to return.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Only return places close enough to visit today.
    #[arg(long)]
    #[serde(default)]
    pub(crate) daily: bool,
    /// Radius, in kilometres, for daily recommendations.
    #[arg(long = ARG_DAILY_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Whether to produce daily recommendations.
    pub(crate) daily: bool,
    /// Number of places to return.
    pub(crate) limit: usize,
    /// Ranking limits and radii.
    pub(crate) ranker: RankerConfig,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_REQUEST,
            env: ENV_RECOMMEND_REQUEST,
        })?;

        let mut ranker = RankerConfig::default();
        if let Some(radius_km) = args.radius_km {
            if !radius_km.is_finite() || radius_km <= 0.0 {
                return Err(CliError::InvalidOption {
                    field: ARG_DAILY_RADIUS_KM,
                    value: radius_km,
                });
            }
            ranker.daily_radius_km = radius_km;
        }
        let default_limit = if args.daily {
            ranker.daily_limit
        } else {
            ranker.limit
        };
        let limit = args.limit.unwrap_or(default_limit);
        ranker.daily_pool = ranker.daily_pool.max(limit);

        Ok(Self {
            request_path,
            daily: args.daily,
            limit,
            ranker,
        })
    }
}

/// JSON payload accepted by `recommend`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendRequest {
    /// Where the user is now.
    #[serde(with = "lat_lon_serde")]
    pub(crate) location: Coord<f64>,
    /// Places the user has marked as favourites.
    #[serde(default, alias = "favourites")]
    pub(crate) favorites: Vec<Place>,
    /// Places the user has been to.
    #[serde(default)]
    pub(crate) visited: Vec<Place>,
    /// Places to rank.
    #[serde(default)]
    pub(crate) candidates: Vec<Place>,
    /// Score weights; defaults apply when absent.
    #[serde(default)]
    pub(crate) weights: Option<ScoreWeights>,
    /// Override for the profile's proximity radius, in kilometres.
    #[serde(default)]
    pub(crate) profile_radius_km: Option<f64>,
}

/// JSON payload printed by `recommend`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendResponse {
    /// Ranked places, best first.
    pub(crate) recommendations: Vec<ScoredPlace>,
    /// Digest for the scheduler when daily recommendations were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) digest: Option<DailyDigest>,
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.request_path, ARG_RECOMMEND_REQUEST)?;
    let request: RecommendRequest = load_request(&config.request_path)?;
    let response = execute_recommend(&config, &request)?;
    write_response(writer, &response)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    request: &RecommendRequest,
) -> Result<RecommendResponse, CliError> {
    let path = &config.request_path;
    let scorer = WeightedScorer::new(request.weights.unwrap_or_default())
        .map_err(|source| invalid_weights(path, source))?;
    let mut profile = build_profile(&request.favorites, &request.visited)
        .map_err(|source| invalid_request(path, source))?;
    if let Some(radius_km) = request.profile_radius_km {
        profile = profile.with_radius_km(radius_km);
    }

    let ranker = Ranker::new(scorer, config.ranker);
    let recommendations = if config.daily {
        ranker.daily_recommendations(&request.candidates, &profile, request.location, config.limit)
    } else {
        ranker.rank(&request.candidates, &profile, request.location, config.limit)
    }
    .map_err(|source| invalid_request(path, source))?;

    info!(
        "recommending {} of {} candidates",
        recommendations.len(),
        request.candidates.len()
    );
    let digest = if config.daily {
        DailyDigest::from_recommendations(&recommendations, DigestSchedule::default())
    } else {
        None
    };
    Ok(RecommendResponse {
        recommendations,
        digest,
    })
}

fn invalid_request(path: &Utf8Path, source: placewise_core::PlaceError) -> CliError {
    CliError::InvalidRequest {
        path: path.to_path_buf(),
        source,
    }
}

fn invalid_weights(path: &Utf8Path, source: placewise_scorer::ScoreWeightsError) -> CliError {
    CliError::InvalidWeights {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
pub(crate) fn recommend_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
