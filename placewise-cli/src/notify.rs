//! Notify command implementation for the Placewise CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use geo::Coord;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placewise_core::{Place, coordinate::lat_lon_serde};
use placewise_notify::{
    DeliveryOptions, NearbyAlertSettings, NotificationEligibility, NotificationLedger,
    NotificationSettings, NotifyError, check_nearby, evaluate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::io::{load_request, require_existing, write_response};
use crate::{ARG_NOTIFY_REQUEST, CliError, ENV_NOTIFY_REQUEST};

/// CLI arguments for the `notify` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Decide which favourite and nearby places deserve an alert. \
                 The request is a JSON file holding the user's location, \
                 alert settings and the ledger of previous alerts; the \
                 response includes the updated ledger to persist.",
    about = "Evaluate proximity alerts"
)]
#[ortho_config(prefix = "PLACEWISE")]
pub(crate) struct NotifyArgs {
    /// Path to a JSON file containing a notification request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Evaluation time in epoch milliseconds; defaults to the system clock.
    #[arg(long = "now-ms", value_name = "millis")]
    #[serde(default)]
    pub(crate) now_ms: Option<u64>,
}

impl NotifyArgs {
    pub(crate) fn into_config(self) -> Result<NotifyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NotifyConfig::try_from(merged)
    }
}

/// Resolved `notify` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NotifyConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Evaluation time in epoch milliseconds.
    pub(crate) now_ms: u64,
}

impl TryFrom<NotifyArgs> for NotifyConfig {
    type Error = CliError;

    fn try_from(args: NotifyArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_NOTIFY_REQUEST,
            env: ENV_NOTIFY_REQUEST,
        })?;
        let now_ms = args.now_ms.unwrap_or_else(system_now_ms);
        Ok(Self {
            request_path,
            now_ms,
        })
    }
}

fn system_now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
        })
}

/// JSON payload accepted by `notify`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NotifyRequest {
    /// Where the user is now.
    #[serde(with = "lat_lon_serde")]
    pub(crate) location: Coord<f64>,
    /// Tracked favourite places.
    #[serde(default, alias = "favourites")]
    pub(crate) favorites: Vec<Place>,
    /// Places around the user to consider for a nearby alert.
    #[serde(default)]
    pub(crate) nearby: Vec<Place>,
    /// Places the user has been to.
    #[serde(default)]
    pub(crate) visited: Vec<Place>,
    /// Favourite alert settings.
    #[serde(default)]
    pub(crate) settings: NotificationSettings,
    /// Nearby alert thresholds.
    #[serde(default)]
    pub(crate) nearby_settings: NearbyAlertSettings,
    /// Last-notified timestamps per place.
    #[serde(default)]
    pub(crate) ledger: NotificationLedger,
}

/// JSON payload printed by `notify`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NotifyResponse {
    /// Decisions for the tracked favourites.
    pub(crate) favorites: Vec<NotificationEligibility>,
    /// Decisions for the nearby places.
    pub(crate) nearby: Vec<NotificationEligibility>,
    /// How favourite alerts should be delivered.
    pub(crate) delivery: DeliveryOptions,
    /// Ledger to persist once the favourite alerts are dispatched.
    pub(crate) ledger: NotificationLedger,
}

pub(super) fn run_notify(args: NotifyArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_notify_with(args, &mut stdout)
}

pub(super) fn run_notify_with(args: NotifyArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.request_path, ARG_NOTIFY_REQUEST)?;
    let request: NotifyRequest = load_request(&config.request_path)?;
    let response = execute_notify(&config, &request)?;
    write_response(writer, &response)
}

pub(crate) fn execute_notify(
    config: &NotifyConfig,
    request: &NotifyRequest,
) -> Result<NotifyResponse, CliError> {
    let path = &config.request_path;
    let favorites = evaluate(
        request.location,
        &request.favorites,
        &request.settings,
        &request.ledger,
        config.now_ms,
    )
    .map_err(|source| invalid_request(path, source))?;

    let visited: BTreeSet<String> = request.visited.iter().map(|place| place.id.clone()).collect();
    let nearby = check_nearby(
        request.location,
        &request.nearby,
        &request.nearby_settings,
        &visited,
    )
    .map_err(|source| invalid_request(path, source))?;

    let ledger = request.ledger.with_dispatched(&favorites, config.now_ms);
    info!(
        "{} favourite and {} nearby alerts due",
        favorites.iter().filter(|decision| decision.should_notify()).count(),
        nearby.iter().filter(|decision| decision.should_notify()).count()
    );
    Ok(NotifyResponse {
        favorites,
        nearby,
        delivery: request.settings.delivery(),
        ledger,
    })
}

fn invalid_request(request_path: &Utf8Path, error: NotifyError) -> CliError {
    let path = request_path.to_path_buf();
    match error {
        NotifyError::InvalidPlace(source) => CliError::InvalidRequest { path, source },
        NotifyError::InvalidSettings(source) => CliError::InvalidSettings { path, source },
    }
}

#[cfg(test)]
pub(crate) fn notify_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<NotifyConfig, CliError> {
    let merged = NotifyArgs::merge_from_layers(layers).map_err(CliError::from)?;
    NotifyConfig::try_from(merged)
}
