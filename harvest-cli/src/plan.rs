//! Plan command implementation for the Harvest CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use harvest_core::{
    CandidateStop, Diagnostics, HaversineMetres, Location, PlanRequest, PlanResponse,
    RoutePlanner, RouteRendering, StopId,
};
use harvest_links::{DEFAULT_BASE_URL, DirectionsLink, DirectionsLinkConfig};
use harvest_planner::NearestNeighbourPlanner;
use log::{info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_PLAN_MAPS_BASE_URL, ARG_PLAN_MAX_STOPS, ARG_PLAN_METRIC, ARG_PLAN_REQUEST, CliError,
    ENV_PLAN_REQUEST, fs,
};

/// Default cap on candidate stops accepted in one request.
pub(crate) const DEFAULT_MAX_STOPS: usize = 500;

/// Distance metric selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum MetricChoice {
    /// Squared degree differences; matches previously issued links.
    #[default]
    SquaredDegrees,
    /// Great-circle distance in metres.
    Haversine,
}

impl MetricChoice {
    fn planner(self) -> Box<dyn RoutePlanner<()>> {
        match self {
            Self::SquaredDegrees => Box::new(NearestNeighbourPlanner::new()),
            Self::Haversine => Box::new(NearestNeighbourPlanner::with_metric(HaversineMetres)),
        }
    }
}

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a delivery route from a JSON request holding the \
                 farmer's location and the selected orders. Orders without a \
                 usable location are skipped and reported as excluded.",
    about = "Plan a delivery route"
)]
#[ortho_config(prefix = "HARVEST")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing the plan request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Metric used to compare stops.
    #[arg(long = ARG_PLAN_METRIC, value_enum, value_name = "metric")]
    #[serde(default)]
    pub(crate) metric: Option<MetricChoice>,
    /// Maximum number of stops accepted in one request.
    #[arg(long = ARG_PLAN_MAX_STOPS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_stops: Option<usize>,
    /// Base URL for the directions link.
    #[arg(long = ARG_PLAN_MAPS_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) maps_base_url: Option<String>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Metric used to compare stops.
    pub(crate) metric: MetricChoice,
    /// Maximum number of stops accepted in one request.
    pub(crate) max_stops: usize,
    /// Base URL for the directions link.
    pub(crate) maps_base_url: String,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match fs::file_is_file(path) {
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

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        Ok(Self {
            request_path,
            metric: args.metric.unwrap_or_default(),
            max_stops: args.max_stops.unwrap_or(DEFAULT_MAX_STOPS),
            maps_base_url: args
                .maps_base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        })
    }
}

/// JSON shape of a plan request file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct PlanRequestFile {
    /// The farmer's registered location.
    #[serde(default)]
    pub(crate) origin: Location,
    /// Orders selected for delivery, in selection order.
    #[serde(default)]
    pub(crate) stops: Vec<StopRecord>,
}

/// One selected order in a plan request file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct StopRecord {
    /// Order identifier.
    pub(crate) id: StopId,
    /// Delivery latitude, if known.
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Delivery longitude, if known.
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
}

impl PlanRequestFile {
    fn into_plan_request(self) -> PlanRequest<()> {
        let stops = self
            .stops
            .into_iter()
            .map(|record| {
                CandidateStop::bare(
                    record.id,
                    Location {
                        latitude: record.latitude,
                        longitude: record.longitude,
                    },
                )
            })
            .collect();
        PlanRequest::new(self.origin, stops)
    }
}

/// JSON document printed by the `plan` command.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct PlanOutput {
    /// Stop identifiers in visiting order.
    pub(crate) order: Vec<StopId>,
    /// Stops skipped for lack of a usable location.
    pub(crate) excluded: Vec<StopId>,
    /// Origin, destination and waypoints of the route.
    pub(crate) rendering: RouteRendering,
    /// Directions link, absent when nothing could be routed.
    pub(crate) url: Option<String>,
    /// Planner counters.
    pub(crate) diagnostics: Diagnostics,
}

impl PlanOutput {
    fn new(response: &PlanResponse<()>, link: &DirectionsLink) -> Self {
        let rendering = response.route.rendering();
        let url = link.render(&rendering);
        Self {
            order: response.route.stop_ids(),
            excluded: response.excluded.clone(),
            rendering,
            url,
            diagnostics: response.diagnostics,
        }
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let output = execute_plan(&config)?;
    write_plan_output(writer, &output)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_plan(config: &PlanConfig) -> Result<PlanOutput, CliError> {
    let link = DirectionsLink::new(DirectionsLinkConfig::new(config.maps_base_url.clone()))?;
    let request = load_plan_request(&config.request_path)?;
    let count = request.stops.len();
    if count > config.max_stops {
        return Err(CliError::TooManyStops {
            count,
            max: config.max_stops,
        });
    }

    let response = config.metric.planner().plan(request.into_plan_request())?;
    let output = PlanOutput::new(&response, &link);
    if output.url.is_none() {
        warn!("no valid locations found");
    } else {
        info!(
            "planned {} of {count} stops using {:?}",
            output.order.len(),
            config.metric
        );
    }
    Ok(output)
}

/// Loads a JSON-encoded plan request from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequestFile, CliError> {
    let file = fs::open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_plan_output(writer: &mut dyn Write, output: &PlanOutput) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(output).map_err(CliError::SerialisePlanOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WritePlanOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
