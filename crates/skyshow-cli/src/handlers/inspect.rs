//! Inspect command handler

use crate::cli::{InspectArgs, OutputFormat};
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use serde::Serialize;
use serde_json::Value;
use skyshow_showfile::{LoaderConfig, ShowLoader, ShowSpecification};
use tracing::{info, instrument};

/// Per-drone summary line
#[derive(Debug, Serialize)]
struct DroneSummary {
    trajectory_version: u64,
    points: Option<usize>,
}

/// Machine-readable show summary
#[derive(Debug, Serialize)]
struct ShowSummary {
    version: u64,
    drone_count: usize,
    drones: Vec<DroneSummary>,
}

impl ShowSummary {
    fn from_show(show: &ShowSpecification) -> Self {
        let drones = show
            .drones()
            .iter()
            .map(|drone| {
                let trajectory = &drone["settings"]["trajectory"];
                DroneSummary {
                    trajectory_version: trajectory["version"].as_u64().unwrap_or_default(),
                    points: trajectory
                        .get("points")
                        .and_then(Value::as_array)
                        .map(Vec::len),
                }
            })
            .collect();

        Self {
            version: show.version(),
            drone_count: show.drone_count(),
            drones,
        }
    }
}

/// Handle the inspect command
#[instrument(skip(output), fields(file = %args.show_file.display()))]
pub fn handle_inspect(args: InspectArgs, output: &mut OutputWriter) -> Result<()> {
    info!("Inspecting show file");

    if !args.show_file.exists() {
        return Err(Error::FileNotFound {
            path: args.show_file,
        });
    }

    let loader = ShowLoader::with_config(LoaderConfig {
        max_depth: args.max_depth,
        ..Default::default()
    });
    let show = loader.load_from_path(&args.show_file)?;

    if args.full {
        return output.data(show.as_value());
    }

    let summary = ShowSummary::from_show(&show);
    if output.format() == OutputFormat::Human {
        output.section(&format!("Show file: {}", args.show_file.display()))?;
        output.writeln(&format!("format version: {}", summary.version))?;
        output.writeln(&format!("drones: {}", summary.drone_count))?;
        for (index, drone) in summary.drones.iter().enumerate() {
            let points = drone
                .points
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string());
            output.writeln(&format!(
                "  drone {index}: trajectory version {}, {points} point(s)",
                drone.trajectory_version
            ))?;
        }
        Ok(())
    } else {
        output.data(&summary)
    }
}
