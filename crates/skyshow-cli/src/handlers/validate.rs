//! Validation command handler

use crate::cli::{OutputFormat, ValidateArgs};
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use serde::Serialize;
use skyshow_showfile::{EmptySwarmPolicy, LoaderConfig, ShowLoader};
use tracing::{debug, info, instrument};

/// Machine-readable validation report
#[derive(Debug, Serialize)]
struct ValidationReport {
    valid: bool,
    version: u64,
    drones: usize,
}

/// Handle the validate command
#[instrument(skip(output), fields(file = %args.show_file.display()))]
pub fn handle_validate(args: ValidateArgs, output: &mut OutputWriter) -> Result<()> {
    info!("Validating show file");
    output.info(&format!("Validating show file: {}", args.show_file.display()))?;

    if !args.show_file.exists() {
        return Err(Error::FileNotFound {
            path: args.show_file,
        });
    }

    let loader = ShowLoader::with_config(LoaderConfig {
        max_depth: args.max_depth,
        empty_swarm_policy: if args.reject_empty {
            EmptySwarmPolicy::Reject
        } else {
            EmptySwarmPolicy::Accept
        },
        ..Default::default()
    });

    match loader.load_from_path(&args.show_file) {
        Ok(show) => {
            debug!(drones = show.drone_count(), "show file loaded");
            output.success("✓ Show file is valid")?;
            output.info(&format!(
                "{} drone(s), format version {}",
                show.drone_count(),
                show.version()
            ))?;
            if output.format() != OutputFormat::Human {
                output.data(&ValidationReport {
                    valid: true,
                    version: show.version(),
                    drones: show.drone_count(),
                })?;
            }
            Ok(())
        }
        Err(e) => {
            output.error("✗ Show file validation failed")?;
            Err(e.into())
        }
    }
}
