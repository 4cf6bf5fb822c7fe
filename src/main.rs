// Calendar Grid
// Command-line front end for the time-grid layout

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use calendar_grid::layout::geometry::PixelRect;
use calendar_grid::layout::TimeGridLayout;
use calendar_grid::models::grid::GridPosition;
use calendar_grid::models::occurrence::{Occurrence, TimeRange};
use calendar_grid::services::settings::SettingsService;
use calendar_grid::services::timezone::{TzDatabase, ZoneDatabase};
use calendar_grid::utils::date::local_date;

#[derive(Parser)]
#[command(name = "calendar-grid")]
#[command(about = "Lay out calendar occurrences on a day × time-slot grid")]
struct Cli {
    /// Settings file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print grid positions and pixel rectangles for occurrences in a JSON file
    Layout {
        /// JSON array of {"title", "starts_at", "ends_at"} (RFC 3339)
        file: PathBuf,

        /// Display zone, overriding the settings (e.g. "London", "Asia/Tokyo")
        #[arg(short, long)]
        time_zone: Option<String>,

        /// Date of the first day column (defaults to the earliest occurrence's day)
        #[arg(short, long)]
        reference_date: Option<NaiveDate>,
    },
    /// Print the time-axis labels of the configured grid
    Slots,
    /// List time zones matching a query
    Zones {
        query: String,
    },
}

#[derive(Deserialize)]
struct OccurrenceInput {
    title: String,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct LayoutLine<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<GridPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rect: Option<PixelRect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let settings_service = match cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::with_default_path(),
    };
    let mut settings = settings_service.get()?;

    match cli.command {
        Commands::Layout {
            file,
            time_zone,
            reference_date,
        } => {
            if let Some(zone) = time_zone {
                settings.time_zone = zone;
            }
            let zone = TzDatabase.resolve(&settings.time_zone)?;

            let data = fs::read_to_string(&file)
                .with_context(|| format!("failed to read occurrences from {}", file.display()))?;
            let inputs: Vec<OccurrenceInput> = serde_json::from_str(&data)
                .with_context(|| format!("failed to parse occurrences from {}", file.display()))?;

            let occurrences = inputs
                .into_iter()
                .map(|input| {
                    let range = TimeRange::new(input.starts_at, input.ends_at)?;
                    Occurrence::new(input.title, range, zone)
                })
                .collect::<Result<Vec<_>, _>>()?;

            let reference_date = reference_date
                .or_else(|| {
                    occurrences
                        .iter()
                        .map(|o| local_date(&zone, o.start()))
                        .min()
                })
                .unwrap_or_else(|| local_date(&zone, Utc::now()));

            let config = settings.to_config(reference_date)?;
            let metrics = settings.metrics()?;
            log::info!(
                "Laying out {} occurrences from {} in {}",
                occurrences.len(),
                reference_date,
                config.time_zone
            );

            for occurrence in &occurrences {
                let line = match TimeGridLayout::to_grid_position(occurrence, &config) {
                    Ok(position) => LayoutLine {
                        title: &occurrence.title,
                        position: Some(position),
                        rect: Some(metrics.rect_for(&position)),
                        error: None,
                    },
                    Err(e) => LayoutLine {
                        title: &occurrence.title,
                        position: None,
                        rect: None,
                        error: Some(e.to_string()),
                    },
                };
                println!("{}", serde_json::to_string(&line)?);
            }
        }
        Commands::Slots => {
            let zone = TzDatabase.resolve(&settings.time_zone)?;
            let config = settings.to_config(local_date(&zone, Utc::now()))?;
            for slot in TimeGridLayout::time_slots(&config) {
                println!("{:>3}  {}–{}", slot.index, slot.label(), slot.end.format("%H:%M"));
            }
        }
        Commands::Zones { query } => {
            let matches = TzDatabase.search(&query);
            if matches.is_empty() {
                return Err(anyhow!("No time zone matches '{}'", query));
            }
            let now = Utc::now();
            for name in matches {
                let zone = TzDatabase.resolve(name)?;
                println!("{:<32} UTC{}", name, TzDatabase.offset_at(&zone, now));
            }
        }
    }

    Ok(())
}
