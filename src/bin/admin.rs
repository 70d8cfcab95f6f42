//! CLI administration tool for the unwrapped dashboard.
//!
//! Inspects the dataset and previews chart refreshes without starting the
//! HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Dataset summary
//! cargo run --bin admin -- dataset
//!
//! # List artists
//! cargo run --bin admin -- entities --view artist --limit 20
//!
//! # Preview a full refresh
//! cargo run --bin admin -- refresh --entity "The Weeknd" --type artist
//!
//! # Preview a scatter refresh as JSON figures
//! cargo run --bin admin -- refresh --scope scatter --x-axis tempo --y-axis energy --json
//!
//! # Drive the control panel interactively
//! cargo run --bin admin -- explore
//! ```
//!
//! # Environment Variables
//!
//! - `DATASET_PATH` (optional): CSV dataset, overridden by `--dataset`

use unwrapped_dashboard::application::services::{
    BinderOutcome, ChartCoordinator, ControlEvent, ControlPanelBinder, DatasetService, FigureRenderer,
    RefreshReport,
};
use unwrapped_dashboard::config::{self, DEFAULT_TOP_N};
use unwrapped_dashboard::domain::controls::{
    ControlId, ControlSnapshot, FooterAnchor, RefreshScope, read_selection,
};
use unwrapped_dashboard::domain::entities::{AudioFeature, ChartFigure, ViewType};
use unwrapped_dashboard::domain::repositories::TrackRepository;
use unwrapped_dashboard::infrastructure::dataset::InMemoryTrackRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::{Input, Select};
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for the unwrapped dashboard.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV dataset (defaults to `DATASET_PATH`)
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    /// Rows shown by ranked charts
    #[arg(long, global = true, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show dataset summary
    Dataset,

    /// List entity dropdown options
    Entities {
        #[arg(short, long, value_enum, default_value_t = ViewArg::Song)]
        view: ViewArg,

        /// Maximum number of entries to print
        #[arg(short, long, default_value_t = 25)]
        limit: usize,
    },

    /// Preview a chart refresh
    Refresh {
        #[arg(short, long, value_enum, default_value_t = ScopeArg::All)]
        scope: ScopeArg,

        #[arg(long)]
        entity: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,

        /// View type: song or artist
        #[arg(long = "type")]
        view_type: Option<String>,

        /// Audio feature for the dance/energy chart
        #[arg(long)]
        feature: Option<String>,

        #[arg(long)]
        x_axis: Option<String>,

        #[arg(long)]
        y_axis: Option<String>,

        /// Print the figures as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change controls interactively and watch the charts refresh
    Explore,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Song,
    Artist,
}

impl From<ViewArg> for ViewType {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Song => ViewType::Song,
            ViewArg::Artist => ViewType::Artist,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ScopeArg {
    All,
    DanceEnergy,
    Scatter,
}

impl From<ScopeArg> for RefreshScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::All => RefreshScope::All,
            ScopeArg::DanceEnergy => RefreshScope::DanceEnergy,
            ScopeArg::Scatter => RefreshScope::Scatter,
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let path = cli.dataset.unwrap_or_else(config::dataset_path_from_env);
    let tracks: Arc<dyn TrackRepository> = Arc::new(
        InMemoryTrackRepository::from_csv_path(&path)
            .with_context(|| format!("Failed to load dataset from {}", path.display()))?,
    );
    let top_n = cli.top_n.clamp(1, config::MAX_TOP_N);

    match cli.command {
        Commands::Dataset => handle_dataset(&path, tracks),
        Commands::Entities { view, limit } => handle_entities(tracks, view.into(), limit),
        Commands::Refresh {
            scope,
            entity,
            start_date,
            end_date,
            view_type,
            feature,
            x_axis,
            y_axis,
            json,
        } => {
            let document = [
                (ControlId::SongArtistDropdown, entity),
                (ControlId::StartDate, start_date),
                (ControlId::EndDate, end_date),
                (ControlId::TypeRadio, view_type),
                (ControlId::AudioFeatureDropdown, feature),
                (ControlId::XAxisDropdown, x_axis),
                (ControlId::YAxisDropdown, y_axis),
            ]
            .into_iter()
            .fold(ControlSnapshot::new(), |snapshot, (control, value)| match value {
                Some(v) => snapshot.with(control, v),
                None => snapshot.with_empty(control),
            });

            handle_refresh(tracks, top_n, scope.into(), &document, json)
        }
        Commands::Explore => handle_explore(tracks, top_n),
    }
}

/// Displays row count, date range and entity counts.
fn handle_dataset(path: &std::path::Path, tracks: Arc<dyn TrackRepository>) -> Result<()> {
    println!("{}", "📊 Dataset".bright_blue().bold());
    println!();

    let service = DatasetService::new(tracks.clone());

    println!("  File:     {}", path.display().to_string().cyan());
    println!(
        "  Rows:     {}",
        service.row_count().to_string().bright_green().bold()
    );
    match service.date_bounds() {
        Some(bounds) => println!(
            "  Dates:    {} → {}",
            bounds.min.to_string().bright_white(),
            bounds.max.to_string().bright_white()
        ),
        None => println!("  Dates:    {}", "none".yellow()),
    }
    println!(
        "  Songs:    {}",
        tracks
            .entity_names(ViewType::Song)
            .len()
            .to_string()
            .bright_green()
    );
    println!(
        "  Artists:  {}",
        tracks
            .entity_names(ViewType::Artist)
            .len()
            .to_string()
            .bright_green()
    );
    println!();

    Ok(())
}

/// Lists entity options for one view type.
fn handle_entities(tracks: Arc<dyn TrackRepository>, view: ViewType, limit: usize) -> Result<()> {
    println!("{}", format!("📋 Entities ({view})").bright_blue().bold());
    println!();

    let entities = DatasetService::new(tracks).entity_options(Some(view));
    if entities.options.is_empty() {
        println!("{}", "  No entries found".yellow());
        return Ok(());
    }

    for name in entities.options.iter().take(limit) {
        let marker = if entities.default.as_deref() == Some(name.as_str()) {
            "*".bright_green()
        } else {
            " ".normal()
        };
        println!("  {} {}", marker, name.cyan());
    }

    println!();
    println!(
        "  Showing {} of {}",
        limit.min(entities.options.len()).to_string().bright_white().bold(),
        entities.options.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Runs one refresh and prints the report.
fn handle_refresh(
    tracks: Arc<dyn TrackRepository>,
    top_n: usize,
    scope: RefreshScope,
    document: &ControlSnapshot,
    json: bool,
) -> Result<()> {
    let selection = read_selection(document, scope);
    let mut coordinator = ChartCoordinator::new(FigureRenderer::new(tracks, top_n));
    let report = coordinator.refresh(scope, &selection);
    let figures = coordinator.into_renderer().into_figures();

    if json {
        println!("{}", serde_json::to_string_pretty(&figures)?);
        return Ok(());
    }

    println!("{}", "🔄 Refresh preview".bright_blue().bold());
    println!();
    print_report(&report, &figures);

    Ok(())
}

/// Interactive loop: pick a control, set its value, see what refreshes.
fn handle_explore(tracks: Arc<dyn TrackRepository>, top_n: usize) -> Result<()> {
    println!("{}", "🧭 Explore the control panel".bright_blue().bold());
    println!();

    let features: Vec<&str> = AudioFeature::ALL.iter().map(|f| f.column()).collect();
    println!("  Audio features: {}", features.join(", ").bright_black());
    println!();

    let mut document = ControlSnapshot::all_empty();
    let binder = ControlPanelBinder::bind(&document, FooterAnchor::default());

    let mut items: Vec<&str> = ControlId::ALL.iter().map(|c| c.as_str()).collect();
    items.push("scroll");
    items.push("quit");

    loop {
        let choice = Select::new()
            .with_prompt("Control")
            .items(&items)
            .default(0)
            .interact()?;

        let event = match ControlId::ALL.get(choice) {
            Some(&control) => {
                let value: String = Input::new()
                    .with_prompt(format!("{control} value (empty to clear)"))
                    .allow_empty(true)
                    .interact_text()?;

                document = if value.trim().is_empty() {
                    document.with_empty(control)
                } else {
                    document.with(control, value)
                };
                ControlEvent::Change(control)
            }
            None if items[choice] == "scroll" => ControlEvent::Scroll { scroll_y: 0.0 },
            None => break,
        };

        let mut coordinator = ChartCoordinator::new(FigureRenderer::new(tracks.clone(), top_n));
        match binder.handle(event, &document, &mut coordinator) {
            BinderOutcome::Refreshed { scope, report } => {
                println!();
                println!("  Scope: {}", format!("{scope:?}").bright_white().bold());
                print_report(&report, coordinator.renderer().figures());
            }
            BinderOutcome::Repositioned(position) => {
                println!(
                    "  Footer #{} at bottom: {}",
                    position.element_id,
                    position.css_bottom().bright_green()
                );
                println!();
            }
            BinderOutcome::Ignored(control) => {
                println!("  {} {}", "Ignored".yellow(), control);
                println!();
            }
        }
    }

    println!("{}", "👋 Bye".bright_black());
    Ok(())
}

fn print_report(report: &RefreshReport, figures: &[ChartFigure]) {
    println!(
        "  {:<22} {:<8} {}",
        "Chart".bright_white().bold(),
        "Points".bright_white().bold(),
        "Title".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for figure in figures {
        let points: usize = figure.figure.data.iter().map(|t| t.point_count()).sum();
        println!(
            "  {:<22} {:<8} {}",
            figure.container_id.cyan(),
            points.to_string().bright_green(),
            figure.figure.layout.title.bright_black()
        );
    }

    for failure in &report.failed {
        println!(
            "  {:<22} {} {}",
            failure.chart.container_id().red(),
            "FAILED".red().bold(),
            failure.reason
        );
    }

    println!();
    println!(
        "  Updated: {}  Failed: {}",
        report.updated.len().to_string().bright_green().bold(),
        report.failed.len().to_string().red().bold()
    );
    println!();
}
