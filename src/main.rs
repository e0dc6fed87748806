//! Check-in Console
//!
//! Main application entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use checkin_console::{
    config::Settings,
    dashboard::{Dashboard, DashboardView, EmailCheckinStatus, Tab, UploadStatus},
    models::{EventId, UploadFile},
    scanner::Scanner,
    services::{ApiClient, KeyboardWedgeDecoder},
    utils::logging,
    view::TerminalView,
};

#[derive(Parser)]
#[command(name = "checkin-console")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Operator console for event check-in")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overrides the configured one
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Event to work with instead of the first listed event
    #[arg(short, long, global = true)]
    event: Option<EventId>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the backend is reachable
    Health,
    /// Open a dashboard tab (csv-upload, checkin, stats)
    Tab { name: String },
    /// Upload a participant CSV
    Upload { path: Option<PathBuf> },
    /// Show the imported participant count
    CsvStats,
    /// List imported participants
    Participants,
    /// Look up an imported participant by email
    Participant { email: String },
    /// Delete every imported participant
    ClearParticipants {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// List events
    Events,
    /// Show check-in stats and recent check-ins for an event
    Stats,
    /// Check in a participant by email
    Checkin { email: String },
    /// Show totals across all events
    Overview,
    /// Run the QR scanner, reading decoded codes from stdin
    Scan,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(api_url) = &cli.api_url {
        settings.api.base_url = api_url.clone();
    }
    settings.validate()?;

    // Initialize logging
    let guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", checkin_console::info());
    let api = ApiClient::new(&settings.api)?;
    let view = Arc::new(TerminalView::new());

    let outcome = match cli.command {
        Commands::Scan => run_scanner(api, view, &settings, cli.event).await,
        command => run_dashboard(api, view, &settings, cli.event, command)
            .await
            .map(|_| false),
    };

    match outcome {
        Ok(interrupted) => {
            drop(guard);
            if interrupted {
                // a pending stdin read cannot be cancelled and would block runtime shutdown
                std::process::exit(0);
            }
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Run one dashboard action
async fn run_dashboard(
    api: ApiClient,
    view: Arc<TerminalView>,
    settings: &Settings,
    event: Option<EventId>,
    command: Commands,
) -> anyhow::Result<()> {
    let mut dashboard = Dashboard::new(api.clone(), Arc::clone(&view), settings.dashboard.clone());
    if let Some(event_id) = event {
        dashboard.preselect_event(event_id);
    }

    match command {
        Commands::Health => {
            let health = api.health_check().await?;
            println!("Backend {} is {}", api.base_url(), health.status);
        }
        Commands::Tab { name } => {
            let tab: Tab = name.parse()?;
            dashboard.show_tab(tab).await?;
        }
        Commands::Upload { path } => {
            let file = match path {
                Some(path) => Some(UploadFile::from_path(&path).await?),
                None => None,
            };
            match dashboard.submit_upload(file).await {
                UploadStatus::Completed(_) => {}
                UploadStatus::Rejected(message) | UploadStatus::Failed(message) => {
                    return Err(anyhow!(message));
                }
            }
        }
        Commands::CsvStats => {
            dashboard.load_csv_stats().await?;
        }
        Commands::Participants => {
            dashboard.load_participants().await?;
        }
        Commands::Participant { email } => {
            dashboard.lookup_participant(&email).await?;
        }
        Commands::ClearParticipants { yes } => {
            if !yes {
                return Err(anyhow!("Refusing to delete all participants without --yes"));
            }
            dashboard.clear_participants().await?;
        }
        Commands::Events => {
            let events = api.events().await?;
            view.show_events(&events, event.or_else(|| events.first().map(|e| e.id)));
        }
        Commands::Stats => {
            dashboard.show_tab(Tab::Checkin).await?;
        }
        Commands::Checkin { email } => {
            dashboard.load_events().await?;
            match dashboard.check_in_by_email(&email).await {
                EmailCheckinStatus::CheckedIn(_) => {}
                EmailCheckinStatus::Blocked(message)
                | EmailCheckinStatus::Rejected(message)
                | EmailCheckinStatus::Failed(message) => return Err(anyhow!(message)),
                EmailCheckinStatus::Processing => {}
            }
        }
        Commands::Overview => {
            dashboard.show_tab(Tab::Stats).await?;
        }
        Commands::Scan => unreachable!("scan is handled by run_scanner"),
    }

    Ok(())
}

/// Run the scanner until input ends or Ctrl-C; returns true when interrupted
async fn run_scanner(
    api: ApiClient,
    view: Arc<TerminalView>,
    settings: &Settings,
    event: Option<EventId>,
) -> anyhow::Result<bool> {
    let decoder = KeyboardWedgeDecoder::stdin();
    let mut scanner = Scanner::new(api, decoder, view, settings.scanner.clone());

    if let Some(event_id) = event {
        scanner.preselect_event(event_id);
    }
    if let Err(e) = scanner.load_events().await {
        warn!(error = %e, "Could not load events");
    }
    scanner.start().await?;

    let outcome = tokio::select! {
        result = scanner.run() => result.map(|_| false),
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, stopping scanner");
            Ok(true)
        }
    };

    scanner.teardown().await;
    Ok(outcome?)
}
