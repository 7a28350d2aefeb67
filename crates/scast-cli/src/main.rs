//! `scast` command-line binary.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scast_client::{ApiClient, ClientConfig};
use scast_models::{TaskId, UploadMeta, VideoForm};
use scast_poll::{message, PollConfig, PollOutcome, StatusPoller, SubmitController};

/// Slidecast - turn an MP3 track and images into a published video
#[derive(Parser)]
#[command(name = "scast")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the video service (overrides SLIDECAST_BASE_URL)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a video creation form and follow its progress
    Create {
        /// Output video name
        #[arg(long)]
        name: String,

        /// Path to the MP3 audio track
        #[arg(long)]
        audio: PathBuf,

        /// Slideshow image, in display order (repeatable)
        #[arg(long = "image", required = true)]
        images: Vec<PathBuf>,

        /// Print the task ID and return instead of polling
        #[arg(long)]
        no_wait: bool,
    },

    /// Show the status of an existing creation task
    Status {
        /// Task identifier returned at submission
        task_id: String,

        /// Keep polling until the task finishes
        #[arg(long)]
        watch: bool,
    },

    /// Publish a rendered video to YouTube
    Upload {
        /// Server-side filename of the rendered video
        video_filename: String,

        /// Video title
        #[arg(long)]
        title: Option<String>,

        /// Video description
        #[arg(long)]
        description: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(server) = cli.server {
        config.base_url = server;
    }
    info!("Using video service at {}", config.base_url);

    let client = ApiClient::new(config).context("Failed to create HTTP client")?;

    match cli.command {
        Commands::Create {
            name,
            audio,
            images,
            no_wait,
        } => run_create(client, name, audio, images, no_wait).await,
        Commands::Status { task_id, watch } => run_status(client, task_id, watch).await,
        Commands::Upload {
            video_filename,
            title,
            description,
        } => run_upload(client, video_filename, title, description).await,
    }
}

/// Initialize tracing with colored output for dev, JSON for production.
fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env().add_directive("scast=warn".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(false)
                    .with_writer(io::stderr),
            )
            .with(env_filter)
            .init();
    }
}

async fn run_create(
    client: ApiClient,
    name: String,
    audio: PathBuf,
    images: Vec<PathBuf>,
    no_wait: bool,
) -> Result<()> {
    let form = VideoForm::new(name, audio, images);
    let controller = SubmitController::with_config(client, PollConfig::from_env());

    if no_wait {
        let task_id = controller.submit(&form).await?;
        println!("{task_id}");
        return Ok(());
    }

    let mut display = console_display();
    let outcome = controller.submit_and_poll(&form, &mut display).await?;
    println!();

    exit_on_failure(outcome)
}

async fn run_status(client: ApiClient, task_id: String, watch: bool) -> Result<()> {
    let task_id = TaskId::from(task_id);

    if watch {
        let poller = StatusPoller::new(Arc::new(client)).with_config(PollConfig::from_env());
        let mut display = console_display();
        let outcome = poller.run(&task_id, &mut display).await?;
        println!();
        return exit_on_failure(outcome);
    }

    let status = client.task_status(&task_id).await?;
    println!("{}", message::status_line(&status));
    Ok(())
}

async fn run_upload(
    client: ApiClient,
    video_filename: String,
    title: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let meta = UploadMeta::new(title, description);
    let response = client.upload_youtube(&video_filename, &meta).await?;
    println!("{response}");
    Ok(())
}

/// Status display that rewrites a single terminal line.
fn console_display() -> impl FnMut(&str) {
    |line: &str| {
        print!("\r\x1b[2K{line}");
        let _ = io::stdout().flush();
    }
}

/// The failure line has already been displayed; only the exit code is left.
fn exit_on_failure(outcome: PollOutcome) -> Result<()> {
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
