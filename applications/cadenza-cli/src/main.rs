/// Cadenza - command-line host for the playback engine
use anyhow::Context;
use cadenza_cli::{
    commands::{self, describe},
    CliConfig, PlayedTrack,
};
use cadenza_core::MediaKind;
use cadenza_playback::{LoopMode, PlaybackController, PlaybackEvent, PlaybackSnapshot};
use cadenza_radio::{RadioRecommender, RadioRequests};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadenza")]
#[command(about = "Cadenza playback engine and radio", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path (default: ./cadenza.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Read tracks from a JSON file instead of the HTTP catalog
    #[arg(short, long, global = true)]
    library: Option<PathBuf>,

    /// Print the final playback state as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tracks similar to a title
    Similar {
        /// Seed track title
        title: String,
        /// Maximum number of tracks (default: radio.default_limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Start a radio station and play through it
    Radio {
        /// Seed track title
        title: String,
        /// Number of tracks to play
        #[arg(short = 'n', long, default_value_t = 5)]
        tracks: usize,
        /// Pick the next track at random
        #[arg(long)]
        shuffle: bool,
        /// Loop mode
        #[arg(long = "loop", value_enum)]
        loop_mode: Option<LoopArg>,
    },
    /// Play the start of the catalog and show the recently played list
    Recent {
        /// Number of tracks to play
        #[arg(short = 'n', long, default_value_t = 15)]
        count: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LoopArg {
    Off,
    One,
    All,
}

impl From<LoopArg> for LoopMode {
    fn from(arg: LoopArg) -> Self {
        match arg {
            LoopArg::Off => LoopMode::Off,
            LoopArg::One => LoopMode::One,
            LoopArg::All => LoopMode::All,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cadenza_cli=info,cadenza_radio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let catalog = commands::open_catalog(&config, cli.library.as_deref())?;

    match cli.command {
        Commands::Similar { title, limit } => {
            let radio = RadioRecommender::with_config(catalog, config.radio.clone());
            let tracks = commands::similar(&radio, &title, limit).await?;
            if tracks.is_empty() {
                println!("No tracks similar to \"{}\"", title);
            }
            for (index, track) in tracks.iter().enumerate() {
                println!("{:>3}. {}", index + 1, describe(track));
            }
        }
        Commands::Radio {
            title,
            tracks,
            shuffle,
            loop_mode,
        } => {
            let mut controller = new_controller(&config);
            if shuffle {
                controller.set_shuffle(true);
            }
            if let Some(loop_mode) = loop_mode {
                controller.set_loop_mode(loop_mode.into());
            }

            let radio = RadioRecommender::with_config(catalog, config.radio.clone());
            let requests = RadioRequests::new();
            let run = commands::radio(&radio, &requests, &mut controller, &title, tracks).await?;

            if !run.started {
                println!("No station could be built from \"{}\"", title);
            }
            for (index, played) in run.played.iter().enumerate() {
                print_played(index, played);
            }
            if cli.json {
                print_snapshot(&run.snapshot)?;
            }
        }
        Commands::Recent { count } => {
            let mut controller = new_controller(&config);
            let recent = commands::recent(&catalog, &mut controller, count).await?;

            println!("Recently played:");
            for (index, track) in recent.iter().enumerate() {
                println!("{:>3}. {}", index + 1, describe(track));
            }
            if cli.json {
                print_snapshot(&controller.snapshot())?;
            }
        }
    }

    Ok(())
}

fn new_controller(config: &CliConfig) -> PlaybackController {
    let mut controller = PlaybackController::new(config.playback.clone());
    controller.subscribe(|event: &PlaybackEvent| debug!(?event, "Playback event"));
    controller
}

fn print_played(index: usize, played: &PlayedTrack) {
    let element = match played.kind {
        MediaKind::Audio => "audio",
        MediaKind::EmbeddedVideo => "video",
    };
    let source = if played.from_radio { "radio" } else { "queue" };
    println!(
        "{:>3}. {} [{}, {}]",
        index + 1,
        describe(&played.track),
        element,
        source
    );
}

fn print_snapshot(snapshot: &PlaybackSnapshot) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    println!("{}", json);
    Ok(())
}
