use anyhow::Context;
use clap::{Parser, Subcommand};
use navcam_nav::{CameraController, NavigationConfig};
use navcam_replay::{Script, Session};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "navcam-cli", about = "CLI tool for camera navigation configs and replays")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the default navigation config
    Defaults {
        /// Emit JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
    /// Load and validate a navigation config
    Check {
        /// Config file (.yaml, .yml or .json)
        config: PathBuf,
    },
    /// Replay a recorded input script through the camera controller
    Replay {
        /// Script file (.yaml, .yml or .json)
        script: PathBuf,
        /// Navigation config; defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the pose after every frame as JSON lines
        #[arg(long)]
        trace: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("navcam-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("nav: {}", navcam_nav::crate_info());
        }
        Commands::Defaults { json } => {
            let config = NavigationConfig::default();
            if json {
                println!("{}", config.to_json()?);
            } else {
                print!("{}", config.to_yaml()?);
            }
        }
        Commands::Check { config } => {
            let loaded = NavigationConfig::load(&config)
                .with_context(|| format!("checking {}", config.display()))?;
            println!(
                "{}: OK (mode={:?}, step={}, target tag={:?})",
                config.display(),
                loaded.mode,
                loaded.animation_step,
                loaded.collision_target_tag
            );
        }
        Commands::Replay {
            script,
            config,
            trace,
        } => {
            let nav_config = match &config {
                Some(path) => NavigationConfig::load(path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => NavigationConfig::default(),
            };
            let script = Script::load(&script)
                .with_context(|| format!("loading script {}", script.display()))?;
            tracing::info!(frames = script.frame_count(), mode = ?nav_config.mode, "replaying");

            let session = Session::replay(CameraController::new(nav_config), &script);

            if trace {
                for sample in session.trace() {
                    println!("{}", serde_json::to_string(sample)?);
                }
            }

            let pose = session.behavior().pose();
            println!("Frames: {}", session.frame());
            println!(
                "Final pose: position=({:.3}, {:.3}, {:.3}) yaw={:.2} pitch={:.2}",
                pose.position.x, pose.position.y, pose.position.z, pose.yaw, pose.pitch
            );
            for (kind, count) in session.event_counts() {
                println!("  {kind}: {count}");
            }
            println!("Hash: {:#018x}", session.state_hash());
        }
    }

    Ok(())
}
