use std::{
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use dolphin_cli::{load, render};
use dolphin_engine::api::Tuner;
use dolphin_engine::{JsonFileStore, ProfileStore, Target};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Subcommand)]
enum Cmd {
    /// List rare items for all or a specific simulator
    List {
        /// `all` or a simulator key
        #[arg(default_value = "all")]
        target: String,
    },
    /// Tune the three rarest items for all or a specific simulator
    Tune {
        /// `all` or a simulator key
        #[arg(default_value = "all")]
        target: String,
    },
    /// Reset tuning data for all or a specific simulator
    Reset {
        /// `all` or a simulator key
        #[arg(default_value = "all")]
        target: String,
    },
    /// Show the user's current tune marks
    Status {
        /// `all` or a simulator key
        #[arg(default_value = "all")]
        target: String,
    },
    /// Show a simulator's command metadata
    Info {
        /// Simulator key or alias
        simulator: String,
    },
    /// Print a simulator's full item table
    Catalog {
        /// Simulator key or alias
        simulator: String,
        /// Emit JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Parser)]
#[command(name = "dolphin")]
#[command(about = "Rare-item tuner for idle simulators")]
struct Cli {
    /// Tuner config (YAML, or JSON by extension)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Profile store file
    #[arg(long, global = true, default_value = "profiles.json")]
    profiles: PathBuf,
    /// User whose profile is read and written
    #[arg(long, global = true, default_value = "local")]
    user: String,
    /// Extra simulator definition files (JSON or YAML); repeatable
    #[arg(long = "catalog-file", global = true)]
    catalog_files: Vec<PathBuf>,
    #[command(subcommand)]
    cmd: Cmd,
}

fn now_millis() -> Result<i64> {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)?;
    Ok(i64::try_from(elapsed.as_millis())?)
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dolphin_engine=warn,dolphin_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load::load_config(cli.config.as_deref())?;
    let registry = load::load_registry(&cli.catalog_files)?;
    let store = JsonFileStore::new(&cli.profiles);
    let tuner = Tuner::new(&registry, &store, &config);

    match cli.cmd {
        Cmd::List { target } => {
            let target = Target::parse(Some(target.as_str()));
            let listing = tuner.list_rare(&target)?;
            println!("{}", render::render_listing(&listing, &target));
        }
        Cmd::Tune { target } => {
            let target = Target::parse(Some(target.as_str()));
            let report = tuner.tune(&cli.user, &target, now_millis()?)?;
            println!("{}", render::render_tune(&report));
        }
        Cmd::Reset { target } => {
            let target = Target::parse(Some(target.as_str()));
            let report = tuner.reset(&cli.user, &target)?;
            println!("{}", render::render_reset(&report));
        }
        Cmd::Status { target } => {
            let target = Target::parse(Some(target.as_str()));
            let profile = store.load(&cli.user)?;
            let now = now_millis()?;
            for sim in registry.resolve(&target, &config.default_simulators)? {
                println!(
                    "{}",
                    render::render_status(&sim.key, &profile.tune_for(&sim.key), now)
                );
            }
        }
        Cmd::Info { simulator } => {
            let spec = registry
                .get(&simulator)
                .ok_or_else(|| anyhow!("simulator '{}' not found", simulator))?;
            println!("{}", render::render_info(spec));
        }
        Cmd::Catalog { simulator, json } => {
            let spec = registry
                .get(&simulator)
                .ok_or_else(|| anyhow!("simulator '{}' not found", simulator))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&spec.items)?);
            } else {
                print!("{}", render::render_catalog(spec));
            }
        }
    }
    Ok(())
}
