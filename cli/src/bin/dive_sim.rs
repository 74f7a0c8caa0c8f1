use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use dolphin_cli::load;
use dolphin_engine::sample::roll_many;

#[derive(Parser)]
#[command(name = "dive-sim")]
#[command(about = "Monte Carlo sim: roll a simulator's reward table many times")]
struct Args {
    /// Simulator key or alias
    #[arg(long, default_value = "dolphindive")]
    simulator: String,

    /// Number of rounds; each round attempts every item once
    #[arg(long, default_value_t = 1000)]
    rounds: u32,

    /// RNG seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Extra simulator definition files (JSON or YAML)
    #[arg(long = "catalog-file")]
    catalog_files: Vec<PathBuf>,

    /// Emit the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let registry = load::load_registry(&args.catalog_files)?;
    let spec = registry
        .get(&args.simulator)
        .ok_or_else(|| anyhow!("simulator '{}' not found", args.simulator))?;

    let summary = roll_many(&spec.items, args.rounds, args.seed);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} {} x{} (seed {})",
        spec.action_emoji, spec.key, summary.rounds, args.seed
    );
    for tally in &summary.items {
        println!(
            "{:<24} drops {:>6}  expected {:>8.1}  value {:>10.1}",
            tally.name, tally.drops, tally.expected, tally.value
        );
    }
    println!(
        "total: {} drops worth {:.1}",
        summary.total_drops, summary.total_value
    );
    Ok(())
}
