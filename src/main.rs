use clap::{Parser, Subcommand};
use log::{error, info};
use std::io::Write as _;
use std::path::PathBuf;

mod gather;
mod logs;
mod plot;

pub type Result<T> = anyhow::Result<T>;

/// Input/output locations for a run. The defaults mirror the benchmark
/// suite's layout, where this tool runs from the visualization directory
/// next to a `results/` directory of logs.
struct Config {
    log_dir: PathBuf,
    out_dir: PathBuf,
}

#[derive(Parser)]
#[command(name = "dijkstra-bench-viz")]
#[command(about = "Dijkstra benchmark log visualizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render performance and scaling-efficiency charts from benchmark logs.
    Plot {
        /// Directory containing the benchmark .log files.
        #[arg(long, default_value = "../results")]
        logs: PathBuf,

        /// Directory the PNG charts are written to.
        #[arg(short = 'o', long, default_value = ".")]
        out: PathBuf,
    },

    /// Print the aggregated measurement table as JSON.
    Dump {
        /// Directory containing the benchmark .log files.
        #[arg(long, default_value = "../results")]
        logs: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Plot { logs, out } => run_plots(&Config {
            log_dir: logs,
            out_dir: out,
        }),
        Commands::Dump { logs } => {
            let table = gather::gather_results(&logs)?;
            println!("{}", serde_json::to_string_pretty(&table)?);
            Ok(())
        }
    }
}

fn run_plots(cfg: &Config) -> Result<()> {
    if !cfg.log_dir.is_dir() {
        error!("results directory {} not found", cfg.log_dir.display());
        return Ok(());
    }

    let table = gather::gather_results(&cfg.log_dir)?;
    if table.is_empty() {
        error!("no results found in {}", cfg.log_dir.display());
        return Ok(());
    }

    std::fs::create_dir_all(&cfg.out_dir)?;
    plot::plot_performance(&table, &cfg.out_dir)?;
    plot::plot_scaling(&table, &cfg.out_dir)?;
    info!("plots saved to {}", cfg.out_dir.display());
    Ok(())
}
