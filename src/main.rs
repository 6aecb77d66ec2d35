use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use warpgrid_catalogue::{entries, lookup, Entry};
use warpgrid_io::{DatasetReader, ExperimentName, LabelledDataset, SpaceArtifact, SpaceWriter};
use warpgrid_space::DatasetStats;

#[derive(Parser)]
#[command(name = "warpgrid")]
#[command(about = "Hyperparameter grids for elastic time series distance measures")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Number of threads for parallel computation (defaults to all cores)
    #[arg(long, global = true)]
    threads: Option<usize>,
}

/// Dataset and output location shared by the build commands.
#[derive(Args, Debug, Clone)]
struct DatasetArgs {
    /// Path to the labelled series CSV file (class label in the first column)
    #[arg(long)]
    data: PathBuf,

    /// Experiment name for output files (must match [a-zA-Z0-9_-]+)
    #[arg(long)]
    experiment: String,

    /// Output directory for space files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// List the ids of every catalogued measure
    List,

    /// Build the parameter space of one measure from a dataset
    Build {
        /// Catalogue id, e.g. "dtw-v2" or "lcss"
        #[arg(long)]
        measure: String,

        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Build the parameter space of every catalogued measure in parallel
    BuildAll {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Print the configurations of a saved parameter space
    Enumerate {
        /// Path to a space JSON file written by build or build-all
        #[arg(long)]
        space: PathBuf,

        /// Print at most this many configurations
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Serialize)]
struct ListOutput {
    measures: Vec<&'static str>,
}

#[derive(Serialize)]
struct BuildOutput {
    measure: &'static str,
    n_configurations: usize,
    space: String,
    path: PathBuf,
}

#[derive(Serialize)]
struct BuildAllOutput {
    experiment: String,
    series_length: usize,
    std_dev: f64,
    spaces: Vec<BuildOutput>,
}

#[derive(Serialize)]
struct EnumerateOutput {
    measure: String,
    n_configurations: usize,
    n_shown: usize,
    configurations: Vec<String>,
}

fn read_dataset(data: &Path) -> Result<LabelledDataset> {
    let dataset = DatasetReader::new(data)
        .read()
        .context("failed to read input CSV")?;
    info!(
        n_instances = dataset.n_instances(),
        series_length = dataset.series_length(),
        std_dev = dataset.population_std_dev(),
        "dataset statistics"
    );
    Ok(dataset)
}

fn build_entry(
    entry: &Entry,
    dataset: &LabelledDataset,
    writer: &SpaceWriter,
) -> Result<BuildOutput> {
    let space = entry
        .space(dataset)
        .with_context(|| format!("failed to build space for {}", entry.id()))?;
    let n_configurations = space.size();
    let rendered = space.to_string();
    let path = writer.write_space(entry.id(), space)?;
    info!(measure = entry.id(), n_configurations, "space built");
    Ok(BuildOutput {
        measure: entry.id(),
        n_configurations,
        space: rendered,
        path,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Configure Rayon thread pool
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure thread pool")?;
        info!(threads, "thread pool configured");
    }

    match cli.command {
        Command::List => {
            let output = ListOutput {
                measures: entries().iter().map(Entry::id).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Build { measure, dataset } => {
            let entry = lookup(&measure)?;
            let experiment_name = ExperimentName::new(dataset.experiment)?;
            let data = read_dataset(&dataset.data)?;

            let writer = SpaceWriter::new(&dataset.output_dir, experiment_name)?;
            let output = build_entry(entry, &data, &writer)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::BuildAll { dataset } => {
            let experiment_name = ExperimentName::new(dataset.experiment.clone())?;
            let data = read_dataset(&dataset.data)?;

            let writer = SpaceWriter::new(&dataset.output_dir, experiment_name)?;
            let spaces = entries()
                .par_iter()
                .map(|entry| build_entry(entry, &data, &writer))
                .collect::<Result<Vec<_>>>()?;

            let output = BuildAllOutput {
                experiment: dataset.experiment,
                series_length: data.series_length(),
                std_dev: data.population_std_dev(),
                spaces,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Enumerate { space, limit } => {
            let artifact = SpaceArtifact::load(&space)
                .with_context(|| format!("failed to load space from {}", space.display()))?;

            let total = artifact.space().size();
            let configurations: Vec<String> = artifact
                .space()
                .configurations()
                .take(limit.unwrap_or(total))
                .map(|c| c.to_string())
                .collect();
            info!(shown = configurations.len(), total, "space enumerated");

            let output = EnumerateOutput {
                measure: artifact.measure().to_string(),
                n_configurations: total,
                n_shown: configurations.len(),
                configurations,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
