//! Argument parsing and command execution for the `netgen` binary.

use std::{
    io::{self, Write},
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::{
    gens::GenerationError,
    io::{AdjacencyWriter, GraphWriter},
    params::{GenerationParameters, ParamError},
    prelude::*,
    repr::digest::GraphDigest,
};

const DEFAULT_NUM: NumNodes = 100;
const DEFAULT_M0: NumNodes = 10;
const DEFAULT_M: NumNodes = 5;
const DEFAULT_K: NumNodes = 2;
const DEFAULT_BETA: f64 = 0.5;

/// Command line options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "netgen",
    about = "Generate random free-scale or small-world networks as adjacency dump."
)]
pub struct Cli {
    /// Network model to generate.
    #[arg(long, value_enum)]
    pub mode: Mode,

    /// Size of the resulting network.
    #[arg(long, default_value_t = DEFAULT_NUM)]
    pub num: NumNodes,

    /// Initial size of the full-mesh network (freescale).
    #[arg(long, default_value_t = DEFAULT_M0)]
    pub m0: NumNodes,

    /// Number of links added for each new node (freescale).
    #[arg(long, default_value_t = DEFAULT_M)]
    pub m: NumNodes,

    /// Number (even) of initial neighbours (smallworld).
    #[arg(long, default_value_t = DEFAULT_K)]
    pub k: NumNodes,

    /// Probability of re-linking (smallworld).
    #[arg(long, default_value_t = DEFAULT_BETA)]
    pub beta: f64,

    /// Seed of the random source; derived from the system clock if omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Give up after this many consecutive rejected draws for a single edge.
    #[arg(long)]
    pub max_attempts: Option<u64>,

    /// Write the adjacency dump to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// List the neighbors of every node in ascending order.
    #[arg(long)]
    pub sorted: bool,
}

/// Supported network models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Preferential attachment growth (Barabasi-Albert).
    Freescale,
    /// Ring lattice with random rewiring (Watts-Strogatz).
    Smallworld,
}

impl Cli {
    /// Collects the parameters relevant for the selected mode
    pub fn parameters(&self) -> GenerationParameters {
        match self.mode {
            Mode::Freescale => GenerationParameters::FreeScale {
                nodes: self.num,
                initial_clique: self.m0,
                edges_per_node: self.m,
            },
            Mode::Smallworld => GenerationParameters::SmallWorld {
                nodes: self.num,
                neighbors: self.k,
                rewire_prob: self.beta,
            },
        }
    }

    /// Returns the configured seed or derives one from the system clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}

/// Errors surfaced while executing the command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Validation or generation failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// Writing the dump to a file failed.
    #[error("failed to write `{path}`: {source}")]
    OutputFile {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing the dump to the output stream failed.
    #[error("failed to write graph: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Returns the violated parameter constraint if this error stems from validation
    pub fn param_error(&self) -> Option<&ParamError> {
        match self {
            Self::Generation(GenerationError::InvalidParameters(err)) => Some(err),
            _ => None,
        }
    }
}

/// Outcome of a single generation run.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Seed the random source was initialised with.
    pub seed: u64,
    /// The generated network.
    pub graph: AdjSet,
}

/// Validates the parameters and generates the requested network.
///
/// Nothing is generated if validation fails.
///
/// # Errors
/// Returns [`CliError::Generation`] if the parameters are invalid or a bounded rejection loop gave
/// up.
///
/// # Examples
/// ```
/// use clap::Parser;
/// use netgen::{cli::{Cli, run_cli}, prelude::*};
///
/// let cli = Cli::parse_from(["netgen", "--mode", "smallworld", "--num", "10", "--k", "4", "--beta", "0"]);
/// let summary = run_cli(&cli).unwrap();
/// assert_eq!(summary.graph.number_of_edges(), 20);
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(mode = ?cli.mode))]
pub fn run_cli(cli: &Cli) -> Result<GenerationSummary, CliError> {
    let params = cli.parameters();
    params.validate().map_err(GenerationError::from)?;

    let seed = cli.resolve_seed();
    info!(seed, "seeding random source");
    let rng = &mut Pcg64Mcg::seed_from_u64(seed);

    let graph: AdjSet = params.generate(rng, cli.max_attempts)?;

    debug!(
        digest = graph.digest_sha256().as_str(),
        min_degree = graph.min_degree(),
        max_degree = graph.max_degree(),
        mean_degree = 2.0 * graph.number_of_edges() as f64 / graph.number_of_nodes().max(1) as f64,
        "degree statistics"
    );
    info!(
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        "graph generated"
    );
    Ok(GenerationSummary { seed, graph })
}

/// Writes the adjacency dump of `graph` to the file named by `--output` or, if none was given,
/// to `stdout`.
///
/// # Errors
/// Returns [`CliError::OutputFile`] or [`CliError::Output`] if writing fails.
pub fn write_graph<W: Write>(cli: &Cli, graph: &AdjSet, stdout: W) -> Result<(), CliError> {
    let writer = AdjacencyWriter::new().sorted(cli.sorted);
    match &cli.output {
        Some(path) => {
            writer
                .try_write_graph_file(graph, path)
                .map_err(|source| CliError::OutputFile {
                    path: path.clone(),
                    source,
                })?;
            debug!(path = %path.display(), "adjacency dump written");
        }
        None => writer.try_write_graph(graph, stdout)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("netgen").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cli = parse(&["--mode", "freescale"]).unwrap();
        assert_eq!(cli.mode, Mode::Freescale);
        assert_eq!((cli.num, cli.m0, cli.m, cli.k), (100, 10, 5, 2));
        assert_eq!(cli.beta, 0.5);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.max_attempts, None);
        assert!(cli.output.is_none() && !cli.sorted);
    }

    #[rstest]
    #[case::missing_mode(&[])]
    #[case::unknown_mode(&["--mode", "random"])]
    #[case::negative_num(&["--mode", "freescale", "--num", "-3"])]
    #[case::float_k(&["--mode", "smallworld", "--k", "2.5"])]
    fn usage_errors(#[case] args: &[&str]) {
        let err = parse(args).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn parameters_follow_mode() {
        let cli = parse(&["--mode", "smallworld", "--num", "50", "--k", "6", "--beta", "0.1"]).unwrap();
        assert_eq!(
            cli.parameters(),
            GenerationParameters::SmallWorld {
                nodes: 50,
                neighbors: 6,
                rewire_prob: 0.1
            }
        );

        let cli = parse(&["--mode", "freescale", "--num", "50", "--m0", "4", "--m", "2"]).unwrap();
        assert_eq!(
            cli.parameters(),
            GenerationParameters::FreeScale {
                nodes: 50,
                initial_clique: 4,
                edges_per_node: 2
            }
        );
    }

    #[rstest]
    #[case::m_exceeds_m0(&["--mode", "freescale", "--m0", "2", "--m", "5"])]
    #[case::zero_m(&["--mode", "freescale", "--m", "0"])]
    #[case::m0_exceeds_num(&["--mode", "freescale", "--num", "5"])]
    #[case::odd_k(&["--mode", "smallworld", "--k", "5"])]
    #[case::beta_out_of_range(&["--mode", "smallworld", "--k", "6", "--beta", "1.5"])]
    #[case::default_k_below_log_n(&["--mode", "smallworld"])]
    fn validation_errors(#[case] args: &[&str]) {
        let cli = parse(args).unwrap();
        let err = run_cli(&cli).unwrap_err();
        assert!(err.param_error().is_some(), "{err}");
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let cli = parse(&["--mode", "freescale", "--seed", "17"]).unwrap();
        let a = run_cli(&cli).unwrap();
        let b = run_cli(&cli).unwrap();

        assert_eq!(a.seed, 17);
        assert_eq!(a.graph.digest_sha256(), b.graph.digest_sha256());
        assert_eq!(a.graph.number_of_edges(), 45 + 5 * 90);
    }

    #[test]
    fn bounded_attempts_surface_as_generation_error() {
        let cli = parse(&[
            "--mode",
            "freescale",
            "--num",
            "5",
            "--m0",
            "1",
            "--m",
            "1",
            "--max-attempts",
            "100",
        ])
        .unwrap();

        let err = run_cli(&cli).unwrap_err();
        assert!(err.param_error().is_none());
        assert!(matches!(
            err,
            CliError::Generation(GenerationError::NoEligibleCandidate { attempts: 100, .. })
        ));
    }

    #[test]
    fn writes_sorted_dump_to_stream() {
        let cli = parse(&[
            "--mode", "smallworld", "--num", "10", "--k", "4", "--beta", "0", "--sorted",
        ])
        .unwrap();
        let summary = run_cli(&cli).unwrap();

        let mut buffer = Vec::new();
        write_graph(&cli, &summary.graph, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "10");
        assert_eq!(lines[1], "1 2 8 9");
        assert_eq!(lines[5], "2 3 5 6");
    }
}
