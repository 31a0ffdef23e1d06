use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::common::{FormatArgs, GraphFileArgs};
use crate::constants::{api, crawl, output};

#[derive(Parser)]
#[command(
    name = "coactor-graph",
    about = "🎬 Build a co-actor network from TMDb movie credits",
    long_about = "coactor-graph crawls TMDb for the movies an actor appeared in during a release \
                  window, links them to the top-billed cast of each movie, and repeats the \
                  lookup breadth-first for the actors it discovers. The resulting graph is \
                  written as nodes.csv and edges.csv. Running without a subcommand builds the \
                  graph using the TMDB_API_KEY environment variable.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub build: BuildArgs,
}

impl Cli {
    /// The requested command, defaulting to `build`
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Build(self.build))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Crawl TMDb and write the co-actor graph
    ///
    /// Seeds the graph with one actor, links them to the top-billed cast of
    /// each of their movies in the release window, then expands from the
    /// newly found actors for a fixed number of rounds.
    #[command(
        long_about = "Build the co-actor graph. The base phase fetches the seed actor's movie \
                      credits in the release window and adds an edge to each of the top-billed \
                      cast members of every movie. Each expansion round repeats this for every \
                      actor added in the previous phase. Failed API calls are retried with fixed \
                      delays and then skipped, so a flaky network yields a smaller graph rather \
                      than an error."
    )]
    Build(BuildArgs),

    /// Summarize an existing graph
    ///
    /// Loads nodes and edges files and reports counts, connected components
    /// and the nodes with the highest degree.
    Stats {
        #[command(flatten)]
        files: GraphFileArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Maximum number of max-degree nodes to list (shows all by default)
        #[arg(long, env = "COACTOR_GRAPH_MAX_ENTRIES")]
        max_entries: Option<usize>,
    },

    /// Check graph files for duplicates, self-loops and bad names
    ///
    /// Reports names containing commas, duplicate node ids, self-loops,
    /// duplicate undirected edges and edges whose endpoints are not listed
    /// as nodes.
    Check {
        #[command(flatten)]
        files: GraphFileArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Maximum number of problems to list (shows all by default)
        #[arg(long, env = "COACTOR_GRAPH_MAX_ENTRIES")]
        max_entries: Option<usize>,

        /// Exit with error code if problems are found
        #[arg(long, env = "COACTOR_GRAPH_ERROR_ON_PROBLEMS")]
        error_on_problems: bool,
    },
}

/// Arguments of the `build` command, also accepted without a subcommand
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// TMDb v3 API key
    #[arg(long, env = api::API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Where to write the nodes file
    #[arg(long, default_value = output::NODES_FILE, env = "COACTOR_GRAPH_NODES_OUT")]
    pub nodes_out: PathBuf,

    /// Where to write the edges file
    #[arg(long, default_value = output::EDGES_FILE, env = "COACTOR_GRAPH_EDGES_OUT")]
    pub edges_out: PathBuf,

    /// TMDb person id of the seed actor
    #[arg(long, default_value = crawl::SEED_ID, env = "COACTOR_GRAPH_SEED_ID")]
    pub seed_id: String,

    /// Display name of the seed actor
    #[arg(long, default_value = crawl::SEED_NAME, env = "COACTOR_GRAPH_SEED_NAME")]
    pub seed_name: String,

    /// First release date included (YYYY-MM-DD)
    #[arg(long, default_value = crawl::START_DATE, env = "COACTOR_GRAPH_START_DATE")]
    pub start_date: String,

    /// Last release date included (YYYY-MM-DD)
    #[arg(long, default_value = crawl::END_DATE, env = "COACTOR_GRAPH_END_DATE")]
    pub end_date: String,

    /// Top-billed cast members taken from each movie
    #[arg(long, default_value_t = crawl::CAST_LIMIT, env = "COACTOR_GRAPH_CAST_LIMIT")]
    pub cast_limit: usize,

    /// Expansion rounds after the base phase
    #[arg(long, default_value_t = crawl::EXPANSION_ROUNDS, env = "COACTOR_GRAPH_ROUNDS")]
    pub rounds: usize,

    #[command(flatten)]
    pub format: FormatArgs,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_build() {
        let cli = Cli::try_parse_from(["coactor-graph", "--rounds", "1"]).unwrap();

        match cli.into_command() {
            Commands::Build(args) => {
                assert_eq!(args.rounds, 1);
                assert_eq!(args.cast_limit, 5);
                assert_eq!(args.nodes_out, PathBuf::from("nodes.csv"));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_check_subcommand() {
        let cli = Cli::try_parse_from([
            "coactor-graph",
            "check",
            "--nodes",
            "n.csv",
            "--edges",
            "e.csv",
            "--error-on-problems",
        ])
        .unwrap();

        match cli.into_command() {
            Commands::Check {
                files,
                error_on_problems,
                ..
            } => {
                assert_eq!(files.nodes, PathBuf::from("n.csv"));
                assert_eq!(files.edges, PathBuf::from("e.csv"));
                assert!(error_on_problems);
            }
            _ => panic!("Expected Check command"),
        }
    }
}
