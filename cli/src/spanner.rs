/*
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{get_thread_pool, GlobalArgs, NumThreadsArg};
use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use dsi_progress_logger::{concurrent_progress_logger, ProgressLog};
use spangraph::prelude::*;
use spangraph_algo::orchestrator::DEFAULT_NUM_BFS;
use spangraph_algo::prelude::*;
use spangraph_algo::sources::{DEFAULT_RESOLUTION, DEFAULT_SEED};
use spangraph_algo::spanner::DEFAULT_BUDGET_FACTOR;
use std::io::Write;
use std::ops::RangeInclusive;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
/// How to select the roots of the breadth-first visits.
pub enum StrategyArg {
    /// Uniformly random nodes, with replacement.
    Random,
    /// One node per community found by label propagation.
    Community,
}

impl From<StrategyArg> for Strategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Random => Strategy::Random,
            StrategyArg::Community => Strategy::Community,
        }
    }
}

/// Parses an inclusive range of nodes written as `FIRST..LAST`.
fn parse_node_range(arg: &str) -> Result<RangeInclusive<usize>> {
    let (first, last) = arg
        .split_once("..")
        .with_context(|| format!("Expected a range FIRST..LAST, found {arg:?}"))?;
    let first = first.trim().parse::<usize>()?;
    let last = last.trim().parse::<usize>()?;
    ensure!(first <= last, "Empty range {first}..{last}");
    Ok(first..=last)
}

#[derive(Parser, Debug)]
#[command(
    name = "spanner",
    about = "Builds a spanner of a graph made of breadth-first trees, optionally estimating its diameter.",
    long_about = None
)]
pub struct CliArgs {
    /// The graph, in degree-sequence text format.
    pub src: PathBuf,

    #[arg(short, long, value_enum, default_value_t = StrategyArg::Random)]
    /// The strategy used to select the sources.
    pub strategy: StrategyArg,

    #[arg(short = 'b', long, default_value_t = DEFAULT_NUM_BFS)]
    /// The maximum number of breadth-first visits.
    pub num_bfs: usize,

    #[arg(short = 'n', long)]
    /// The number of sources. The random strategy draws 15 sources by
    /// default; the community strategy uses one source per community by
    /// default, and fails if this is more than the number of communities.
    pub num_sources: Option<usize>,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    /// The seed to use for the PRNG.
    pub seed: u64,

    #[arg(short = 'f', long, default_value_t = DEFAULT_BUDGET_FACTOR)]
    /// The fraction of the edges of the graph the spanner may use, in (0..1].
    pub budget_factor: f64,

    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    /// The resolution of community detection.
    pub resolution: f64,

    #[arg(long, conflicts_with = "subgraph")]
    /// Work on the greatest connected component of the graph.
    pub gcc: bool,

    #[arg(long, value_parser = parse_node_range, value_name = "FIRST..LAST")]
    /// Work on the subgraph induced by an inclusive range of nodes.
    pub subgraph: Option<RangeInclusive<usize>>,

    #[arg(short, long)]
    /// Bound the eccentricities of the nodes and estimate the diameter.
    pub estimate: bool,

    #[arg(long)]
    /// Log statistics of the eccentricity bounds after each merged tree.
    pub track_bounds: bool,

    #[arg(long)]
    /// Remove duplicate edges from the spanner.
    pub dedup: bool,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,
}

impl CliArgs {
    /// Returns the configuration of the spanner construction.
    pub fn config(&self) -> SpannerConfig {
        SpannerConfig::default()
            .selection(
                SelectionConfig::default()
                    .strategy(self.strategy.into())
                    .num_sources(self.num_sources)
                    .seed(self.seed)
                    .resolution(self.resolution),
            )
            .num_bfs(self.num_bfs)
            .budget_factor(self.budget_factor)
            .estimate(self.estimate)
            .track_bounds(self.track_bounds)
            .dedup(self.dedup)
    }
}

/// Runs the `spanner` command, writing the results to `out`, one
/// tab-separated key and value per line.
pub fn main(global_args: GlobalArgs, args: CliArgs, out: &mut impl Write) -> Result<()> {
    let config = args.config();
    config.validate()?;

    let mut pl = concurrent_progress_logger![];
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    log::info!("Loading graph from {}", args.src.display());
    let mut graph = VecGraph::load(&args.src)
        .with_context(|| format!("Could not load graph from {}", args.src.display()))?;
    writeln!(out, "nodes\t{}", graph.num_nodes())?;
    writeln!(out, "edges\t{}", graph.num_edges())?;

    if let Some(range) = args.subgraph.clone() {
        ensure!(
            *range.end() < graph.num_nodes(),
            "Subgraph range {}..{} out of bounds: the graph has {} nodes",
            range.start(),
            range.end(),
            graph.num_nodes()
        );
        graph = subgraph(&graph, range);
    } else if args.gcc {
        graph = gcc(&graph, &mut pl).0;
    }
    if args.subgraph.is_some() || args.gcc {
        writeln!(out, "subgraph_nodes\t{}", graph.num_nodes())?;
        writeln!(out, "subgraph_edges\t{}", graph.num_edges())?;
    }

    let thread_pool = get_thread_pool(args.num_threads.num_threads)?;
    let output = thread_pool.install(|| spanner_graph(&graph, &config, &mut pl))?;

    writeln!(out, "sources\t{}", output.sources.len())?;
    writeln!(out, "trees\t{}", output.trees.len())?;
    writeln!(
        out,
        "merged_trees\t{}",
        output.last_merged.map_or(0, |index| index + 1)
    )?;
    writeln!(out, "spanner_nodes\t{}", output.spanner.num_nodes())?;
    writeln!(out, "spanner_edges\t{}", output.spanner.num_edges())?;
    if let Some(num_duplicates) = output.num_duplicates {
        writeln!(out, "duplicates\t{num_duplicates}")?;
    }
    if let Some(estimate) = &output.estimate {
        writeln!(out, "diameter\t{}", estimate.diameter)?;
        writeln!(out, "unsettled\t{}", estimate.num_unsettled)?;
        writeln!(out, "gap_mean\t{}", estimate.stats.mean)?;
        writeln!(out, "gap_variance\t{}", estimate.stats.variance)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// A path 0-1-2-3-4 followed by an isolated edge 5-6.
    const GRAPH: &str = "7\n0 1\n1 2\n2 2\n3 2\n4 1\n5 1\n6 1\n0 1\n1 2\n2 3\n3 4\n5 6\n";

    fn run(args: &[&str]) -> Result<HashMap<String, String>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("graph.txt");
        std::fs::write(&path, GRAPH)?;

        let mut argv = vec!["spanner", path.to_str().context("Non-UTF-8 path")?];
        argv.extend_from_slice(args);
        let cli_args = CliArgs::try_parse_from(argv)?;
        let mut out = vec![];
        main(GlobalArgs { log_interval: None }, cli_args, &mut out)?;

        Ok(String::from_utf8(out)?
            .lines()
            .filter_map(|line| line.split_once('\t'))
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect())
    }

    #[test]
    fn test_parse_node_range() -> Result<()> {
        assert_eq!(parse_node_range("2..5")?, 2..=5);
        assert_eq!(parse_node_range("3..3")?, 3..=3);
        assert!(parse_node_range("5..2").is_err());
        assert!(parse_node_range("5").is_err());
        assert!(parse_node_range("a..b").is_err());
        Ok(())
    }

    #[test]
    fn test_config() -> Result<()> {
        let args = CliArgs::try_parse_from([
            "spanner",
            "graph.txt",
            "--strategy",
            "community",
            "-b",
            "7",
            "--budget-factor",
            "0.5",
            "--dedup",
        ])?;
        let config = args.config();
        assert_eq!(config.get_selection().get_strategy(), Strategy::Community);
        assert_eq!(config.get_selection().get_seed(), DEFAULT_SEED);
        assert_eq!(config.get_num_bfs(), 7);
        assert_eq!(config.get_budget_factor(), 0.5);
        Ok(())
    }

    #[test]
    fn test_gcc_conflicts_with_subgraph() {
        assert!(
            CliArgs::try_parse_from(["spanner", "g.txt", "--gcc", "--subgraph", "0..1"]).is_err()
        );
    }

    #[test]
    fn test_gcc() -> Result<()> {
        let results = run(&["--gcc", "-j", "1", "--budget-factor", "1", "-e"])?;
        assert_eq!(results["nodes"], "7");
        assert_eq!(results["edges"], "5");
        assert_eq!(results["subgraph_nodes"], "5");
        assert_eq!(results["subgraph_edges"], "4");
        assert_eq!(results["spanner_nodes"], "5");
        // A tree has 4 edges, more than half of the budget
        assert_eq!(results["merged_trees"], "0");
        assert_eq!(results["spanner_edges"], "0");
        assert!(results.contains_key("diameter"));
        Ok(())
    }

    #[test]
    fn test_subgraph() -> Result<()> {
        let results = run(&["--subgraph", "5..6", "-j", "2", "--dedup"])?;
        assert_eq!(results["subgraph_nodes"], "2");
        assert_eq!(results["subgraph_edges"], "1");
        assert_eq!(results["duplicates"], "0");
        assert!(!results.contains_key("diameter"));
        Ok(())
    }

    #[test]
    fn test_subgraph_out_of_bounds() {
        assert!(run(&["--subgraph", "3..9"]).is_err());
    }

    #[test]
    fn test_too_many_community_sources() {
        // There cannot be more communities than nodes
        let err = run(&["--strategy", "community", "--num-sources", "8"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SpannerError>(),
            Some(SpannerError::NotEnoughSources { requested: 8, .. })
        ));
    }

    #[test]
    fn test_invalid_budget_factor() {
        assert!(run(&["--budget-factor", "1.5"]).is_err());
    }

    #[test]
    fn test_missing_file() {
        let args = CliArgs::try_parse_from(["spanner", "/nonexistent/graph.txt"]).unwrap();
        assert!(main(GlobalArgs { log_interval: None }, args, &mut vec![]).is_err());
    }
}
