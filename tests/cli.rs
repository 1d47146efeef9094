//! End-to-end behaviour of the command layer: parse, generate, write.

use std::fs;

use clap::Parser;
use netgen::{
    cli::{Cli, CliError, run_cli, write_graph},
    params::ParamError,
    prelude::*,
};
use rstest::rstest;
use tempfile::TempDir;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("netgen").chain(args.iter().copied()))
        .expect("arguments must parse")
}

/// Parses an adjacency dump into the node count and the neighbor lists.
fn parse_dump(text: &str) -> (usize, Vec<Vec<Node>>) {
    let mut lines = text.lines();
    let n: usize = lines
        .next()
        .expect("dump must have a header")
        .parse()
        .expect("header must be the node count");
    let nbs = lines
        .map(|line| {
            line.split(' ')
                .filter(|s| !s.is_empty())
                .map(|s| s.parse().expect("neighbor must be a node id"))
                .collect()
        })
        .collect();
    (n, nbs)
}

fn assert_valid_dump(text: &str, expected_nodes: usize, expected_edges: usize) {
    assert!(text.ends_with('\n'));
    let (n, nbs) = parse_dump(text);
    assert_eq!(n, expected_nodes);
    assert_eq!(nbs.len(), expected_nodes);

    let mut degree_sum = 0;
    for (u, list) in nbs.iter().enumerate() {
        for &v in list {
            assert_ne!(u as Node, v, "self-loop at {u}");
            assert!(nbs[v as usize].contains(&(u as Node)), "({u},{v}) not symmetric");
        }
        let mut dedup = list.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), list.len(), "duplicate neighbor at {u}");
        degree_sum += list.len();
    }
    assert_eq!(degree_sum, 2 * expected_edges);
}

#[rstest]
#[case::freescale_defaults(&["--mode", "freescale"], 100, 45 + 5 * 90)]
#[case::freescale_small(&["--mode", "freescale", "--num", "5", "--m0", "3", "--m", "2"], 5, 7)]
#[case::smallworld(&["--mode", "smallworld", "--num", "200", "--k", "8", "--beta", "0.3"], 200, 800)]
#[case::smallworld_complete(&["--mode", "smallworld", "--num", "6", "--k", "6", "--beta", "1"], 6, 15)]
fn generates_valid_dump(#[case] args: &[&str], #[case] nodes: usize, #[case] edges: usize) {
    let cli = cli(args);
    let summary = run_cli(&cli).expect("generation must succeed");
    assert_eq!(summary.graph.number_of_edges() as usize, edges);

    let mut buffer = Vec::new();
    write_graph(&cli, &summary.graph, &mut buffer).expect("writing to memory must succeed");
    assert_valid_dump(&String::from_utf8(buffer).expect("dump is UTF-8"), nodes, edges);
}

#[test]
fn ring_lattice_dump_is_exact() {
    let cli = cli(&[
        "--mode", "smallworld", "--num", "10", "--k", "4", "--beta", "0", "--sorted",
    ]);
    let summary = run_cli(&cli).expect("generation must succeed");

    let mut buffer = Vec::new();
    write_graph(&cli, &summary.graph, &mut buffer).expect("writing to memory must succeed");
    let (_, nbs) = parse_dump(&String::from_utf8(buffer).expect("dump is UTF-8"));

    for (u, list) in nbs.iter().enumerate() {
        let u = u as Node;
        let mut expected = vec![(u + 1) % 10, (u + 2) % 10, (u + 8) % 10, (u + 9) % 10];
        expected.sort_unstable();
        assert_eq!(list, &expected);
    }
}

#[test]
fn rejected_parameters_produce_no_output() {
    let dir = TempDir::new().expect("temporary directory");
    let path = dir.path().join("graph.txt");
    let path_arg = path.to_str().expect("temporary path is UTF-8");

    let cli = cli(&["--mode", "freescale", "--m0", "2", "--m", "5", "--output", path_arg]);
    let err = run_cli(&cli).expect_err("m > m0 must be rejected");

    assert_eq!(
        err.param_error(),
        Some(&ParamError::EdgesExceedClique { m: 5, m0: 2 })
    );
    assert!(err.to_string().contains("m (5) must not exceed m0 (2)"));
    assert!(!path.exists());
}

#[test]
fn writes_dump_to_file() {
    let dir = TempDir::new().expect("temporary directory");
    let path = dir.path().join("graph.txt");
    let path_arg = path.to_str().expect("temporary path is UTF-8");

    let cli = cli(&[
        "--mode", "freescale", "--num", "30", "--m0", "4", "--m", "2", "--seed", "3", "--output",
        path_arg,
    ]);
    let summary = run_cli(&cli).expect("generation must succeed");

    let mut stdout = Vec::new();
    write_graph(&cli, &summary.graph, &mut stdout).expect("writing the file must succeed");
    assert!(stdout.is_empty());

    let text = fs::read_to_string(&path).expect("dump file must exist");
    assert_valid_dump(&text, 30, 6 + 2 * 26);
}

#[test]
fn unwritable_output_reports_path() {
    let dir = TempDir::new().expect("temporary directory");
    let path = dir.path().join("missing").join("graph.txt");
    let path_arg = path.to_str().expect("temporary path is UTF-8");

    let cli = cli(&["--mode", "freescale", "--num", "20", "--output", path_arg]);
    let summary = run_cli(&cli).expect("generation must succeed");

    let err = write_graph(&cli, &summary.graph, Vec::new()).expect_err("directory is missing");
    assert!(matches!(&err, CliError::OutputFile { path: p, .. } if p == &path));
    assert!(err.param_error().is_none());
}

#[test]
fn same_seed_same_dump() {
    let args = [
        "--mode", "smallworld", "--num", "100", "--k", "6", "--seed", "99", "--sorted",
    ];

    let dumps: Vec<String> = (0..2)
        .map(|_| {
            let cli = cli(&args);
            let summary = run_cli(&cli).expect("generation must succeed");
            let mut buffer = Vec::new();
            write_graph(&cli, &summary.graph, &mut buffer).expect("writing must succeed");
            String::from_utf8(buffer).expect("dump is UTF-8")
        })
        .collect();

    assert_eq!(dumps[0], dumps[1]);
}
