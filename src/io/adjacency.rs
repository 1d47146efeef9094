use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

use itertools::Itertools;

use super::*;
use crate::prelude::*;

/// A writer for the adjacency dump.
///
/// ```text
/// N
/// <neighbors of 0>
/// <neighbors of 1>
/// ...
/// <neighbors of N-1>
/// ```
///
/// Neighbors are separated by single spaces and every line (including empty ones for isolated
/// nodes) ends with a newline. Unless [`AdjacencyWriter::sorted`] is set, neighbors appear in the
/// iteration order of the representation.
#[derive(Debug, Copy, Clone, Default)]
pub struct AdjacencyWriter {
    sorted: bool,
}

impl AdjacencyWriter {
    /// Creates a new writer with unsorted neighborhoods
    pub fn new() -> Self {
        Self::default()
    }

    /// Write every neighborhood in ascending order
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }
}

impl<G: AdjacencyList> GraphWriter<G> for AdjacencyWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;
        for u in graph.vertices() {
            if self.sorted {
                writeln!(writer, "{}", graph.ordered_neighbors_of(u).iter().join(" "))?;
            } else {
                writeln!(writer, "{}", graph.neighbors_of(u).join(" "))?;
            }
        }
        Ok(())
    }
}

/// Trait for writing a graph to a writer as adjacency dump.
pub trait AdjacencyWrite {
    /// Tries to write the graph to a writer
    fn try_write_adjacency<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_adjacency_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_adjacency(&mut writer)?;
        writer.flush()
    }
}

impl<G: AdjacencyList> AdjacencyWrite for G {
    fn try_write_adjacency<W: Write>(&self, writer: W) -> Result<()> {
        AdjacencyWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    fn dump<G: AdjacencyList>(graph: &G, writer: AdjacencyWriter) -> String {
        let mut buffer = Vec::new();
        writer.try_write_graph(graph, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn sorted_dump() {
        let graph = AdjSet::from_edges(5, [(0u32, 3u32), (0, 1), (2, 1), (0, 2)].into_iter());

        assert_eq!(
            dump(&graph, AdjacencyWriter::new().sorted(true)),
            "5\n1 2 3\n0 2\n0 1\n0\n\n"
        );
    }

    #[test]
    fn unsorted_dump_lists_same_neighbors() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let graph = AdjSet::barabasi_albert(rng, 40, 5, 3).unwrap();

        let text = dump(&graph, AdjacencyWriter::new());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("40"));

        let mut count = 0;
        for (u, line) in lines.enumerate() {
            let mut nbs: Vec<Node> = line
                .split(' ')
                .filter(|s| !s.is_empty())
                .map(|s| s.parse().unwrap())
                .collect();
            nbs.sort_unstable();
            assert_eq!(nbs, graph.ordered_neighbors_of(u as Node));
            count += 1;
        }
        assert_eq!(count, 40);
        assert!(text.ends_with('\n'));
        assert!(!text.contains("  ") && !text.contains(" \n"));
    }

    #[test]
    fn empty_graph() {
        assert_eq!(dump(&AdjSet::new(0), AdjacencyWriter::new()), "0\n");
        assert_eq!(dump(&AdjSet::new(2), AdjacencyWriter::new()), "2\n\n\n");
    }

    #[test]
    fn shorthand_matches_writer() {
        let graph = AdjSet::from_edges(4, [(0u32, 1u32), (1, 2), (1, 3)].into_iter());

        let mut buffer = Vec::new();
        graph.try_write_adjacency(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            dump(&graph, AdjacencyWriter::new())
        );
    }
}
