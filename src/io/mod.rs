/*!
# IO

Utilities for writing generated graphs.

## Output Format

The only supported format is the **adjacency dump** (see [`AdjacencyWriter`]): the number of
nodes on the first line followed by one line per node listing its neighbors.

## Traits

- [`GraphWriter`] is implemented by writers for a specific format.
- [`AdjacencyWrite`] is a shorthand implemented on every graph that can be dumped.
*/

pub mod adjacency;

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

pub use adjacency::*;

/// A configured output format.
///
/// Implementors only provide [`GraphWriter::try_write_graph`] for arbitrary [`Write`] sinks;
/// writing to a path goes through a buffered file.
pub trait GraphWriter<G> {
    /// Dumps `graph` into `writer` using the settings of `self`.
    ///
    /// # Errors
    /// Propagates any IO error of `writer`.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Creates (or truncates) the file at `path` and dumps `graph` into it.
    ///
    /// # Errors
    /// Fails if the file cannot be created, written or flushed.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()
    }
}
