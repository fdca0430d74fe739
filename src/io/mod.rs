/*!
# IO

Utilities for reading and writing graphs as edge-list text.

The edge-list format is the input the graph is populated from: one
whitespace-delimited `from to` integer pair per line, with blank lines and
comment lines skipped. Reading a pair registers both endpoints as vertices
before inserting the edge, so file input never produces dangling edges.

## Traits

- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers
  for a specific format.
- [`EdgeListRead`] and [`EdgeListWrite`] are shorthands for the default
  edge-list settings.
*/

pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::error::Result;

pub use edge_list::*;

/// Trait for types that can read graphs in a specific format.
///
/// Provides both a low-level method to read from any [`BufRead`] instance
/// and a convenience wrapper to read directly from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation of a
    /// graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents are
    /// not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// Provides both a low-level method to write to any [`Write`] instance and a
/// convenience wrapper to write directly to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g. IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}
