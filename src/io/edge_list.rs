//! # EdgeList
//!
//! The EdgeList-Format consists of `m` non-comment-lines `u v`, each
//! representing the directed edge `Edge(u, v)`. There is no header: the
//! vertex set is exactly the set of endpoints appearing in the file.

use std::{
    io::{BufRead, BufWriter, Write},
    path::Path,
};

use log::debug;

use super::*;
use crate::{
    edge::Edge,
    error::{GraphError, Result},
    node::Node,
    repr::DiGraph,
};

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl GraphReader<DiGraph> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<DiGraph> {
        let mut graph = DiGraph::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with(&self.comment_identifier) {
                continue;
            }

            // trailing tokens beyond the pair are ignored
            let mut parts = line.split_whitespace();
            let from = parse_node(parts.next(), number + 1, "source vertex")?;
            let to = parse_node(parts.next(), number + 1, "target vertex")?;

            graph.add_vertex(from);
            graph.add_vertex(to);
            graph.add_edge(from, to);
        }

        debug!(
            "edge list read: {} vertices, {} edges",
            graph.number_of_nodes(),
            graph.number_of_edges()
        );

        Ok(graph)
    }
}

/// Tries to parse a line token as a node id
fn parse_node(token: Option<&str>, line: usize, name: &str) -> Result<Node> {
    let token = token.ok_or_else(|| GraphError::InvalidData {
        line,
        reason: format!("premature end of line when parsing {name}"),
    })?;

    token.parse().map_err(|_| GraphError::InvalidData {
        line,
        reason: format!("cannot parse {name} from {token:?}"),
    })
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl EdgeListRead for DiGraph {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl GraphWriter<DiGraph> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &DiGraph, mut writer: W) -> Result<()> {
        for Edge(u, v) in graph.edges() {
            writeln!(writer, "{u} {v}")?;
        }
        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl EdgeListWrite for DiGraph {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
