//! Text and JSON persistence for graphs.
//!
//! Formats:
//! - **matrix**: one row per line, whitespace-separated weights, `0` for "no edge".
//! - **list**: line `i` holds the links of vertex `i` as `neighbor (weight)` pairs.
//! - **edges**: one `start end weight` triple per line; blank lines are skipped.
//! - **json**: `{"representation": "matrix", "edges": [[0, 1, 4], ...]}`.
//!
//! Parsing problems are reported as [`Error::FileCorrupted`] with a 1-based
//! line number; a well-formed file describing an invalid graph fails with
//! [`Error::InvalidGraph`] like any other load.

use core::fmt;
use core::str::FromStr;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

use super::list::Link;
use super::{AnyGraph, Edge, Graph, ListGraph, MatrixGraph, Representation, VertexId, Weight};

/// On-disk graph formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphFormat {
    /// Adjacency matrix text.
    Matrix,
    /// Adjacency list text.
    List,
    /// Edge triple text.
    Edges,
    /// JSON document.
    Json,
}

impl GraphFormat {
    /// Guesses the format from a file extension (`.matrix`, `.list`, `.edges`, `.json`).
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str()?.parse().ok()
    }

    /// Reads a graph and returns it in `representation`.
    ///
    /// # Errors
    /// Returns [`Error::FileCorrupted`], [`Error::Json`] or [`Error::Io`] for
    /// unreadable input and [`Error::InvalidGraph`] for an invalid graph.
    pub fn read<R: BufRead>(self, reader: R, representation: Representation) -> Result<AnyGraph> {
        let graph = match self {
            GraphFormat::Matrix => AnyGraph::Matrix(read_matrix(reader)?),
            GraphFormat::List => AnyGraph::List(read_list(reader)?),
            GraphFormat::Edges => AnyGraph::from_edges(representation, &read_edges(reader)?)?,
            GraphFormat::Json => from_json(reader)?,
        };
        graph.into_representation(representation)
    }

    /// Writes `graph` in this format, converting representations as needed.
    ///
    /// # Errors
    /// Returns [`Error::Io`] or [`Error::Json`] if writing fails, and
    /// [`Error::InvalidGraph`] if a conversion is needed for an empty graph.
    pub fn write<W: Write>(self, graph: &AnyGraph, writer: W) -> Result<()> {
        match self {
            GraphFormat::Matrix => match graph {
                AnyGraph::Matrix(g) => write_matrix(g, writer),
                AnyGraph::List(g) => write_matrix(&g.to_matrix()?, writer),
            },
            GraphFormat::List => match graph {
                AnyGraph::List(g) => write_list(g, writer),
                AnyGraph::Matrix(g) => write_list(&g.to_list()?, writer),
            },
            GraphFormat::Edges => write_edges(graph, writer),
            GraphFormat::Json => to_json(graph, writer),
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            GraphFormat::Matrix => "matrix",
            GraphFormat::List => "list",
            GraphFormat::Edges => "edges",
            GraphFormat::Json => "json",
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "matrix" => Ok(GraphFormat::Matrix),
            "list" => Ok(GraphFormat::List),
            "edges" => Ok(GraphFormat::Edges),
            "json" => Ok(GraphFormat::Json),
            other => Err(Error::Unsupported(other.to_string())),
        }
    }
}

/// Loads a graph file.
///
/// # Errors
/// See [`GraphFormat::read`]; a missing file is [`Error::Io`].
pub fn load_file(
    path: impl AsRef<Path>,
    format: GraphFormat,
    representation: Representation,
) -> Result<AnyGraph> {
    let path = path.as_ref();
    let graph = format.read(BufReader::new(File::open(path)?), representation)?;
    debug!(path = %path.display(), %format, vertices = graph.vertices(), "graph file loaded");
    Ok(graph)
}

/// Saves a graph file, replacing any existing one.
///
/// # Errors
/// See [`GraphFormat::write`].
pub fn save_file(graph: &AnyGraph, path: impl AsRef<Path>, format: GraphFormat) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    format.write(graph, &mut writer)?;
    writer.flush()?;
    debug!(path = %path.display(), %format, edges = graph.edge_count(), "graph file saved");
    Ok(())
}

fn corrupted(line: usize, reason: impl Into<String>) -> Error {
    Error::FileCorrupted {
        line,
        reason: reason.into(),
    }
}

fn parse_number<T: FromStr>(token: &str, line: usize, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| corrupted(line, format!("invalid {what} `{token}`")))
}

/// Non-blank lines with their 1-based numbers.
fn numbered_lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|l| (i + 1, l)).map_err(Error::from))
        .filter(|item| !matches!(item, Ok((_, l)) if l.trim().is_empty()))
}

/// Parses adjacency-matrix text.
///
/// The first row fixes the vertex count; every other row must have the same
/// number of cells and there may not be more rows than cells per row.
///
/// # Errors
/// Returns [`Error::FileCorrupted`] on malformed text and
/// [`Error::InvalidGraph`] if the matrix is not a valid graph.
pub fn read_matrix<R: BufRead>(reader: R) -> Result<MatrixGraph> {
    let mut rows: Vec<Vec<Weight>> = Vec::new();
    for item in numbered_lines(reader) {
        let (line, text) = item?;
        let row = text
            .split_whitespace()
            .map(|token| parse_number(token, line, "weight"))
            .collect::<Result<Vec<Weight>>>()?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(corrupted(
                    line,
                    format!("expected {} cells, found {}", first.len(), row.len()),
                ));
            }
            if rows.len() == first.len() {
                return Err(corrupted(line, format!("more than {} rows", first.len())));
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(corrupted(1, "no matrix rows"));
    }
    MatrixGraph::from_matrix(rows)
}

/// Writes adjacency-matrix text: every cell followed by a tab, one row per line.
///
/// # Errors
/// Returns [`Error::Io`] if writing fails.
pub fn write_matrix<W: Write>(graph: &MatrixGraph, mut writer: W) -> Result<()> {
    write!(writer, "{graph}")?;
    Ok(())
}

/// Parses adjacency-list text: line `i` lists vertex `i`'s links as
/// `neighbor (weight)` pairs. Trailing blank lines are ignored; a blank line
/// in between is an isolated vertex and fails validation.
///
/// # Errors
/// Returns [`Error::FileCorrupted`] on malformed text and
/// [`Error::InvalidGraph`] if the lists are not a valid graph.
pub fn read_list<R: BufRead>(reader: R) -> Result<ListGraph> {
    let mut list: Vec<Vec<Link>> = Vec::new();
    for (i, text) in reader.lines().enumerate() {
        let text = text?;
        let line = i + 1;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() % 2 != 0 {
            return Err(corrupted(line, "dangling neighbor without weight"));
        }

        let links = tokens
            .chunks_exact(2)
            .map(|pair| {
                let neighbor: VertexId = parse_number(pair[0], line, "neighbor")?;
                let weight = pair[1]
                    .strip_prefix('(')
                    .and_then(|w| w.strip_suffix(')'))
                    .ok_or_else(|| corrupted(line, format!("expected `(weight)`, found `{}`", pair[1])))?;
                Ok((neighbor, parse_number(weight, line, "weight")?))
            })
            .collect::<Result<Vec<Link>>>()?;
        list.push(links);
    }

    while list.last().is_some_and(Vec::is_empty) {
        list.pop();
    }
    if list.is_empty() {
        return Err(corrupted(1, "no adjacency lists"));
    }
    ListGraph::from_list(list)
}

/// Writes adjacency-list text.
///
/// # Errors
/// Returns [`Error::Io`] if writing fails.
pub fn write_list<W: Write>(graph: &ListGraph, mut writer: W) -> Result<()> {
    for links in graph.adjacency() {
        for (neighbor, weight) in links {
            write!(writer, "{neighbor} ({weight})\t")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Parses edge-triple text into an edge collection (not yet validated).
///
/// # Errors
/// Returns [`Error::FileCorrupted`] unless every non-blank line is exactly
/// three non-negative integers.
pub fn read_edges<R: BufRead>(reader: R) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    for item in numbered_lines(reader) {
        let (line, text) = item?;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let &[start, end, weight] = tokens.as_slice() else {
            return Err(corrupted(
                line,
                format!("expected `start end weight`, found {} fields", tokens.len()),
            ));
        };
        edges.push(Edge::new(
            parse_number(start, line, "vertex")?,
            parse_number(end, line, "vertex")?,
            parse_number(weight, line, "weight")?,
        ));
    }
    Ok(edges)
}

/// Writes one `start end weight` line per undirected edge.
///
/// # Errors
/// Returns [`Error::Io`] if writing fails.
pub fn write_edges<G: Graph + ?Sized, W: Write>(graph: &G, mut writer: W) -> Result<()> {
    for edge in graph.edges() {
        writeln!(writer, "{edge}")?;
    }
    Ok(())
}

/// Serialized form of a graph: its representation plus its edge triples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Representation to rebuild on load.
    pub representation: Representation,
    /// `(start, end, weight)` triples.
    pub edges: Vec<(VertexId, VertexId, Weight)>,
}

impl GraphDocument {
    /// Captures `graph`.
    pub fn from_graph<G: Graph + ?Sized>(graph: &G) -> Self {
        Self {
            representation: graph.representation(),
            edges: graph
                .edges()
                .iter()
                .map(|e| (e.start(), e.end(), e.weight()))
                .collect(),
        }
    }

    /// Rebuilds the graph in the recorded representation.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGraph`] if the edges fail validation.
    pub fn into_graph(self) -> Result<AnyGraph> {
        let edges: Vec<Edge> = self.edges.into_iter().map(Edge::from).collect();
        AnyGraph::from_edges(self.representation, &edges)
    }
}

/// Writes `graph` as a pretty-printed JSON document.
///
/// # Errors
/// Returns [`Error::Json`] if serialization or writing fails.
pub fn to_json<G: Graph + ?Sized, W: Write>(graph: &G, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &GraphDocument::from_graph(graph))?;
    Ok(())
}

/// Reads a JSON document back into the representation it names.
///
/// # Errors
/// Returns [`Error::Json`] for a malformed document and
/// [`Error::InvalidGraph`] for an invalid edge set.
pub fn from_json<R: Read>(reader: R) -> Result<AnyGraph> {
    let document: GraphDocument = serde_json::from_reader(reader)?;
    document.into_graph()
}
