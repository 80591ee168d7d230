//! Reading graphs in the DIMACS/PACE edge format and writing results.
//!
//! Input lines are `c ...` comments, one `p <name> <n> <m>` header and edge
//! lines `e u v` or `u v` with vertices numbered from 1. Internally vertices
//! are numbered from 0; the writers number them from 1 again.
use crate::core_decomposition::CoreDecomposition;
use crate::datastructures::BitSet;
use crate::graph::{BitGraph, HashMapGraph, MutableGraph};
use crate::maximal_cliques::MaximalCliques;
use std::convert::TryFrom;
use std::io;
use std::io::{BufRead, Write};

fn invalid_input(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

fn parse_pair<'a, I: Iterator<Item = &'a str>>(
    mut tokens: I,
    line: &str,
) -> io::Result<(usize, usize)> {
    let mut next = || -> io::Result<usize> {
        tokens
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| invalid_input(format!("Invalid line: {}", line)))
    };
    let u = next()?;
    let v = next()?;
    if tokens.next().is_some() {
        return Err(invalid_input(format!("Invalid line: {}", line)));
    }
    Ok((u, v))
}

/// Parses a `p <name> <n> <m>` header into `(n, m)`.
pub fn dimacs_p(line: &str) -> io::Result<(usize, usize)> {
    let tokens = line.trim_start_matches('p').split_whitespace().skip(1);
    parse_pair(tokens, line)
}

/// Parses an edge line into a 0-indexed pair.
pub fn dimacs_e(line: &str) -> io::Result<(usize, usize)> {
    let tokens = line.trim_start_matches('e').split_whitespace();
    let (u, v) = parse_pair(tokens, line)?;
    match (u.checked_sub(1), v.checked_sub(1)) {
        (Some(u), Some(v)) => Ok((u, v)),
        _ => Err(invalid_input(format!("Vertices are numbered from 1: {}", line))),
    }
}

enum Line {
    Skip,
    Header(usize),
    Edge(usize, usize),
}

fn classify(line: &str) -> io::Result<Line> {
    let line = line.trim();
    match line.chars().next() {
        None | Some('c') => Ok(Line::Skip),
        Some('p') => Ok(Line::Header(dimacs_p(line)?.0)),
        _ => {
            let (u, v) = dimacs_e(line)?;
            if u == v {
                return Err(invalid_input(format!("Self-loop at vertex {}", u + 1)));
            }
            Ok(Line::Edge(u, v))
        }
    }
}

fn check_bounds(order: Option<usize>, u: usize, v: usize) -> io::Result<()> {
    match order {
        Some(n) if u >= n || v >= n => Err(invalid_input(format!(
            "Edge ({}, {}) exceeds the {} vertices of the header",
            u + 1,
            v + 1,
            n
        ))),
        _ => Ok(()),
    }
}

pub struct DimacsRead<T: BufRead>(pub T);

impl<T: BufRead> TryFrom<DimacsRead<T>> for HashMapGraph {
    type Error = io::Error;

    /// Self-loops are rejected, repeated edges are merged. Vertices declared
    /// by the header exist even without incident edges.
    fn try_from(reader: DimacsRead<T>) -> Result<Self, Self::Error> {
        let reader = reader.0;
        let mut graph = HashMapGraph::new();
        let mut order = None;
        for line in reader.lines() {
            match classify(&line?)? {
                Line::Skip => {}
                Line::Header(n) => {
                    for u in 0..n {
                        graph.add_vertex(u);
                    }
                    order = Some(n);
                }
                Line::Edge(u, v) => {
                    check_bounds(order, u, v)?;
                    graph.add_edge(u, v);
                }
            }
        }
        Ok(graph)
    }
}

impl<T: BufRead> TryFrom<DimacsRead<T>> for BitGraph {
    type Error = io::Error;

    /// Requires the header before the first edge.
    fn try_from(reader: DimacsRead<T>) -> Result<Self, Self::Error> {
        let reader = reader.0;

        let mut graph: Option<Vec<BitSet>> = None;
        for line in reader.lines() {
            match classify(&line?)? {
                Line::Skip => {}
                Line::Header(n) => graph = Some(vec![BitSet::new(n); n]),
                Line::Edge(u, v) => {
                    let rows = graph
                        .as_mut()
                        .ok_or_else(|| invalid_input(String::from("Edge before header")))?;
                    check_bounds(Some(rows.len()), u, v)?;
                    rows[u].set_bit(v);
                    rows[v].set_bit(u);
                }
            }
        }

        graph
            .map(BitGraph::from)
            .ok_or_else(|| invalid_input(String::from("Missing header")))
    }
}

/// Writes `s degeneracy <k>` followed by `v <vertex> <core>` lines in
/// descending core order.
pub struct CoreWriter<'a, W: Write> {
    decomposition: &'a CoreDecomposition,
    writer: W,
}

impl<'a, W: Write> CoreWriter<'a, W> {
    pub fn new(decomposition: &'a CoreDecomposition, writer: W) -> Self {
        Self {
            decomposition,
            writer,
        }
    }

    pub fn output(mut self) -> io::Result<()> {
        writeln!(self.writer, "s degeneracy {}", self.decomposition.degeneracy())?;
        for v in self.decomposition.order() {
            let core = self.decomposition.core_number(*v).unwrap_or(0);
            writeln!(self.writer, "v {} {}", v + 1, core)?;
        }
        self.writer.flush()
    }
}

/// Writes `s cliques <count>` followed by one clique per line, cliques in
/// lexicographic order.
pub struct CliqueWriter<'a, W: Write> {
    cliques: &'a MaximalCliques,
    writer: W,
}

impl<'a, W: Write> CliqueWriter<'a, W> {
    pub fn new(cliques: &'a MaximalCliques, writer: W) -> Self {
        Self { cliques, writer }
    }

    pub fn output(mut self) -> io::Result<()> {
        writeln!(self.writer, "s cliques {}", self.cliques.len())?;
        let mut sorted: Vec<&Vec<usize>> = self.cliques.iter().collect();
        sorted.sort();
        for clique in sorted {
            let line: Vec<String> = clique.iter().map(|v| (v + 1).to_string()).collect();
            writeln!(self.writer, "{}", line.join(" "))?;
        }
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use crate::core_decomposition::CoreDecomposition;
    use crate::graph::{BaseGraph, BitGraph, HashMapGraph};
    use crate::io::{dimacs_e, dimacs_p, CliqueWriter, CoreWriter, DimacsRead};
    use crate::maximal_cliques::MaximalCliques;
    use std::convert::TryFrom;
    use std::io::Cursor;

    const GRAPH: &str = "c example\np tw 6 5\n1 2\n1 5\n2 5\n\ne 3 4\n2 3\n";

    #[test]
    fn parse_lines() {
        assert_eq!(dimacs_p("p tw 6 5").unwrap(), (6, 5));
        assert_eq!(dimacs_p("p edge 10 0").unwrap(), (10, 0));
        assert_eq!(dimacs_e("e 1 2").unwrap(), (0, 1));
        assert_eq!(dimacs_e("3   7").unwrap(), (2, 6));
        assert!(dimacs_e("0 1").is_err());
        assert!(dimacs_e("1").is_err());
        assert!(dimacs_e("1 2 3").is_err());
        assert!(dimacs_p("p tw x 5").is_err());
    }

    #[test]
    fn read_hash_map_graph() {
        let graph = HashMapGraph::try_from(DimacsRead(Cursor::new(GRAPH))).unwrap();
        assert_eq!(graph.order(), 6);
        assert_eq!(graph.size(), 5);
        assert!(graph.has_vertex(5));
        assert_eq!(graph.degree(5), 0);
        assert!(graph.has_edge(2, 3));
    }

    #[test]
    fn read_bit_graph() {
        let graph = BitGraph::try_from(DimacsRead(Cursor::new(GRAPH))).unwrap();
        assert_eq!(graph.order(), 6);
        assert_eq!(graph.size(), 5);
        assert!(graph.has_edge(0, 4));
    }

    #[test]
    fn rejects_malformed_input() {
        let self_loop = "p tw 2 1\n1 1\n";
        assert!(HashMapGraph::try_from(DimacsRead(Cursor::new(self_loop))).is_err());
        assert!(BitGraph::try_from(DimacsRead(Cursor::new(self_loop))).is_err());

        let out_of_range = "p tw 2 1\n1 3\n";
        assert!(HashMapGraph::try_from(DimacsRead(Cursor::new(out_of_range))).is_err());
        assert!(BitGraph::try_from(DimacsRead(Cursor::new(out_of_range))).is_err());

        let no_header = "1 2\n";
        assert!(HashMapGraph::try_from(DimacsRead(Cursor::new(no_header))).is_ok());
        assert!(BitGraph::try_from(DimacsRead(Cursor::new(no_header))).is_err());
    }

    #[test]
    fn repeated_edges_are_merged() {
        let graph =
            HashMapGraph::try_from(DimacsRead(Cursor::new("p tw 2 2\n1 2\n2 1\n"))).unwrap();
        assert_eq!(graph.size(), 1);
    }

    #[test]
    fn write_cores() {
        let graph = HashMapGraph::try_from(DimacsRead(Cursor::new(GRAPH))).unwrap();
        let cores = CoreDecomposition::compute(&graph);
        let mut out = Vec::new();
        CoreWriter::new(&cores, &mut out).output().unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "s degeneracy 2");
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[6], "v 6 0");
        assert!(lines.contains(&"v 1 2"));
        assert!(lines.contains(&"v 4 1"));
    }

    #[test]
    fn write_cliques() {
        let graph = HashMapGraph::try_from(DimacsRead(Cursor::new(GRAPH))).unwrap();
        let cliques = MaximalCliques::enumerate(&graph);
        let mut out = Vec::new();
        CliqueWriter::new(&cliques, &mut out).output().unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "s cliques 4\n1 2 5\n2 3\n3 4\n6\n");
    }
}
