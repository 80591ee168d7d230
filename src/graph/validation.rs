use crate::graph::base_graph::BaseGraph;
use core::fmt;
use fxhash::FxHashSet;
use std::error::Error;

/// Checks that `graph` is a simple undirected graph: no self-loops, no
/// repeated neighbours, only known vertices as neighbours, symmetric
/// adjacency and degrees matching the neighbourhoods.
///
/// Neither the core decomposition nor the clique enumeration run this check
/// themselves; on a malformed graph their results are unspecified.
pub fn validate_simple<G: BaseGraph>(graph: &G) -> Result<(), GraphError> {
    for v in graph.vertices() {
        let mut seen: FxHashSet<usize> = FxHashSet::default();
        for u in graph.neighborhood(v) {
            if u == v {
                let msg = format!("Vertex {} is adjacent to itself.", v);
                return Err(GraphError::new(GraphErrorKind::SelfLoopError, &msg));
            }
            if !seen.insert(u) {
                let msg = format!("Vertex {} lists neighbor {} more than once.", v, u);
                return Err(GraphError::new(GraphErrorKind::DuplicateEdgeError, &msg));
            }
            if !graph.has_vertex(u) {
                let msg = format!("Vertex {} has unknown neighbor {}.", v, u);
                return Err(GraphError::new(GraphErrorKind::UnknownVertexError, &msg));
            }
            if !graph.has_edge(u, v) {
                let msg = format!("Edge ({}, {}) has no reverse edge.", v, u);
                return Err(GraphError::new(GraphErrorKind::AsymmetricEdgeError, &msg));
            }
        }
        if seen.len() != graph.degree(v) {
            let msg = format!(
                "Vertex {} reports degree {} but has {} neighbors.",
                v,
                graph.degree(v),
                seen.len()
            );
            return Err(GraphError::new(GraphErrorKind::DegreeMismatchError, &msg));
        }
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct GraphError {
    kind: GraphErrorKind,
    msg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphErrorKind {
    SelfLoopError,
    DuplicateEdgeError,
    UnknownVertexError,
    AsymmetricEdgeError,
    DegreeMismatchError,
}

impl fmt::Display for GraphErrorKind {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> Result<(), ::std::fmt::Error> {
        match *self {
            Self::SelfLoopError => f.write_str("SelfLoopError"),
            Self::DuplicateEdgeError => f.write_str("DuplicateEdgeError"),
            Self::UnknownVertexError => f.write_str("UnknownVertexError"),
            Self::AsymmetricEdgeError => f.write_str("AsymmetricEdgeError"),
            Self::DegreeMismatchError => f.write_str("DegreeMismatchError"),
        }
    }
}

impl GraphError {
    fn new(kind: GraphErrorKind, msg: &str) -> Self {
        Self {
            kind,
            msg: String::from(msg),
        }
    }

    pub fn kind(&self) -> GraphErrorKind {
        self.kind
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl Error for GraphError {}
