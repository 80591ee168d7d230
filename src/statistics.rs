use crate::core_decomposition::CoreDecomposition;
use crate::graph::BaseGraph;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Size and density figures of a graph, including its degeneracy.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphStatistics {
    pub vertices: usize,
    pub edges: usize,
    /// `2m / (n (n - 1))`, 0 for graphs with less than two vertices.
    pub density: f64,
    pub average_degree: f64,
    pub max_degree: usize,
    pub degeneracy: usize,
}

impl GraphStatistics {
    pub fn compute<G: BaseGraph>(graph: &G) -> Self {
        Self::with_decomposition(graph, &CoreDecomposition::compute(graph))
    }

    pub fn with_decomposition<G: BaseGraph>(graph: &G, cores: &CoreDecomposition) -> Self {
        let vertices = graph.order();
        let degree_sum: usize = graph.vertices().map(|v| graph.degree(v)).sum();
        let edges = degree_sum / 2;
        let density = if vertices < 2 {
            0.0
        } else {
            (2 * edges) as f64 / (vertices * (vertices - 1)) as f64
        };
        let average_degree = if vertices == 0 {
            0.0
        } else {
            degree_sum as f64 / vertices as f64
        };
        let max_degree = graph.vertices().map(|v| graph.degree(v)).max().unwrap_or(0);
        Self {
            vertices,
            edges,
            density,
            average_degree,
            max_degree,
            degeneracy: cores.degeneracy(),
        }
    }
}

impl Display for GraphStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vertices: {}, edges: {}, density: {:.4}, average degree: {:.2}, max degree: {}, degeneracy: {}",
            self.vertices,
            self.edges,
            self.density,
            self.average_degree,
            self.max_degree,
            self.degeneracy
        )
    }
}
