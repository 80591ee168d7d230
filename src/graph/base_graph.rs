use std::fmt::Debug;

/// Read-only view of a simple undirected graph.
///
/// Implementations must keep adjacency symmetric, loop-free and free of
/// duplicates; [`validate_simple`](crate::graph::validate_simple) checks this.
pub trait BaseGraph: Clone + Debug {
    fn degree(&self, u: usize) -> usize;
    fn order(&self) -> usize;
    fn size(&self) -> usize {
        self.vertices().map(|v| self.degree(v)).sum::<usize>() / 2
    }
    fn is_clique(&self, vertices: &[usize]) -> bool;
    fn has_vertex(&self, u: usize) -> bool;
    fn has_edge(&self, u: usize, v: usize) -> bool;
    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_>;
    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_>;
}
