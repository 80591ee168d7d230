use crate::datastructures::BitSet;
use crate::graph::base_graph::BaseGraph;
use fxhash::FxHashMap;
use std::borrow::Borrow;

/// Dense graph on the vertices `0..n`, one adjacency row per vertex.
#[derive(Clone, Debug)]
pub struct BitGraph {
    graph: Vec<BitSet>,
}

impl From<Vec<BitSet>> for BitGraph {
    fn from(graph: Vec<BitSet>) -> Self {
        Self { graph }
    }
}

impl BitGraph {
    pub fn with_order(n: usize) -> Self {
        Self {
            graph: vec![BitSet::new(n); n],
        }
    }

    /// Relabels `og_graph` through `og_to_self`. Edges with an endpoint that
    /// is unmapped or mapped to an index of at least `og_graph.order()` are
    /// dropped.
    pub fn from_graph<G: BaseGraph>(og_graph: &G, og_to_self: &FxHashMap<usize, usize>) -> Self {
        let n = og_graph.order();
        let mut graph = vec![BitSet::new(n); n];

        for v in og_graph.vertices() {
            for u in og_graph.neighborhood(v) {
                let a = og_to_self.get(&v).copied().filter(|a| *a < n);
                let b = og_to_self.get(&u).copied().filter(|b| *b < n);
                if let (Some(a), Some(b)) = (a, b) {
                    graph[a].set_bit(b);
                }
            }
        }
        Self { graph }
    }

    pub fn add_edge(&mut self, u: usize, v: usize) {
        assert_ne!(u, v);
        self.graph[u].set_bit(v);
        self.graph[v].set_bit(u);
    }

    pub fn neighborhood_as_bitset(&self, u: usize) -> &BitSet {
        self.graph[u].borrow()
    }
}

impl BaseGraph for BitGraph {
    fn degree(&self, u: usize) -> usize {
        self.graph[u].cardinality()
    }

    fn order(&self) -> usize {
        self.graph.len()
    }

    fn is_clique(&self, vertices: &[usize]) -> bool {
        for u in vertices {
            for v in vertices {
                if u < v && !self.graph[*u][*v] {
                    return false;
                }
            }
        }
        true
    }

    fn has_vertex(&self, u: usize) -> bool {
        u < self.graph.len()
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.graph.len() && v < self.graph[u].len() && self.graph[u][v]
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.graph.len())
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.graph[u].iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::base_graph::BaseGraph;
    use crate::graph::bit_graph::BitGraph;
    use crate::graph::hash_map_graph::HashMapGraph;
    use fxhash::FxHashMap;

    #[test]
    fn add_edge_is_symmetric() {
        let mut graph = BitGraph::with_order(4);
        graph.add_edge(0, 3);
        graph.add_edge(1, 3);
        assert!(graph.has_edge(3, 0));
        assert!(graph.has_edge(0, 3));
        assert!(!graph.has_edge(0, 1));
        assert!(!graph.has_edge(0, 9));
        assert_eq!(graph.degree(3), 2);
        assert_eq!(graph.size(), 2);
        assert_eq!(graph.neighborhood(3).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn from_graph_relabels() {
        let og = HashMapGraph::from_edges(vec![(10, 20), (20, 30), (10, 30)]);
        let mapping: FxHashMap<usize, usize> =
            vec![(10, 0), (20, 1), (30, 2)].into_iter().collect();
        let graph = BitGraph::from_graph(&og, &mapping);
        assert_eq!(graph.order(), 3);
        assert!(graph.is_clique(&[0, 1, 2]));
    }

    #[test]
    fn from_graph_drops_out_of_range_labels() {
        let og = HashMapGraph::from_edges(vec![(10, 20), (20, 30)]);
        let mapping: FxHashMap<usize, usize> =
            vec![(10, 0), (20, 1), (30, 7)].into_iter().collect();
        let graph = BitGraph::from_graph(&og, &mapping);
        assert_eq!(graph.order(), 3);
        assert!(graph.has_edge(0, 1));
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.degree(2), 0);
    }
}
