//! k-core decomposition and degeneracy ordering.
//!
//! Implements the linear time peeling of Batagelj and Zaversnik, _An O(m)
//! Algorithm for Cores Decomposition of Networks_ (2003): repeatedly remove a
//! vertex of minimum remaining degree; the remaining degree at removal time,
//! clamped to be non-decreasing, is the vertex's core number.
use crate::datastructures::BucketQueue;
use crate::graph::{BaseGraph, IndexedGraph};
use fxhash::FxHashMap;
#[cfg(feature = "log")]
use log::debug;

/// Result of peeling an [`IndexedGraph`], in dense indices.
pub(crate) struct Peeling {
    /// Vertices in removal order, i.e. ascending core number.
    pub(crate) sequence: Vec<usize>,
    pub(crate) core: Vec<usize>,
}

pub(crate) fn peel(graph: &IndexedGraph) -> Peeling {
    let n = graph.order();
    let degrees: Vec<usize> = (0..n).map(|v| graph.degree(v)).collect();
    let mut queue = BucketQueue::new(degrees);
    let mut sequence = Vec::with_capacity(n);
    let mut core = vec![0; n];

    while let Some((v, d)) = queue.pop_min() {
        core[v] = d;
        sequence.push(v);
        for u in graph.neighbors(v) {
            queue.decrease(*u);
        }
    }
    Peeling { sequence, core }
}

/// Core numbers, k-shells and the degeneracy ordering of a graph.
///
/// `order()` lists every vertex once, grouped into runs of equal core
/// number with the highest core first. The order of vertices inside a run is
/// not specified. `shells()[k]` holds the vertices of core number `k`; there
/// is always at least one (possibly empty) shell.
#[derive(Clone, Debug)]
pub struct CoreDecomposition {
    order: Vec<usize>,
    shells: Vec<Vec<usize>>,
    core_numbers: FxHashMap<usize, usize>,
}

impl CoreDecomposition {
    pub fn compute<G: BaseGraph>(graph: &G) -> Self {
        let graph = IndexedGraph::from_graph(graph);
        let peeling = peel(&graph);
        Self::from_peeling(&graph, &peeling)
    }

    pub(crate) fn from_peeling(graph: &IndexedGraph, peeling: &Peeling) -> Self {
        let max_core = peeling
            .sequence
            .last()
            .map(|v| peeling.core[*v])
            .unwrap_or(0);

        let mut shells = vec![Vec::new(); max_core + 1];
        let mut core_numbers =
            FxHashMap::with_capacity_and_hasher(graph.order(), Default::default());
        for v in peeling.sequence.iter().copied() {
            let label = graph.label(v);
            shells[peeling.core[v]].push(label);
            core_numbers.insert(label, peeling.core[v]);
        }
        let order = peeling
            .sequence
            .iter()
            .rev()
            .map(|v| graph.label(*v))
            .collect();

        #[cfg(feature = "log")]
        debug!(
            "peeled {} vertices into {} shells",
            graph.order(),
            shells.len()
        );

        Self {
            order,
            shells,
            core_numbers,
        }
    }

    /// Vertices by descending core number.
    pub fn order(&self) -> &[usize] {
        self.order.as_slice()
    }

    /// Vertices by ascending core number, the order in which they were
    /// peeled off.
    pub fn peeling_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().rev().copied()
    }

    pub fn shells(&self) -> &[Vec<usize>] {
        self.shells.as_slice()
    }

    /// The k-shell, empty for `k` above the degeneracy.
    pub fn shell(&self, k: usize) -> &[usize] {
        self.shells.get(k).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Maximum core number, 0 for a graph without edges.
    pub fn degeneracy(&self) -> usize {
        self.shells.len() - 1
    }

    pub fn core_number(&self, v: usize) -> Option<usize> {
        self.core_numbers.get(&v).copied()
    }

    /// Vertices of the k-core, i.e. all vertices with core number at least
    /// `k`.
    pub fn k_core(&self, k: usize) -> Vec<usize> {
        self.shells
            .iter()
            .skip(k)
            .flat_map(|shell| shell.iter().copied())
            .collect()
    }

    pub fn into_parts(self) -> (Vec<usize>, Vec<Vec<usize>>) {
        (self.order, self.shells)
    }
}

#[cfg(test)]
mod tests {
    use crate::core_decomposition::CoreDecomposition;
    use crate::graph::{BaseGraph, BitGraph, HashMapGraph, MutableGraph};
    use fxhash::FxHashSet;

    fn sorted(mut v: Vec<usize>) -> Vec<usize> {
        v.sort_unstable();
        v
    }

    fn fixture() -> HashMapGraph {
        HashMapGraph::from_edges(vec![
            (0, 1),
            (0, 2),
            (0, 4),
            (0, 6),
            (1, 2),
            (1, 4),
            (1, 6),
            (2, 3),
            (2, 6),
            (3, 4),
            (3, 5),
            (4, 6),
        ])
    }

    fn check_invariants<G: BaseGraph>(graph: &G, cores: &CoreDecomposition) {
        // shells partition the vertex set
        let mut seen = FxHashSet::default();
        for shell in cores.shells() {
            for v in shell {
                assert!(seen.insert(*v), "vertex {} in two shells", v);
            }
        }
        let all: FxHashSet<usize> = graph.vertices().collect();
        assert_eq!(seen, all);

        // order is the concatenation of the shells, highest first
        let mut offset = 0;
        for shell in cores.shells().iter().rev() {
            let run: FxHashSet<usize> = cores.order()[offset..offset + shell.len()]
                .iter()
                .copied()
                .collect();
            let expected: FxHashSet<usize> = shell.iter().copied().collect();
            assert_eq!(run, expected);
            offset += shell.len();
        }
        assert_eq!(offset, cores.order().len());

        // every vertex of core k has k neighbors of core at least k
        for v in graph.vertices() {
            let k = cores.core_number(v).unwrap();
            let strong = graph
                .neighborhood(v)
                .filter(|u| cores.core_number(*u).unwrap() >= k)
                .count();
            assert!(strong >= k, "vertex {} has core {} but {}", v, k, strong);
        }
    }

    #[test]
    fn fixture_shells() {
        let graph = fixture();
        let cores = CoreDecomposition::compute(&graph);
        assert_eq!(cores.degeneracy(), 3);
        assert_eq!(cores.shells().len(), 4);
        assert!(cores.shell(0).is_empty());
        assert_eq!(cores.shell(1), &[5]);
        assert_eq!(cores.shell(2), &[3]);
        assert_eq!(sorted(cores.shell(3).to_vec()), vec![0, 1, 2, 4, 6]);
        assert!(cores.shell(4).is_empty());
        assert_eq!(cores.order().len(), 7);
        assert_eq!(cores.order()[5], 3);
        assert_eq!(cores.order()[6], 5);
        check_invariants(&graph, &cores);
    }

    #[test]
    fn empty_graph() {
        let graph = HashMapGraph::new();
        let cores = CoreDecomposition::compute(&graph);
        assert!(cores.order().is_empty());
        assert_eq!(cores.shells().len(), 1);
        assert!(cores.shell(0).is_empty());
        assert_eq!(cores.degeneracy(), 0);
        assert!(cores.k_core(0).is_empty());
    }

    #[test]
    fn edgeless_graph() {
        let graph = BitGraph::with_order(5);
        let cores = CoreDecomposition::compute(&graph);
        assert_eq!(cores.degeneracy(), 0);
        assert_eq!(sorted(cores.shell(0).to_vec()), vec![0, 1, 2, 3, 4]);
        assert!((0..5).all(|v| cores.core_number(v) == Some(0)));
        check_invariants(&graph, &cores);
    }

    #[test]
    fn clique_and_tail() {
        let mut graph = HashMapGraph::new();
        graph.make_clique(&[10, 11, 12, 13, 14]);
        graph.add_edge(14, 15);
        graph.add_edge(15, 16);
        graph.add_vertex(99);
        let cores = CoreDecomposition::compute(&graph);
        assert_eq!(cores.degeneracy(), 4);
        assert_eq!(cores.core_number(12), Some(4));
        assert_eq!(cores.core_number(15), Some(1));
        assert_eq!(cores.core_number(99), Some(0));
        assert_eq!(cores.core_number(1000), None);
        assert_eq!(sorted(cores.k_core(2)), vec![10, 11, 12, 13, 14]);
        assert_eq!(cores.k_core(1).len(), 7);
        assert!(cores.k_core(5).is_empty());
        check_invariants(&graph, &cores);
    }

    #[test]
    fn cycle_is_two_core() {
        let graph = HashMapGraph::from_edges((0..8).map(|i| (i, (i + 1) % 8)));
        let cores = CoreDecomposition::compute(&graph);
        assert_eq!(cores.degeneracy(), 2);
        assert_eq!(cores.shell(2).len(), 8);
    }

    #[test]
    fn peeling_order_is_reverse_order() {
        let graph = fixture();
        let cores = CoreDecomposition::compute(&graph);
        let mut peeled: Vec<usize> = cores.peeling_order().collect();
        peeled.reverse();
        assert_eq!(peeled.as_slice(), cores.order());
        assert_eq!(cores.peeling_order().next(), Some(5));
    }

    #[test]
    fn k_core_has_minimum_degree() {
        for seed in 0..10 {
            let graph = HashMapGraph::random(60, 0.1, seed);
            let cores = CoreDecomposition::compute(&graph);
            check_invariants(&graph, &cores);
            let k = cores.degeneracy();
            let members: FxHashSet<usize> = cores.k_core(k).into_iter().collect();
            let core = graph.vertex_induced(&members);
            assert!(core.order() > 0);
            assert!(core.vertices().all(|v| core.degree(v) >= k));
        }
    }

    #[test]
    fn into_parts() {
        let graph = HashMapGraph::from_edges(vec![(1, 2)]);
        let (order, shells) = CoreDecomposition::compute(&graph).into_parts();
        assert_eq!(sorted(order), vec![1, 2]);
        assert_eq!(shells.len(), 2);
        assert!(shells[0].is_empty());
    }
}
