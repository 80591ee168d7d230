//! Maximal clique enumeration.
//!
//! Bron–Kerbosch with Tomita pivoting, run once per vertex in degeneracy
//! order as in Eppstein, Löffler and Strash, _Listing All Maximal Cliques in
//! Sparse Graphs in Near-optimal Time_ (2010). The search below a vertex only
//! sees its neighborhood, which in this order has at most `degeneracy`
//! candidates.
use crate::core_decomposition::peel;
use crate::datastructures::BitSet;
use crate::graph::{BaseGraph, BitGraph, IndexedGraph};
use crate::util::Stopper;
#[cfg(feature = "log")]
use log::{debug, info};

/// All maximal cliques of a graph, each listed once with its vertices in
/// ascending order. The order of the cliques themselves is unspecified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaximalCliques {
    cliques: Vec<Vec<usize>>,
}

impl MaximalCliques {
    pub fn enumerate<G: BaseGraph>(graph: &G) -> Self {
        Self::run(graph, || false).unwrap_or_default()
    }

    /// Like [`enumerate`](Self::enumerate), but polls `stopper` before each
    /// root vertex and gives up with `None` once it fires.
    pub fn enumerate_until<G: BaseGraph, S: Stopper>(
        graph: &G,
        stopper: &mut S,
    ) -> Option<Self> {
        stopper.init();
        Self::run(graph, || stopper.stop())
    }

    fn run<G: BaseGraph, F: FnMut() -> bool>(graph: &G, mut stop: F) -> Option<Self> {
        let graph = IndexedGraph::from_graph(graph);
        let peeling = peel(&graph);
        let n = graph.order();

        #[cfg(feature = "log")]
        info!(
            "enumerating maximal cliques of {} vertices, degeneracy {}",
            n,
            peeling.sequence.last().map_or(0, |v| peeling.core[*v])
        );

        let mut rank = vec![0; n];
        for (i, v) in peeling.sequence.iter().enumerate() {
            rank[*v] = i;
        }

        let mut local: Vec<Option<usize>> = vec![None; n];
        let mut cliques = Vec::new();
        for (i, v) in peeling.sequence.iter().copied().enumerate() {
            if stop() {
                #[cfg(feature = "log")]
                info!("stopped after {} of {} root vertices", i, n);
                return None;
            }

            let members = graph.neighbors(v);
            for (idx, u) in members.iter().enumerate() {
                local[*u] = Some(idx);
            }
            let later: Vec<usize> = members
                .iter()
                .enumerate()
                .filter(|(_, u)| rank[**u] > i)
                .map(|(idx, _)| idx)
                .collect();
            let k = members.len();
            let candidates = BitSet::from_slice(k, &later);
            let mut excluded = BitSet::new(k);
            for idx in 0..k {
                if !candidates.at(idx) {
                    excluded.set_bit(idx);
                }
            }

            // Only edges touching a candidate are ever looked at, so rows of
            // excluded vertices only carry their candidate neighbors.
            let mut local_graph = BitGraph::with_order(k);
            for p in candidates.iter() {
                for w in graph.neighbors(members[p]) {
                    if let Some(q) = local[*w].filter(|q| *q != p) {
                        local_graph.add_edge(p, q);
                    }
                }
            }
            for u in members {
                local[*u] = None;
            }

            let mut search = PivotSearch {
                graph: &local_graph,
                labels: members.iter().map(|u| graph.label(*u)).collect(),
                clique: vec![graph.label(v)],
                cliques: &mut cliques,
            };
            search.expand(candidates, excluded);
        }

        #[cfg(feature = "log")]
        debug!("found {} maximal cliques", cliques.len());

        Some(Self { cliques })
    }

    pub fn len(&self) -> usize {
        self.cliques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cliques.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<usize>> {
        self.cliques.iter()
    }

    /// Whether `clique` is one of the maximal cliques, ignoring the order of
    /// its vertices.
    pub fn contains(&self, clique: &[usize]) -> bool {
        let mut clique = clique.to_vec();
        clique.sort_unstable();
        self.cliques.iter().any(|c| *c == clique)
    }

    /// Size of a largest clique, 0 for the empty graph.
    pub fn clique_number(&self) -> usize {
        self.largest().map_or(0, |c| c.len())
    }

    pub fn largest(&self) -> Option<&[usize]> {
        self.cliques
            .iter()
            .max_by_key(|c| c.len())
            .map(Vec::as_slice)
    }

    pub fn into_vec(self) -> Vec<Vec<usize>> {
        self.cliques
    }
}

impl IntoIterator for MaximalCliques {
    type Item = Vec<usize>;
    type IntoIter = std::vec::IntoIter<Vec<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cliques.into_iter()
    }
}

impl<'a> IntoIterator for &'a MaximalCliques {
    type Item = &'a Vec<usize>;
    type IntoIter = std::slice::Iter<'a, Vec<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cliques.iter()
    }
}

/// Bron–Kerbosch search inside the neighborhood of one root vertex, on
/// local indices. Every level owns its candidate and excluded sets.
struct PivotSearch<'a> {
    graph: &'a BitGraph,
    labels: Vec<usize>,
    clique: Vec<usize>,
    cliques: &'a mut Vec<Vec<usize>>,
}

impl<'a> PivotSearch<'a> {
    fn expand(&mut self, mut candidates: BitSet, mut excluded: BitSet) {
        if candidates.empty() {
            if excluded.empty() {
                let mut clique = self.clique.clone();
                clique.sort_unstable();
                self.cliques.push(clique);
            }
            return;
        }

        let graph = self.graph;
        let pivot = match candidates
            .iter()
            .chain(excluded.iter())
            .max_by_key(|u| {
                candidates.intersection_cardinality(graph.neighborhood_as_bitset(*u))
            })
        {
            Some(pivot) => pivot,
            None => return,
        };
        let branches: Vec<usize> = candidates
            .iter()
            .filter(|v| !graph.has_edge(pivot, *v))
            .collect();

        for v in branches {
            let neighbors = graph.neighborhood_as_bitset(v);
            let mut next_candidates = candidates.clone();
            next_candidates.and(neighbors);
            let mut next_excluded = excluded.clone();
            next_excluded.and(neighbors);

            self.clique.push(self.labels[v]);
            self.expand(next_candidates, next_excluded);
            self.clique.pop();

            candidates.unset_bit(v);
            excluded.set_bit(v);
        }
    }
}
