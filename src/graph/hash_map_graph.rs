use crate::graph::base_graph::BaseGraph;
use crate::graph::mutable_graph::MutableGraph;
use fxhash::FxHashMap;
use fxhash::FxHashSet;
use rand::prelude::StdRng;
use rand::{Rng, SeedableRng};

/// Sparse graph over arbitrary `usize` vertex ids.
#[derive(Clone, Debug)]
pub struct HashMapGraph {
    data: FxHashMap<usize, FxHashSet<usize>>,
}

impl HashMapGraph {
    /// Builds a graph from an edge list. Repeated edges collapse into one,
    /// a self-loop panics like [`MutableGraph::add_edge`].
    pub fn from_edges<I: IntoIterator<Item = (usize, usize)>>(edges: I) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Erdős–Rényi G(n, p) on the vertices `0..n`, reproducible through
    /// `seed`. Panics if `p` is not within `[0, 1]`.
    pub fn random(n: usize, p: f64, seed: u64) -> Self {
        let mut rng: StdRng = SeedableRng::seed_from_u64(seed);
        let mut graph = Self::with_capacity(n);
        for u in 0..n {
            graph.add_vertex(u);
        }
        for u in 0..n {
            for v in (u + 1)..n {
                if rng.gen_bool(p) {
                    graph.add_edge(u, v);
                }
            }
        }
        graph
    }

    pub fn vertex_induced(&self, vertices: &FxHashSet<usize>) -> Self {
        let data: FxHashMap<usize, FxHashSet<usize>> = self
            .data
            .iter()
            .filter(|(vertex, _)| vertices.contains(vertex))
            .map(|(vertex, neighborhood)| {
                (
                    *vertex,
                    neighborhood
                        .iter()
                        .copied()
                        .filter(|x| vertices.contains(x))
                        .collect(),
                )
            })
            .collect();
        Self { data }
    }
}

impl MutableGraph for HashMapGraph {
    fn add_vertex(&mut self, u: usize) {
        self.data.entry(u).or_insert_with(FxHashSet::default);
    }

    fn add_vertex_with_capacity(&mut self, u: usize, capacity: usize) {
        self.data
            .entry(u)
            .or_insert_with(|| FxHashSet::with_capacity_and_hasher(capacity, Default::default()));
    }

    fn remove_vertex(&mut self, u: usize) {
        if let Some(nb) = self.data.remove(&u) {
            for i in &nb {
                if let Some(x) = self.data.get_mut(i) {
                    x.remove(&u);
                }
            }
        }
    }

    fn add_edge(&mut self, u: usize, v: usize) {
        assert_ne!(u, v);
        let first = self.data.entry(u).or_insert_with(FxHashSet::default);
        first.insert(v);
        let second = self.data.entry(v).or_insert_with(FxHashSet::default);
        second.insert(u);
    }

    fn remove_edge(&mut self, u: usize, v: usize) {
        assert_ne!(u, v);
        if let Some(x) = self.data.get_mut(&u) {
            x.remove(&v);
        }
        if let Some(x) = self.data.get_mut(&v) {
            x.remove(&u);
        }
    }

    fn new() -> Self {
        HashMapGraph {
            data: FxHashMap::default(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        HashMapGraph {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl BaseGraph for HashMapGraph {
    fn degree(&self, u: usize) -> usize {
        self.data.get(&u).map_or(0, |nb| nb.len())
    }

    fn order(&self) -> usize {
        self.data.len()
    }

    fn is_clique(&self, vertices: &[usize]) -> bool {
        for (i, v) in vertices.iter().enumerate() {
            for u in vertices.iter().skip(i + 1) {
                if !self.has_edge(*v, *u) || !self.has_edge(*u, *v) {
                    return false;
                }
            }
        }
        true
    }

    fn has_vertex(&self, u: usize) -> bool {
        self.data.contains_key(&u)
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.data.get(&u).map_or(false, |nb| nb.contains(&v))
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        let keys = self.data.keys().copied();
        Box::new(keys)
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        match self.data.get(&u) {
            Some(nb) => Box::new(nb.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}
