use crate::graph::base_graph::BaseGraph;
use fxhash::FxHashMap;

/// Snapshot of a [`BaseGraph`] relabelled to the dense indices `0..n`.
///
/// Labels are assigned in ascending vertex order. Neighbours that are not
/// vertices of the source graph are dropped.
#[derive(Clone, Debug)]
pub(crate) struct IndexedGraph {
    labels: Vec<usize>,
    adjacency: Vec<Vec<usize>>,
}

impl IndexedGraph {
    pub(crate) fn from_graph<G: BaseGraph>(graph: &G) -> Self {
        let mut labels: Vec<usize> = graph.vertices().collect();
        labels.sort_unstable();
        let index: FxHashMap<usize, usize> = labels
            .iter()
            .enumerate()
            .map(|(idx, v)| (*v, idx))
            .collect();
        let adjacency = labels
            .iter()
            .map(|v| {
                graph
                    .neighborhood(*v)
                    .filter_map(|u| index.get(&u).copied())
                    .collect()
            })
            .collect();
        Self { labels, adjacency }
    }

    #[inline]
    pub(crate) fn order(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub(crate) fn degree(&self, u: usize) -> usize {
        self.adjacency[u].len()
    }

    #[inline]
    pub(crate) fn neighbors(&self, u: usize) -> &[usize] {
        self.adjacency[u].as_slice()
    }

    #[inline]
    pub(crate) fn label(&self, u: usize) -> usize {
        self.labels[u]
    }
}
