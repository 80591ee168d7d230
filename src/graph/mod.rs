pub use base_graph::BaseGraph;
pub use bit_graph::BitGraph;
pub use hash_map_graph::HashMapGraph;
pub(crate) use indexed_graph::IndexedGraph;
pub use mutable_graph::MutableGraph;
pub use validation::{validate_simple, GraphError, GraphErrorKind};

mod base_graph;
mod bit_graph;
mod hash_map_graph;
mod indexed_graph;
mod mutable_graph;
mod validation;
