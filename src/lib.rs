pub(crate) mod datastructures;
pub use datastructures::{BitSet, BitSetIterator, BucketQueue};

pub mod core_decomposition;
pub mod graph;
pub mod io;
pub mod maximal_cliques;
pub mod statistics;
pub mod util;

#[cfg(feature = "logging")]
pub mod logger;
#[cfg(feature = "handle-ctrlc")]
pub mod signals;
#[cfg(feature = "cli")]
pub mod timeout;

pub use core_decomposition::CoreDecomposition;
pub use maximal_cliques::MaximalCliques;
pub use statistics::GraphStatistics;
