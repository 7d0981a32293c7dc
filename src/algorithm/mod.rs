pub mod traits;
pub mod dijkstra;
pub mod path;

pub use path::Path;
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
