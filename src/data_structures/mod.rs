pub mod leaderboard;
pub mod priority_queue;

pub use leaderboard::Leaderboard;
pub use priority_queue::BinaryHeapWrapper;
