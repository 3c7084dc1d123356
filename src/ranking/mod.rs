//! Ranking of the arguments according to their power indices.

mod listener;
pub use listener::Preference;
pub use listener::RankListener;

mod ranker;
pub use ranker::compare_results;
pub use ranker::preference_between;
pub use ranker::Ranking;
