pub mod composite;
pub mod filter;
pub mod recency;

pub use composite::{composite_score, composite_scores, COMPOSITE_WEIGHTS, RECENCY_CEILING};
pub use filter::score_by_filter;
pub use recency::recency_bucket;
