//! Pure data shaping between the remote store and the views.

pub mod accuracy;
pub mod adapter;
pub mod ordering;

pub use accuracy::accuracy;
pub use adapter::{to_influencer, to_prediction};
pub use ordering::{recent_first, sort_by_accuracy, InfluencerListView, SortMode};
