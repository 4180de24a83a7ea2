use serde::{Deserialize, Serialize};

/// A tracked forecaster with an aggregate win/loss record.
///
/// `accuracy` is always derived from the counts by the record adapter and is
/// never taken from upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Influencer {
    pub id: String,
    pub name: String,
    pub social_media_url: String,
    pub win_count: u32,
    pub loss_count: u32,
    pub accuracy: u8,
    pub avatar_url: Option<String>,
    pub description: Option<String>,
    pub spotlight: bool,
}

impl Influencer {
    pub fn total_predictions(&self) -> u64 {
        u64::from(self.win_count) + u64::from(self.loss_count)
    }
}
