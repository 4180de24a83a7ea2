use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// influencers table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InfluencerRow {
    pub id: String,
    pub name: String,
    pub social_media_url: String,
    pub win_count: u32,
    pub loss_count: u32,
    /// Precomputed upstream; never trusted.
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub spotlight: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// ---------------------------------------------------------------------------
// predictions table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PredictionRow {
    pub id: String,
    pub influencer_id: String,
    pub event_type: String,
    pub event_date: String,
    pub pair: String,
    pub direction: String,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub actual_direction: Option<String>,
    #[serde(default)]
    pub post_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
}
