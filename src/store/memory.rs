use async_trait::async_trait;

use super::types::{InfluencerRow, PredictionRow};
use super::{InfluencerFilter, RecordSource, StoreError};
use crate::models::{Influencer, Prediction};
use crate::records::{recent_first, to_influencer, to_prediction};

/// Fixed set of rows served from memory.
///
/// Rows go through the same adapter as remote ones. Used for the offline demo
/// when no Supabase project is configured, and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    influencers: Vec<InfluencerRow>,
    predictions: Vec<PredictionRow>,
}

impl MemoryStore {
    pub fn new(influencers: Vec<InfluencerRow>, predictions: Vec<PredictionRow>) -> Self {
        Self {
            influencers,
            predictions,
        }
    }

    /// Sample traders with a short prediction history each.
    pub fn demo() -> Self {
        let influencers = vec![
            demo_influencer("1", "Forex Master", "forexmaster", 15, 5, None),
            demo_influencer("2", "Trading Guru", "tradingguru", 12, 8, None),
            demo_influencer(
                "3",
                "Market Whisperer",
                "marketwhisperer",
                18,
                2,
                Some("Calls gold and the majors into every NFP and FOMC release."),
            ),
        ];

        let predictions = influencers
            .iter()
            .flat_map(|inf| demo_predictions(&inf.id))
            .collect();

        Self::new(influencers, predictions)
    }
}

#[async_trait]
impl RecordSource for MemoryStore {
    async fn influencers(&self, filter: InfluencerFilter) -> Result<Vec<Influencer>, StoreError> {
        Ok(self
            .influencers
            .iter()
            .filter(|row| match filter {
                InfluencerFilter::All => true,
                InfluencerFilter::Spotlight => row.spotlight == Some(true),
            })
            .cloned()
            .map(to_influencer)
            .collect())
    }

    async fn influencer(&self, id: &str) -> Result<Option<Influencer>, StoreError> {
        Ok(self
            .influencers
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .map(to_influencer))
    }

    async fn predictions(
        &self,
        influencer_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Prediction>, StoreError> {
        let matching = self
            .predictions
            .iter()
            .filter(|row| row.influencer_id == influencer_id)
            .cloned()
            .map(to_prediction)
            .collect();
        Ok(recent_first(matching, limit))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

fn demo_influencer(
    id: &str,
    name: &str,
    handle: &str,
    wins: u32,
    losses: u32,
    description: Option<&str>,
) -> InfluencerRow {
    InfluencerRow {
        id: id.into(),
        name: name.into(),
        social_media_url: format!("https://twitter.com/{handle}"),
        win_count: wins,
        loss_count: losses,
        accuracy: None,
        avatar_url: None,
        description: description.map(Into::into),
        spotlight: Some(description.is_some()),
        created_at: None,
    }
}

fn demo_predictions(influencer_id: &str) -> Vec<PredictionRow> {
    let rows = [
        ("NFP", "2023-12-01", "XAUUSD", "bullish", "correct", Some("bullish"), "2023-11-30"),
        ("CPI", "2024-01-15", "EURUSD", "bearish", "incorrect", Some("bullish"), "2024-01-14"),
        ("FOMC", "2024-02-20", "GBPUSD", "bullish", "correct", Some("bullish"), "2024-02-19"),
        ("NFP", "2024-03-10", "USDJPY", "bearish", "pending", None, "2024-03-09"),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (event_type, event_date, pair, direction, result, actual, created_at))| {
                PredictionRow {
                    id: format!("{influencer_id}-{}", i + 1),
                    influencer_id: influencer_id.into(),
                    event_type: event_type.into(),
                    event_date: event_date.into(),
                    pair: pair.into(),
                    direction: direction.into(),
                    result: Some(result.into()),
                    actual_direction: actual.map(Into::into),
                    post_url: Some(format!("https://twitter.com/example/status/{}", i + 1)),
                    notes: None,
                    created_at: created_at.into(),
                }
            },
        )
        .collect()
}
