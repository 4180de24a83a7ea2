use serde::{Deserialize, Serialize};

use super::open_enum;

open_enum! {
    /// Scheduled economic release a prediction is tied to.
    pub enum EventType {
        Nfp => "NFP",
        Cpi => "CPI",
        Fomc => "FOMC",
        Other => "Other",
    }
}

open_enum! {
    pub enum ForexPair {
        EurUsd => "EURUSD",
        GbpUsd => "GBPUSD",
        UsdJpy => "USDJPY",
        AudUsd => "AUDUSD",
        UsdCad => "USDCAD",
        UsdChf => "USDCHF",
        NzdUsd => "NZDUSD",
        EurGbp => "EURGBP",
        XauUsd => "XAUUSD",
        Other => "Other",
    }
}

open_enum! {
    pub enum Direction {
        Bullish => "bullish",
        Bearish => "bearish",
        Neutral => "neutral",
    }
}

open_enum! {
    pub enum PredictionResult {
        Correct => "correct",
        Incorrect => "incorrect",
        Pending => "pending",
    }
}

/// A single directional forecast for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: String,
    pub influencer_id: String,
    pub event_type: EventType,
    /// ISO date (`YYYY-MM-DD`) as stored upstream.
    pub event_date: String,
    pub pair: ForexPair,
    pub direction: Direction,
    pub result: Option<PredictionResult>,
    pub actual_direction: Option<Direction>,
    pub post_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

impl Prediction {
    /// True until an outcome other than `pending` has been recorded.
    pub fn is_pending(&self) -> bool {
        matches!(self.result, None | Some(PredictionResult::Pending))
    }
}
