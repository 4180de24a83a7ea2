use crate::models::{Direction, EventType, ForexPair, Influencer, Prediction, PredictionResult};
use crate::store::types::{InfluencerRow, PredictionRow};

use super::accuracy::accuracy;

/// Convert a stored influencer row into the application shape.
///
/// Accuracy is recomputed from the win/loss counts; any value the row
/// carries is ignored.
pub fn to_influencer(row: InfluencerRow) -> Influencer {
    if let Some(stale) = row.accuracy {
        if stale != f64::from(accuracy(row.win_count, row.loss_count)) {
            tracing::debug!(
                influencer_id = %row.id,
                stale,
                "Ignoring precomputed accuracy that disagrees with record"
            );
        }
    }

    Influencer {
        accuracy: accuracy(row.win_count, row.loss_count),
        id: row.id,
        name: row.name,
        social_media_url: row.social_media_url,
        win_count: row.win_count,
        loss_count: row.loss_count,
        avatar_url: non_empty(row.avatar_url),
        description: non_empty(row.description),
        spotlight: row.spotlight.unwrap_or(false),
    }
}

/// Convert a stored prediction row into the application shape.
///
/// Enumerated columns are passed through; values outside the known domain are
/// kept as `Unrecognized` and logged, never rejected.
pub fn to_prediction(row: PredictionRow) -> Prediction {
    let prediction = Prediction {
        event_type: EventType::from(row.event_type),
        pair: ForexPair::from(row.pair),
        direction: Direction::from(row.direction),
        result: row.result.map(PredictionResult::from),
        actual_direction: row.actual_direction.map(Direction::from),
        post_url: non_empty(row.post_url),
        notes: non_empty(row.notes),
        id: row.id,
        influencer_id: row.influencer_id,
        event_date: row.event_date,
        created_at: row.created_at,
    };

    warn_unrecognized(&prediction);
    prediction
}

fn warn_unrecognized(p: &Prediction) {
    let mut fields: Vec<(&str, &str)> = Vec::new();
    if !p.event_type.is_recognized() {
        fields.push(("event_type", p.event_type.as_str()));
    }
    if !p.pair.is_recognized() {
        fields.push(("pair", p.pair.as_str()));
    }
    if !p.direction.is_recognized() {
        fields.push(("direction", p.direction.as_str()));
    }
    if let Some(result) = p.result.as_ref().filter(|r| !r.is_recognized()) {
        fields.push(("result", result.as_str()));
    }
    if let Some(actual) = p.actual_direction.as_ref().filter(|d| !d.is_recognized()) {
        fields.push(("actual_direction", actual.as_str()));
    }

    for (field, value) in fields {
        tracing::warn!(
            prediction_id = %p.id,
            field,
            value,
            "Prediction has value outside known domain"
        );
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn influencer_row(wins: u32, losses: u32, stale: Option<f64>) -> InfluencerRow {
        InfluencerRow {
            id: "inf-1".into(),
            name: "Forex Master".into(),
            social_media_url: "https://twitter.com/forexmaster".into(),
            win_count: wins,
            loss_count: losses,
            accuracy: stale,
            avatar_url: None,
            description: None,
            spotlight: None,
            created_at: None,
        }
    }

    fn prediction_row() -> PredictionRow {
        PredictionRow {
            id: "p-1".into(),
            influencer_id: "inf-1".into(),
            event_type: "NFP".into(),
            event_date: "2024-03-10".into(),
            pair: "USDJPY".into(),
            direction: "bearish".into(),
            result: None,
            actual_direction: None,
            post_url: None,
            notes: None,
            created_at: "2024-03-09T12:00:00+00:00".into(),
        }
    }

    #[test]
    fn test_accuracy_derived_from_counts() {
        let inf = to_influencer(influencer_row(15, 5, None));
        assert_eq!(inf.accuracy, 75);
    }

    #[test]
    fn test_stale_accuracy_is_ignored() {
        let inf = to_influencer(influencer_row(12, 8, Some(99.0)));
        assert_eq!(inf.accuracy, 60);

        let inf = to_influencer(influencer_row(0, 0, Some(100.0)));
        assert_eq!(inf.accuracy, 0);
    }

    #[test]
    fn test_influencer_optional_fields_default() {
        let mut row = influencer_row(1, 1, None);
        row.avatar_url = Some(String::new());
        row.description = Some("Gold specialist".into());

        let inf = to_influencer(row);
        assert_eq!(inf.avatar_url, None);
        assert_eq!(inf.description.as_deref(), Some("Gold specialist"));
        assert!(!inf.spotlight);
    }

    #[test]
    fn test_absent_prediction_fields_are_unset() {
        let p = to_prediction(prediction_row());
        assert_eq!(p.result, None);
        assert_eq!(p.actual_direction, None);
        assert_eq!(p.post_url, None);
        assert_eq!(p.notes, None);
        assert!(p.is_pending());
    }

    #[test]
    fn test_prediction_enums_pass_through() {
        let mut row = prediction_row();
        row.result = Some("incorrect".into());
        row.actual_direction = Some("bullish".into());
        row.post_url = Some("https://twitter.com/example/status/2".into());

        let p = to_prediction(row);
        assert_eq!(p.event_type, EventType::Nfp);
        assert_eq!(p.pair, ForexPair::UsdJpy);
        assert_eq!(p.direction, Direction::Bearish);
        assert_eq!(p.result, Some(PredictionResult::Incorrect));
        assert_eq!(p.actual_direction, Some(Direction::Bullish));
        assert!(!p.is_pending());
    }

    #[test]
    fn test_out_of_domain_values_are_kept() {
        let mut row = prediction_row();
        row.event_type = "GDP".into();
        row.pair = "BTCUSD".into();

        let p = to_prediction(row);
        assert_eq!(p.event_type, EventType::Unrecognized("GDP".into()));
        assert_eq!(p.pair.as_str(), "BTCUSD");
    }

    #[test]
    fn test_row_deserializes_with_missing_optionals() {
        let json = serde_json::json!({
            "id": "p-9",
            "influencer_id": "inf-1",
            "event_type": "CPI",
            "event_date": "2024-01-15",
            "pair": "EURUSD",
            "direction": "bearish",
            "result": null,
            "created_at": "2024-01-14"
        });
        let row: PredictionRow = serde_json::from_value(json).unwrap();
        let p = to_prediction(row);
        assert_eq!(p.result, None);
        assert_eq!(p.notes, None);
    }
}
