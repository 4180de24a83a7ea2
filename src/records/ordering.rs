use serde::{Deserialize, Serialize};

use crate::models::{Influencer, Prediction};

/// Which order an influencer list is currently presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Order of the most recent fetch.
    #[default]
    Natural,
    /// Descending by accuracy, ties in fetch order.
    Accuracy,
}

impl SortMode {
    pub fn toggled(self) -> Self {
        match self {
            SortMode::Natural => SortMode::Accuracy,
            SortMode::Accuracy => SortMode::Natural,
        }
    }
}

/// Stable sort, highest accuracy first.
pub fn sort_by_accuracy(influencers: &mut [Influencer]) {
    influencers.sort_by(|a, b| b.accuracy.cmp(&a.accuracy));
}

/// In-memory influencer list with a reversible accuracy sort.
#[derive(Debug, Clone, Default)]
pub struct InfluencerListView {
    fetched: Vec<Influencer>,
    shown: Vec<Influencer>,
    mode: SortMode,
}

impl InfluencerListView {
    pub fn with_mode(fetched: Vec<Influencer>, mode: SortMode) -> Self {
        let mut view = Self {
            shown: fetched.clone(),
            fetched,
            mode: SortMode::Natural,
        };
        if mode == SortMode::Accuracy {
            view.toggle();
        }
        view
    }

    /// Flip between fetch order and accuracy order, returning the new mode.
    pub fn toggle(&mut self) -> SortMode {
        self.mode = self.mode.toggled();
        match self.mode {
            SortMode::Accuracy => sort_by_accuracy(&mut self.shown),
            SortMode::Natural => self.shown = self.fetched.clone(),
        }
        self.mode
    }

    /// Install a fresh fetch as the new natural order, keeping the current mode.
    pub fn replace(&mut self, fetched: Vec<Influencer>) {
        let mode = self.mode;
        *self = Self::with_mode(fetched, mode);
    }

    pub fn mode(&self) -> SortMode {
        self.mode
    }

    pub fn influencers(&self) -> &[Influencer] {
        &self.shown
    }

    pub fn into_influencers(self) -> Vec<Influencer> {
        self.shown
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}

/// Most recent event first, optionally truncated to `limit` records.
///
/// Event dates are ISO `YYYY-MM-DD` strings, so lexical order is chronological.
/// The sort is stable for predictions sharing an event date.
pub fn recent_first(mut predictions: Vec<Prediction>, limit: Option<usize>) -> Vec<Prediction> {
    predictions.sort_by(|a, b| b.event_date.cmp(&a.event_date));
    if let Some(limit) = limit {
        predictions.truncate(limit);
    }
    predictions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, EventType, ForexPair};
    use crate::records::accuracy::accuracy;

    fn inf(id: &str, wins: u32, losses: u32) -> Influencer {
        Influencer {
            id: id.into(),
            name: format!("Trader {id}"),
            social_media_url: format!("https://twitter.com/{id}"),
            win_count: wins,
            loss_count: losses,
            accuracy: accuracy(wins, losses),
            avatar_url: None,
            description: None,
            spotlight: false,
        }
    }

    fn pred(id: &str, event_date: &str) -> Prediction {
        Prediction {
            id: id.into(),
            influencer_id: "x".into(),
            event_type: EventType::Nfp,
            event_date: event_date.into(),
            pair: ForexPair::EurUsd,
            direction: Direction::Bullish,
            result: None,
            actual_direction: None,
            post_url: None,
            notes: None,
            created_at: event_date.into(),
        }
    }

    fn ids(list: &[Influencer]) -> Vec<&str> {
        list.iter().map(|i| i.id.as_str()).collect()
    }

    fn accuracies(list: &[Influencer]) -> Vec<u8> {
        list.iter().map(|i| i.accuracy).collect()
    }

    #[test]
    fn test_reference_sort() {
        let fetched = vec![inf("1", 15, 5), inf("2", 12, 8), inf("3", 18, 2)];
        assert_eq!(accuracies(&fetched), vec![75, 60, 90]);

        let mut view = InfluencerListView::with_mode(fetched, SortMode::Natural);
        assert_eq!(view.toggle(), SortMode::Accuracy);
        assert_eq!(accuracies(view.influencers()), vec![90, 75, 60]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut list = vec![
            inf("a", 1, 1),
            inf("b", 9, 1),
            inf("c", 2, 2),
            inf("d", 5, 5),
            inf("e", 0, 0),
        ];
        sort_by_accuracy(&mut list);
        assert_eq!(ids(&list), vec!["b", "a", "c", "d", "e"]);
        assert!(list.windows(2).all(|w| w[0].accuracy >= w[1].accuracy));
    }

    #[test]
    fn test_toggle_twice_restores_fetch_order() {
        let fetched = vec![inf("1", 1, 9), inf("2", 5, 5), inf("3", 9, 1), inf("4", 5, 5)];
        let mut view = InfluencerListView::with_mode(fetched.clone(), SortMode::Natural);

        view.toggle();
        assert_ne!(view.influencers(), fetched.as_slice());
        assert_eq!(view.toggle(), SortMode::Natural);
        assert_eq!(view.influencers(), fetched.as_slice());
    }

    #[test]
    fn test_replace_keeps_mode_and_resets_original() {
        let mut view = InfluencerListView::with_mode(vec![inf("1", 1, 1)], SortMode::Accuracy);
        view.replace(vec![inf("a", 0, 3), inf("b", 3, 0)]);

        assert_eq!(view.mode(), SortMode::Accuracy);
        assert_eq!(ids(view.influencers()), vec!["b", "a"]);

        view.toggle();
        assert_eq!(ids(view.influencers()), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_list_toggles() {
        let mut view = InfluencerListView::default();
        view.toggle();
        assert!(view.is_empty());
        assert_eq!(view.mode(), SortMode::Accuracy);
    }

    #[test]
    fn test_recent_first_orders_and_limits() {
        let preds = vec![
            pred("1", "2023-12-01"),
            pred("2", "2024-01-15"),
            pred("3", "2024-02-20"),
            pred("4", "2024-03-10"),
        ];

        let recent = recent_first(preds.clone(), Some(3));
        let got: Vec<&str> = recent.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(got, vec!["4", "3", "2"]);

        assert_eq!(recent_first(preds.clone(), None).len(), 4);
        assert_eq!(recent_first(preds, Some(10)).len(), 4);
    }

    #[test]
    fn test_sort_mode_parses_from_query_value() {
        let mode: SortMode = serde_json::from_str("\"accuracy\"").unwrap();
        assert_eq!(mode, SortMode::Accuracy);
        assert_eq!(SortMode::default().toggled(), SortMode::Accuracy);
    }
}
