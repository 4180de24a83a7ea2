use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::CookieJar;
use metrics::counter;
use serde::Deserialize;

use crate::models::{Influencer, Prediction};
use crate::records::{InfluencerListView, SortMode};
use crate::store::InfluencerFilter;
use crate::views::pages::{self, INFLUENCERS_LOAD_FAILED, INFLUENCER_LOAD_FAILED};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    pub sort: Option<SortMode>,
}

fn record_view_failure(view: &'static str) {
    counter!("view_fetch_failures_total", "view" => view).increment(1);
}

/// Influencer list. A failed fetch renders an empty list with an error notice.
pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<IndexQuery>,
) -> Html<String> {
    let theme = state.settings.theme_for(&jar);
    let mode = query.sort.unwrap_or_default();

    let mut view = InfluencerListView::with_mode(Vec::new(), mode);
    let notice = match state.store.influencers(InfluencerFilter::All).await {
        Ok(fetched) => {
            view.replace(fetched);
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch influencers");
            record_view_failure("index");
            Some(INFLUENCERS_LOAD_FAILED)
        }
    };

    Html(pages::index_page(&view, theme, notice))
}

/// Influencer detail with full prediction history.
pub async fn influencer_detail(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Response {
    let theme = state.settings.theme_for(&jar);

    let influencer = match state.store.influencer(&id).await {
        Ok(Some(influencer)) => influencer,
        Ok(None) => {
            tracing::debug!(id = %id, "Influencer not found");
            return (
                StatusCode::NOT_FOUND,
                Html(pages::influencer_not_found_page(theme, None)),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(id = %id, error = %e, "Failed to fetch influencer");
            record_view_failure("influencer");
            return Html(pages::influencer_not_found_page(
                theme,
                Some(INFLUENCER_LOAD_FAILED),
            ))
            .into_response();
        }
    };

    let (predictions, notice) = match state.store.predictions(&influencer.id, None).await {
        Ok(predictions) => (predictions, None),
        Err(e) => {
            tracing::error!(id = %id, error = %e, "Failed to fetch predictions");
            record_view_failure("influencer");
            (Vec::new(), Some(INFLUENCER_LOAD_FAILED))
        }
    };

    Html(pages::influencer_page(&influencer, &predictions, theme, notice)).into_response()
}

/// Featured influencers, each with its most recent predictions. Recent
/// predictions are fetched one influencer at a time; a failure only empties
/// that influencer's list.
pub async fn spotlight(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let theme = state.settings.theme_for(&jar);

    let featured = match state.store.influencers(InfluencerFilter::Spotlight).await {
        Ok(featured) => featured,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch spotlighted influencers");
            record_view_failure("spotlight");
            return Html(pages::spotlight_page(&[], theme, true));
        }
    };

    let limit = Some(state.config.spotlight_recent_limit);
    let mut cards: Vec<(Influencer, Vec<Prediction>)> = Vec::with_capacity(featured.len());
    for influencer in featured {
        let recent = match state.store.predictions(&influencer.id, limit).await {
            Ok(recent) => recent,
            Err(e) => {
                tracing::error!(
                    influencer_id = %influencer.id,
                    error = %e,
                    "Failed to fetch recent predictions"
                );
                record_view_failure("spotlight");
                Vec::new()
            }
        };
        cards.push((influencer, recent));
    }

    Html(pages::spotlight_page(&cards, theme, false))
}

pub async fn not_found(State(state): State<AppState>, jar: CookieJar) -> (StatusCode, Html<String>) {
    let theme = state.settings.theme_for(&jar);
    (StatusCode::NOT_FOUND, Html(pages::not_found_page(theme)))
}
