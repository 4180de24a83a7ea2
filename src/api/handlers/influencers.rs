use axum::extract::{Path, Query, State};
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Influencer, Prediction};
use crate::records::{InfluencerListView, SortMode};
use crate::store::InfluencerFilter;
use crate::AppState;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub sort: Option<SortMode>,
    #[serde(default)]
    pub spotlight: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PredictionsQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

pub async fn list(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ListQuery>, AppError>,
) -> Result<Json<ApiResponse<Vec<Influencer>>>, AppError> {
    let filter = if query.spotlight.unwrap_or(false) {
        InfluencerFilter::Spotlight
    } else {
        InfluencerFilter::All
    };

    let fetched = state.store.influencers(filter).await?;
    let view = InfluencerListView::with_mode(fetched, query.sort.unwrap_or_default());
    Ok(ApiResponse::ok(view.into_influencers()))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Influencer>>, AppError> {
    match state.store.influencer(&id).await? {
        Some(influencer) => Ok(ApiResponse::ok(influencer)),
        None => Err(AppError::NotFound(format!("influencer {id}"))),
    }
}

pub async fn predictions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Query(query), _): WithRejection<Query<PredictionsQuery>, AppError>,
) -> Result<Json<ApiResponse<Vec<Prediction>>>, AppError> {
    if query.limit == Some(0) {
        return Err(AppError::BadRequest("limit must be at least 1".into()));
    }

    let predictions = state.store.predictions(&id, query.limit).await?;
    Ok(ApiResponse::ok(predictions))
}
