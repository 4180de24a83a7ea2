use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use tower::ServiceExt;

use event_horizon::api::router::create_router;
use event_horizon::config::AppConfig;
use event_horizon::models::{Influencer, Prediction};
use event_horizon::services::SettingsStore;
use event_horizon::store::types::{InfluencerRow, PredictionRow};
use event_horizon::store::{InfluencerFilter, MemoryStore, RecordSource, StoreError};
use event_horizon::AppState;

/// Build the full router over the given record source.
#[allow(dead_code)]
pub fn build_test_app(store: Arc<dyn RecordSource>) -> axum::Router {
    build_test_app_with_settings(store, SettingsStore::in_memory())
}

#[allow(dead_code)]
pub fn build_test_app_with_settings(
    store: Arc<dyn RecordSource>,
    settings: SettingsStore,
) -> axum::Router {
    let state = AppState {
        store,
        settings,
        config: AppConfig::default(),
        metrics_handle: event_horizon::metrics::init_metrics(),
    };
    create_router(state)
}

#[allow(dead_code)]
pub fn demo_app() -> axum::Router {
    build_test_app(Arc::new(MemoryStore::demo()))
}

/// Send a GET and return status plus body text.
#[allow(dead_code)]
pub async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    into_parts(resp).await
}

#[allow(dead_code)]
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[allow(dead_code)]
pub async fn into_parts(resp: Response<Body>) -> (StatusCode, String) {
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[allow(dead_code)]
pub fn influencer_row(id: &str, wins: u32, losses: u32, spotlight: bool) -> InfluencerRow {
    InfluencerRow {
        id: id.into(),
        name: format!("Trader {id}"),
        social_media_url: format!("https://twitter.com/trader{id}"),
        win_count: wins,
        loss_count: losses,
        accuracy: None,
        avatar_url: None,
        description: None,
        spotlight: Some(spotlight),
        created_at: None,
    }
}

#[allow(dead_code)]
pub fn prediction_row(id: &str, influencer_id: &str, event_date: &str) -> PredictionRow {
    PredictionRow {
        id: id.into(),
        influencer_id: influencer_id.into(),
        event_type: "CPI".into(),
        event_date: event_date.into(),
        pair: "EURUSD".into(),
        direction: "bullish".into(),
        result: Some("correct".into()),
        actual_direction: Some("bullish".into()),
        post_url: None,
        notes: None,
        created_at: event_date.into(),
    }
}

/// Store whose every call fails as if the remote endpoint were down.
#[allow(dead_code)]
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Status {
        status: 503,
        body: "upstream unavailable".into(),
    }
}

#[async_trait]
impl RecordSource for FailingStore {
    async fn influencers(&self, _filter: InfluencerFilter) -> Result<Vec<Influencer>, StoreError> {
        Err(unavailable())
    }

    async fn influencer(&self, _id: &str) -> Result<Option<Influencer>, StoreError> {
        Err(unavailable())
    }

    async fn predictions(
        &self,
        _influencer_id: &str,
        _limit: Option<usize>,
    ) -> Result<Vec<Prediction>, StoreError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

/// Influencer lookups succeed; prediction lookups fail.
#[allow(dead_code)]
pub struct PredictionsDown(pub MemoryStore);

#[async_trait]
impl RecordSource for PredictionsDown {
    async fn influencers(&self, filter: InfluencerFilter) -> Result<Vec<Influencer>, StoreError> {
        self.0.influencers(filter).await
    }

    async fn influencer(&self, id: &str) -> Result<Option<Influencer>, StoreError> {
        self.0.influencer(id).await
    }

    async fn predictions(
        &self,
        _influencer_id: &str,
        _limit: Option<usize>,
    ) -> Result<Vec<Prediction>, StoreError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.0.ping().await
    }
}
