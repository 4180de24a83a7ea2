pub mod api;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod records;
pub mod services;
pub mod store;
pub mod views;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::SettingsStore;
use crate::store::RecordSource;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordSource>,
    pub settings: SettingsStore,
    pub config: AppConfig,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
