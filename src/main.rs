use std::sync::Arc;

use event_horizon::api::router::create_router;
use event_horizon::config::AppConfig;
use event_horizon::metrics::init_metrics;
use event_horizon::services::SettingsStore;
use event_horizon::store::{MemoryStore, RecordSource, SupabaseClient};
use event_horizon::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);
    let metrics_handle = init_metrics();

    // --- Record source: Supabase when configured, demo fixtures otherwise ---
    let store: Arc<dyn RecordSource> = match &config.supabase {
        Some(supabase) => {
            tracing::info!(url = %supabase.url, "Using Supabase record store");
            Arc::new(SupabaseClient::new(
                reqwest::Client::new(),
                &supabase.url,
                supabase.anon_key.clone(),
            )?)
        }
        None => {
            tracing::warn!("SUPABASE_URL not set, serving built-in demo records");
            Arc::new(MemoryStore::demo())
        }
    };

    // --- Default theme (each browser overrides it with its own cookie) ---
    let settings = match &config.settings_path {
        Some(path) => SettingsStore::load(path).await,
        None => SettingsStore::in_memory(),
    };

    let state = AppState {
        store,
        settings,
        config,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
