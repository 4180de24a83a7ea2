use axum::extract::State;
use axum::Json;
use axum_extra::extract::CookieJar;

use super::influencers::ApiResponse;
use crate::services::Settings;
use crate::AppState;

/// Settings in effect for the calling client.
pub async fn get_settings(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Json<ApiResponse<Settings>> {
    ApiResponse::ok(state.settings.for_client(&jar))
}
