/// Processing API routes
use crate::{error::Result, services::analysis::UserAnalysis, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use userhub_core::UserId;

/// POST /process/user/:id
/// Fetch a user from the directory and return its analysis
pub async fn process_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<UserAnalysis>> {
    let user_id = UserId::new(id);
    let analysis = app_state.processor.process_user(&user_id).await?;
    Ok(Json(analysis))
}
