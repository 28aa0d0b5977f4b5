/// Users API routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::error::Category;
use tracing::{debug, info};
use userhub_core::{CreateUser, UpdateUser, User, UserId};

/// Body of POST /users. Fields are optional so a missing one becomes a
/// validation error instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl TryFrom<CreateUserRequest> for CreateUser {
    type Error = ServerError;

    fn try_from(req: CreateUserRequest) -> Result<Self> {
        let (Some(name), Some(email)) = (req.name, req.email) else {
            return Err(missing_fields());
        };
        Ok(CreateUser::new(name, email)?)
    }
}

fn missing_fields() -> ServerError {
    ServerError::BadRequest("Name and email are required".to_string())
}

/// Decode a JSON request body.
///
/// A body that is empty or only whitespace yields `empty`. Malformed JSON and
/// values of the wrong type get their own messages.
fn parse_body<T: DeserializeOwned>(body: &Bytes, empty: fn() -> ServerError) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(empty());
    }

    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "Rejected request body");
        match e.classify() {
            Category::Data => ServerError::BadRequest(format!("Invalid field value: {}", e)),
            Category::Syntax | Category::Eof | Category::Io => {
                ServerError::BadRequest(format!("Invalid JSON body: {}", e))
            }
        }
    })
}

fn no_data() -> ServerError {
    ServerError::BadRequest("No data provided".to_string())
}

/// POST /users
/// Create a new user
pub async fn create_user(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>)> {
    let req: CreateUserRequest = parse_body(&body, missing_fields)?;

    let user = app_state.store.create(CreateUser::try_from(req)?).await?;
    info!(user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users
/// Get all users in insertion order
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.store.list().await?;
    Ok(Json(users))
}

/// GET /users/:id
/// Get a specific user
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user_id = UserId::new(id);
    let user = app_state
        .store
        .get(&user_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// PUT /users/:id
/// Overwrite the supplied fields of a user
pub async fn update_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<User>> {
    let user_id = UserId::new(id);

    // Existence is reported before anything about the body
    if app_state.store.get(&user_id).await?.is_none() {
        return Err(ServerError::NotFound("User not found".to_string()));
    }

    let update: UpdateUser = parse_body(&body, no_data)?;

    let user = app_state.store.update(&user_id, update).await?;
    info!(user_id = %user.id, "User updated");

    Ok(Json(user))
}

/// DELETE /users/:id
/// Delete a user
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let user_id = UserId::new(id);
    app_state.store.delete(&user_id).await?;
    info!(user_id = %user_id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
