//! # User Handlers

use tracing::debug;

use crate::error::ApiError;
use crate::http::Response;
use crate::state::AppState;

/// Lists all users.
pub fn list_users(state: &AppState) -> Response {
    debug!("list_users request");
    Response::json(200, &state.catalog.users().list())
}

/// Gets one user by id.
pub fn get_user(state: &AppState, id: &str) -> Result<Response, ApiError> {
    debug!(id = %id, "get_user request");

    let user = state
        .catalog
        .users()
        .get_by_id(id)
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Response::json(200, &user))
}
