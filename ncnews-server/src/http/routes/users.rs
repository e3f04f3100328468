//! User endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// User response
#[derive(Serialize)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            username: u.username,
            name: u.name,
            avatar_url: u.avatar_url,
        }
    }
}

#[derive(Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

/// GET /api/users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<UsersResponse>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(UsersResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", get(list_users))
}
