//! JSON REST handlers for homes.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use homelist_app::ports::HomeRepository;
use homelist_domain::error::{HomeListError, NotFoundError};
use homelist_domain::home::{Home, HomePatch};
use homelist_domain::id::HomeId;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Value>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the show, create, update and replace endpoints.
pub enum HomeResponse {
    Ok(Json<Value>),
}

impl HomeResponse {
    fn from_home(home: &Home) -> Self {
        Self::Ok(Json(home.to_json()))
    }
}

impl IntoResponse for HomeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete and clear endpoints.
pub enum DeleteResponse {
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// A path segment that is not an integer cannot name a stored home.
fn parse_id(raw: &str) -> Result<HomeId, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::from(HomeListError::from(NotFoundError {
            entity: "Home",
            id: raw.to_string(),
        }))
    })
}

fn body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    let Json(value) = payload?;
    Ok(value)
}

/// `GET /homes`
pub async fn list<HR>(State(state): State<AppState<HR>>) -> Result<ListResponse, ApiError>
where
    HR: HomeRepository + Send + Sync + 'static,
{
    let homes = state.home_service.list_homes().await?;
    Ok(ListResponse::Ok(Json(homes.iter().map(Home::to_json).collect())))
}

/// `POST /homes`
pub async fn create<HR>(
    State(state): State<AppState<HR>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<HomeResponse, ApiError>
where
    HR: HomeRepository + Send + Sync + 'static,
{
    let home = Home::from_json(&body(payload)?)?;
    let created = state.home_service.create_home(home).await?;
    Ok(HomeResponse::from_home(&created))
}

/// `GET /homes/:id`
pub async fn show<HR>(
    State(state): State<AppState<HR>>,
    Path(id): Path<String>,
) -> Result<HomeResponse, ApiError>
where
    HR: HomeRepository + Send + Sync + 'static,
{
    let home = state.home_service.get_home(parse_id(&id)?).await?;
    Ok(HomeResponse::from_home(&home))
}

/// `PATCH /homes/:id` — overwrite only the fields present in the body.
pub async fn update<HR>(
    State(state): State<AppState<HR>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<HomeResponse, ApiError>
where
    HR: HomeRepository + Send + Sync + 'static,
{
    let patch = HomePatch::from_json(&body(payload)?)?;
    let home = state
        .home_service
        .update_home(parse_id(&id)?, patch)
        .await?;
    Ok(HomeResponse::from_home(&home))
}

/// `PUT /homes/:id` — overwrite every content field, keeping the id.
pub async fn replace<HR>(
    State(state): State<AppState<HR>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<HomeResponse, ApiError>
where
    HR: HomeRepository + Send + Sync + 'static,
{
    let replacement = Home::from_json(&body(payload)?)?;
    let home = state
        .home_service
        .replace_home(parse_id(&id)?, replacement)
        .await?;
    Ok(HomeResponse::from_home(&home))
}

/// `DELETE /homes/:id`
pub async fn delete<HR>(
    State(state): State<AppState<HR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    HR: HomeRepository + Send + Sync + 'static,
{
    state.home_service.delete_home(parse_id(&id)?).await?;
    Ok(DeleteResponse::Ok)
}

/// `DELETE /homes`
pub async fn clear<HR>(State(state): State<AppState<HR>>) -> Result<DeleteResponse, ApiError>
where
    HR: HomeRepository + Send + Sync + 'static,
{
    state.home_service.clear_homes().await?;
    Ok(DeleteResponse::Ok)
}
