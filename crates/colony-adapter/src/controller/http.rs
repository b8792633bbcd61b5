//! HTTP controller - exposes the colony over query-string endpoints
//!
//! ```text
//! POST   /aliencolony/start        ?name&homePlanet
//! POST   /aliencolony/addAlien     ?parentName&childName&type&homePlanet
//! GET    /aliencolony/getAlien     ?name
//! POST   /aliencolony/updateAlien  ?oldName&newName&newPlanet
//! DELETE /aliencolony/deleteAlien  ?name
//! GET    /health
//! ```
//!
//! All five colony endpoints share one `ColonyService` behind a single
//! mutex, held for the whole load → mutate → save sequence.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use colony_domain::{AlienType, ColonyRepository};
use colony_usecase::ColonyService;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::error::ApiResult;

/// Shared handler state
pub struct AppState<R> {
    pub colony: Arc<Mutex<ColonyService<R>>>,
}

impl<R> AppState<R> {
    pub fn new(service: ColonyService<R>) -> Self {
        Self {
            colony: Arc::new(Mutex::new(service)),
        }
    }
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            colony: Arc::clone(&self.colony),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartParams {
    pub name: Option<String>,
    pub home_planet: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAlienParams {
    pub parent_name: Option<String>,
    pub child_name: Option<String>,
    #[serde(rename = "type")]
    pub alien_type: Option<String>,
    pub home_planet: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NameParams {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlienParams {
    pub old_name: Option<String>,
    pub new_name: Option<String>,
    pub new_planet: Option<String>,
}

/// Build the colony router around a service.
pub fn router<R>(service: ColonyService<R>) -> Router
where
    R: ColonyRepository + Send + 'static,
{
    let state = AppState::new(service);

    Router::new()
        .route("/health", get(health))
        .route("/aliencolony/start", post(start_colony::<R>))
        .route("/aliencolony/addAlien", post(add_alien::<R>))
        .route("/aliencolony/getAlien", get(get_alien::<R>))
        .route("/aliencolony/updateAlien", post(update_alien::<R>))
        .route("/aliencolony/deleteAlien", delete(delete_alien::<R>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn start_colony<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<StartParams>,
) -> ApiResult<StatusCode>
where
    R: ColonyRepository + Send + 'static,
{
    info!(
        "Colony starting with alien {}",
        params.name.as_deref().unwrap_or_default()
    );
    state
        .colony
        .lock()
        .await
        .start_colony(params.name.as_deref(), params.home_planet.as_deref())?;
    Ok(StatusCode::OK)
}

async fn add_alien<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<AddAlienParams>,
) -> ApiResult<StatusCode>
where
    R: ColonyRepository + Send + 'static,
{
    info!(
        "Adding alien {} as child of {}",
        params.child_name.as_deref().unwrap_or_default(),
        params.parent_name.as_deref().unwrap_or_default()
    );
    let alien_type = params
        .alien_type
        .as_deref()
        .map(str::parse::<AlienType>)
        .transpose()?;

    let id = state.colony.lock().await.add_alien(
        params.parent_name.as_deref(),
        params.child_name.as_deref(),
        alien_type,
        params.home_planet.as_deref(),
    )?;
    info!(alien_id = %id, "Alien added");
    Ok(StatusCode::OK)
}

async fn get_alien<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<NameParams>,
) -> ApiResult<String>
where
    R: ColonyRepository + Send + 'static,
{
    let name = params.name.unwrap_or_default();
    info!("Getting alien {}", name);
    let description = state.colony.lock().await.get_alien(&name)?;
    Ok(description)
}

async fn update_alien<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<UpdateAlienParams>,
) -> ApiResult<StatusCode>
where
    R: ColonyRepository + Send + 'static,
{
    let old_name = params.old_name.unwrap_or_default();
    info!(
        "Updating alien {} with new name {:?} and new planet {:?}",
        old_name, params.new_name, params.new_planet
    );
    state.colony.lock().await.update_alien(
        &old_name,
        params.new_name.as_deref(),
        params.new_planet.as_deref(),
    )?;
    Ok(StatusCode::OK)
}

async fn delete_alien<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<NameParams>,
) -> ApiResult<StatusCode>
where
    R: ColonyRepository + Send + 'static,
{
    let name = params.name.unwrap_or_default();
    info!("Deleting alien {}", name);
    state.colony.lock().await.delete_alien(&name)?;
    Ok(StatusCode::OK)
}
