use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Map, Value};

use crate::server::AppState;
use crate::server::assemble::merge_record;
use crate::server::dto::{CreatePokemonRequest, CreatePokemonResponse, PokemonListResponse};
use crate::server::pagination::{PageParams, page_link};
use crate::server::response::{ApiError, StoreOptionExt, StoreResultExt, message};
use crate::types::PokemonChanges;

pub fn pokemon_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pokemons", get(list_pokemons))
        .route("/pokemons/", post(create_pokemon))
        .route(
            "/pokemons/{id}",
            get(get_pokemon).put(update_pokemon).delete(delete_pokemon),
        )
        .route("/pokemons/{id}/types", get(list_pokemon_types))
}

/// Parses a request body that must be a non-empty JSON object.
fn json_object(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => Ok(map),
        _ => Err(ApiError::bad_request("No input data provided")),
    }
}

pub async fn list_pokemons(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let request = PageParams::from_pairs(pairs).to_request(state.default_per_page);

    let page = state
        .store
        .list_pokemon(request)
        .api_err("Failed to list pokemon")?;

    let path = uri.path();
    let prev_page = page.prev_num().map(|n| page_link(path, n, request.per_page));
    let next_page = page.next_num().map(|n| page_link(path, n, request.per_page));

    let data = page
        .items
        .iter()
        .map(|row| merge_record(&row.pokemon, row.species.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok::<_, ApiError>(Json(PokemonListResponse {
        total: page.total,
        page: request.page,
        prev_page,
        next_page,
        per_page: request.per_page,
        data,
    }))
}

pub async fn get_pokemon(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let row = state
        .store
        .get_pokemon(id)
        .api_err("Failed to get pokemon")?
        .or_not_found("Pokemon not found")?;

    let merged = merge_record(&row.pokemon, row.species.as_ref())?;

    Ok::<_, ApiError>(Json(merged))
}

pub async fn update_pokemon(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Bytes,
) -> impl IntoResponse {
    let body = json_object(&body)?;

    let changes = PokemonChanges::from_json(&body)?;
    if changes.is_empty() {
        return Err(ApiError::bad_request("No data changed"));
    }

    let found = state
        .store
        .update_pokemon(id, &changes)
        .api_err("Failed to update pokemon")?;
    if !found {
        return Err(ApiError::not_found("Pokemon not found"));
    }

    tracing::info!("Updated pokemon {id}");

    Ok::<_, ApiError>(message("Pokemon updated successfully"))
}

pub async fn create_pokemon(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> impl IntoResponse {
    let body = json_object(&body)?;

    let request: CreatePokemonRequest = serde_json::from_value(Value::Object(body))?;
    let new_pokemon = request
        .into_new_pokemon()
        .map_err(ApiError::bad_request)?;

    let created = state.store.create_pokemon(&new_pokemon).map_err(|e| {
        tracing::warn!("Rolled back creation of '{}': {e}", new_pokemon.identifier);
        ApiError::internal(e.to_string())
    })?;

    tracing::info!(
        "Created pokemon {} ({})",
        created.pokemon.id,
        created.pokemon.identifier
    );

    let merged = merge_record(&created.pokemon, created.species.as_ref())?;

    Ok::<_, ApiError>((
        StatusCode::CREATED,
        Json(CreatePokemonResponse {
            message: "Pokemon added successfully!",
            pokemon: merged,
        }),
    ))
}

pub async fn delete_pokemon(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let deleted = state
        .store
        .delete_pokemon(id)
        .api_err("Failed to delete pokemon")?;
    if !deleted {
        return Err(ApiError::not_found("Pokemon not found"));
    }

    tracing::info!("Deleted pokemon {id}");

    Ok::<_, ApiError>(message("Pokemon deleted successfully"))
}

pub async fn list_pokemon_types(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    state
        .store
        .get_pokemon(id)
        .api_err("Failed to get pokemon")?
        .or_not_found("Pokemon not found")?;

    let types = state
        .store
        .list_pokemon_types(id)
        .api_err("Failed to list pokemon types")?;

    Ok::<_, ApiError>(Json(types))
}
