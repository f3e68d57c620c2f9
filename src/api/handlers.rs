//! Request handlers for the ChemistFlow HTTP surface.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::compute::ReaktoroService;
use crate::domain::{Database, MoleculeAmountList, Reaction, ReactionId};
use crate::remote::client::ReqwestTransport;
use crate::remote::{MechanismService, ReactionService};

use super::responses::{ApiError, ComputeErrorBody};

pub struct AppState {
    pub reaction_service: Arc<ReactionService<ReqwestTransport>>,
    pub mechanism_service: Arc<MechanismService<ReqwestTransport>>,
    pub reaktoro_service: Arc<ReaktoroService<ReqwestTransport>>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok", version: env!("CARGO_PKG_VERSION") })
}

fn parse_id(raw: &str) -> Result<i64, Response> {
    raw.parse::<i64>().map_err(|_| ApiError::bad_request(format!("invalid id {raw:?}")).into_response())
}

pub async fn get_reaction(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state.reaction_service.get(id).await {
        Ok(details) => Json(details).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn create_reaction(State(state): State<Arc<AppState>>, Json(reaction): Json<Reaction>) -> Response {
    match state.reaction_service.create(&reaction).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_reaction(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state.reaction_service.delete(id).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_mechanism(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state.mechanism_service.get(id).await {
        Ok(details) => Json(details).into_response(),
        Err(err) => err.into_response(),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputePropsRequest {
    pub reaction_id: ReactionId,
    pub database: Database,
    pub amounts: MoleculeAmountList,
}

/// Wire form of one slot of the compute response. An engine success
/// serializes as the bare `SystemProps` JSON value; a failure serializes
/// as its tagged `ComputeErrorBody`.
#[derive(Serialize)]
#[serde(untagged)]
enum ComputeSlot {
    Ok(serde_json::Value),
    Err(ComputeErrorBody),
}

pub async fn compute_system_properties(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ComputePropsRequest>,
) -> Response {
    match state
        .reaktoro_service
        .compute(request.reaction_id, request.database, request.amounts)
        .await
    {
        Ok(results) => {
            let slots: Vec<ComputeSlot> = results
                .into_iter()
                .map(|r| match r {
                    Ok(props) => ComputeSlot::Ok(props),
                    Err(err) => ComputeSlot::Err(err.into()),
                })
                .collect();
            Json(slots).into_response()
        }
        Err(err) => err.into_response(),
    }
}
