use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::directory::{DirectoryError, OperatorDirectory};
use super::domain::{CityId, GovernmentBodyId, OperatorId, RosterScope, TruckId, YardId};
use super::service::{DispatchService, DispatchServiceError};

/// Router builder exposing the dispatch search and the operator directory.
pub fn dispatch_router<D>(service: Arc<DispatchService<D>>) -> Router
where
    D: OperatorDirectory + 'static,
{
    Router::new()
        .route("/api/v1/dispatch/search", get(search_handler::<D>))
        .route("/api/v1/operators", get(active_roster_handler::<D>))
        .route("/api/v1/operators/all", get(full_roster_handler::<D>))
        .route("/api/v1/operators/:operator_id", get(operator_handler::<D>))
        .route(
            "/api/v1/operators/:operator_id/trucks",
            put(assign_trucks_handler::<D>),
        )
        .route(
            "/api/v1/operators/:operator_id/cities",
            put(assign_coverage_handler::<D>),
        )
        .route(
            "/api/v1/operators/:operator_id/yards",
            post(attach_yard_handler::<D>),
        )
        .route(
            "/api/v1/operators/:operator_id/yards/:yard_id",
            delete(detach_yard_handler::<D>),
        )
        .route(
            "/api/v1/operators/:operator_id/government-bodies",
            post(attach_government_body_handler::<D>),
        )
        .route(
            "/api/v1/operators/:operator_id/government-bodies/:body_id",
            delete(detach_government_body_handler::<D>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TruckAssignment {
    truck_ids: Vec<TruckId>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CoverageAssignment {
    city_ids: Vec<CityId>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct YardLink {
    yard_id: YardId,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GovernmentBodyLink {
    government_body_id: GovernmentBodyId,
}

pub(crate) async fn search_handler<D>(
    State(service): State<Arc<DispatchService<D>>>,
    Query(params): Query<SearchParams>,
) -> Response
where
    D: OperatorDirectory + 'static,
{
    let fragment = params.city.as_deref().map(str::trim).unwrap_or_default();
    if fragment.is_empty() {
        let payload = json!({ "error": "query parameter 'city' is required" });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    }

    match service.search_by_city(fragment) {
        Ok(candidates) => (StatusCode::OK, axum::Json(candidates)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn active_roster_handler<D>(
    State(service): State<Arc<DispatchService<D>>>,
) -> Response
where
    D: OperatorDirectory + 'static,
{
    match service.roster(RosterScope::Active) {
        Ok(candidates) => (StatusCode::OK, axum::Json(candidates)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn full_roster_handler<D>(
    State(service): State<Arc<DispatchService<D>>>,
) -> Response
where
    D: OperatorDirectory + 'static,
{
    match service.roster(RosterScope::Full) {
        Ok(candidates) => (StatusCode::OK, axum::Json(candidates)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn operator_handler<D>(
    State(service): State<Arc<DispatchService<D>>>,
    Path(operator_id): Path<String>,
) -> Response
where
    D: OperatorDirectory + 'static,
{
    match service.operator(&OperatorId(operator_id)) {
        Ok(candidate) => (StatusCode::OK, axum::Json(candidate)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assign_trucks_handler<D>(
    State(service): State<Arc<DispatchService<D>>>,
    Path(operator_id): Path<String>,
    axum::Json(assignment): axum::Json<TruckAssignment>,
) -> Response
where
    D: OperatorDirectory + 'static,
{
    match service.assign_trucks(&OperatorId(operator_id), assignment.truck_ids) {
        Ok(candidate) => (StatusCode::OK, axum::Json(candidate)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assign_coverage_handler<D>(
    State(service): State<Arc<DispatchService<D>>>,
    Path(operator_id): Path<String>,
    axum::Json(assignment): axum::Json<CoverageAssignment>,
) -> Response
where
    D: OperatorDirectory + 'static,
{
    match service.assign_coverage(&OperatorId(operator_id), assignment.city_ids) {
        Ok(candidate) => (StatusCode::OK, axum::Json(candidate)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn attach_yard_handler<D>(
    State(service): State<Arc<DispatchService<D>>>,
    Path(operator_id): Path<String>,
    axum::Json(link): axum::Json<YardLink>,
) -> Response
where
    D: OperatorDirectory + 'static,
{
    match service.attach_yard(&OperatorId(operator_id), &link.yard_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn detach_yard_handler<D>(
    State(service): State<Arc<DispatchService<D>>>,
    Path((operator_id, yard_id)): Path<(String, String)>,
) -> Response
where
    D: OperatorDirectory + 'static,
{
    match service.detach_yard(&OperatorId(operator_id), &YardId(yard_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn attach_government_body_handler<D>(
    State(service): State<Arc<DispatchService<D>>>,
    Path(operator_id): Path<String>,
    axum::Json(link): axum::Json<GovernmentBodyLink>,
) -> Response
where
    D: OperatorDirectory + 'static,
{
    match service.attach_government_body(&OperatorId(operator_id), &link.government_body_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn detach_government_body_handler<D>(
    State(service): State<Arc<DispatchService<D>>>,
    Path((operator_id, body_id)): Path<(String, String)>,
) -> Response
where
    D: OperatorDirectory + 'static,
{
    match service.detach_government_body(&OperatorId(operator_id), &GovernmentBodyId(body_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: DispatchServiceError) -> Response {
    match error {
        DispatchServiceError::Directory(DirectoryError::OperatorNotFound) => {
            let payload = json!({ "error": "operator not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        DispatchServiceError::Directory(reference @ DirectoryError::UnknownReference { .. }) => {
            let payload = json!({ "error": reference.to_string() });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        DispatchServiceError::Directory(DirectoryError::Unavailable(_)) => {
            let payload = json!({ "error": "service unavailable" });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}
