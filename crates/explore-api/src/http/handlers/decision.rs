//! Decision handlers for the REST API.

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, Query, State};

use explore_types::decision::{
    CountLikedYouResponse, ListLikedYouResponse, PutDecisionRequest, PutDecisionResponse,
};

use crate::http::error::AppError;
use crate::http::extractors::query::PageQuery;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/users/:id/liked-you - Everyone who liked the user.
pub async fn list_liked_you(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<ListLikedYouResponse>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let page = state
        .decision_service
        .list_liked_you(&user_id, &query.pagination_token)
        .await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(page, request_id, elapsed)
        .with_link("self", &format!("/api/v1/users/{user_id}/liked-you"))
        .with_link("count", &format!("/api/v1/users/{user_id}/liked-you/count"));

    Ok(Json(resp))
}

/// GET /api/v1/users/:id/liked-you/new - Likes the user has not been shown yet.
pub async fn list_new_liked_you(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<ListLikedYouResponse>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let page = state
        .decision_service
        .list_new_liked_you(&user_id, &query.pagination_token)
        .await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(page, request_id, elapsed)
        .with_link("self", &format!("/api/v1/users/{user_id}/liked-you/new"));

    Ok(Json(resp))
}

/// GET /api/v1/users/:id/liked-you/count - Number of users who liked the user.
pub async fn count_liked_you(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<CountLikedYouResponse>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let count = state.decision_service.count_liked_you(&user_id).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(count, request_id, elapsed)
        .with_link("self", &format!("/api/v1/users/{user_id}/liked-you/count"));

    Ok(Json(resp))
}

/// PUT /api/v1/decisions - Record a like/pass and report a mutual like.
pub async fn put_decision(
    State(state): State<AppState>,
    Json(body): Json<PutDecisionRequest>,
) -> Result<Json<ApiResponse<PutDecisionResponse>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let outcome = state.decision_service.put_decision(&body).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    tracing::info!(
        actor = %body.actor_user_id,
        recipient = %body.recipient_user_id,
        liked = body.liked_recipient,
        mutual = outcome.mutual_likes,
        "decision recorded"
    );

    let resp = ApiResponse::success(outcome, request_id, elapsed).with_link(
        "liked_you",
        &format!("/api/v1/users/{}/liked-you", body.actor_user_id),
    );

    Ok(Json(resp))
}
