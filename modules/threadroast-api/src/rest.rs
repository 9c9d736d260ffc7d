use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::warn;

use threadroast_common::{lang, RoastError};

use crate::AppState;

#[derive(Deserialize)]
pub struct RoastQuery {
    lang: Option<String>,
}

/// GET /api/roast/{username}?lang=id
pub async fn api_roast(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Query(query): Query<RoastQuery>,
) -> Response {
    let lang = query
        .lang
        .as_deref()
        .map(lang::normalize)
        .unwrap_or(lang::DEFAULT_LANG.0);

    match state.roaster.roast(&username, lang).await {
        Ok(roast) => Json(serde_json::json!({
            "username": username.to_lowercase(),
            "lang": lang,
            "roast": roast,
        }))
        .into_response(),
        Err(err) => roast_error_response(err),
    }
}

pub(crate) fn roast_error_response(err: RoastError) -> Response {
    let status =
        StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        warn!(error = %err, "roast failed");
    }

    (
        status,
        Json(serde_json::json!({ "message": err.user_message() })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = roast_error_response(RoastError::AccountNotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn private_account_maps_to_403() {
        let response = roast_error_response(RoastError::AccountPrivate);
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn retrieval_failure_maps_to_500() {
        let response = roast_error_response(RoastError::RetrievalFailed);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_failure_maps_to_500() {
        let response = roast_error_response(RoastError::Upstream(anyhow::anyhow!("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
