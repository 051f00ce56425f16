use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::response::AppJson;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub response: String,
}

/// Answer a free-text exhibit question.
///
/// Always 200: a query matching no exhibit gets the catalog's fixed
/// no-match reply, not an error.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<AskRequest>,
) -> Json<AskResponse> {
    let reply = state.exhibits.lookup(&req.input);

    Json(AskResponse {
        response: reply.to_string(),
    })
}
