//! Agent catalog handler.

use axum::Json;

use crate::models::AgentListResponse;

/// `GET /api/agents` — the fixed agent catalog.
pub async fn list_agents_handler() -> Json<AgentListResponse> {
    Json(AgentListResponse {
        agents: parlor_core::agents::catalog(),
    })
}
