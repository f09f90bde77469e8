//! Liveness and diagnostic endpoints.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::{DiagnosticResponse, RootResponse};

/// `GET /` — liveness.
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "AI Chat Backend running".into(),
    })
}

/// `GET /test` — reports store connectivity. Never fails.
pub async fn diagnostic_handler(State(state): State<AppState>) -> Json<DiagnosticResponse> {
    let status = state.conversations.store().status().await;

    let database = match (status.configured, status.connected, &status.error) {
        (false, _, _) => "⚠️  Available but not initialized".to_string(),
        (true, true, None) => "✅ Connected & Working".to_string(),
        (true, true, Some(e)) => format!("⚠️  Connected but Error: {}", truncate(e, 50)),
        (true, false, Some(e)) => format!("❌ Error: {}", truncate(e, 50)),
        (true, false, None) => "❌ Not Available".to_string(),
    };

    Json(DiagnosticResponse {
        backend: format!("✅ Running ({})", status.backend),
        database,
        database_url: set_marker(state.config.database_url.is_some()),
        database_name: set_marker(state.config.database_name.is_some()),
        connection_status: if status.connected {
            "Connected".into()
        } else {
            "Not Connected".into()
        },
        collections: status.collections.into_iter().take(10).collect(),
    })
}

fn set_marker(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("abc", 10), "abc");
    }
}
