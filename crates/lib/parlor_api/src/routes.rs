//! Route paths served by [`crate::router`].

pub const GET_ROOT: &str = "/";
pub const GET_TEST: &str = "/test";
pub const GET_API_AGENTS: &str = "/api/agents";
pub const GET_API_CONVERSATIONS: &str = "/api/conversations";
pub const POST_API_CONVERSATIONS: &str = "/api/conversations";
pub const GET_API_CONVERSATIONS_ID: &str = "/api/conversations/{id}";
pub const POST_API_CONVERSATIONS_ID_MESSAGES: &str = "/api/conversations/{id}/messages";
