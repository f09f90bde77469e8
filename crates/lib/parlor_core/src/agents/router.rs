//! Agent routing — picks the responder for a tag.
//!
//! Routing is permissive: anything that is not one of the specialised tags
//! (including `general`, an empty string, or no tag at all) goes to the
//! general responder. It never fails.

use super::AgentId;
use super::responders::{self, Responder};

impl AgentId {
    /// Resolve a free-form tag, falling back to [`AgentId::General`].
    pub fn resolve(tag: Option<&str>) -> Self {
        tag.and_then(AgentId::from_tag).unwrap_or_default()
    }

    /// The reply generator for this identity.
    pub fn responder(self) -> Responder {
        match self {
            AgentId::Code => responders::code,
            AgentId::Automation => responders::automation,
            AgentId::Research => responders::research,
            AgentId::Design => responders::design,
            AgentId::General => responders::general,
        }
    }
}

/// Generate a reply for `prompt` from the responder named by `agent`.
pub fn route(agent: Option<&str>, prompt: &str) -> String {
    dispatch(AgentId::resolve(agent), prompt)
}

/// Generate a reply for `prompt` from an already-resolved identity.
pub fn dispatch(agent: AgentId, prompt: &str) -> String {
    (agent.responder())(prompt)
}
