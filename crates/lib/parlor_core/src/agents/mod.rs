//! Agent registry.
//!
//! The closed set of responder identities a conversation can be routed to,
//! plus the static catalog served to clients.

pub mod responders;
pub mod router;

use serde::{Deserialize, Serialize};

/// Responder identity — matches the `agent_kind` Postgres enum.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "agent_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AgentId {
    #[default]
    General,
    Code,
    Automation,
    Research,
    Design,
}

impl AgentId {
    /// All identities in catalog order.
    pub const ALL: [AgentId; 5] = [
        AgentId::General,
        AgentId::Code,
        AgentId::Automation,
        AgentId::Research,
        AgentId::Design,
    ];

    /// Wire and database text representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentId::General => "general",
            AgentId::Code => "code",
            AgentId::Automation => "automation",
            AgentId::Research => "research",
            AgentId::Design => "design",
        }
    }

    /// Exact, case-sensitive lookup of a tag. Returns `None` for anything
    /// outside the closed set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == tag)
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry describing an agent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: &'static str,
    pub description: &'static str,
    /// Icon name understood by the frontend icon set.
    pub icon: &'static str,
}

static AGENTS: [Agent; 5] = [
    Agent {
        id: AgentId::General,
        name: "General AI Agent",
        description: "Helpful, conversational assistant for everyday questions.",
        icon: "MessageSquare",
    },
    Agent {
        id: AgentId::Code,
        name: "Code Agent",
        description: "Writes and optimizes code with explanations.",
        icon: "Code2",
    },
    Agent {
        id: AgentId::Automation,
        name: "Automation Agent",
        description: "Creates Selenium/Appium style test flows.",
        icon: "Bot",
    },
    Agent {
        id: AgentId::Research,
        name: "Research Agent",
        description: "Plans, reasons, and drafts long-form answers.",
        icon: "Search",
    },
    Agent {
        id: AgentId::Design,
        name: "Design Agent",
        description: "UI/UX ideas, components, and visual suggestions.",
        icon: "Palette",
    },
];

/// The agent catalog, in display order.
pub fn catalog() -> &'static [Agent] {
    &AGENTS
}
