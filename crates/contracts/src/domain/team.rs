use serde::{Deserialize, Serialize};

use super::title_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    AgentX,
    AgentY,
    Admin,
    Architect,
}

impl TeamRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamRole::AgentX => "agent_x",
            TeamRole::AgentY => "agent_y",
            TeamRole::Admin => "admin",
            TeamRole::Architect => "architect",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    London,
    India,
}

impl Team {
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::London => "london",
            Team::India => "india",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: TeamRole,
    pub team: Team,

    #[serde(rename = "agentCode")]
    pub agent_code: String,

    #[serde(rename = "isActive")]
    pub is_active: bool,

    /// Number of projects currently assigned to this member.
    #[serde(rename = "assignedProjects")]
    pub assigned_projects: u32,

    #[serde(rename = "joinedDate")]
    pub joined_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!(TeamRole::AgentX.label(), "Agent X");
        assert_eq!(TeamRole::Architect.as_str(), "architect");
        assert_eq!(Team::London.label(), "London");
    }
}
