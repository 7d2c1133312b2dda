use serde::{Deserialize, Serialize};

use super::client::ServiceType;
use super::document::Document;
use super::title_case;

/// The full delivery pipeline from first contact to council decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Pending,
    Registered,
    DocsReceived,
    InReview,
    ArchitectAssigned,
    MeasurementsDone,
    DrawingsInProgress,
    DrawingsReceived,
    SubmittedToCouncil,
    Approved,
    Rejected,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "pending",
            ProjectStatus::Registered => "registered",
            ProjectStatus::DocsReceived => "docs_received",
            ProjectStatus::InReview => "in_review",
            ProjectStatus::ArchitectAssigned => "architect_assigned",
            ProjectStatus::MeasurementsDone => "measurements_done",
            ProjectStatus::DrawingsInProgress => "drawings_in_progress",
            ProjectStatus::DrawingsReceived => "drawings_received",
            ProjectStatus::SubmittedToCouncil => "submitted_to_council",
            ProjectStatus::Approved => "approved",
            ProjectStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }

    /// Approved and rejected projects are closed; everything else is open.
    pub fn is_closed(&self) -> bool {
        matches!(self, ProjectStatus::Approved | ProjectStatus::Rejected)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,

    #[serde(rename = "clientId")]
    pub client_id: String,

    #[serde(rename = "clientName")]
    pub client_name: String,

    pub title: String,
    pub description: String,

    #[serde(rename = "serviceType")]
    pub service_type: ServiceType,

    pub location: String,
    pub postcode: String,
    pub status: ProjectStatus,

    #[serde(rename = "createdDate")]
    pub created_date: String,

    #[serde(rename = "updatedDate")]
    pub updated_date: String,

    #[serde(rename = "agentX")]
    pub agent_x: Option<String>,

    #[serde(rename = "agentY")]
    pub agent_y: Option<String>,

    pub architect: Option<String>,

    /// Completion percentage, 0..=100.
    pub progress: u8,

    #[serde(rename = "estimatedCompletionDate")]
    pub estimated_completion_date: String,

    #[serde(rename = "councilReference")]
    pub council_reference: String,

    #[serde(rename = "councilName")]
    pub council_name: String,

    #[serde(default)]
    pub documents: Vec<Document>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_states() {
        assert!(ProjectStatus::Approved.is_closed());
        assert!(ProjectStatus::Rejected.is_closed());
        assert!(!ProjectStatus::SubmittedToCouncil.is_closed());
        assert!(!ProjectStatus::Pending.is_closed());
    }

    #[test]
    fn test_pipeline_labels() {
        assert_eq!(ProjectStatus::DrawingsInProgress.label(), "Drawings In Progress");
        assert_eq!(ProjectStatus::SubmittedToCouncil.as_str(), "submitted_to_council");
    }
}
