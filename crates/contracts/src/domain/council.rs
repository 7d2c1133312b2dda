use serde::{Deserialize, Serialize};

use super::title_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouncilStatus {
    Draft,
    Submitted,
    Validated,
    UnderReview,
    Approved,
    Rejected,
    AppealPending,
}

impl CouncilStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CouncilStatus::Draft => "draft",
            CouncilStatus::Submitted => "submitted",
            CouncilStatus::Validated => "validated",
            CouncilStatus::UnderReview => "under_review",
            CouncilStatus::Approved => "approved",
            CouncilStatus::Rejected => "rejected",
            CouncilStatus::AppealPending => "appeal_pending",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }

    /// Applications past the draft stage count as submitted to the council.
    pub fn is_submitted(&self) -> bool {
        !matches!(self, CouncilStatus::Draft)
    }
}

/// A planning application lodged with a local authority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouncilApplication {
    pub id: String,

    #[serde(rename = "projectId")]
    pub project_id: String,

    #[serde(rename = "clientName")]
    pub client_name: String,

    #[serde(rename = "councilRef")]
    pub council_ref: String,

    pub council: String,

    #[serde(rename = "applicationDate")]
    pub application_date: String,

    pub status: CouncilStatus,

    /// Statutory fee in GBP.
    #[serde(rename = "applicationFee")]
    pub application_fee: f64,

    #[serde(rename = "targetDecisionDate")]
    pub target_decision_date: String,

    #[serde(rename = "decisionDate")]
    pub decision_date: Option<String>,

    pub comments: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitted_states() {
        assert!(!CouncilStatus::Draft.is_submitted());
        assert!(CouncilStatus::Submitted.is_submitted());
        assert!(CouncilStatus::AppealPending.is_submitted());
    }

    #[test]
    fn test_labels() {
        assert_eq!(CouncilStatus::UnderReview.label(), "Under Review");
        assert_eq!(CouncilStatus::AppealPending.as_str(), "appeal_pending");
    }
}
