use serde::{Deserialize, Serialize};

use super::title_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    ApplicationForm,
    FloorPlan,
    SitePlan,
    Design,
    Structural,
    Environmental,
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::ApplicationForm => "application_form",
            DocumentType::FloorPlan => "floor_plan",
            DocumentType::SitePlan => "site_plan",
            DocumentType::Design => "design",
            DocumentType::Structural => "structural",
            DocumentType::Environmental => "environmental",
            DocumentType::Other => "other",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Reviewed,
    Approved,
    RequestingUpdate,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Reviewed => "reviewed",
            DocumentStatus::Approved => "approved",
            DocumentStatus::RequestingUpdate => "requesting_update",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,

    #[serde(rename = "projectId")]
    pub project_id: String,

    #[serde(rename = "clientId")]
    pub client_id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub doc_type: DocumentType,

    #[serde(rename = "uploadedDate")]
    pub uploaded_date: String,

    #[serde(rename = "uploadedBy")]
    pub uploaded_by: String,

    /// Size on disk in bytes.
    #[serde(rename = "fileSize")]
    pub file_size: u64,

    pub status: DocumentStatus,
    pub version: u32,
}
