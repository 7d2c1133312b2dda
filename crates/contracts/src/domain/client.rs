use serde::{Deserialize, Serialize};

use super::title_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Residential,
    Commercial,
    Extension,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Residential => "residential",
            ServiceType::Commercial => "commercial",
            ServiceType::Extension => "extension",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

/// Where a client sits in the onboarding pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Registered,
    DocsUploaded,
    Reviewed,
    Approved,
    Rejected,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Registered => "registered",
            ClientStatus::DocsUploaded => "docs_uploaded",
            ClientStatus::Reviewed => "reviewed",
            ClientStatus::Approved => "approved",
            ClientStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

/// Settlement state of the client's account as a whole (individual
/// transactions carry their own `PaymentStatus`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Pending,
    Completed,
    Failed,
}

impl PaymentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentState::Pending => "pending",
            PaymentState::Completed => "completed",
            PaymentState::Failed => "failed",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Package {
    Basic,
    Standard,
    Premium,
}

impl Package {
    pub fn as_str(&self) -> &'static str {
        match self {
            Package::Basic => "basic",
            Package::Standard => "standard",
            Package::Premium => "premium",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }

    /// List price of the package in GBP.
    pub fn price(&self) -> f64 {
        match self {
            Package::Basic => 299.0,
            Package::Standard => 399.0,
            Package::Premium => 599.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub postcode: String,

    #[serde(rename = "serviceType")]
    pub service_type: ServiceType,

    pub status: ClientStatus,

    /// ISO-8601 date the client registered.
    #[serde(rename = "joinedDate")]
    pub joined_date: String,

    #[serde(rename = "paymentStatus")]
    pub payment_status: PaymentState,

    pub package: Package,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(ClientStatus::DocsUploaded.label(), "Docs Uploaded");
        assert_eq!(ClientStatus::Approved.as_str(), "approved");
    }

    #[test]
    fn test_serde_wire_form() {
        let json = serde_json::to_string(&ClientStatus::DocsUploaded).unwrap();
        assert_eq!(json, "\"docs_uploaded\"");

        let parsed: Package = serde_json::from_str("\"premium\"").unwrap();
        assert_eq!(parsed, Package::Premium);
    }

    #[test]
    fn test_package_prices() {
        assert_eq!(Package::Basic.price(), 299.0);
        assert_eq!(Package::Premium.price(), 599.0);
    }
}
