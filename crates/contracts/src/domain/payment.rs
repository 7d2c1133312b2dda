use serde::{Deserialize, Serialize};

use super::client::Package;
use super::title_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    BankTransfer,
    Paypal,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Paypal => "paypal",
        }
    }

    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

/// One client transaction. Amounts are GBP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,

    #[serde(rename = "clientId")]
    pub client_id: String,

    #[serde(rename = "clientName")]
    pub client_name: String,

    #[serde(rename = "projectId")]
    pub project_id: Option<String>,

    pub amount: f64,
    pub package: Package,
    pub status: PaymentStatus,

    #[serde(rename = "transactionId")]
    pub transaction_id: String,

    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,

    #[serde(rename = "paymentDate")]
    pub payment_date: String,

    #[serde(rename = "dueDate")]
    pub due_date: String,

    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_labels() {
        assert_eq!(PaymentMethod::BankTransfer.label(), "Bank Transfer");
        assert_eq!(PaymentMethod::Card.as_str(), "card");
    }

    #[test]
    fn test_camel_case_wire_fields() {
        let payment = Payment {
            id: "PAY-001".into(),
            client_id: "c1".into(),
            client_name: "Test".into(),
            project_id: None,
            amount: 399.0,
            package: Package::Standard,
            status: PaymentStatus::Pending,
            transaction_id: "TXN-001".into(),
            payment_method: PaymentMethod::Card,
            payment_date: "2025-01-10".into(),
            due_date: "2025-01-20".into(),
            description: "Initial payment".into(),
        };
        let json = serde_json::to_string(&payment).unwrap();
        assert!(json.contains("\"clientId\":\"c1\""));
        assert!(json.contains("\"transactionId\":\"TXN-001\""));
    }
}
