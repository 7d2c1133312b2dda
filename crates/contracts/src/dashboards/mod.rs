use serde::{Deserialize, Serialize};

/// Headline figures for the admin overview screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "totalProjects")]
    pub total_projects: usize,

    #[serde(rename = "activeProjects")]
    pub active_projects: usize,

    #[serde(rename = "completedProjects")]
    pub completed_projects: usize,

    #[serde(rename = "pendingPayments")]
    pub pending_payments: usize,

    /// Sum of completed payments, GBP.
    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,

    #[serde(rename = "totalClients")]
    pub total_clients: usize,

    #[serde(rename = "submittedApplications")]
    pub submitted_applications: usize,

    #[serde(rename = "approvedApplications")]
    pub approved_applications: usize,
}
