//! Static mock datasets backing every admin screen.

pub mod clients;
pub mod council;
pub mod payments;
pub mod projects;
pub mod team;

pub use clients::MOCK_CLIENTS;
pub use council::MOCK_COUNCIL;
pub use payments::MOCK_PAYMENTS;
pub use projects::MOCK_PROJECTS;
pub use team::MOCK_TEAM;

use contracts::dashboards::DashboardStats;
use contracts::domain::{Document, PaymentStatus};

/// Every uploaded document across all projects, in project order.
pub fn all_documents() -> Vec<Document> {
    MOCK_PROJECTS
        .iter()
        .flat_map(|p| p.documents.iter().cloned())
        .collect()
}

/// Headline figures derived from the mock datasets.
pub fn dashboard_stats() -> DashboardStats {
    let completed_projects = MOCK_PROJECTS
        .iter()
        .filter(|p| p.status.is_closed())
        .count();

    DashboardStats {
        total_projects: MOCK_PROJECTS.len(),
        active_projects: MOCK_PROJECTS.len() - completed_projects,
        completed_projects,
        pending_payments: MOCK_PAYMENTS
            .iter()
            .filter(|p| p.status == PaymentStatus::Pending)
            .count(),
        total_revenue: MOCK_PAYMENTS
            .iter()
            .filter(|p| p.status == PaymentStatus::Completed)
            .map(|p| p.amount)
            .sum(),
        total_clients: MOCK_CLIENTS.len(),
        submitted_applications: MOCK_COUNCIL
            .iter()
            .filter(|a| a.status.is_submitted())
            .count(),
        approved_applications: MOCK_COUNCIL
            .iter()
            .filter(|a| a.status == contracts::domain::CouncilStatus::Approved)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let clients: HashSet<_> = MOCK_CLIENTS.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(clients.len(), MOCK_CLIENTS.len());

        let projects: HashSet<_> = MOCK_PROJECTS.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(projects.len(), MOCK_PROJECTS.len());

        let payments: HashSet<_> = MOCK_PAYMENTS.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(payments.len(), MOCK_PAYMENTS.len());
    }

    #[test]
    fn test_projects_reference_real_clients() {
        let clients: HashSet<_> = MOCK_CLIENTS.iter().map(|c| c.id.as_str()).collect();
        for project in MOCK_PROJECTS.iter() {
            assert!(
                clients.contains(project.client_id.as_str()),
                "project {} references unknown client {}",
                project.id,
                project.client_id
            );
        }
    }

    #[test]
    fn test_payments_reference_real_clients_and_projects() {
        let clients: HashSet<_> = MOCK_CLIENTS.iter().map(|c| c.id.as_str()).collect();
        let projects: HashSet<_> = MOCK_PROJECTS.iter().map(|p| p.id.as_str()).collect();
        for payment in MOCK_PAYMENTS.iter() {
            assert!(clients.contains(payment.client_id.as_str()));
            if let Some(project_id) = &payment.project_id {
                assert!(projects.contains(project_id.as_str()));
            }
        }
    }

    #[test]
    fn test_council_applications_reference_real_projects() {
        let projects: HashSet<_> = MOCK_PROJECTS.iter().map(|p| p.id.as_str()).collect();
        for app in MOCK_COUNCIL.iter() {
            assert!(projects.contains(app.project_id.as_str()));
        }
    }

    #[test]
    fn test_document_ids_are_unique_across_projects() {
        let docs = all_documents();
        assert!(!docs.is_empty());
        let ids: HashSet<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), docs.len());
    }

    #[test]
    fn test_embedded_documents_match_their_project() {
        for project in MOCK_PROJECTS.iter() {
            for doc in &project.documents {
                assert_eq!(doc.project_id, project.id);
                assert_eq!(doc.client_id, project.client_id);
            }
        }
    }

    #[test]
    fn test_progress_is_a_percentage() {
        for project in MOCK_PROJECTS.iter() {
            assert!(project.progress <= 100);
        }
    }

    #[test]
    fn test_dashboard_stats_arithmetic() {
        let stats = dashboard_stats();
        assert_eq!(stats.total_projects, MOCK_PROJECTS.len());
        assert_eq!(
            stats.active_projects + stats.completed_projects,
            stats.total_projects
        );
        assert_eq!(stats.total_clients, MOCK_CLIENTS.len());
        assert!(stats.total_revenue > 0.0);
        assert!(stats.approved_applications <= stats.submitted_applications);
    }
}
