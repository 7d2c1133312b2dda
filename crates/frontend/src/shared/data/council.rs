use contracts::domain::{CouncilApplication, CouncilStatus};
use once_cell::sync::Lazy;

pub static MOCK_COUNCIL: Lazy<Vec<CouncilApplication>> = Lazy::new(|| {
    vec![
        CouncilApplication {
            id: "APP-001".into(),
            project_id: "PRJ-001".into(),
            client_name: "Amelia Hart".into(),
            council_ref: "ELG/2025/0143".into(),
            council: "Ealing Council".into(),
            application_date: "2025-01-20".into(),
            status: CouncilStatus::Approved,
            application_fee: 258.0,
            target_decision_date: "2025-03-17".into(),
            decision_date: Some("2025-03-12".into()),
            comments: "Approved with standard conditions.".into(),
        },
        CouncilApplication {
            id: "APP-002".into(),
            project_id: "PRJ-003".into(),
            client_name: "Priya Nair".into(),
            council_ref: "CRO/2025/0892".into(),
            council: "Croydon Council".into(),
            application_date: "2025-06-28".into(),
            status: CouncilStatus::UnderReview,
            application_fee: 578.0,
            target_decision_date: "2025-09-22".into(),
            decision_date: None,
            comments: "Awaiting highways consultation response.".into(),
        },
        CouncilApplication {
            id: "APP-003".into(),
            project_id: "PRJ-005".into(),
            client_name: "Sofia Marino".into(),
            council_ref: "GRN/2024/1677".into(),
            council: "Royal Borough of Greenwich".into(),
            application_date: "2024-12-02".into(),
            status: CouncilStatus::Approved,
            application_fee: 258.0,
            target_decision_date: "2025-01-27".into(),
            decision_date: Some("2025-01-24".into()),
            comments: "Approved. Materials to match existing dwelling.".into(),
        },
        CouncilApplication {
            id: "APP-004".into(),
            project_id: "PRJ-006".into(),
            client_name: "Daniel Okafor".into(),
            council_ref: "HOU/2025/0311".into(),
            council: "Hounslow Council".into(),
            application_date: "2025-02-19".into(),
            status: CouncilStatus::Rejected,
            application_fee: 578.0,
            target_decision_date: "2025-04-16".into(),
            decision_date: Some("2025-05-19".into()),
            comments: "Refused on fire-safety access grounds.".into(),
        },
        CouncilApplication {
            id: "APP-005".into(),
            project_id: "PRJ-006".into(),
            client_name: "Daniel Okafor".into(),
            council_ref: "HOU/2025/0644".into(),
            council: "Hounslow Council".into(),
            application_date: "2025-06-30".into(),
            status: CouncilStatus::AppealPending,
            application_fee: 0.0,
            target_decision_date: "2025-10-27".into(),
            decision_date: None,
            comments: "Appeal lodged against refusal of HOU/2025/0311.".into(),
        },
        CouncilApplication {
            id: "APP-006".into(),
            project_id: "PRJ-008".into(),
            client_name: "Amelia Hart".into(),
            council_ref: String::new(),
            council: "Ealing Council".into(),
            application_date: "2025-08-11".into(),
            status: CouncilStatus::Draft,
            application_fee: 258.0,
            target_decision_date: "2025-11-03".into(),
            decision_date: None,
            comments: "Draft pending final drawings.".into(),
        },
    ]
});
