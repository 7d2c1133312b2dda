use contracts::domain::{
    Document, DocumentStatus, DocumentType, Project, ProjectStatus, ServiceType,
};
use once_cell::sync::Lazy;

fn doc(
    id: &str,
    project_id: &str,
    client_id: &str,
    name: &str,
    doc_type: DocumentType,
    uploaded_date: &str,
    file_size: u64,
    status: DocumentStatus,
) -> Document {
    Document {
        id: id.into(),
        project_id: project_id.into(),
        client_id: client_id.into(),
        name: name.into(),
        doc_type,
        uploaded_date: uploaded_date.into(),
        uploaded_by: "client".into(),
        file_size,
        status,
        version: 1,
    }
}

pub static MOCK_PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            id: "PRJ-001".into(),
            client_id: "c1".into(),
            client_name: "Amelia Hart".into(),
            title: "Rear kitchen extension".into(),
            description: "Single-storey rear extension with roof lantern.".into(),
            service_type: ServiceType::Extension,
            location: "Ealing, London".into(),
            postcode: "W5 2JX".into(),
            status: ProjectStatus::Approved,
            created_date: "2024-11-10".into(),
            updated_date: "2025-04-02".into(),
            agent_x: Some("Ravi Kulkarni".into()),
            agent_y: Some("Beth Connolly".into()),
            architect: Some("Priya Shah".into()),
            progress: 100,
            estimated_completion_date: "2025-03-28".into(),
            council_reference: "ELG/2025/0143".into(),
            council_name: "Ealing Council".into(),
            documents: vec![
                doc(
                    "d1",
                    "PRJ-001",
                    "c1",
                    "Floor plan v1.pdf",
                    DocumentType::FloorPlan,
                    "2024-11-20",
                    1_248_576,
                    DocumentStatus::Approved,
                ),
                doc(
                    "d2",
                    "PRJ-001",
                    "c1",
                    "Site plan.pdf",
                    DocumentType::SitePlan,
                    "2024-11-22",
                    845_312,
                    DocumentStatus::Approved,
                ),
            ],
        },
        Project {
            id: "PRJ-002".into(),
            client_id: "c2".into(),
            client_name: "Oliver Bennett".into(),
            title: "Loft conversion".into(),
            description: "Dormer loft conversion with two bedrooms.".into(),
            service_type: ServiceType::Residential,
            location: "Richmond, London".into(),
            postcode: "TW10 7DL".into(),
            status: ProjectStatus::DrawingsInProgress,
            created_date: "2025-01-20".into(),
            updated_date: "2025-06-11".into(),
            agent_x: Some("Ravi Kulkarni".into()),
            agent_y: None,
            architect: Some("Marcus Webb".into()),
            progress: 55,
            estimated_completion_date: "2025-10-15".into(),
            council_reference: String::new(),
            council_name: "Richmond upon Thames".into(),
            documents: vec![doc(
                "d3",
                "PRJ-002",
                "c2",
                "Measured survey.pdf",
                DocumentType::Structural,
                "2025-02-14",
                2_411_724,
                DocumentStatus::Reviewed,
            )],
        },
        Project {
            id: "PRJ-003".into(),
            client_id: "c3".into(),
            client_name: "Priya Nair".into(),
            title: "Shopfront refurbishment".into(),
            description: "Change of use and new frontage for retail unit.".into(),
            service_type: ServiceType::Commercial,
            location: "Croydon, London".into(),
            postcode: "CR0 2RD".into(),
            status: ProjectStatus::SubmittedToCouncil,
            created_date: "2025-02-10".into(),
            updated_date: "2025-07-01".into(),
            agent_x: Some("Leah Morton".into()),
            agent_y: Some("Arjun Mehta".into()),
            architect: Some("Priya Shah".into()),
            progress: 85,
            estimated_completion_date: "2025-11-30".into(),
            council_reference: "CRO/2025/0892".into(),
            council_name: "Croydon Council".into(),
            documents: vec![
                doc(
                    "d6",
                    "PRJ-003",
                    "c3",
                    "Planning application.pdf",
                    DocumentType::ApplicationForm,
                    "2025-06-20",
                    486_400,
                    DocumentStatus::Approved,
                ),
                doc(
                    "d7",
                    "PRJ-003",
                    "c3",
                    "Noise assessment.pdf",
                    DocumentType::Environmental,
                    "2025-06-24",
                    3_145_728,
                    DocumentStatus::RequestingUpdate,
                ),
            ],
        },
        Project {
            id: "PRJ-004".into(),
            client_id: "c4".into(),
            client_name: "Tom Whitfield".into(),
            title: "Garage conversion".into(),
            description: "Attached garage converted to home office.".into(),
            service_type: ServiceType::Extension,
            location: "Barnet, London".into(),
            postcode: "EN5 4HJ".into(),
            status: ProjectStatus::Registered,
            created_date: "2025-03-25".into(),
            updated_date: "2025-04-01".into(),
            agent_x: None,
            agent_y: None,
            architect: None,
            progress: 10,
            estimated_completion_date: "2026-01-20".into(),
            council_reference: String::new(),
            council_name: "Barnet Council".into(),
            documents: vec![],
        },
        Project {
            id: "PRJ-005".into(),
            client_id: "c5".into(),
            client_name: "Sofia Marino".into(),
            title: "Two-storey side extension".into(),
            description: "Side extension with en-suite above utility room.".into(),
            service_type: ServiceType::Residential,
            location: "Greenwich, London".into(),
            postcode: "SE10 9EZ".into(),
            status: ProjectStatus::Approved,
            created_date: "2024-10-02".into(),
            updated_date: "2025-03-14".into(),
            agent_x: Some("Leah Morton".into()),
            agent_y: Some("Beth Connolly".into()),
            architect: Some("Marcus Webb".into()),
            progress: 100,
            estimated_completion_date: "2025-03-01".into(),
            council_reference: "GRN/2024/1677".into(),
            council_name: "Royal Borough of Greenwich".into(),
            documents: vec![doc(
                "d4",
                "PRJ-005",
                "c5",
                "Design pack.pdf",
                DocumentType::Design,
                "2024-11-05",
                5_662_310,
                DocumentStatus::Approved,
            )],
        },
        Project {
            id: "PRJ-006".into(),
            client_id: "c6".into(),
            client_name: "Daniel Okafor".into(),
            title: "Warehouse mezzanine".into(),
            description: "New mezzanine floor for storage unit.".into(),
            service_type: ServiceType::Commercial,
            location: "Hounslow, London".into(),
            postcode: "TW3 1HT".into(),
            status: ProjectStatus::Rejected,
            created_date: "2024-12-15".into(),
            updated_date: "2025-05-20".into(),
            agent_x: Some("Ravi Kulkarni".into()),
            agent_y: Some("Arjun Mehta".into()),
            architect: None,
            progress: 60,
            estimated_completion_date: "2025-09-01".into(),
            council_reference: "HOU/2025/0311".into(),
            council_name: "Hounslow Council".into(),
            documents: vec![],
        },
        Project {
            id: "PRJ-007".into(),
            client_id: "c7".into(),
            client_name: "Hannah Leslie".into(),
            title: "Wraparound extension".into(),
            description: "Rear and side wraparound with open-plan kitchen.".into(),
            service_type: ServiceType::Extension,
            location: "Kingston, London".into(),
            postcode: "KT2 5PR".into(),
            status: ProjectStatus::InReview,
            created_date: "2025-05-01".into(),
            updated_date: "2025-07-18".into(),
            agent_x: Some("Leah Morton".into()),
            agent_y: None,
            architect: None,
            progress: 30,
            estimated_completion_date: "2026-02-27".into(),
            council_reference: String::new(),
            council_name: "Kingston upon Thames".into(),
            documents: vec![doc(
                "d5",
                "PRJ-007",
                "c7",
                "Application form.pdf",
                DocumentType::ApplicationForm,
                "2025-05-06",
                204_800,
                DocumentStatus::Pending,
            )],
        },
        Project {
            id: "PRJ-008".into(),
            client_id: "c1".into(),
            client_name: "Amelia Hart".into(),
            title: "Garden annexe".into(),
            description: "Detached garden annexe with studio layout.".into(),
            service_type: ServiceType::Residential,
            location: "Ealing, London".into(),
            postcode: "W5 2JX".into(),
            status: ProjectStatus::MeasurementsDone,
            created_date: "2025-04-08".into(),
            updated_date: "2025-08-02".into(),
            agent_x: Some("Ravi Kulkarni".into()),
            agent_y: Some("Beth Connolly".into()),
            architect: Some("Priya Shah".into()),
            progress: 45,
            estimated_completion_date: "2026-03-31".into(),
            council_reference: String::new(),
            council_name: "Ealing Council".into(),
            documents: vec![doc(
                "d8",
                "PRJ-008",
                "c1",
                "Boundary photos.zip",
                DocumentType::Other,
                "2025-07-29",
                9_871_360,
                DocumentStatus::Pending,
            )],
        },
        Project {
            id: "PRJ-009".into(),
            client_id: "c8".into(),
            client_name: "George Adeyemi".into(),
            title: "Porch and driveway".into(),
            description: "Front porch addition with dropped kerb application.".into(),
            service_type: ServiceType::Residential,
            location: "Wimbledon, London".into(),
            postcode: "SW19 7NE".into(),
            status: ProjectStatus::Pending,
            created_date: "2025-06-03".into(),
            updated_date: "2025-06-03".into(),
            agent_x: None,
            agent_y: None,
            architect: None,
            progress: 5,
            estimated_completion_date: "2026-04-30".into(),
            council_reference: String::new(),
            council_name: "Merton Council".into(),
            documents: vec![],
        },
        Project {
            id: "PRJ-010".into(),
            client_id: "c3".into(),
            client_name: "Priya Nair".into(),
            title: "Office fit-out".into(),
            description: "Internal reconfiguration of first-floor offices.".into(),
            service_type: ServiceType::Commercial,
            location: "Croydon, London".into(),
            postcode: "CR0 2RD".into(),
            status: ProjectStatus::DocsReceived,
            created_date: "2025-07-12".into(),
            updated_date: "2025-08-10".into(),
            agent_x: Some("Leah Morton".into()),
            agent_y: None,
            architect: None,
            progress: 20,
            estimated_completion_date: "2026-05-15".into(),
            council_reference: String::new(),
            council_name: "Croydon Council".into(),
            documents: vec![],
        },
    ]
});
