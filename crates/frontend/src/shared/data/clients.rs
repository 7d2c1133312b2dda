use contracts::domain::{Client, ClientStatus, Package, PaymentState, ServiceType};
use once_cell::sync::Lazy;

pub static MOCK_CLIENTS: Lazy<Vec<Client>> = Lazy::new(|| {
    vec![
        Client {
            id: "c1".into(),
            name: "Amelia Hart".into(),
            email: "amelia.hart@example.co.uk".into(),
            phone: "+44 7700 900101".into(),
            address: "14 Bramley Road, Ealing".into(),
            postcode: "W5 2JX".into(),
            service_type: ServiceType::Extension,
            status: ClientStatus::Approved,
            joined_date: "2024-11-04".into(),
            payment_status: PaymentState::Completed,
            package: Package::Premium,
        },
        Client {
            id: "c2".into(),
            name: "Oliver Bennett".into(),
            email: "oliver.bennett@example.co.uk".into(),
            phone: "+44 7700 900102".into(),
            address: "3 Priory Lane, Richmond".into(),
            postcode: "TW10 7DL".into(),
            service_type: ServiceType::Residential,
            status: ClientStatus::DocsUploaded,
            joined_date: "2025-01-12".into(),
            payment_status: PaymentState::Pending,
            package: Package::Standard,
        },
        Client {
            id: "c3".into(),
            name: "Priya Nair".into(),
            email: "priya.nair@example.co.uk".into(),
            phone: "+44 7700 900103".into(),
            address: "88 Station Approach, Croydon".into(),
            postcode: "CR0 2RD".into(),
            service_type: ServiceType::Commercial,
            status: ClientStatus::Reviewed,
            joined_date: "2025-02-03".into(),
            payment_status: PaymentState::Completed,
            package: Package::Premium,
        },
        Client {
            id: "c4".into(),
            name: "Tom Whitfield".into(),
            email: "tom.whitfield@example.co.uk".into(),
            phone: "+44 7700 900104".into(),
            address: "27 Meadow Close, Barnet".into(),
            postcode: "EN5 4HJ".into(),
            service_type: ServiceType::Extension,
            status: ClientStatus::Registered,
            joined_date: "2025-03-18".into(),
            payment_status: PaymentState::Pending,
            package: Package::Basic,
        },
        Client {
            id: "c5".into(),
            name: "Sofia Marino".into(),
            email: "sofia.marino@example.co.uk".into(),
            phone: "+44 7700 900105".into(),
            address: "5 Harbour Street, Greenwich".into(),
            postcode: "SE10 9EZ".into(),
            service_type: ServiceType::Residential,
            status: ClientStatus::Approved,
            joined_date: "2024-09-27".into(),
            payment_status: PaymentState::Completed,
            package: Package::Standard,
        },
        Client {
            id: "c6".into(),
            name: "Daniel Okafor".into(),
            email: "daniel.okafor@example.co.uk".into(),
            phone: "+44 7700 900106".into(),
            address: "112 Victoria Parade, Hounslow".into(),
            postcode: "TW3 1HT".into(),
            service_type: ServiceType::Commercial,
            status: ClientStatus::Rejected,
            joined_date: "2024-12-09".into(),
            payment_status: PaymentState::Failed,
            package: Package::Basic,
        },
        Client {
            id: "c7".into(),
            name: "Hannah Leslie".into(),
            email: "hannah.leslie@example.co.uk".into(),
            phone: "+44 7700 900107".into(),
            address: "41 Orchard Way, Kingston".into(),
            postcode: "KT2 5PR".into(),
            service_type: ServiceType::Extension,
            status: ClientStatus::DocsUploaded,
            joined_date: "2025-04-22".into(),
            payment_status: PaymentState::Completed,
            package: Package::Premium,
        },
        Client {
            id: "c8".into(),
            name: "George Adeyemi".into(),
            email: "george.adeyemi@example.co.uk".into(),
            phone: "+44 7700 900108".into(),
            address: "9 Chapel Hill, Wimbledon".into(),
            postcode: "SW19 7NE".into(),
            service_type: ServiceType::Residential,
            status: ClientStatus::Registered,
            joined_date: "2025-05-30".into(),
            payment_status: PaymentState::Pending,
            package: Package::Standard,
        },
    ]
});
