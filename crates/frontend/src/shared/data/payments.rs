use contracts::domain::{Package, Payment, PaymentMethod, PaymentStatus};
use once_cell::sync::Lazy;

pub static MOCK_PAYMENTS: Lazy<Vec<Payment>> = Lazy::new(|| {
    vec![
        Payment {
            id: "PAY-001".into(),
            client_id: "c1".into(),
            client_name: "Amelia Hart".into(),
            project_id: Some("PRJ-001".into()),
            amount: 599.0,
            package: Package::Premium,
            status: PaymentStatus::Completed,
            transaction_id: "TXN-8F2K1".into(),
            payment_method: PaymentMethod::Card,
            payment_date: "2024-11-06".into(),
            due_date: "2024-11-06".into(),
            description: "Premium package, initial payment".into(),
        },
        Payment {
            id: "PAY-002".into(),
            client_id: "c1".into(),
            client_name: "Amelia Hart".into(),
            project_id: Some("PRJ-001".into()),
            amount: 880.0,
            package: Package::Premium,
            status: PaymentStatus::Completed,
            transaction_id: "TXN-9A4L7".into(),
            payment_method: PaymentMethod::BankTransfer,
            payment_date: "2025-01-15".into(),
            due_date: "2025-01-10".into(),
            description: "70% stage payment".into(),
        },
        Payment {
            id: "PAY-003".into(),
            client_id: "c2".into(),
            client_name: "Oliver Bennett".into(),
            project_id: Some("PRJ-002".into()),
            amount: 399.0,
            package: Package::Standard,
            status: PaymentStatus::Pending,
            transaction_id: "TXN-2C8M3".into(),
            payment_method: PaymentMethod::Card,
            payment_date: String::new(),
            due_date: "2025-09-05".into(),
            description: "Standard package, initial payment".into(),
        },
        Payment {
            id: "PAY-004".into(),
            client_id: "c3".into(),
            client_name: "Priya Nair".into(),
            project_id: Some("PRJ-003".into()),
            amount: 599.0,
            package: Package::Premium,
            status: PaymentStatus::Completed,
            transaction_id: "TXN-5D1N9".into(),
            payment_method: PaymentMethod::Paypal,
            payment_date: "2025-02-12".into(),
            due_date: "2025-02-12".into(),
            description: "Premium package, initial payment".into(),
        },
        Payment {
            id: "PAY-005".into(),
            client_id: "c4".into(),
            client_name: "Tom Whitfield".into(),
            project_id: Some("PRJ-004".into()),
            amount: 299.0,
            package: Package::Basic,
            status: PaymentStatus::Pending,
            transaction_id: "TXN-7E6P2".into(),
            payment_method: PaymentMethod::Card,
            payment_date: String::new(),
            due_date: "2025-09-20".into(),
            description: "Basic package, initial payment".into(),
        },
        Payment {
            id: "PAY-006".into(),
            client_id: "c5".into(),
            client_name: "Sofia Marino".into(),
            project_id: Some("PRJ-005".into()),
            amount: 399.0,
            package: Package::Standard,
            status: PaymentStatus::Completed,
            transaction_id: "TXN-3F9Q5".into(),
            payment_method: PaymentMethod::BankTransfer,
            payment_date: "2024-10-04".into(),
            due_date: "2024-10-04".into(),
            description: "Standard package, initial payment".into(),
        },
        Payment {
            id: "PAY-007".into(),
            client_id: "c5".into(),
            client_name: "Sofia Marino".into(),
            project_id: Some("PRJ-005".into()),
            amount: 620.0,
            package: Package::Standard,
            status: PaymentStatus::Completed,
            transaction_id: "TXN-6G3R8".into(),
            payment_method: PaymentMethod::Card,
            payment_date: "2025-01-28".into(),
            due_date: "2025-01-25".into(),
            description: "70% stage payment".into(),
        },
        Payment {
            id: "PAY-008".into(),
            client_id: "c6".into(),
            client_name: "Daniel Okafor".into(),
            project_id: Some("PRJ-006".into()),
            amount: 299.0,
            package: Package::Basic,
            status: PaymentStatus::Failed,
            transaction_id: "TXN-1H7S4".into(),
            payment_method: PaymentMethod::Card,
            payment_date: "2024-12-18".into(),
            due_date: "2024-12-16".into(),
            description: "Basic package, initial payment".into(),
        },
        Payment {
            id: "PAY-009".into(),
            client_id: "c6".into(),
            client_name: "Daniel Okafor".into(),
            project_id: Some("PRJ-006".into()),
            amount: 299.0,
            package: Package::Basic,
            status: PaymentStatus::Refunded,
            transaction_id: "TXN-4J2T6".into(),
            payment_method: PaymentMethod::BankTransfer,
            payment_date: "2025-01-09".into(),
            due_date: "2025-01-09".into(),
            description: "Refund after rejection".into(),
        },
        Payment {
            id: "PAY-010".into(),
            client_id: "c7".into(),
            client_name: "Hannah Leslie".into(),
            project_id: Some("PRJ-007".into()),
            amount: 599.0,
            package: Package::Premium,
            status: PaymentStatus::Completed,
            transaction_id: "TXN-8K5U1".into(),
            payment_method: PaymentMethod::Card,
            payment_date: "2025-05-03".into(),
            due_date: "2025-05-03".into(),
            description: "Premium package, initial payment".into(),
        },
        Payment {
            id: "PAY-011".into(),
            client_id: "c8".into(),
            client_name: "George Adeyemi".into(),
            project_id: None,
            amount: 399.0,
            package: Package::Standard,
            status: PaymentStatus::Pending,
            transaction_id: "TXN-9L8V3".into(),
            payment_method: PaymentMethod::Paypal,
            payment_date: String::new(),
            due_date: "2025-09-30".into(),
            description: "Standard package, initial payment".into(),
        },
        Payment {
            id: "PAY-012".into(),
            client_id: "c3".into(),
            client_name: "Priya Nair".into(),
            project_id: Some("PRJ-010".into()),
            amount: 940.0,
            package: Package::Premium,
            status: PaymentStatus::Completed,
            transaction_id: "TXN-2M4W7".into(),
            payment_method: PaymentMethod::BankTransfer,
            payment_date: "2025-07-15".into(),
            due_date: "2025-07-14".into(),
            description: "70% stage payment".into(),
        },
    ]
});
