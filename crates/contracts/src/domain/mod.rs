pub mod client;
pub mod council;
pub mod document;
pub mod payment;
pub mod project;
pub mod team;

pub use client::{Client, ClientStatus, Package, PaymentState, ServiceType};
pub use council::{CouncilApplication, CouncilStatus};
pub use document::{Document, DocumentStatus, DocumentType};
pub use payment::{Payment, PaymentMethod, PaymentStatus};
pub use project::{Project, ProjectStatus};
pub use team::{Team, TeamMember, TeamRole};

/// Human-readable form of a snake_case status value.
/// Example: "docs_received" -> "Docs Received"
pub fn title_case(status: &str) -> String {
    status
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("docs_received"), "Docs Received");
        assert_eq!(title_case("approved"), "Approved");
        assert_eq!(title_case(""), "");
    }
}
