//! Colored pill for domain status values.

use contracts::domain::title_case;
use leptos::prelude::*;

/// Which color table a status value is looked up in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeKind {
    #[default]
    Project,
    Payment,
    Client,
    Document,
    Council,
    Team,
}

/// `(background, text)` colors for a `(kind, status)` pair. Unknown
/// statuses fall back to a neutral gray instead of failing.
pub fn badge_colors(kind: BadgeKind, status: &str) -> (&'static str, &'static str) {
    const GRAY: (&str, &str) = ("#f3f4f6", "#1f2937");
    const BLUE: (&str, &str) = ("#dbeafe", "#1e40af");
    const YELLOW: (&str, &str) = ("#fef9c3", "#854d0e");
    const PURPLE: (&str, &str) = ("#f3e8ff", "#6b21a8");
    const INDIGO: (&str, &str) = ("#e0e7ff", "#3730a3");
    const GREEN: (&str, &str) = ("#dcfce7", "#166534");
    const RED: (&str, &str) = ("#fee2e2", "#991b1b");
    const ORANGE: (&str, &str) = ("#ffedd5", "#9a3412");

    match (kind, status) {
        (BadgeKind::Project, "pending") => GRAY,
        (BadgeKind::Project, "registered" | "docs_received" | "architect_assigned" | "measurements_done") => BLUE,
        (BadgeKind::Project, "in_review") => YELLOW,
        (BadgeKind::Project, "drawings_in_progress" | "drawings_received") => PURPLE,
        (BadgeKind::Project, "submitted_to_council") => INDIGO,
        (BadgeKind::Project, "approved") => GREEN,
        (BadgeKind::Project, "rejected") => RED,

        (BadgeKind::Payment, "pending") => YELLOW,
        (BadgeKind::Payment, "completed") => GREEN,
        (BadgeKind::Payment, "failed") => RED,
        (BadgeKind::Payment, "refunded") => BLUE,

        (BadgeKind::Client, "registered" | "docs_uploaded") => BLUE,
        (BadgeKind::Client, "reviewed") => YELLOW,
        (BadgeKind::Client, "approved") => GREEN,
        (BadgeKind::Client, "rejected") => RED,

        (BadgeKind::Document, "pending") => YELLOW,
        (BadgeKind::Document, "reviewed") => BLUE,
        (BadgeKind::Document, "approved") => GREEN,
        (BadgeKind::Document, "requesting_update") => ORANGE,

        (BadgeKind::Council, "draft") => GRAY,
        (BadgeKind::Council, "submitted" | "validated") => BLUE,
        (BadgeKind::Council, "under_review") => YELLOW,
        (BadgeKind::Council, "approved") => GREEN,
        (BadgeKind::Council, "rejected") => RED,
        (BadgeKind::Council, "appeal_pending") => ORANGE,

        (BadgeKind::Team, "active") => GREEN,
        (BadgeKind::Team, "inactive") => GRAY,

        _ => GRAY,
    }
}

/// Displays a wire-form status value ("docs_received") as a colored pill
/// with its human label ("Docs Received").
#[component]
pub fn StatusBadge(
    #[prop(into)] status: String,
    #[prop(optional)] kind: BadgeKind,
) -> impl IntoView {
    let (bg, fg) = badge_colors(kind, &status);
    view! {
        <span style=format!(
            "display: inline-block; padding: 3px 10px; border-radius: 999px; font-size: 12px; font-weight: 600; background: {}; color: {}; white-space: nowrap;",
            bg, fg
        )>
            {title_case(&status)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(badge_colors(BadgeKind::Payment, "completed").0, "#dcfce7");
        assert_eq!(badge_colors(BadgeKind::Project, "rejected").0, "#fee2e2");
        assert_eq!(
            badge_colors(BadgeKind::Council, "appeal_pending").0,
            "#ffedd5"
        );
    }

    #[test]
    fn test_unknown_status_falls_back_to_gray() {
        assert_eq!(badge_colors(BadgeKind::Client, "mystery").0, "#f3f4f6");
    }
}
