use crate::shared::components::{BadgeKind, ProgressBar, StatusBadge};
use crate::shared::date_utils::{days_since, format_date};
use crate::shared::icons::icon;
use contracts::domain::Project;
use leptos::prelude::*;

const JOURNEY_STEPS: [&str; 10] = [
    "Registered",
    "Documents received",
    "Initial review",
    "Architect assigned",
    "Measurements taken",
    "Drawings in progress",
    "Drawings received",
    "Submitted to council",
    "Council review",
    "Decision",
];

/// Number of journey steps covered by a progress percentage.
fn completed_steps(progress: u8) -> usize {
    (progress as usize * JOURNEY_STEPS.len()) / 100
}

fn field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div style="margin-bottom: 10px;">
            <p style="font-size: 11px; text-transform: uppercase; letter-spacing: 0.04em; color: #94a3b8; margin: 0 0 2px 0;">{label}</p>
            <p style="font-size: 14px; color: #0f172a; margin: 0;">{value}</p>
        </div>
    }
}

/// Slide-over panel with the full project record, the delivery journey
/// derived from progress, and the uploaded documents.
#[component]
pub fn ProjectDetails(project: Project, on_close: Callback<()>) -> impl IntoView {
    let done = completed_steps(project.progress);
    let age = days_since(&project.created_date)
        .map(|d| format!("{} days ago", d))
        .unwrap_or_else(|| project.created_date.clone());
    let team = [
        ("Agent X", project.agent_x.clone()),
        ("Agent Y", project.agent_y.clone()),
        ("Architect", project.architect.clone()),
    ];

    view! {
        <div style="position: fixed; top: 0; right: 0; bottom: 0; width: 400px; background: #fff; border-left: 1px solid #e2e8f0; box-shadow: -8px 0 24px rgba(15, 23, 42, 0.08); padding: 20px; overflow-y: auto; z-index: 50;">
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;">
                <h2 style="font-size: 18px; font-weight: 700; margin: 0;">{project.title.clone()}</h2>
                <button
                    style="background: none; border: none; cursor: pointer; color: #64748b; padding: 4px;"
                    title="Close"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
            </div>

            <div style="margin-bottom: 14px;">
                <StatusBadge status=project.status.as_str() kind=BadgeKind::Project />
            </div>

            {field("Project ID", project.id.clone())}
            {field("Client", project.client_name.clone())}
            {field("Service", project.service_type.label())}
            {field("Location", format!("{} ({})", project.location, project.postcode))}
            {field("Created", format!("{} ({})", format_date(&project.created_date), age))}
            {field("Estimated completion", format_date(&project.estimated_completion_date))}
            {field(
                "Council reference",
                if project.council_reference.is_empty() {
                    "Not yet submitted".into()
                } else {
                    format!("{} ({})", project.council_reference, project.council_name)
                },
            )}

            <div style="margin: 14px 0;">
                <ProgressBar value=project.progress as f64 label="Overall progress" />
            </div>

            <h3 style="font-size: 14px; font-weight: 600; margin: 18px 0 8px 0;">"Team"</h3>
            {team
                .into_iter()
                .map(|(role, name)| view! {
                    <div style="display: flex; justify-content: space-between; font-size: 13px; padding: 4px 0; border-bottom: 1px solid #f1f5f9;">
                        <span style="color: #64748b;">{role}</span>
                        <span style=move || if name.is_some() { "color: #0f172a;" } else { "color: #94a3b8;" }>
                            {name.clone().unwrap_or_else(|| "Unassigned".into())}
                        </span>
                    </div>
                })
                .collect_view()}

            <h3 style="font-size: 14px; font-weight: 600; margin: 18px 0 8px 0;">"Journey"</h3>
            {JOURNEY_STEPS
                .iter()
                .enumerate()
                .map(|(i, step)| {
                    let reached = i < done;
                    view! {
                        <div style="display: flex; align-items: center; gap: 8px; padding: 4px 0;">
                            <span style=move || format!(
                                "width: 18px; height: 18px; border-radius: 50%; display: inline-flex; align-items: center; justify-content: center; font-size: 10px; color: #fff; background: {};",
                                if reached { "#22c55e" } else { "#cbd5e1" },
                            )>
                                {(i + 1).to_string()}
                            </span>
                            <span style=move || if reached {
                                "font-size: 13px; color: #0f172a;"
                            } else {
                                "font-size: 13px; color: #94a3b8;"
                            }>
                                {*step}
                            </span>
                        </div>
                    }
                })
                .collect_view()}

            <h3 style="font-size: 14px; font-weight: 600; margin: 18px 0 8px 0;">
                "Documents (" {project.documents.len()} ")"
            </h3>
            {if project.documents.is_empty() {
                view! { <p style="font-size: 13px; color: #94a3b8; margin: 0;">"No documents uploaded."</p> }
                    .into_any()
            } else {
                project
                    .documents
                    .iter()
                    .map(|d| view! {
                        <div style="border: 1px solid #e2e8f0; border-radius: 8px; padding: 10px; margin-bottom: 8px;">
                            <div style="display: flex; align-items: center; gap: 6px; margin-bottom: 4px;">
                                {icon("file-text")}
                                <span style="font-size: 13px; font-weight: 600;">{d.name.clone()}</span>
                            </div>
                            <div style="display: flex; justify-content: space-between; align-items: center;">
                                <span style="font-size: 12px; color: #64748b;">
                                    {format_date(&d.uploaded_date)}
                                </span>
                                <StatusBadge status=d.status.as_str() kind=BadgeKind::Document />
                            </div>
                        </div>
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_steps_tracks_progress() {
        assert_eq!(completed_steps(0), 0);
        assert_eq!(completed_steps(5), 0);
        assert_eq!(completed_steps(10), 1);
        assert_eq!(completed_steps(55), 5);
        assert_eq!(completed_steps(100), 10);
    }
}
