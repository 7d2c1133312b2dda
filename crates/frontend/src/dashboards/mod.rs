//! Landing screen: headline figures and the most recently updated projects.

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::components::table::{CellValue, Column, DataTable};
use crate::shared::components::{BadgeKind, ProgressBar, StatCard, StatusBadge};
use crate::shared::data::{dashboard_stats, MOCK_PROJECTS};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_gbp;
use contracts::domain::Project;
use leptos::prelude::*;

const RECENT_LIMIT: usize = 5;

fn recent_columns() -> Vec<Column<Project>> {
    vec![
        Column::new("title", "Project", |p: &Project| {
            CellValue::from(p.title.clone())
        })
        .sticky(0)
        .sortable()
        .render(|value, _, _, _| {
            view! { <span style="font-weight: 600; color: #0f172a;">{value.display()}</span> }
                .into_any()
        }),
        Column::new("clientName", "Client", |p: &Project| {
            CellValue::from(p.client_name.clone())
        })
        .sortable(),
        Column::new("status", "Status", |p: &Project| {
            CellValue::from(p.status.as_str())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <StatusBadge status=value.display() kind=BadgeKind::Project /> }.into_any()
        }),
        Column::new("progress", "Progress", |p: &Project| {
            CellValue::from(p.progress)
        })
        .sortable()
        .render(|_, p, _, _| {
            view! {
                <div style="min-width: 120px;">
                    <ProgressBar value=p.progress as f64 />
                </div>
            }
            .into_any()
        }),
        Column::new("updatedDate", "Updated", |p: &Project| {
            CellValue::from(p.updated_date.clone())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <span>{format_date(&value.display())}</span> }.into_any()
        }),
    ]
}

/// Projects ordered by most recent update, truncated for the dashboard.
fn recent_projects() -> Vec<Project> {
    let mut projects: Vec<Project> = MOCK_PROJECTS.to_vec();
    projects.sort_by(|a, b| b.updated_date.cmp(&a.updated_date));
    projects.truncate(RECENT_LIMIT);
    projects
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let stats = dashboard_stats();
    let recent = Signal::derive(recent_projects);

    view! {
        <div style="max-width: 1200px; margin: 0 auto; padding: 24px;">
            <div style="display: flex; align-items: center; gap: 12px; margin-bottom: 4px;">
                <div style="width: 38px; height: 38px; border-radius: 8px; background: #1d4ed8; color: #fff; display: flex; align-items: center; justify-content: center;">
                    {icon("layout-dashboard")}
                </div>
                <h1 style="font-size: 26px; font-weight: 700; margin: 0;">"Dashboard"</h1>
            </div>
            <p style="color: #64748b; margin: 0 0 20px 0;">"A snapshot of clients, projects and money across the practice."</p>

            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 14px; margin-bottom: 24px;">
                <StatCard
                    label="Clients"
                    value=stats.total_clients.to_string()
                    caption="Registered"
                    icon_name="users"
                />
                <StatCard
                    label="Projects"
                    value=stats.total_projects.to_string()
                    caption=format!("{} active", stats.active_projects)
                    icon_name="folder"
                    accent="#6366f1"
                />
                <StatCard
                    label="Completed"
                    value=stats.completed_projects.to_string()
                    caption="Approved or rejected"
                    icon_name="check-circle"
                    accent="#22c55e"
                />
                <StatCard
                    label="Revenue"
                    value=format_gbp(stats.total_revenue)
                    caption="Completed payments"
                    icon_name="wallet"
                    accent="#22c55e"
                />
                <StatCard
                    label="Pending payments"
                    value=stats.pending_payments.to_string()
                    caption="Awaiting settlement"
                    icon_name="clock"
                    accent="#eab308"
                />
                <StatCard
                    label="Council applications"
                    value=stats.submitted_applications.to_string()
                    caption=format!("{} approved", stats.approved_applications)
                    icon_name="landmark"
                    accent="#0ea5e9"
                />
            </div>

            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 10px;">
                <h2 style="font-size: 17px; font-weight: 700; margin: 0;">"Recently updated projects"</h2>
                <button
                    style="background: none; border: none; color: #1d4ed8; font-size: 13px; cursor: pointer; display: inline-flex; align-items: center; gap: 4px;"
                    on:click=move |_| ctx.navigate(Page::Projects)
                >
                    "View all" {icon("chevron-right")}
                </button>
            </div>

            <DataTable
                rows=recent
                columns=recent_columns()
                on_row_click=Callback::new(move |_: Project| ctx.navigate(Page::Projects))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_projects_newest_first() {
        let recent = recent_projects();
        assert!(recent.len() <= RECENT_LIMIT);
        for pair in recent.windows(2) {
            assert!(pair[0].updated_date >= pair[1].updated_date);
        }
    }
}
