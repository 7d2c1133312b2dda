use super::details::ProjectDetails;
use crate::shared::components::table::{CellValue, Column, DataTable};
use crate::shared::components::{BadgeKind, ProgressBar, SearchInput, StatCard, StatusBadge};
use crate::shared::data::MOCK_PROJECTS;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::Project;
use leptos::prelude::*;

fn project_columns() -> Vec<Column<Project>> {
    vec![
        Column::computed("sno", "S.No")
            .sticky(0)
            .render(|_, _, index, start| {
                view! { <span style="font-weight: 600;">{(start + index + 1).to_string()}</span> }
                    .into_any()
            }),
        Column::new("id", "Project ID", |p: &Project| CellValue::from(p.id.clone()))
            .sticky(64)
            .sortable(),
        Column::new("title", "Title", |p: &Project| CellValue::from(p.title.clone()))
            .sortable()
            .render(|value, _, _, _| {
                view! { <span style="font-weight: 600; color: #0f172a;">{value.display()}</span> }
                    .into_any()
            }),
        Column::new("clientName", "Client", |p: &Project| {
            CellValue::from(p.client_name.clone())
        })
        .sortable(),
        // Unassigned agents come through as Missing and render as a dash
        Column::new("agentX", "Agent X", |p: &Project| {
            CellValue::from(p.agent_x.clone())
        })
        .sortable(),
        Column::new("agentY", "Agent Y", |p: &Project| {
            CellValue::from(p.agent_y.clone())
        })
        .sortable(),
        Column::new("architect", "Architect", |p: &Project| {
            CellValue::from(p.architect.clone())
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
        Column::new("status", "Status", |p: &Project| {
            CellValue::from(p.status.as_str())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <StatusBadge status=value.display() kind=BadgeKind::Project /> }.into_any()
        }),
        Column::new("createdDate", "Created", |p: &Project| {
            CellValue::from(p.created_date.clone())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <span>{format_date(&value.display())}</span> }.into_any()
        }),
    ]
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (filter_text, set_filter_text) = signal(String::new());
    let (show_closed, set_show_closed) = signal(true);
    let (selected, set_selected) = signal(Option::<Project>::None);

    let filtered = Signal::derive(move || {
        let q = filter_text.get().to_lowercase();
        let show_closed = show_closed.get();
        MOCK_PROJECTS
            .iter()
            .filter(|p| {
                if !show_closed && p.status.is_closed() {
                    return false;
                }
                q.is_empty()
                    || p.title.to_lowercase().contains(&q)
                    || p.client_name.to_lowercase().contains(&q)
                    || p.id.to_lowercase().contains(&q)
            })
            .cloned()
            .collect::<Vec<_>>()
    });

    let total = MOCK_PROJECTS.len();
    let closed = MOCK_PROJECTS.iter().filter(|p| p.status.is_closed()).count();
    let avg_progress = if total > 0 {
        MOCK_PROJECTS.iter().map(|p| p.progress as usize).sum::<usize>() / total
    } else {
        0
    };

    view! {
        <div style="max-width: 1200px; margin: 0 auto; padding: 24px;">
            <div style="display: flex; align-items: center; gap: 12px; margin-bottom: 4px;">
                <div style="width: 38px; height: 38px; border-radius: 8px; background: #6366f1; color: #fff; display: flex; align-items: center; justify-content: center;">
                    {icon("folder")}
                </div>
                <h1 style="font-size: 26px; font-weight: 700; margin: 0;">"Projects"</h1>
            </div>
            <p style="color: #64748b; margin: 0 0 20px 0;">"Track every project from registration to council decision."</p>

            <div style="display: flex; gap: 14px; margin-bottom: 20px; flex-wrap: wrap;">
                <StatCard
                    label="Total"
                    value=total.to_string()
                    caption="All projects"
                    icon_name="folder"
                    accent="#6366f1"
                />
                <StatCard
                    label="Open"
                    value=(total - closed).to_string()
                    caption="In delivery"
                    icon_name="clock"
                    accent="#eab308"
                />
                <StatCard
                    label="Closed"
                    value=closed.to_string()
                    caption="Approved or rejected"
                    icon_name="check-circle"
                    accent="#22c55e"
                />
                <StatCard
                    label="Avg progress"
                    value=format!("{}%", avg_progress)
                    caption="Across all projects"
                    icon_name="trending-up"
                />
            </div>

            <div style="display: flex; gap: 10px; margin-bottom: 14px; align-items: center; flex-wrap: wrap;">
                <SearchInput
                    value=filter_text
                    on_change=Callback::new(move |q| set_filter_text.set(q))
                    placeholder="Search by title, client or id..."
                />
                <label style="display: inline-flex; align-items: center; gap: 6px; cursor: pointer; user-select: none; font-size: 14px;">
                    <input
                        type="checkbox"
                        prop:checked=move || show_closed.get()
                        on:change=move |ev| set_show_closed.set(event_target_checked(&ev))
                        style="cursor: pointer;"
                    />
                    <span>"Include closed"</span>
                </label>
                <span style="margin-left: auto; font-size: 13px; color: #64748b;">
                    "Showing " {move || filtered.get().len()} " of " {total}
                </span>
            </div>

            <DataTable
                rows=filtered
                columns=project_columns()
                on_row_click=Callback::new(move |project: Project| set_selected.set(Some(project)))
            />

            {move || selected.get().map(|project| view! {
                <ProjectDetails
                    project=project
                    on_close=Callback::new(move |_| set_selected.set(None))
                />
            })}
        </div>
    }
}
