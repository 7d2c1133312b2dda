use crate::shared::components::table::{CellValue, Column, DataTable};
use crate::shared::components::{BadgeKind, SearchInput, StatCard, StatusBadge};
use crate::shared::data::{MOCK_COUNCIL, MOCK_PROJECTS};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_gbp, format_gbp_exact};
use contracts::domain::{CouncilApplication, CouncilStatus};
use leptos::prelude::*;

const STATUS_OPTIONS: [CouncilStatus; 7] = [
    CouncilStatus::Draft,
    CouncilStatus::Submitted,
    CouncilStatus::Validated,
    CouncilStatus::UnderReview,
    CouncilStatus::Approved,
    CouncilStatus::Rejected,
    CouncilStatus::AppealPending,
];

fn council_columns() -> Vec<Column<CouncilApplication>> {
    vec![
        Column::computed("sno", "S.No")
            .sticky(0)
            .render(|_, _, index, start| {
                view! { <span style="font-weight: 600;">{(start + index + 1).to_string()}</span> }
                    .into_any()
            }),
        // Drafts have no reference yet, so the cell is Missing
        Column::new("councilRef", "Reference", |a: &CouncilApplication| {
            if a.council_ref.is_empty() {
                CellValue::Missing
            } else {
                CellValue::from(a.council_ref.clone())
            }
        })
        .sticky(64)
        .sortable()
        .render(|value, _, _, _| {
            if value.is_missing() {
                view! { <span style="color: #94a3b8;">"Draft"</span> }.into_any()
            } else {
                view! { <span style="font-weight: 600; color: #0f172a;">{value.display()}</span> }
                    .into_any()
            }
        }),
        Column::new("clientName", "Client", |a: &CouncilApplication| {
            CellValue::from(a.client_name.clone())
        })
        .sortable(),
        Column::new("council", "Council", |a: &CouncilApplication| {
            CellValue::from(a.council.clone())
        })
        .sortable(),
        Column::new("applicationDate", "Applied", |a: &CouncilApplication| {
            CellValue::from(a.application_date.clone())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <span>{format_date(&value.display())}</span> }.into_any()
        }),
        Column::new("applicationFee", "Fee", |a: &CouncilApplication| {
            CellValue::from(a.application_fee)
        })
        .sortable()
        .render(|_, a, _, _| {
            view! { <span style="font-variant-numeric: tabular-nums;">{format_gbp_exact(a.application_fee)}</span> }
                .into_any()
        }),
        Column::new("status", "Status", |a: &CouncilApplication| {
            CellValue::from(a.status.as_str())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <StatusBadge status=value.display() kind=BadgeKind::Council /> }.into_any()
        }),
        Column::new("targetDecisionDate", "Target", |a: &CouncilApplication| {
            CellValue::from(a.target_decision_date.clone())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <span>{format_date(&value.display())}</span> }.into_any()
        }),
        Column::new("decisionDate", "Decided", |a: &CouncilApplication| {
            CellValue::from(a.decision_date.clone())
        })
        .sortable()
        .render(|value, _, _, _| {
            if value.is_missing() {
                view! { <span style="color: #94a3b8;">"—"</span> }.into_any()
            } else {
                view! { <span>{format_date(&value.display())}</span> }.into_any()
            }
        }),
    ]
}

#[component]
fn ApplicationCard(app: CouncilApplication, on_close: Callback<()>) -> impl IntoView {
    let project = MOCK_PROJECTS.iter().find(|p| p.id == app.project_id).cloned();

    view! {
        <div style="border: 1px solid #e2e8f0; border-radius: 10px; padding: 16px; margin-top: 16px; background: #f8fafc;">
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 10px;">
                <div style="display: flex; align-items: center; gap: 10px;">
                    <h3 style="font-size: 15px; font-weight: 700; margin: 0;">
                        {if app.council_ref.is_empty() {
                            format!("{} (draft)", app.id)
                        } else {
                            app.council_ref.clone()
                        }}
                    </h3>
                    <StatusBadge status=app.status.as_str() kind=BadgeKind::Council />
                </div>
                <button
                    style="background: none; border: none; cursor: pointer; color: #64748b; padding: 4px;"
                    title="Close"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
            </div>
            <div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 10px; font-size: 13px;">
                <div>
                    <p style="color: #94a3b8; margin: 0;">"Client"</p>
                    <p style="margin: 2px 0 0 0;">{app.client_name.clone()}</p>
                </div>
                <div>
                    <p style="color: #94a3b8; margin: 0;">"Authority"</p>
                    <p style="margin: 2px 0 0 0;">{app.council.clone()}</p>
                </div>
                <div>
                    <p style="color: #94a3b8; margin: 0;">"Fee"</p>
                    <p style="margin: 2px 0 0 0;">{format_gbp_exact(app.application_fee)}</p>
                </div>
                <div>
                    <p style="color: #94a3b8; margin: 0;">"Applied"</p>
                    <p style="margin: 2px 0 0 0;">{format_date(&app.application_date)}</p>
                </div>
                <div>
                    <p style="color: #94a3b8; margin: 0;">"Target decision"</p>
                    <p style="margin: 2px 0 0 0;">{format_date(&app.target_decision_date)}</p>
                </div>
                <div>
                    <p style="color: #94a3b8; margin: 0;">"Decided"</p>
                    <p style="margin: 2px 0 0 0;">
                        {app.decision_date
                            .as_deref()
                            .map(format_date)
                            .unwrap_or_else(|| "Awaiting decision".into())}
                    </p>
                </div>
            </div>
            {(!app.comments.is_empty()).then(|| view! {
                <p style="font-size: 13px; color: #475569; margin: 10px 0 0 0; font-style: italic;">
                    {app.comments.clone()}
                </p>
            })}
            {project.map(|p| view! {
                <p style="font-size: 13px; margin: 10px 0 0 0;">
                    <span style="color: #94a3b8;">"Project: "</span>
                    <span style="font-weight: 600;">{p.title.clone()}</span>
                    <span style="color: #64748b;">{format!(" ({})", p.id)}</span>
                </p>
            })}
        </div>
    }
}

#[component]
pub fn CouncilPage() -> impl IntoView {
    let (filter_text, set_filter_text) = signal(String::new());
    let (filter_status, set_filter_status) = signal(String::new());
    let (selected, set_selected) = signal(Option::<CouncilApplication>::None);

    let filtered = Signal::derive(move || {
        let q = filter_text.get().to_lowercase();
        let status = filter_status.get();
        MOCK_COUNCIL
            .iter()
            .filter(|a| {
                let matches_search = q.is_empty()
                    || a.client_name.to_lowercase().contains(&q)
                    || a.council.to_lowercase().contains(&q)
                    || a.council_ref.to_lowercase().contains(&q);
                let matches_status = status.is_empty() || a.status.as_str() == status;
                matches_search && matches_status
            })
            .cloned()
            .collect::<Vec<_>>()
    });

    let approved = MOCK_COUNCIL
        .iter()
        .filter(|a| a.status == CouncilStatus::Approved)
        .count();
    let in_flight = MOCK_COUNCIL
        .iter()
        .filter(|a| a.status.is_submitted() && a.decision_date.is_none())
        .count();
    let fees: f64 = MOCK_COUNCIL.iter().map(|a| a.application_fee).sum();

    view! {
        <div style="max-width: 1200px; margin: 0 auto; padding: 24px;">
            <div style="display: flex; align-items: center; gap: 12px; margin-bottom: 4px;">
                <div style="width: 38px; height: 38px; border-radius: 8px; background: #0ea5e9; color: #fff; display: flex; align-items: center; justify-content: center;">
                    {icon("landmark")}
                </div>
                <h1 style="font-size: 26px; font-weight: 700; margin: 0;">"Council Applications"</h1>
            </div>
            <p style="color: #64748b; margin: 0 0 20px 0;">"Planning applications lodged with local authorities."</p>

            <div style="display: flex; gap: 14px; margin-bottom: 20px; flex-wrap: wrap;">
                <StatCard
                    label="Applications"
                    value=MOCK_COUNCIL.len().to_string()
                    caption="Including drafts"
                    icon_name="landmark"
                    accent="#0ea5e9"
                />
                <StatCard
                    label="Approved"
                    value=approved.to_string()
                    caption="Permission granted"
                    icon_name="check-circle"
                    accent="#22c55e"
                />
                <StatCard
                    label="Awaiting decision"
                    value=in_flight.to_string()
                    caption="With the council"
                    icon_name="clock"
                    accent="#eab308"
                />
                <StatCard
                    label="Fees paid"
                    value=format_gbp(fees)
                    caption="Statutory application fees"
                    icon_name="wallet"
                />
            </div>

            <div style="display: flex; gap: 10px; margin-bottom: 14px; align-items: center; flex-wrap: wrap;">
                <SearchInput
                    value=filter_text
                    on_change=Callback::new(move |q| set_filter_text.set(q))
                    placeholder="Search by client, council or reference..."
                />
                <select
                    style="padding: 7px 10px; border: 1px solid #cbd5e1; border-radius: 6px; font-size: 14px; background: #fff;"
                    on:change=move |ev| set_filter_status.set(event_target_value(&ev))
                >
                    <option value="">"All statuses"</option>
                    {STATUS_OPTIONS
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <span style="margin-left: auto; font-size: 13px; color: #64748b;">
                    "Showing " {move || filtered.get().len()} " of " {MOCK_COUNCIL.len()}
                </span>
            </div>

            <DataTable
                rows=filtered
                columns=council_columns()
                on_row_click=Callback::new(move |app: CouncilApplication| set_selected.set(Some(app)))
            />

            {move || selected.get().map(|app| view! {
                <ApplicationCard
                    app=app
                    on_close=Callback::new(move |_| set_selected.set(None))
                />
            })}
        </div>
    }
}
