use super::details::ClientDetails;
use crate::shared::components::table::{CellValue, Column, DataTable};
use crate::shared::components::{BadgeKind, SearchInput, StatCard, StatusBadge};
use crate::shared::data::MOCK_CLIENTS;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::{Client, ClientStatus};
use leptos::prelude::*;

const STATUS_OPTIONS: [ClientStatus; 5] = [
    ClientStatus::Registered,
    ClientStatus::DocsUploaded,
    ClientStatus::Reviewed,
    ClientStatus::Approved,
    ClientStatus::Rejected,
];

fn client_columns() -> Vec<Column<Client>> {
    vec![
        Column::computed("sno", "S.No")
            .sticky(0)
            .render(|_, _, index, start| {
                view! { <span style="font-weight: 600;">{(start + index + 1).to_string()}</span> }
                    .into_any()
            }),
        Column::new("name", "Name", |c: &Client| CellValue::from(c.name.clone()))
            .sortable()
            .render(|value, _, _, _| {
                view! { <span style="font-weight: 600; color: #0f172a;">{value.display()}</span> }
                    .into_any()
            }),
        Column::new("email", "Email", |c: &Client| CellValue::from(c.email.clone())).sortable(),
        Column::new("postcode", "Postcode", |c: &Client| {
            CellValue::from(c.postcode.clone())
        }),
        Column::new("serviceType", "Service", |c: &Client| {
            CellValue::from(c.service_type.label())
        })
        .sortable(),
        Column::new("package", "Package", |c: &Client| {
            CellValue::from(c.package.label())
        })
        .sortable(),
        Column::new("status", "Status", |c: &Client| {
            CellValue::from(c.status.as_str())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <StatusBadge status=value.display() kind=BadgeKind::Client /> }.into_any()
        }),
        Column::new("joinedDate", "Joined", |c: &Client| {
            CellValue::from(c.joined_date.clone())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <span>{format_date(&value.display())}</span> }.into_any()
        }),
    ]
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    let (filter_text, set_filter_text) = signal(String::new());
    let (filter_status, set_filter_status) = signal(String::new());
    let (selected, set_selected) = signal(Option::<Client>::None);

    let filtered = Signal::derive(move || {
        let q = filter_text.get().to_lowercase();
        let status = filter_status.get();
        MOCK_CLIENTS
            .iter()
            .filter(|c| {
                let matches_search = q.is_empty()
                    || c.name.to_lowercase().contains(&q)
                    || c.email.to_lowercase().contains(&q)
                    || c.id.to_lowercase().contains(&q);
                let matches_status = status.is_empty() || c.status.as_str() == status;
                matches_search && matches_status
            })
            .cloned()
            .collect::<Vec<_>>()
    });

    let approved = MOCK_CLIENTS
        .iter()
        .filter(|c| c.status == ClientStatus::Approved)
        .count();
    let in_review = MOCK_CLIENTS
        .iter()
        .filter(|c| matches!(c.status, ClientStatus::Reviewed | ClientStatus::DocsUploaded))
        .count();

    view! {
        <div style="max-width: 1200px; margin: 0 auto; padding: 24px;">
            <div style="display: flex; align-items: center; gap: 12px; margin-bottom: 4px;">
                <div style="width: 38px; height: 38px; border-radius: 8px; background: #3b82f6; color: #fff; display: flex; align-items: center; justify-content: center;">
                    {icon("users")}
                </div>
                <h1 style="font-size: 26px; font-weight: 700; margin: 0;">"Clients"</h1>
            </div>
            <p style="color: #64748b; margin: 0 0 20px 0;">"Manage registered clients and their onboarding status."</p>

            <div style="display: flex; gap: 14px; margin-bottom: 20px; flex-wrap: wrap;">
                <StatCard
                    label="Total"
                    value=MOCK_CLIENTS.len().to_string()
                    caption="Registered clients"
                    icon_name="users"
                />
                <StatCard
                    label="Approved"
                    value=approved.to_string()
                    caption="Cleared for delivery"
                    icon_name="check-circle"
                    accent="#22c55e"
                />
                <StatCard
                    label="In review"
                    value=in_review.to_string()
                    caption="Docs uploaded or under review"
                    icon_name="clock"
                    accent="#eab308"
                />
            </div>

            <div style="display: flex; gap: 10px; margin-bottom: 14px; align-items: center; flex-wrap: wrap;">
                <SearchInput
                    value=filter_text
                    on_change=Callback::new(move |q| set_filter_text.set(q))
                    placeholder="Search by name, email or id..."
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
                    "Showing " {move || filtered.get().len()} " of " {MOCK_CLIENTS.len()}
                </span>
            </div>

            <DataTable
                rows=filtered
                columns=client_columns()
                on_row_click=Callback::new(move |client: Client| set_selected.set(Some(client)))
            />

            {move || selected.get().map(|client| view! {
                <ClientDetails
                    client=client
                    on_close=Callback::new(move |_| set_selected.set(None))
                />
            })}
        </div>
    }
}
