use super::details::PaymentDetails;
use crate::shared::components::table::{CellValue, Column, DataTable};
use crate::shared::components::{BadgeKind, SearchInput, StatCard, StatusBadge};
use crate::shared::data::MOCK_PAYMENTS;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_gbp, format_gbp_exact};
use contracts::domain::{Package, Payment, PaymentStatus};
use leptos::prelude::*;

const STATUS_OPTIONS: [PaymentStatus; 4] = [
    PaymentStatus::Pending,
    PaymentStatus::Completed,
    PaymentStatus::Failed,
    PaymentStatus::Refunded,
];

const PACKAGE_OPTIONS: [Package; 3] = [Package::Basic, Package::Standard, Package::Premium];

fn payment_columns() -> Vec<Column<Payment>> {
    vec![
        Column::computed("sno", "S.No")
            .sticky(0)
            .render(|_, _, index, start| {
                view! { <span style="font-weight: 600;">{(start + index + 1).to_string()}</span> }
                    .into_any()
            }),
        Column::new("id", "Payment ID", |p: &Payment| CellValue::from(p.id.clone()))
            .sticky(64)
            .sortable(),
        Column::new("clientName", "Client", |p: &Payment| {
            CellValue::from(p.client_name.clone())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <span style="font-weight: 600; color: #0f172a;">{value.display()}</span> }
                .into_any()
        }),
        Column::new("amount", "Amount", |p: &Payment| CellValue::from(p.amount))
            .sortable()
            .render(|_, p, _, _| {
                view! { <span style="font-variant-numeric: tabular-nums;">{format_gbp_exact(p.amount)}</span> }
                    .into_any()
            }),
        Column::new("package", "Package", |p: &Payment| {
            CellValue::from(p.package.label())
        })
        .sortable(),
        Column::new("paymentMethod", "Method", |p: &Payment| {
            CellValue::from(p.payment_method.label())
        })
        .sortable(),
        Column::new("status", "Status", |p: &Payment| {
            CellValue::from(p.status.as_str())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <StatusBadge status=value.display() kind=BadgeKind::Payment /> }.into_any()
        }),
        // Pending payments have no date yet, so the cell is Missing
        Column::new("paymentDate", "Paid on", |p: &Payment| {
            if p.payment_date.is_empty() {
                CellValue::Missing
            } else {
                CellValue::from(p.payment_date.clone())
            }
        })
        .sortable()
        .render(|value, _, _, _| {
            if value.is_missing() {
                view! { <span style="color: #94a3b8;">"—"</span> }.into_any()
            } else {
                view! { <span>{format_date(&value.display())}</span> }.into_any()
            }
        }),
        Column::new("dueDate", "Due", |p: &Payment| {
            CellValue::from(p.due_date.clone())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <span>{format_date(&value.display())}</span> }.into_any()
        }),
    ]
}

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let (filter_text, set_filter_text) = signal(String::new());
    let (filter_status, set_filter_status) = signal(String::new());
    let (filter_package, set_filter_package) = signal(String::new());
    let (selected, set_selected) = signal(Option::<Payment>::None);

    let filtered = Signal::derive(move || {
        let q = filter_text.get().to_lowercase();
        let status = filter_status.get();
        let package = filter_package.get();
        MOCK_PAYMENTS
            .iter()
            .filter(|p| {
                let matches_search = q.is_empty()
                    || p.client_name.to_lowercase().contains(&q)
                    || p.id.to_lowercase().contains(&q)
                    || p.transaction_id.to_lowercase().contains(&q);
                let matches_status = status.is_empty() || p.status.as_str() == status;
                let matches_package = package.is_empty() || p.package.as_str() == package;
                matches_search && matches_status && matches_package
            })
            .cloned()
            .collect::<Vec<_>>()
    });

    let revenue: f64 = MOCK_PAYMENTS
        .iter()
        .filter(|p| p.status == PaymentStatus::Completed)
        .map(|p| p.amount)
        .sum();
    let outstanding: f64 = MOCK_PAYMENTS
        .iter()
        .filter(|p| p.status == PaymentStatus::Pending)
        .map(|p| p.amount)
        .sum();
    let refunded: f64 = MOCK_PAYMENTS
        .iter()
        .filter(|p| p.status == PaymentStatus::Refunded)
        .map(|p| p.amount)
        .sum();

    view! {
        <div style="max-width: 1200px; margin: 0 auto; padding: 24px;">
            <div style="display: flex; align-items: center; gap: 12px; margin-bottom: 4px;">
                <div style="width: 38px; height: 38px; border-radius: 8px; background: #22c55e; color: #fff; display: flex; align-items: center; justify-content: center;">
                    {icon("credit-card")}
                </div>
                <h1 style="font-size: 26px; font-weight: 700; margin: 0;">"Payments"</h1>
            </div>
            <p style="color: #64748b; margin: 0 0 20px 0;">"All client transactions, package fees and stage payments."</p>

            <div style="display: flex; gap: 14px; margin-bottom: 20px; flex-wrap: wrap;">
                <StatCard
                    label="Revenue"
                    value=format_gbp(revenue)
                    caption="Completed payments"
                    icon_name="wallet"
                    accent="#22c55e"
                />
                <StatCard
                    label="Outstanding"
                    value=format_gbp(outstanding)
                    caption="Awaiting payment"
                    icon_name="clock"
                    accent="#eab308"
                />
                <StatCard
                    label="Refunded"
                    value=format_gbp(refunded)
                    caption="Returned to clients"
                    icon_name="x-circle"
                    accent="#ef4444"
                />
                <StatCard
                    label="Transactions"
                    value=MOCK_PAYMENTS.len().to_string()
                    caption="All records"
                    icon_name="credit-card"
                />
            </div>

            <div style="display: flex; gap: 10px; margin-bottom: 14px; align-items: center; flex-wrap: wrap;">
                <SearchInput
                    value=filter_text
                    on_change=Callback::new(move |q| set_filter_text.set(q))
                    placeholder="Search by client, id or transaction..."
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
                <select
                    style="padding: 7px 10px; border: 1px solid #cbd5e1; border-radius: 6px; font-size: 14px; background: #fff;"
                    on:change=move |ev| set_filter_package.set(event_target_value(&ev))
                >
                    <option value="">"All packages"</option>
                    {PACKAGE_OPTIONS
                        .iter()
                        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                        .collect_view()}
                </select>
                <span style="margin-left: auto; font-size: 13px; color: #64748b;">
                    "Showing " {move || filtered.get().len()} " of " {MOCK_PAYMENTS.len()}
                </span>
            </div>

            <DataTable
                rows=filtered
                columns=payment_columns()
                on_row_click=Callback::new(move |payment: Payment| set_selected.set(Some(payment)))
            />

            {move || selected.get().map(|payment| view! {
                <PaymentDetails
                    payment=payment
                    on_close=Callback::new(move |_| set_selected.set(None))
                />
            })}
        </div>
    }
}
