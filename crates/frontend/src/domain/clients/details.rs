use crate::shared::components::{BadgeKind, StatusBadge};
use crate::shared::data::{MOCK_PAYMENTS, MOCK_PROJECTS};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_gbp;
use contracts::domain::Client;
use leptos::prelude::*;

fn field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div style="margin-bottom: 10px;">
            <p style="font-size: 11px; text-transform: uppercase; letter-spacing: 0.04em; color: #94a3b8; margin: 0 0 2px 0;">{label}</p>
            <p style="font-size: 14px; color: #0f172a; margin: 0;">{value}</p>
        </div>
    }
}

/// Slide-over panel with the client record and its related projects and
/// payments, looked up by client id.
#[component]
pub fn ClientDetails(client: Client, on_close: Callback<()>) -> impl IntoView {
    let projects: Vec<_> = MOCK_PROJECTS
        .iter()
        .filter(|p| p.client_id == client.id)
        .cloned()
        .collect();
    let paid: f64 = MOCK_PAYMENTS
        .iter()
        .filter(|p| {
            p.client_id == client.id
                && p.status == contracts::domain::PaymentStatus::Completed
        })
        .map(|p| p.amount)
        .sum();

    view! {
        <div style="position: fixed; top: 0; right: 0; bottom: 0; width: 380px; background: #fff; border-left: 1px solid #e2e8f0; box-shadow: -8px 0 24px rgba(15, 23, 42, 0.08); padding: 20px; overflow-y: auto; z-index: 50;">
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;">
                <h2 style="font-size: 18px; font-weight: 700; margin: 0;">{client.name.clone()}</h2>
                <button
                    style="background: none; border: none; cursor: pointer; color: #64748b; padding: 4px;"
                    title="Close"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
            </div>

            <div style="margin-bottom: 14px;">
                <StatusBadge status=client.status.as_str() kind=BadgeKind::Client />
            </div>

            {field("Client ID", client.id.clone())}
            {field("Email", client.email.clone())}
            {field("Phone", client.phone.clone())}
            {field("Address", format!("{}, {}", client.address, client.postcode))}
            {field("Service", client.service_type.label())}
            {field("Package", format!("{} ({})", client.package.label(), format_gbp(client.package.price())))}
            {field("Joined", format_date(&client.joined_date))}
            {field("Payment status", client.payment_status.label())}
            {field("Total paid", format_gbp(paid))}

            <h3 style="font-size: 14px; font-weight: 600; margin: 18px 0 8px 0;">
                "Projects (" {projects.len()} ")"
            </h3>
            {projects
                .into_iter()
                .map(|p| view! {
                    <div style="border: 1px solid #e2e8f0; border-radius: 8px; padding: 10px; margin-bottom: 8px;">
                        <p style="font-size: 13px; font-weight: 600; margin: 0 0 4px 0;">{p.title.clone()}</p>
                        <div style="display: flex; justify-content: space-between; align-items: center;">
                            <span style="font-size: 12px; color: #64748b;">{p.id.clone()}</span>
                            <StatusBadge status=p.status.as_str() kind=BadgeKind::Project />
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
