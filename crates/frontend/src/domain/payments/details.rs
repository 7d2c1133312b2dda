use crate::shared::components::{BadgeKind, StatusBadge};
use crate::shared::data::MOCK_PROJECTS;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_gbp_exact;
use contracts::domain::Payment;
use leptos::prelude::*;

fn field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div style="margin-bottom: 10px;">
            <p style="font-size: 11px; text-transform: uppercase; letter-spacing: 0.04em; color: #94a3b8; margin: 0 0 2px 0;">{label}</p>
            <p style="font-size: 14px; color: #0f172a; margin: 0;">{value}</p>
        </div>
    }
}

/// Slide-over panel with the full payment record and the project it
/// belongs to, when one is linked.
#[component]
pub fn PaymentDetails(payment: Payment, on_close: Callback<()>) -> impl IntoView {
    let project = payment
        .project_id
        .as_ref()
        .and_then(|id| MOCK_PROJECTS.iter().find(|p| &p.id == id).cloned());

    view! {
        <div style="position: fixed; top: 0; right: 0; bottom: 0; width: 380px; background: #fff; border-left: 1px solid #e2e8f0; box-shadow: -8px 0 24px rgba(15, 23, 42, 0.08); padding: 20px; overflow-y: auto; z-index: 50;">
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;">
                <h2 style="font-size: 18px; font-weight: 700; margin: 0;">{payment.id.clone()}</h2>
                <button
                    style="background: none; border: none; cursor: pointer; color: #64748b; padding: 4px;"
                    title="Close"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
            </div>

            <div style="display: flex; align-items: center; gap: 10px; margin-bottom: 14px;">
                <span style="font-size: 24px; font-weight: 700;">{format_gbp_exact(payment.amount)}</span>
                <StatusBadge status=payment.status.as_str() kind=BadgeKind::Payment />
            </div>

            {field("Client", payment.client_name.clone())}
            {field("Description", payment.description.clone())}
            {field("Package", payment.package.label())}
            {field("Method", payment.payment_method.label())}
            {field("Transaction", payment.transaction_id.clone())}
            {field(
                "Paid on",
                if payment.payment_date.is_empty() {
                    "Not yet paid".into()
                } else {
                    format_date(&payment.payment_date)
                },
            )}
            {field("Due", format_date(&payment.due_date))}

            {project.map(|p| view! {
                <h3 style="font-size: 14px; font-weight: 600; margin: 18px 0 8px 0;">"Linked project"</h3>
                <div style="border: 1px solid #e2e8f0; border-radius: 8px; padding: 10px;">
                    <p style="font-size: 13px; font-weight: 600; margin: 0 0 4px 0;">{p.title.clone()}</p>
                    <div style="display: flex; justify-content: space-between; align-items: center;">
                        <span style="font-size: 12px; color: #64748b;">{p.id.clone()}</span>
                        <StatusBadge status=p.status.as_str() kind=BadgeKind::Project />
                    </div>
                </div>
            })}
        </div>
    }
}
