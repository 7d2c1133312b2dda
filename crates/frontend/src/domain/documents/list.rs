use crate::shared::components::table::{CellValue, Column, DataTable};
use crate::shared::components::{BadgeKind, SearchInput, StatCard, StatusBadge};
use crate::shared::data::{all_documents, MOCK_CLIENTS, MOCK_PROJECTS};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_file_size;
use contracts::domain::{Document, DocumentStatus, DocumentType};
use leptos::prelude::*;

const STATUS_OPTIONS: [DocumentStatus; 4] = [
    DocumentStatus::Pending,
    DocumentStatus::Reviewed,
    DocumentStatus::Approved,
    DocumentStatus::RequestingUpdate,
];

const TYPE_OPTIONS: [DocumentType; 7] = [
    DocumentType::ApplicationForm,
    DocumentType::FloorPlan,
    DocumentType::SitePlan,
    DocumentType::Design,
    DocumentType::Structural,
    DocumentType::Environmental,
    DocumentType::Other,
];

fn project_title(project_id: &str) -> String {
    MOCK_PROJECTS
        .iter()
        .find(|p| p.id == project_id)
        .map(|p| p.title.clone())
        .unwrap_or_else(|| "Unknown Project".into())
}

fn client_name(client_id: &str) -> String {
    MOCK_CLIENTS
        .iter()
        .find(|c| c.id == client_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Unknown Client".into())
}

fn document_columns() -> Vec<Column<Document>> {
    vec![
        Column::computed("sno", "S.No")
            .sticky(0)
            .render(|_, _, index, start| {
                view! { <span style="font-weight: 600;">{(start + index + 1).to_string()}</span> }
                    .into_any()
            }),
        Column::new("name", "Document", |d: &Document| {
            CellValue::from(d.name.clone())
        })
        .sticky(64)
        .sortable()
        .render(|value, _, _, _| {
            view! {
                <span style="display: inline-flex; align-items: center; gap: 6px; font-weight: 600; color: #0f172a;">
                    {icon("file-text")}
                    {value.display()}
                </span>
            }
            .into_any()
        }),
        Column::new("project", "Project", |d: &Document| {
            CellValue::from(project_title(&d.project_id))
        })
        .sortable(),
        Column::new("client", "Client", |d: &Document| {
            CellValue::from(client_name(&d.client_id))
        })
        .sortable(),
        Column::new("type", "Type", |d: &Document| {
            CellValue::from(d.doc_type.label())
        })
        .sortable(),
        Column::new("fileSize", "Size", |d: &Document| {
            CellValue::from(d.file_size as f64)
        })
        .sortable()
        .render(|_, d, _, _| {
            view! { <span style="font-variant-numeric: tabular-nums;">{format_file_size(d.file_size)}</span> }
                .into_any()
        }),
        Column::new("version", "Version", |d: &Document| {
            CellValue::from(d.version)
        })
        .render(|_, d, _, _| {
            view! { <span>{format!("v{}", d.version)}</span> }.into_any()
        }),
        Column::new("uploadedDate", "Uploaded", |d: &Document| {
            CellValue::from(d.uploaded_date.clone())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <span>{format_date(&value.display())}</span> }.into_any()
        }),
        Column::new("status", "Status", |d: &Document| {
            CellValue::from(d.status.as_str())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <StatusBadge status=value.display() kind=BadgeKind::Document /> }.into_any()
        }),
    ]
}

#[component]
fn DocumentCard(doc: Document, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div style="border: 1px solid #e2e8f0; border-radius: 10px; padding: 16px; margin-top: 16px; background: #f8fafc;">
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 10px;">
                <div style="display: flex; align-items: center; gap: 10px;">
                    {icon("file-text")}
                    <h3 style="font-size: 15px; font-weight: 700; margin: 0;">{doc.name.clone()}</h3>
                    <StatusBadge status=doc.status.as_str() kind=BadgeKind::Document />
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
                    <p style="color: #94a3b8; margin: 0;">"Project"</p>
                    <p style="margin: 2px 0 0 0;">{format!("{} ({})", project_title(&doc.project_id), doc.project_id)}</p>
                </div>
                <div>
                    <p style="color: #94a3b8; margin: 0;">"Client"</p>
                    <p style="margin: 2px 0 0 0;">{client_name(&doc.client_id)}</p>
                </div>
                <div>
                    <p style="color: #94a3b8; margin: 0;">"Type"</p>
                    <p style="margin: 2px 0 0 0;">{doc.doc_type.label()}</p>
                </div>
                <div>
                    <p style="color: #94a3b8; margin: 0;">"Uploaded"</p>
                    <p style="margin: 2px 0 0 0;">{format!("{} by {}", format_date(&doc.uploaded_date), doc.uploaded_by)}</p>
                </div>
                <div>
                    <p style="color: #94a3b8; margin: 0;">"Size"</p>
                    <p style="margin: 2px 0 0 0;">{format_file_size(doc.file_size)}</p>
                </div>
                <div>
                    <p style="color: #94a3b8; margin: 0;">"Version"</p>
                    <p style="margin: 2px 0 0 0;">{format!("v{}", doc.version)}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let (filter_text, set_filter_text) = signal(String::new());
    let (filter_status, set_filter_status) = signal(String::new());
    let (filter_type, set_filter_type) = signal(String::new());
    let (selected, set_selected) = signal(Option::<Document>::None);

    let documents = StoredValue::new(all_documents());

    let filtered = Signal::derive(move || {
        let q = filter_text.get().to_lowercase();
        let status = filter_status.get();
        let doc_type = filter_type.get();
        documents.with_value(|docs| {
            docs.iter()
                .filter(|d| {
                    let matches_search = q.is_empty()
                        || d.name.to_lowercase().contains(&q)
                        || d.project_id.to_lowercase().contains(&q)
                        || d.client_id.to_lowercase().contains(&q);
                    let matches_status = status.is_empty() || d.status.as_str() == status;
                    let matches_type = doc_type.is_empty() || d.doc_type.as_str() == doc_type;
                    matches_search && matches_status && matches_type
                })
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let total = documents.with_value(|docs| docs.len());
    let pending = documents.with_value(|docs| {
        docs.iter()
            .filter(|d| d.status == DocumentStatus::Pending)
            .count()
    });
    let approved = documents.with_value(|docs| {
        docs.iter()
            .filter(|d| d.status == DocumentStatus::Approved)
            .count()
    });
    let updates_needed = documents.with_value(|docs| {
        docs.iter()
            .filter(|d| d.status == DocumentStatus::RequestingUpdate)
            .count()
    });

    view! {
        <div style="max-width: 1200px; margin: 0 auto; padding: 24px;">
            <div style="display: flex; align-items: center; gap: 12px; margin-bottom: 4px;">
                <div style="width: 38px; height: 38px; border-radius: 8px; background: #f59e0b; color: #fff; display: flex; align-items: center; justify-content: center;">
                    {icon("file-text")}
                </div>
                <h1 style="font-size: 26px; font-weight: 700; margin: 0;">"Documents"</h1>
            </div>
            <p style="color: #64748b; margin: 0 0 20px 0;">"Manage and review project documents."</p>

            <div style="display: flex; gap: 14px; margin-bottom: 20px; flex-wrap: wrap;">
                <StatCard
                    label="Total"
                    value=total.to_string()
                    caption="Across all projects"
                    icon_name="file-text"
                    accent="#f59e0b"
                />
                <StatCard
                    label="Pending review"
                    value=pending.to_string()
                    caption="Awaiting a reviewer"
                    icon_name="clock"
                    accent="#eab308"
                />
                <StatCard
                    label="Approved"
                    value=approved.to_string()
                    caption="Accepted as submitted"
                    icon_name="check-circle"
                    accent="#22c55e"
                />
                <StatCard
                    label="Updates needed"
                    value=updates_needed.to_string()
                    caption="Returned to the client"
                    icon_name="x-circle"
                    accent="#f97316"
                />
            </div>

            <div style="display: flex; gap: 10px; margin-bottom: 14px; align-items: center; flex-wrap: wrap;">
                <SearchInput
                    value=filter_text
                    on_change=Callback::new(move |q| set_filter_text.set(q))
                    placeholder="Search by name or project/client id..."
                />
                <select
                    style="padding: 7px 10px; border: 1px solid #cbd5e1; border-radius: 6px; font-size: 14px; background: #fff;"
                    on:change=move |ev| set_filter_type.set(event_target_value(&ev))
                >
                    <option value="">"All types"</option>
                    {TYPE_OPTIONS
                        .iter()
                        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                        .collect_view()}
                </select>
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
                    "Showing " {move || filtered.get().len()} " of " {total}
                </span>
            </div>

            <DataTable
                rows=filtered
                columns=document_columns()
                on_row_click=Callback::new(move |doc: Document| set_selected.set(Some(doc)))
            />

            {move || selected.get().map(|doc| view! {
                <DocumentCard
                    doc=doc
                    on_close=Callback::new(move |_| set_selected.set(None))
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_tolerate_unknown_ids() {
        assert_eq!(project_title("PRJ-999"), "Unknown Project");
        assert_eq!(client_name("c999"), "Unknown Client");
        assert_eq!(project_title("PRJ-001"), "Rear kitchen extension");
    }

    #[test]
    fn test_document_columns_are_well_formed() {
        use crate::shared::components::table::column::column_key_issues;
        assert!(column_key_issues(&document_columns()).is_empty());
    }
}
