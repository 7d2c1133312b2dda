//! Generic sortable table shared by every admin screen.

use super::column::{column_key_issues, Column};
use super::sort::{display_order, SortState};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn header_cell_style<T>(col: &Column<T>) -> String {
    let mut style = String::from(
        "position: sticky; top: 0; background: #f8fafc; z-index: 10; \
         padding: 10px 12px; text-align: left; font-size: 13px; font-weight: 600; \
         color: #0f172a; white-space: nowrap; border-bottom: 2px solid #e2e8f0;",
    );
    if col.sortable {
        style.push_str(" cursor: pointer; user-select: none;");
    }
    if col.sticky {
        // Pinned headers sit above pinned body cells and scrolling content
        style.push_str(&format!(" left: {}px; z-index: 12;", col.left));
    }
    style
}

fn body_cell_style<T>(col: &Column<T>, bg: &str) -> String {
    let mut style =
        String::from("padding: 10px 12px; color: #334155; white-space: nowrap;");
    if col.sticky {
        style.push_str(&format!(
            " position: sticky; left: {}px; z-index: 2; background: {};",
            col.left, bg
        ));
    }
    style
}

/// Renders `rows` as a table with click-to-sort headers, optionally pinned
/// columns and a row-click callback.
///
/// The only state owned by the component is its [`SortState`]. `columns`
/// is deliberately not reactive: supplying a different column set means
/// mounting a new instance, which starts unsorted again. Inputs are never
/// mutated; the displayed order is a derived permutation of `rows`.
#[component]
pub fn DataTable<T>(
    /// Rows in caller order. Replaced wholesale when the parent's filters
    /// change.
    #[prop(into)]
    rows: Signal<Vec<T>>,
    /// Column descriptors, displayed in array order.
    columns: Vec<Column<T>>,
    /// Fired once per body-row click with the clicked row.
    #[prop(optional, into)]
    on_row_click: Option<Callback<T>>,
    /// Offset forwarded to cell renderers for absolute row numbering when
    /// the caller windows rows externally.
    #[prop(optional)]
    start_index: usize,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let issues = column_key_issues(&columns);
    debug_assert!(issues.is_empty(), "DataTable columns: {issues:?}");
    for issue in &issues {
        log::warn!("DataTable: {issue}");
    }

    let (sort, set_sort) = signal(SortState::default());

    let header_cells = columns
        .iter()
        .map(|col| {
            let key = col.key;
            let sortable = col.sortable;
            let style = header_cell_style(col);
            view! {
                <th
                    style=style
                    on:click=move |_| {
                        if sortable {
                            set_sort.update(|s| *s = s.toggled(key));
                        }
                    }
                >
                    {col.label}
                    <span style="color: #64748b;">{move || sort.get().indicator(key)}</span>
                </th>
            }
        })
        .collect_view();

    let columns = StoredValue::new(columns);

    let order = Memo::new(move |_| {
        let sort = sort.get();
        rows.with(|rows| columns.with_value(|cols| display_order(rows, cols, sort)))
    });

    let body = move || {
        let order = order.get();
        if order.is_empty() {
            let span = columns.with_value(|cols| cols.len().max(1));
            return view! {
                <tr>
                    <td
                        colspan=span.to_string()
                        style="padding: 28px; text-align: center; color: #94a3b8; font-size: 14px;"
                    >
                        "No data available"
                    </td>
                </tr>
            }
            .into_any();
        }

        rows.with(|rows| {
            columns.with_value(|cols| {
                order
                    .iter()
                    .enumerate()
                    .map(|(pos, &i)| {
                        let row = rows[i].clone();
                        let bg = if pos % 2 == 0 { "#fff" } else { "#f8fafc" };

                        let cells = cols
                            .iter()
                            .map(|col| {
                                let style = body_cell_style(col, bg);
                                let content = col.render_cell(&row, pos, start_index);
                                view! { <td style=style>{content}</td> }
                            })
                            .collect_view();

                        let clickable = on_row_click.is_some();
                        let row_style = format!(
                            "background: {}; border-bottom: 1px solid #e2e8f0;{}",
                            bg,
                            if clickable { " cursor: pointer;" } else { "" }
                        );

                        view! {
                            <tr
                                style=row_style
                                on:click=move |_| {
                                    if let Some(callback) = on_row_click {
                                        callback.run(row.clone());
                                    }
                                }
                                on:mouseenter=move |e| {
                                    if !clickable {
                                        return;
                                    }
                                    if let Some(target) = e.target() {
                                        if let Ok(el) = target.dyn_into::<web_sys::HtmlElement>() {
                                            let _ = el.style().set_property("background", "#eff6ff");
                                        }
                                    }
                                }
                                on:mouseleave=move |e| {
                                    if let Some(target) = e.target() {
                                        if let Ok(el) = target.dyn_into::<web_sys::HtmlElement>() {
                                            let _ = el.style().set_property("background", bg);
                                        }
                                    }
                                }
                            >
                                {cells}
                            </tr>
                        }
                    })
                    .collect_view()
                    .into_any()
            })
        })
    };

    view! {
        <div style="overflow-x: auto; border: 1px solid #e2e8f0; border-radius: 8px; background: #fff;">
            <table style="width: 100%; border-collapse: separate; border-spacing: 0; font-size: 14px;">
                <thead>
                    <tr>{header_cells}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
