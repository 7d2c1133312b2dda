//! Sidebar with the admin navigation menu.

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

fn menu_items() -> Vec<(Page, &'static str)> {
    vec![
        (Page::Dashboard, "layout-dashboard"),
        (Page::Clients, "users"),
        (Page::Projects, "folder"),
        (Page::Documents, "file-text"),
        (Page::Payments, "credit-card"),
        (Page::Team, "contact"),
        (Page::Council, "landmark"),
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let width = move || if ctx.sidebar_open.get() { "220px" } else { "56px" };

    view! {
        <aside style=move || format!(
            "width: {}; flex-shrink: 0; background: #0f172a; color: #cbd5e1; display: flex; flex-direction: column; transition: width 0.15s;",
            width()
        )>
            <div style="display: flex; align-items: center; justify-content: space-between; padding: 14px 12px; border-bottom: 1px solid #1e293b;">
                {move || if ctx.sidebar_open.get() {
                    view! { <span style="font-weight: 700; color: #f8fafc; font-size: 15px;">{"PlanDesk Admin"}</span> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}
                <button
                    style="background: none; border: none; color: #94a3b8; cursor: pointer; padding: 4px; display: inline-flex;"
                    title="Toggle sidebar"
                    on:click=move |_| ctx.sidebar_open.update(|open| *open = !*open)
                >
                    {move || if ctx.sidebar_open.get() { icon("chevron-left") } else { icon("chevron-right") }}
                </button>
            </div>

            <nav style="flex: 1; padding: 8px 6px; display: flex; flex-direction: column; gap: 2px;">
                {menu_items().into_iter().map(|(page, icon_name)| {
                    let is_active = move || ctx.active_page.get() == page;
                    view! {
                        <button
                            style=move || format!(
                                "display: flex; align-items: center; gap: 10px; width: 100%; padding: 9px 10px; border: none; border-radius: 6px; cursor: pointer; text-align: left; font-size: 14px; background: {}; color: {};",
                                if is_active() { "#1d4ed8" } else { "transparent" },
                                if is_active() { "#fff" } else { "#cbd5e1" },
                            )
                            title=page.title()
                            on:click=move |_| ctx.navigate(page)
                        >
                            {icon(icon_name)}
                            {move || if ctx.sidebar_open.get() {
                                view! { <span style="white-space: nowrap;">{page.title()}</span> }.into_any()
                            } else {
                                view! { <></> }.into_any()
                            }}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
