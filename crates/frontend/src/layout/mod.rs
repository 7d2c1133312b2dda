pub mod global_context;
pub mod sidebar;

use crate::dashboards::DashboardPage;
use crate::domain::clients::ClientsPage;
use crate::domain::council::CouncilPage;
use crate::domain::documents::DocumentsPage;
use crate::domain::payments::PaymentsPage;
use crate::domain::projects::ProjectsPage;
use crate::domain::team::TeamPage;
use global_context::{AppGlobalContext, Page};
use leptos::prelude::*;
use sidebar::Sidebar;

/// Top-level layout: fixed sidebar plus the active screen.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div style="display: flex; height: 100vh; overflow: hidden; font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; color: #0f172a;">
            <Sidebar />
            <main style="flex: 1; overflow-y: auto; background: #f1f5f9;">
                {move || match ctx.active_page.get() {
                    Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Page::Clients => view! { <ClientsPage /> }.into_any(),
                    Page::Projects => view! { <ProjectsPage /> }.into_any(),
                    Page::Documents => view! { <DocumentsPage /> }.into_any(),
                    Page::Payments => view! { <PaymentsPage /> }.into_any(),
                    Page::Team => view! { <TeamPage /> }.into_any(),
                    Page::Council => view! { <CouncilPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
