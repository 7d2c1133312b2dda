use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Admin screens reachable from the sidebar.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Clients,
    Projects,
    Documents,
    Payments,
    Team,
    Council,
}

impl Page {
    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Clients => "clients",
            Page::Projects => "projects",
            Page::Documents => "documents",
            Page::Payments => "payments",
            Page::Team => "team",
            Page::Council => "council",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        match key {
            "dashboard" => Some(Page::Dashboard),
            "clients" => Some(Page::Clients),
            "projects" => Some(Page::Projects),
            "documents" => Some(Page::Documents),
            "payments" => Some(Page::Payments),
            "team" => Some(Page::Team),
            "council" => Some(Page::Council),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Clients => "Clients",
            Page::Projects => "Projects",
            Page::Documents => "Documents",
            Page::Payments => "Payments",
            Page::Team => "Team",
            Page::Council => "Council Applications",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::default()),
            sidebar_open: RwSignal::new(true),
        }
    }

    /// Restore the active page from the `?page=` query string and mirror
    /// later page changes back into the URL through the History API.
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|key| Page::from_key(key)) {
            self.active_page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active_page.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                page.key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only touch the URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        self.active_page.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_round_trip() {
        for page in [
            Page::Dashboard,
            Page::Clients,
            Page::Projects,
            Page::Documents,
            Page::Payments,
            Page::Team,
            Page::Council,
        ] {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("nope"), None);
    }
}
