use crate::shared::icons::icon;
use leptos::prelude::*;

/// Headline metric with an icon, used in the stat rows at the top of each
/// screen.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] caption: String,
    #[prop(optional)] icon_name: &'static str,
    /// Accent color of the icon holder.
    #[prop(default = "#3b82f6")]
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div style="background: #fff; border: 1px solid #e2e8f0; border-radius: 12px; padding: 18px; flex: 1; min-width: 180px;">
            <div style="display: flex; align-items: center; justify-content: space-between;">
                <div style=format!(
                    "width: 38px; height: 38px; border-radius: 8px; display: flex; align-items: center; justify-content: center; color: #fff; background: {};",
                    accent
                )>
                    {icon(if icon_name.is_empty() { "activity" } else { icon_name })}
                </div>
                <span style="font-size: 12px; color: #64748b;">{label}</span>
            </div>
            <p style="font-size: 24px; font-weight: 700; color: #0f172a; margin: 12px 0 2px 0;">{value}</p>
            <p style="font-size: 12px; color: #64748b; margin: 0;">{caption}</p>
        </div>
    }
}
