use crate::shared::components::table::{CellValue, Column, DataTable};
use crate::shared::components::{BadgeKind, SearchInput, StatCard, StatusBadge};
use crate::shared::data::MOCK_TEAM;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::{Team, TeamMember, TeamRole};
use leptos::prelude::*;

const TEAM_OPTIONS: [Team; 2] = [Team::London, Team::India];

const ROLE_OPTIONS: [TeamRole; 4] = [
    TeamRole::AgentX,
    TeamRole::AgentY,
    TeamRole::Admin,
    TeamRole::Architect,
];

fn team_columns() -> Vec<Column<TeamMember>> {
    vec![
        Column::computed("sno", "S.No")
            .sticky(0)
            .render(|_, _, index, start| {
                view! { <span style="font-weight: 600;">{(start + index + 1).to_string()}</span> }
                    .into_any()
            }),
        Column::new("name", "Name", |m: &TeamMember| CellValue::from(m.name.clone()))
            .sticky(64)
            .sortable()
            .render(|value, _, _, _| {
                view! { <span style="font-weight: 600; color: #0f172a;">{value.display()}</span> }
                    .into_any()
            }),
        Column::new("agentCode", "Code", |m: &TeamMember| {
            CellValue::from(m.agent_code.clone())
        })
        .sortable(),
        Column::new("email", "Email", |m: &TeamMember| {
            CellValue::from(m.email.clone())
        }),
        Column::new("role", "Role", |m: &TeamMember| {
            CellValue::from(m.role.label())
        })
        .sortable(),
        Column::new("team", "Team", |m: &TeamMember| {
            CellValue::from(m.team.label())
        })
        .sortable(),
        Column::new("assignedProjects", "Assigned", |m: &TeamMember| {
            CellValue::from(m.assigned_projects)
        })
        .sortable(),
        Column::new("isActive", "Status", |m: &TeamMember| {
            CellValue::from(m.is_active)
        })
        .sortable()
        .render(|_, m, _, _| {
            let status = if m.is_active { "active" } else { "inactive" };
            view! { <StatusBadge status=status kind=BadgeKind::Team /> }.into_any()
        }),
        Column::new("joinedDate", "Joined", |m: &TeamMember| {
            CellValue::from(m.joined_date.clone())
        })
        .sortable()
        .render(|value, _, _, _| {
            view! { <span>{format_date(&value.display())}</span> }.into_any()
        }),
    ]
}

#[component]
pub fn TeamPage() -> impl IntoView {
    let (filter_text, set_filter_text) = signal(String::new());
    let (filter_team, set_filter_team) = signal(String::new());
    let (filter_role, set_filter_role) = signal(String::new());

    let filtered = Signal::derive(move || {
        let q = filter_text.get().to_lowercase();
        let team = filter_team.get();
        let role = filter_role.get();
        MOCK_TEAM
            .iter()
            .filter(|m| {
                let matches_search = q.is_empty()
                    || m.name.to_lowercase().contains(&q)
                    || m.email.to_lowercase().contains(&q)
                    || m.agent_code.to_lowercase().contains(&q);
                let matches_team = team.is_empty() || m.team.as_str() == team;
                let matches_role = role.is_empty() || m.role.as_str() == role;
                matches_search && matches_team && matches_role
            })
            .cloned()
            .collect::<Vec<_>>()
    });

    let active = MOCK_TEAM.iter().filter(|m| m.is_active).count();
    let london = MOCK_TEAM.iter().filter(|m| m.team == Team::London).count();
    let workload: u32 = MOCK_TEAM.iter().map(|m| m.assigned_projects).sum();

    view! {
        <div style="max-width: 1200px; margin: 0 auto; padding: 24px;">
            <div style="display: flex; align-items: center; gap: 12px; margin-bottom: 4px;">
                <div style="width: 38px; height: 38px; border-radius: 8px; background: #a855f7; color: #fff; display: flex; align-items: center; justify-content: center;">
                    {icon("contact")}
                </div>
                <h1 style="font-size: 26px; font-weight: 700; margin: 0;">"Team"</h1>
            </div>
            <p style="color: #64748b; margin: 0 0 20px 0;">"Agents, architects and admins across both offices."</p>

            <div style="display: flex; gap: 14px; margin-bottom: 20px; flex-wrap: wrap;">
                <StatCard
                    label="Members"
                    value=MOCK_TEAM.len().to_string()
                    caption="Across both teams"
                    icon_name="contact"
                    accent="#a855f7"
                />
                <StatCard
                    label="Active"
                    value=active.to_string()
                    caption="Currently working"
                    icon_name="check-circle"
                    accent="#22c55e"
                />
                <StatCard
                    label="London / India"
                    value=format!("{} / {}", london, MOCK_TEAM.len() - london)
                    caption="Office split"
                    icon_name="users"
                />
                <StatCard
                    label="Assignments"
                    value=workload.to_string()
                    caption="Projects across the team"
                    icon_name="folder"
                    accent="#6366f1"
                />
            </div>

            <div style="display: flex; gap: 10px; margin-bottom: 14px; align-items: center; flex-wrap: wrap;">
                <SearchInput
                    value=filter_text
                    on_change=Callback::new(move |q| set_filter_text.set(q))
                    placeholder="Search by name, email or code..."
                />
                <select
                    style="padding: 7px 10px; border: 1px solid #cbd5e1; border-radius: 6px; font-size: 14px; background: #fff;"
                    on:change=move |ev| set_filter_team.set(event_target_value(&ev))
                >
                    <option value="">"All teams"</option>
                    {TEAM_OPTIONS
                        .iter()
                        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    style="padding: 7px 10px; border: 1px solid #cbd5e1; border-radius: 6px; font-size: 14px; background: #fff;"
                    on:change=move |ev| set_filter_role.set(event_target_value(&ev))
                >
                    <option value="">"All roles"</option>
                    {ROLE_OPTIONS
                        .iter()
                        .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                        .collect_view()}
                </select>
                <span style="margin-left: auto; font-size: 13px; color: #64748b;">
                    "Showing " {move || filtered.get().len()} " of " {MOCK_TEAM.len()}
                </span>
            </div>

            <DataTable rows=filtered columns=team_columns() />
        </div>
    }
}
