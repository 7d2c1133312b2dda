use contracts::domain::{Team, TeamMember, TeamRole};
use once_cell::sync::Lazy;

pub static MOCK_TEAM: Lazy<Vec<TeamMember>> = Lazy::new(|| {
    vec![
        TeamMember {
            id: "t1".into(),
            name: "Ravi Kulkarni".into(),
            email: "ravi.kulkarni@plandesk.co.uk".into(),
            role: TeamRole::AgentX,
            team: Team::London,
            agent_code: "AX-L01".into(),
            is_active: true,
            assigned_projects: 4,
            joined_date: "2023-06-12".into(),
        },
        TeamMember {
            id: "t2".into(),
            name: "Leah Morton".into(),
            email: "leah.morton@plandesk.co.uk".into(),
            role: TeamRole::AgentX,
            team: Team::London,
            agent_code: "AX-L02".into(),
            is_active: true,
            assigned_projects: 4,
            joined_date: "2023-09-04".into(),
        },
        TeamMember {
            id: "t3".into(),
            name: "Beth Connolly".into(),
            email: "beth.connolly@plandesk.co.uk".into(),
            role: TeamRole::AgentY,
            team: Team::London,
            agent_code: "AY-L01".into(),
            is_active: true,
            assigned_projects: 3,
            joined_date: "2024-01-22".into(),
        },
        TeamMember {
            id: "t4".into(),
            name: "Arjun Mehta".into(),
            email: "arjun.mehta@plandesk.co.uk".into(),
            role: TeamRole::AgentY,
            team: Team::India,
            agent_code: "AY-I01".into(),
            is_active: true,
            assigned_projects: 2,
            joined_date: "2024-03-11".into(),
        },
        TeamMember {
            id: "t5".into(),
            name: "Priya Shah".into(),
            email: "priya.shah@plandesk.co.uk".into(),
            role: TeamRole::Architect,
            team: Team::India,
            agent_code: "AR-I01".into(),
            is_active: true,
            assigned_projects: 3,
            joined_date: "2023-11-30".into(),
        },
        TeamMember {
            id: "t6".into(),
            name: "Marcus Webb".into(),
            email: "marcus.webb@plandesk.co.uk".into(),
            role: TeamRole::Architect,
            team: Team::London,
            agent_code: "AR-L01".into(),
            is_active: true,
            assigned_projects: 2,
            joined_date: "2024-05-07".into(),
        },
        TeamMember {
            id: "t7".into(),
            name: "Nadia Hussain".into(),
            email: "nadia.hussain@plandesk.co.uk".into(),
            role: TeamRole::Admin,
            team: Team::London,
            agent_code: "AD-L01".into(),
            is_active: true,
            assigned_projects: 0,
            joined_date: "2023-02-14".into(),
        },
        TeamMember {
            id: "t8".into(),
            name: "Vikram Rao".into(),
            email: "vikram.rao@plandesk.co.uk".into(),
            role: TeamRole::AgentY,
            team: Team::India,
            agent_code: "AY-I02".into(),
            is_active: false,
            assigned_projects: 0,
            joined_date: "2024-08-19".into(),
        },
    ]
});
