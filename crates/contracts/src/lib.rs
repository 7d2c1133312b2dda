pub mod dashboards;
pub mod domain;
