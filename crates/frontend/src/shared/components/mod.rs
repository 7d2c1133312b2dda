pub mod progress_bar;
pub mod search_input;
pub mod stat_card;
pub mod status_badge;
pub mod table;

pub use progress_bar::ProgressBar;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
pub use status_badge::{BadgeKind, StatusBadge};
