pub mod list;

pub use list::TeamPage;
