pub mod list;

pub use list::CouncilPage;
