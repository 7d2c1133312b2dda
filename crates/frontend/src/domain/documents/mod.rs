pub mod list;

pub use list::DocumentsPage;
