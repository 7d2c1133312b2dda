pub mod column;
pub mod data_table;
pub mod sort;

pub use column::{CellValue, Column};
pub use data_table::DataTable;
pub use sort::{SortDirection, SortState};
