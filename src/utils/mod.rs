pub mod format;
pub mod table;

pub use format::{format_date, truncate};
pub use table::{Align, Table};
