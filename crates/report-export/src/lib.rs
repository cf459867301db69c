pub mod csv_export;
pub mod pdf;

pub use csv_export::{sort_by_spend_desc, write_labeled_csv};
pub use pdf::write_summary_pdf;
