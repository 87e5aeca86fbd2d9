pub mod export_csv;

pub use export_csv::{write_report, Report};
