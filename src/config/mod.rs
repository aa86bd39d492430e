// src/config/mod.rs
pub mod summary;
pub mod record;
pub mod settings;

// Re-export commonly used types
pub use summary::AnalysisSummary;
pub use record::{UploadRecord, RecordId, report_file_name};
pub use settings::Settings;
