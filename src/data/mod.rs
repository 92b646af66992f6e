pub mod export;
pub mod record;
pub mod store;
pub mod validate;
pub mod xlsx;

pub use export::{write_lineups_csv, ExportError};
pub use record::{DailyRecord, LineupUpdate};
pub use store::{JsonFileStore, LineupStore, StoreError};
pub use validate::{
    load_records_file, validate_record_file, validate_records, ValidationDiagnostic,
    ValidationReport, ValidationSeverity,
};
pub use xlsx::{import_spreadsheet, ImportError, ImportReport};
