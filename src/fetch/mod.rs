pub mod sheet;

pub use sheet::{HttpSheetSource, SheetFetchError, SheetSource};
