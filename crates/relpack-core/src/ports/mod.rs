pub mod progress;
pub mod template;

pub use progress::{NoopReporter, ProgressReporter};
pub use template::{CellValue, SheetRow, TemplateError, WorkbookTemplate};
