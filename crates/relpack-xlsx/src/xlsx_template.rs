use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use umya_spreadsheet::{reader, writer};

use relpack_core::ports::{CellValue, SheetRow, TemplateError, WorkbookTemplate};

const DEFAULT_SHEET: &str = "Data";

/// Plantilla `.xlsx` de entrega, rellenada con `umya-spreadsheet`.
///
/// Los bytes originales no se modifican nunca: cada `populate` trabaja sobre
/// una copia en memoria.
#[derive(Debug, Clone)]
pub struct XlsxTemplate {
  source: Arc<[u8]>,
  sheet: String,
}

impl XlsxTemplate {
  pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
    Self { source: bytes.into(), sheet: DEFAULT_SHEET.to_string() }
  }

  pub async fn from_path(path: &Path) -> Result<Self, TemplateError> {
    let bytes = tokio::fs::read(path).await?;
    debug!(path = %path.display(), size = bytes.len(), "workbook template loaded");
    Ok(Self::from_bytes(bytes))
  }

  /// Hoja a rellenar (por defecto `Data`).
  pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
    self.sheet = sheet.into();
    self
  }

  pub fn sheet(&self) -> &str {
    &self.sheet
  }
}

#[async_trait]
impl WorkbookTemplate for XlsxTemplate {
  async fn populate(&self, rows: Vec<SheetRow>) -> Result<Vec<u8>, TemplateError> {
    let source = Arc::clone(&self.source);
    let sheet = self.sheet.clone();

    // umya lee y escribe el libro entero de forma síncrona
    tokio::task::spawn_blocking(move || populate_sync(&source, &sheet, &rows))
      .await
      .map_err(|e| TemplateError::Internal(format!("Tokio Task Join Error: {}", e)))?
  }
}

fn populate_sync(source: &[u8], sheet: &str, rows: &[SheetRow]) -> Result<Vec<u8>, TemplateError> {
  let mut book =
    reader::xlsx::read_reader(Cursor::new(source), true).map_err(|e| TemplateError::Workbook(e.to_string()))?;

  let worksheet = book.get_sheet_by_name_mut(sheet).ok_or_else(|| TemplateError::SheetNotFound(sheet.to_string()))?;

  for row in rows {
    for (column, value) in &row.cells {
      let cell = worksheet.get_cell_mut((*column, row.row));
      match value {
        CellValue::Text(text) => {
          cell.set_value(text.as_str());
        }
        CellValue::Number(number) => {
          cell.set_value_number(*number);
        }
      }
    }
  }

  let mut out = Cursor::new(Vec::new());
  writer::xlsx::write_writer(&book, &mut out).map_err(|e| TemplateError::Workbook(e.to_string()))?;
  Ok(out.into_inner())
}
