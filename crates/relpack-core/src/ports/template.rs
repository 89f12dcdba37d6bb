use async_trait::async_trait;

/// Valor de una celda de la hoja `Data`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
  Text(String),
  Number(f64),
}

impl From<&str> for CellValue {
  fn from(s: &str) -> Self {
    CellValue::Text(s.to_string())
  }
}

impl From<String> for CellValue {
  fn from(s: String) -> Self {
    CellValue::Text(s)
  }
}

/// Fila a escribir en la plantilla, con coordenadas 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
  pub row: u32,
  pub cells: Vec<(u32, CellValue)>,
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("sheet not found in template: {0}")]
  SheetNotFound(String),

  #[error("workbook error: {0}")]
  Workbook(String),

  #[error("internal error: {0}")]
  Internal(String),
}

/// Puerto que rellena una copia de la plantilla externa de entrega.
///
/// La plantilla es un artefacto opaco: la implementación sólo necesita
/// escribir las celdas indicadas y devolver el libro serializado.
#[async_trait]
pub trait WorkbookTemplate: Send + Sync {
  async fn populate(&self, rows: Vec<SheetRow>) -> Result<Vec<u8>, TemplateError>;
}
