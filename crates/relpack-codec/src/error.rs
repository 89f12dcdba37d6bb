use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("Invalid CSV: No data rows found")]
  NoDataRows,

  #[error("encoding error: {0}")]
  Encoding(String),
}
