use relpack_codec::CodecError;
use relpack_core::CoreError;
use relpack_core::ports::TemplateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackageError {
  /// La exportación no llegó a empezar; el modelo no se ha tocado.
  #[error("validation failed: {}", .0.join("; "))]
  Validation(Vec<String>),

  #[error("metadata.csv not found in ZIP file")]
  MissingMetadataFile,

  #[error("{0}")]
  MalformedCsv(#[from] CodecError),

  #[error("template population failed: {0}")]
  TemplatePopulation(#[from] TemplateError),

  #[error("archive assembly failed: {0}")]
  ArchiveAssembly(String),

  #[error("zip error: {0}")]
  Archive(#[from] zip::result::ZipError),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("fs error: {0}")]
  Fs(#[from] relpack_fs::FsError),

  #[error(transparent)]
  Core(#[from] CoreError),

  #[error("internal error: {0}")]
  Internal(String),

  /// Único error visible de una importación fallida.
  #[error("failed to import ZIP: {0}")]
  Import(Box<PackageError>),
}

impl PackageError {
  pub(crate) fn into_import(self) -> Self {
    match self {
      PackageError::Import(_) => self,
      other => PackageError::Import(Box::new(other)),
    }
  }
}
