//! Empaquetado de releases en ZIP: `metadata.csv`, plantilla rellenada,
//! portada y audio.

pub mod archive;
pub mod config;
pub mod error;
pub mod naming;
mod package;
mod packager;

pub use config::PackageConfig;
pub use error::PackageError;
pub use package::{ExportedFile, ExportedPackage, ImportedPackage, load_asset};
pub use packager::ReleasePackager;
