mod infrastructure;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use relpack_core::Validator;
use relpack_core::domain::{BinaryAsset, Release, Track};
use relpack_package::{ImportedPackage, PackageConfig, ReleasePackager};
use relpack_xlsx::XlsxTemplate;
use tracing::{info, warn};

pub use infrastructure::reporter::TracingReporter;

/// Type alias to simplify the generic signature of the packager.
pub type ConcreteReleasePackager = ReleasePackager<TracingReporter>;

/// Wired application: configuration plus the packager built from it.
pub struct App {
  pub config: PackageConfig,
  pub packager: ConcreteReleasePackager,
}

impl App {
  /// Loads `[package]` from `relpack.toml` and wires everything from it.
  pub async fn bootstrap() -> anyhow::Result<Self> {
    let config = PackageConfig::load()?;
    Ok(Self::from_config(config).await)
  }

  pub async fn from_config(config: PackageConfig) -> Self {
    // --- Dependency Injection Phase ---

    // 1. Validation rules, fixed for the lifetime of the app.
    let validator = Validator::new(config.validation());

    // 2. Output Port Adapter (tracing events)
    let reporter = TracingReporter::new();

    // 3. Packager
    let mut packager = ReleasePackager::new(validator, reporter);

    // 4. Template Adapter (xlsx). A missing or unreadable template only
    //    means packages ship without the spreadsheet.
    if let Some(path) = &config.template_path {
      match XlsxTemplate::from_path(path).await {
        Ok(template) => packager = packager.with_template(Arc::new(template)),
        Err(err) => warn!(path = %path.display(), error = %err, "workbook template unavailable"),
      }
    }

    Self { config, packager }
  }

  /// Reads a local artwork or audio file to attach to the model.
  pub async fn load_asset(&self, path: &Path) -> anyhow::Result<BinaryAsset> {
    Ok(relpack_package::load_asset(path).await?)
  }

  /// Exports and saves the package under the configured output directory.
  pub async fn export_to_disk(&self, release: &Release, tracks: &[Track]) -> anyhow::Result<PathBuf> {
    let package = self.packager.export(release, tracks).await?;
    let path = package.save_to(&self.config.resolved_output_dir()).await?;
    info!(path = %path.display(), "release package written");
    Ok(path)
  }

  pub async fn import_from_disk(&self, path: &Path) -> anyhow::Result<ImportedPackage> {
    let bytes = tokio::fs::read(path).await?;
    Ok(self.packager.import(bytes).await?)
  }
}
