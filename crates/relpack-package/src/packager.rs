use std::sync::Arc;

use relpack_codec::{DecodedMetadata, decode_metadata_csv, encode_metadata_csv, workbook_rows};
use relpack_core::Validator;
use relpack_core::domain::{Release, Track};
use relpack_core::ports::{ProgressReporter, TemplateError, WorkbookTemplate};
use tracing::{debug, info, warn};

use crate::archive::{ArchiveEntry, assemble, unpack};
use crate::error::PackageError;
use crate::naming::{METADATA_ENTRY, artwork_entry_name, audio_entry_name, package_file_name, workbook_entry_name};
use crate::package::{ExportedFile, ExportedPackage, ImportedPackage};

/// Exporta e importa paquetes de release.
///
/// La validación y la plantilla se fijan al construirlo; el reporter sólo
/// recibe avisos de progreso y nunca altera el resultado.
#[derive(Clone)]
pub struct ReleasePackager<P>
where
  P: ProgressReporter,
{
  validator: Validator,
  template: Option<Arc<dyn WorkbookTemplate>>,
  reporter: P,
}

impl<P> ReleasePackager<P>
where
  P: ProgressReporter,
{
  pub fn new(validator: Validator, reporter: P) -> Self {
    Self { validator, template: None, reporter }
  }

  pub fn with_template(mut self, template: Arc<dyn WorkbookTemplate>) -> Self {
    self.template = Some(template);
    self
  }

  pub fn validator(&self) -> &Validator {
    &self.validator
  }

  pub fn has_template(&self) -> bool {
    self.template.is_some()
  }

  /// Construye el ZIP completo.
  ///
  /// Si la validación encuentra problemas no se construye nada y se devuelve
  /// [`PackageError::Validation`]. Un fallo de la plantilla no es fatal: el
  /// paquete sale sin hoja de cálculo.
  pub async fn export(&self, release: &Release, tracks: &[Track]) -> Result<ExportedPackage, PackageError> {
    self.ensure_valid(release, tracks)?;

    self.reporter.start("export").await;
    let result = self.export_package(release, tracks).await;
    self.report_outcome(&result).await;
    result
  }

  /// Sólo la plantilla rellenada. Aquí un fallo de la plantilla sí es un error.
  pub async fn export_workbook(&self, release: &Release, tracks: &[Track]) -> Result<ExportedFile, PackageError> {
    self.ensure_valid(release, tracks)?;

    let template = self
      .template
      .as_ref()
      .ok_or_else(|| TemplateError::Internal("no workbook template configured".to_string()))?;

    let bytes = template.populate(workbook_rows(release, tracks)).await?;
    info!(size = bytes.len(), "workbook exported");

    Ok(ExportedFile { file_name: workbook_entry_name(&release.title), bytes })
  }

  /// Reconstruye release y pistas a partir de un ZIP.
  ///
  /// Cualquier fallo se devuelve como [`PackageError::Import`]; no hay
  /// resultados parciales. Los problemas de validación van en `warnings`.
  pub async fn import(&self, bytes: Vec<u8>) -> Result<ImportedPackage, PackageError> {
    self.reporter.start("import").await;
    let result = self.import_package(bytes).await.map_err(PackageError::into_import);
    self.report_outcome(&result).await;
    result
  }

  fn ensure_valid(&self, release: &Release, tracks: &[Track]) -> Result<(), PackageError> {
    let issues = self.validator.validate_for_export(release, tracks);
    if issues.is_empty() {
      return Ok(());
    }

    warn!(issues = issues.len(), "export blocked by validation");
    Err(PackageError::Validation(issues))
  }

  async fn export_package(&self, release: &Release, tracks: &[Track]) -> Result<ExportedPackage, PackageError> {
    // 1) metadata.csv
    self.progress(10, "Generating metadata...").await;
    let csv = encode_metadata_csv(release, tracks)?;
    let mut entries = vec![ArchiveEntry::new(METADATA_ENTRY, csv.into_bytes())];

    // 2) Plantilla rellenada (opcional)
    self.progress(20, "Creating Excel file...").await;
    let workbook = self.populate_template(release, tracks).await;
    let workbook_included = workbook.is_some();
    if let Some(bytes) = workbook {
      entries.push(ArchiveEntry::new(workbook_entry_name(&release.title), bytes));
    }

    // 3) Portada
    if let Some(artwork) = &release.artwork {
      self.progress(40, "Adding artwork...").await;
      entries.push(ArchiveEntry::new(artwork_entry_name(artwork), Arc::clone(&artwork.data)));
    }

    // 4) Audio, con el número de pista según su posición
    let mut percent = 40.0;
    for (index, track) in tracks.iter().enumerate() {
      let Some(audio) = &track.audio_file else {
        continue;
      };

      percent += 40.0 / tracks.len() as f64;
      self.progress(percent.round() as u8, &format!("Adding track {}/{}...", index + 1, tracks.len())).await;
      entries.push(ArchiveEntry::new(audio_entry_name(index, &track.title, audio), Arc::clone(&audio.data)));
    }

    // 5) ZIP
    self.progress(90, "Creating ZIP archive...").await;
    let names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
    let bytes = tokio::task::spawn_blocking(move || assemble(&entries))
      .await
      .map_err(|e| PackageError::ArchiveAssembly(format!("Tokio Task Join Error: {}", e)))??;

    self.progress(100, "Export complete!").await;
    info!(entries = names.len(), size = bytes.len(), workbook_included, "release package exported");

    Ok(ExportedPackage { file_name: package_file_name(&release.title), bytes, entries: names, workbook_included })
  }

  async fn populate_template(&self, release: &Release, tracks: &[Track]) -> Option<Vec<u8>> {
    let template = self.template.as_ref()?;

    match template.populate(workbook_rows(release, tracks)).await {
      Ok(bytes) => Some(bytes),
      Err(err) => {
        warn!(error = %err, "could not fill workbook template, continuing without it");
        None
      }
    }
  }

  async fn import_package(&self, bytes: Vec<u8>) -> Result<ImportedPackage, PackageError> {
    // 1) Descomprimir
    self.progress(10, "Extracting ZIP file...").await;
    let unpacked = tokio::task::spawn_blocking(move || unpack(&bytes))
      .await
      .map_err(|e| PackageError::Internal(format!("Tokio Task Join Error: {}", e)))??;

    // 2) metadata.csv
    self.progress(20, "Reading metadata...").await;
    let DecodedMetadata { mut release, mut tracks } = decode_metadata_csv(&unpacked.metadata)?;

    // 3) Portada
    self.progress(40, "Loading artwork...").await;
    release.artwork = unpacked.artwork;

    // 4) Audio por posición: el n-ésimo archivo va a la n-ésima pista
    self.progress(60, "Loading audio files...").await;
    let total = unpacked.audio.len();
    for (index, (track, audio)) in tracks.iter_mut().zip(unpacked.audio).enumerate() {
      let percent = 60 + 30 * (index + 1) / total;
      self.progress(percent as u8, &format!("Loading track {}/{}...", index + 1, total)).await;
      track.audio_file = Some(audio);
    }

    self.progress(100, "Import complete!").await;

    let warnings = self.validator.validate_imported(&release, &tracks);
    info!(tracks = tracks.len(), warnings = warnings.len(), "release package imported");

    Ok(ImportedPackage { release, tracks, warnings })
  }

  async fn progress(&self, percent: u8, message: &str) {
    debug!(percent, message, "package progress");
    self.reporter.on_progress(percent, message).await;
  }

  async fn report_outcome<T>(&self, result: &Result<T, PackageError>) {
    match result {
      Ok(_) => self.reporter.finish().await,
      Err(err) => self.reporter.on_error(&err.to_string()).await,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Mutex;

  use async_trait::async_trait;
  use chrono::NaiveDate;
  use relpack_core::ValidationConfig;
  use relpack_core::domain::{BinaryAsset, Contributor};
  use relpack_core::ports::{NoopReporter, SheetRow};

  #[derive(Clone, Default)]
  struct RecordingReporter {
    events: Arc<Mutex<Vec<String>>>,
    percents: Arc<Mutex<Vec<u8>>>,
  }

  #[async_trait]
  impl ProgressReporter for RecordingReporter {
    async fn start(&self, operation: &str) {
      self.events.lock().unwrap().push(format!("start:{operation}"));
    }
    async fn on_progress(&self, percent: u8, _message: &str) {
      self.percents.lock().unwrap().push(percent);
    }
    async fn on_error(&self, error: &str) {
      self.events.lock().unwrap().push(format!("error:{error}"));
    }
    async fn finish(&self) {
      self.events.lock().unwrap().push("finish".to_string());
    }
  }

  struct FakeTemplate {
    fail: bool,
  }

  #[async_trait]
  impl WorkbookTemplate for FakeTemplate {
    async fn populate(&self, rows: Vec<SheetRow>) -> Result<Vec<u8>, TemplateError> {
      if self.fail {
        return Err(TemplateError::SheetNotFound("Data".into()));
      }
      Ok(format!("rows:{}", rows.len()).into_bytes())
    }
  }

  fn nights() -> Release {
    Release {
      title: "Nights".into(),
      artists: vec!["Jane".into()],
      release_date: NaiveDate::from_ymd_opt(2025, 3, 1),
      label_name: "Indie Co".into(),
      album_genre: "House".into(),
      album_c_line: "© 2025 Jane".into(),
      album_p_line: "℗ 2025 Indie Co".into(),
      artwork: Some(BinaryAsset::new("cover.final.jpg", b"jpeg".to_vec())),
      ..Release::default()
    }
  }

  fn track(title: &str, audio: Option<&str>) -> Track {
    Track {
      title: title.into(),
      artists: vec!["Jane".into()],
      track_genre: "Tech House".into(),
      performers: vec![Contributor::new("Jane", ["Vocalist"])],
      composition: vec![Contributor::new("Jane", ["Composer"])],
      production: vec![Contributor::new("Bob", ["Producer"])],
      audio_file: audio.map(|name| BinaryAsset::new(name, name.as_bytes().to_vec())),
      ..Track::default()
    }
  }

  fn packager(assets_mandatory: bool) -> ReleasePackager<NoopReporter> {
    ReleasePackager::new(Validator::new(ValidationConfig { assets_mandatory }), NoopReporter)
  }

  #[tokio::test]
  async fn export_then_import() {
    let tracks = vec![track("Glow", Some("glow_master.wav")), track("Fade Out", Some("fade.flac"))];
    let exported = packager(true).export(&nights(), &tracks).await.unwrap();

    assert_eq!(exported.file_name, "Nights_release.zip");
    assert_eq!(exported.entries, vec!["metadata.csv", "artwork.jpg", "01_Glow.wav", "02_Fade_Out.flac"]);
    assert!(!exported.workbook_included);

    let imported = packager(true).import(exported.bytes).await.unwrap();
    assert!(imported.warnings.is_empty());
    assert_eq!(imported.release.title, "Nights");
    assert_eq!(imported.release.release_date, NaiveDate::from_ymd_opt(2025, 3, 1));

    let artwork = imported.release.artwork.unwrap();
    assert_eq!(artwork.file_name, "artwork.jpg");
    assert_eq!(artwork.bytes(), b"jpeg");

    assert_eq!(imported.tracks.len(), 2);
    assert_eq!(imported.tracks[1].title, "Fade Out");
    let audio = imported.tracks[1].audio_file.as_ref().unwrap();
    assert_eq!(audio.file_name, "02_Fade_Out.flac");
    assert_eq!(audio.bytes(), b"fade.flac");
    assert_eq!(imported.tracks[0].performers, tracks[0].performers);
  }

  #[tokio::test]
  async fn validation_blocks_export() {
    let reporter = RecordingReporter::default();
    let packager = ReleasePackager::new(Validator::default(), reporter.clone());

    let err = packager.export(&nights(), &[track("Glow", None)]).await.unwrap_err();
    match err {
      PackageError::Validation(issues) => assert_eq!(issues, vec!["Track 1 is missing an audio file"]),
      other => panic!("unexpected error: {other}"),
    }
    assert!(reporter.events.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn optional_assets_allow_export_without_audio() {
    let mut release = nights();
    release.artwork = None;

    let exported = packager(false).export(&release, &[track("Glow", None)]).await.unwrap();
    assert_eq!(exported.entries, vec!["metadata.csv"]);
  }

  #[tokio::test]
  async fn template_failure_is_not_fatal() {
    let tracks = [track("Glow", Some("glow.wav"))];

    let failing = packager(true).with_template(Arc::new(FakeTemplate { fail: true }));
    let exported = failing.export(&nights(), &tracks).await.unwrap();
    assert!(!exported.workbook_included);
    assert!(!exported.entries.iter().any(|e| e.ends_with(".xlsx")));

    let working = packager(true).with_template(Arc::new(FakeTemplate { fail: false }));
    let exported = working.export(&nights(), &tracks).await.unwrap();
    assert!(exported.workbook_included);
    assert_eq!(exported.entries[1], "Nights_metadata.xlsx");
  }

  #[tokio::test]
  async fn standalone_workbook_requires_template() {
    let tracks = [track("Glow", Some("glow.wav"))];

    let err = packager(true).export_workbook(&nights(), &tracks).await.unwrap_err();
    assert!(matches!(err, PackageError::TemplatePopulation(_)));

    let failing = packager(true).with_template(Arc::new(FakeTemplate { fail: true }));
    let err = failing.export_workbook(&nights(), &tracks).await.unwrap_err();
    assert!(matches!(err, PackageError::TemplatePopulation(TemplateError::SheetNotFound(_))));

    let working = packager(true).with_template(Arc::new(FakeTemplate { fail: false }));
    let file = working.export_workbook(&nights(), &tracks).await.unwrap();
    assert_eq!(file.file_name, "Nights_metadata.xlsx");
    assert_eq!(file.bytes, b"rows:1");
  }

  #[tokio::test]
  async fn audio_is_assigned_by_position() {
    let release = Release { artwork: None, ..nights() };
    let tracks = vec![track("One", None), track("Two", None), track("Three", None)];
    let csv = encode_metadata_csv(&release, &tracks).unwrap();

    let bytes = assemble(&[
      ArchiveEntry::new("02_Outro.wav", b"outro".to_vec()),
      ArchiveEntry::new("metadata.csv", csv.into_bytes()),
      ArchiveEntry::new("01_Intro.wav", b"intro".to_vec()),
    ])
    .unwrap();

    let imported = packager(false).import(bytes).await.unwrap();
    let audio: Vec<Option<&str>> =
      imported.tracks.iter().map(|t| t.audio_file.as_ref().map(|a| a.file_name.as_str())).collect();
    assert_eq!(audio, vec![Some("01_Intro.wav"), Some("02_Outro.wav"), None]);
    assert!(imported.release.artwork.is_none());
  }

  #[tokio::test]
  async fn extra_audio_files_are_ignored() {
    let release = Release { artwork: None, ..nights() };
    let tracks = vec![track("One", None)];
    let csv = encode_metadata_csv(&release, &tracks).unwrap();

    let bytes = assemble(&[
      ArchiveEntry::new("metadata.csv", csv.into_bytes()),
      ArchiveEntry::new("03_C.wav", b"c".to_vec()),
      ArchiveEntry::new("01_A.wav", b"a".to_vec()),
      ArchiveEntry::new("02_B.wav", b"b".to_vec()),
    ])
    .unwrap();

    let imported = packager(false).import(bytes).await.unwrap();
    assert_eq!(imported.tracks.len(), 1);
    let audio = imported.tracks[0].audio_file.as_ref().unwrap();
    assert_eq!(audio.file_name, "01_A.wav");
    assert_eq!(audio.bytes(), b"a");
  }

  #[tokio::test]
  async fn import_failures_are_wrapped() {
    let reporter = RecordingReporter::default();
    let packager = ReleasePackager::new(Validator::default(), reporter.clone());

    let bytes = assemble(&[ArchiveEntry::new("01_Intro.wav", b"intro".to_vec())]).unwrap();
    let err = packager.import(bytes).await.unwrap_err();
    assert!(matches!(&err, PackageError::Import(inner) if matches!(**inner, PackageError::MissingMetadataFile)));
    assert_eq!(err.to_string(), "failed to import ZIP: metadata.csv not found in ZIP file");

    let err = packager.import(b"garbage".to_vec()).await.unwrap_err();
    assert!(matches!(&err, PackageError::Import(inner) if matches!(**inner, PackageError::Archive(_))));

    let bytes = assemble(&[ArchiveEntry::new("metadata.csv", b"Album Title\r\n".to_vec())]).unwrap();
    let err = packager.import(bytes).await.unwrap_err();
    assert_eq!(err.to_string(), "failed to import ZIP: Invalid CSV: No data rows found");

    let events = reporter.events.lock().unwrap();
    assert_eq!(events.iter().filter(|e| e.starts_with("error:failed to import ZIP")).count(), 3);
  }

  #[tokio::test]
  async fn import_reports_warnings() {
    let csv = "Album Title,Track Title,Genre\r\n,Glow,\r\n";
    let bytes = assemble(&[ArchiveEntry::new("metadata.csv", csv.as_bytes().to_vec())]).unwrap();

    let imported = packager(true).import(bytes).await.unwrap();
    assert!(imported.warnings.contains(&"Release title is missing".to_string()));
    assert!(imported.warnings.contains(&"Track 1: Genre is missing".to_string()));
  }

  #[tokio::test]
  async fn progress_is_monotonic() {
    let reporter = RecordingReporter::default();
    let packager = ReleasePackager::new(Validator::default(), reporter.clone());
    let tracks = vec![track("A", Some("a.wav")), track("B", Some("b.wav")), track("C", Some("c.wav"))];

    let exported = packager.export(&nights(), &tracks).await.unwrap();
    let export_percents = reporter.percents.lock().unwrap().clone();
    assert_eq!(export_percents, vec![10, 20, 40, 53, 67, 80, 90, 100]);

    reporter.percents.lock().unwrap().clear();
    packager.import(exported.bytes).await.unwrap();
    let import_percents = reporter.percents.lock().unwrap().clone();
    assert_eq!(import_percents, vec![10, 20, 40, 60, 70, 80, 90, 100]);

    let events = reporter.events.lock().unwrap().clone();
    assert_eq!(events, vec!["start:export", "finish", "start:import", "finish"]);
  }
}
