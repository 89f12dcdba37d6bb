use chrono::NaiveDate;
use relpack_core::domain::{Contributor, Release, Track};
use relpack_lib::App;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // RUST_LOG manda; por defecto nivel info
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let app = App::bootstrap().await?;

  // assets de muestra escritos a disco para pasar por la carga real
  let samples = app.config.resolved_output_dir().join("smoke_assets");
  tokio::fs::create_dir_all(&samples).await?;
  let cover_path = samples.join("cover.jpg");
  let audio_path = samples.join("glow.wav");
  tokio::fs::write(&cover_path, [0xFF, 0xD8, 0xFF, 0xD9]).await?;
  tokio::fs::write(&audio_path, b"RIFF\0\0\0\0WAVE").await?;

  let release = Release {
    title: "Nights".to_string(),
    artists: vec!["Jane".to_string()],
    release_date: NaiveDate::from_ymd_opt(2025, 3, 1),
    label_name: "Indie Co".to_string(),
    album_genre: "House".to_string(),
    album_c_line: "© 2025 Jane".to_string(),
    album_p_line: "℗ 2025 Indie Co".to_string(),
    artwork: Some(app.load_asset(&cover_path).await?),
    ..Release::default()
  };

  let track = Track {
    title: "Glow".to_string(),
    artists: vec!["Jane".to_string()],
    track_genre: "Tech House".to_string(),
    performers: vec![Contributor::new("Jane", ["Vocalist"])],
    composition: vec![Contributor::new("Jane", ["Composer"])],
    production: vec![Contributor::new("Bob", ["Producer"])],
    audio_file: Some(app.load_asset(&audio_path).await?),
    ..Track::default()
  };

  let path = app.export_to_disk(&release, &[track]).await?;
  println!("Paquete guardado en {}", path.display());

  let imported = app.import_from_disk(&path).await?;
  println!("Reimportado: {} ({} pistas)", imported.release.title, imported.tracks.len());
  for warning in &imported.warnings {
    println!("  aviso: {warning}");
  }

  Ok(())
}
