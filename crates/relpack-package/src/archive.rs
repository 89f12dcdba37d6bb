//! Lectura y escritura del ZIP. Todo es síncrono: el packager lo ejecuta en
//! el pool bloqueante de tokio.

use std::io::{Cursor, Read, Seek, Write};
use std::sync::Arc;

use relpack_codec::CodecError;
use relpack_core::domain::BinaryAsset;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::PackageError;
use crate::naming::{METADATA_ENTRY, is_artwork_entry, is_audio_entry};

/// Una entrada a escribir en el archivo.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
  pub name: String,
  pub data: Arc<[u8]>,
}

impl ArchiveEntry {
  pub fn new(name: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
    Self { name: name.into(), data: data.into() }
  }
}

/// Lo que la importación necesita de un paquete.
#[derive(Debug, Clone)]
pub struct UnpackedArchive {
  pub metadata: String,
  pub artwork: Option<BinaryAsset>,
  /// Ordenado lexicográficamente por nombre de entrada.
  pub audio: Vec<BinaryAsset>,
}

/// Escribe las entradas en orden, comprimidas con deflate.
pub fn assemble(entries: &[ArchiveEntry]) -> Result<Vec<u8>, PackageError> {
  let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
  let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

  for entry in entries {
    writer.start_file(entry.name.as_str(), options)?;
    writer.write_all(&entry.data)?;
  }

  Ok(writer.finish()?.into_inner())
}

/// Extrae `metadata.csv`, la primera portada (orden del archivo) y los audios.
pub fn unpack(bytes: &[u8]) -> Result<UnpackedArchive, PackageError> {
  let mut archive = ZipArchive::new(Cursor::new(bytes))?;
  let names: Vec<String> = archive.file_names().map(str::to_string).collect();

  if !names.iter().any(|n| n == METADATA_ENTRY) {
    return Err(PackageError::MissingMetadataFile);
  }
  let metadata = String::from_utf8(read_entry(&mut archive, METADATA_ENTRY)?)
    .map_err(|e| PackageError::MalformedCsv(CodecError::Encoding(e.to_string())))?;

  let artwork = match names.iter().find(|n| is_artwork_entry(n)) {
    Some(name) => Some(BinaryAsset::new(name.as_str(), read_entry(&mut archive, name)?)),
    None => None,
  };

  let mut audio_names: Vec<&String> = names.iter().filter(|n| is_audio_entry(n)).collect();
  audio_names.sort();

  let mut audio = Vec::with_capacity(audio_names.len());
  for name in audio_names {
    audio.push(BinaryAsset::new(name.as_str(), read_entry(&mut archive, name)?));
  }

  Ok(UnpackedArchive { metadata, artwork, audio })
}

/// Tope de la reserva inicial; el tamaño declarado en la cabecera no es de fiar.
const MAX_PREALLOC: u64 = 1 << 20;

fn initial_capacity(declared: u64) -> usize {
  declared.min(MAX_PREALLOC) as usize
}

fn read_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Vec<u8>, PackageError> {
  let mut file = archive.by_name(name)?;
  let mut data = Vec::with_capacity(initial_capacity(file.size()));
  file.read_to_end(&mut data)?;
  Ok(data)
}
