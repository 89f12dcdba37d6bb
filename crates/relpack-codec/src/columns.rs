//! Column contract of the delivery sheet.
//!
//! Header names are reproduced byte for byte, including the double space in
//! [`ORIGINAL_RELEASE_DATE`], the `Explict` typo and the embedded newline of
//! [`MUST_REMAIN_BUNDLED`]. Downstream consumers match on them literally.

pub const DISC_NUMBER: &str = "Disc Number";
pub const TRACK_NUMBER: &str = "Track Number";
pub const TITLE_TYPE: &str = "Title Type";
pub const CAT_NUMBER: &str = "Cat Number";
pub const LABEL_NAME: &str = "Label Name";
pub const UPC: &str = "UPC (barcode)";
pub const RELEASE_DATE: &str = "Release Date";
pub const ORIGINAL_RELEASE_DATE: &str = "Original  Release Date";
pub const ALBUM_ARTIST: &str = "Album Artist";
pub const ALBUM_FEATURED_ARTIST: &str = "Album Featured Artist";
pub const ALBUM_OTHER_ARTIST: &str = "Album Other Artist";
pub const ALBUM_TITLE: &str = "Album Title";
pub const ALBUM_MIX_VERSION: &str = "Album Mix Version";
pub const TRACK_ARTIST: &str = "Track Artist";
pub const TRACK_FEATURED_ARTIST: &str = "Track featured Artist";
pub const VOCALIST: &str = "Vocalist";
pub const PROGRAMMING: &str = "Programming";
pub const GUITAR: &str = "Guitar";
pub const PERFORMER_OTHER: &str = "Performer Other";
pub const COMPOSER: &str = "Composer";
pub const LYRICIST: &str = "Lyricist";
pub const SONGWRITER: &str = "Songwriter";
pub const SONGWRITER_OTHER: &str = "Songwriter Other";
pub const PRODUCER: &str = "Producer";
pub const MIX_ENGINEER: &str = "Mix Engineer";
pub const MASTERING_ENGINEER: &str = "Mastering Engineer";
pub const PE_OTHER: &str = "PE Other";
pub const TRACK_TITLE: &str = "Track Title";
pub const MIX_VERSION: &str = "Mix Version";
pub const REMIXER: &str = "Remixer";
pub const ISRC_CODE: &str = "ISRC code";
pub const SECONDARY_ISRC_CODE: &str = "Secondary ISRC code";
pub const LANGUAGE: &str = "Language";
pub const DURATION: &str = "Duration";
pub const SUB_GENRE: &str = "Sub-Genre";
pub const PUBLISHER: &str = "Publisher";
pub const SAMPLE_START_TIME: &str = "Sample Start Time";
pub const FILENAME: &str = "Filename";
pub const EXPLICIT_CONTENT: &str = "Explict Content";
pub const MUST_REMAIN_BUNDLED: &str = "Must Remain Bundled/\nNot for Individual Sale";
pub const ALBUM_C_LINE: &str = "ALBUM C LINE";
pub const ALBUM_P_LINE: &str = "ALBUM P LINE";
pub const TERRITORY: &str = "Territory";
pub const EXCLUDED_TERRITORY: &str = "Excluded Territory";
pub const ALBUM_GENRE: &str = "Album Genre";
pub const PUBLIC_DOMAIN: &str = "Public Domain";
pub const GENRE: &str = "Genre";
pub const FEATURED_PRIMARY_ON_SPOTIFY: &str = "Make Featured Artist Primary on Spotify";
pub const REMIXER_PRIMARY_ON_SPOTIFY: &str = "Make Remixer Primary on Spotify";
pub const LYRICS: &str = "Lyrics";
pub const TRACK_CREDITS: &str = "Track Credits";

pub const COLUMN_COUNT: usize = 51;

/// Header row, in output order.
pub const HEADERS: [&str; COLUMN_COUNT] = [
  DISC_NUMBER,
  TRACK_NUMBER,
  TITLE_TYPE,
  CAT_NUMBER,
  LABEL_NAME,
  UPC,
  RELEASE_DATE,
  ORIGINAL_RELEASE_DATE,
  ALBUM_ARTIST,
  ALBUM_FEATURED_ARTIST,
  ALBUM_OTHER_ARTIST,
  ALBUM_TITLE,
  ALBUM_MIX_VERSION,
  TRACK_ARTIST,
  TRACK_FEATURED_ARTIST,
  VOCALIST,
  PROGRAMMING,
  GUITAR,
  PERFORMER_OTHER,
  COMPOSER,
  LYRICIST,
  SONGWRITER,
  SONGWRITER_OTHER,
  PRODUCER,
  MIX_ENGINEER,
  MASTERING_ENGINEER,
  PE_OTHER,
  TRACK_TITLE,
  MIX_VERSION,
  REMIXER,
  ISRC_CODE,
  SECONDARY_ISRC_CODE,
  LANGUAGE,
  DURATION,
  SUB_GENRE,
  PUBLISHER,
  SAMPLE_START_TIME,
  FILENAME,
  EXPLICIT_CONTENT,
  MUST_REMAIN_BUNDLED,
  ALBUM_C_LINE,
  ALBUM_P_LINE,
  TERRITORY,
  EXCLUDED_TERRITORY,
  ALBUM_GENRE,
  PUBLIC_DOMAIN,
  GENRE,
  FEATURED_PRIMARY_ON_SPOTIFY,
  REMIXER_PRIMARY_ON_SPOTIFY,
  LYRICS,
  TRACK_CREDITS,
];

/// Name of the sheet the template is filled on.
pub const WORKBOOK_SHEET: &str = "Data";

/// First data row of the template; rows 1-3 hold its own headings.
pub const WORKBOOK_FIRST_ROW: u32 = 4;

/// Template column with no CSV counterpart. Always written blank.
pub const WORKBOOK_RESERVED_COLUMN: u32 = 47;

pub const WORKBOOK_COLUMN_COUNT: u32 = 52;

/// 1-based template column for the CSV column at `index`.
///
/// The template inserts [`WORKBOOK_RESERVED_COLUMN`] between `Public Domain`
/// and `Genre`, so everything from `Genre` on shifts one position right.
pub fn workbook_column(index: usize) -> u32 {
  let column = index as u32 + 1;
  if column < WORKBOOK_RESERVED_COLUMN { column } else { column + 1 }
}

/// Position of a header in [`HEADERS`].
pub fn position(header: &str) -> Option<usize> {
  HEADERS.iter().position(|h| *h == header)
}
