//! Codecs between the release model and the flat delivery sheet.
//!
//! Everything here is synchronous and pure: the packaging layer decides where
//! the bytes come from and where they go.

pub mod columns;
pub mod contributor;
pub mod error;
pub mod metadata_csv;
pub mod territory;

pub use error::CodecError;
pub use metadata_csv::{DecodedMetadata, HeaderIndex, decode_metadata_csv, encode_metadata_csv, workbook_rows};
pub use territory::{TerritoryColumns, TerritorySelection, decode_territories, encode_territories};
