pub mod asset;
pub mod contributor;
pub mod genres;
pub mod release;
pub mod track;

pub use asset::BinaryAsset;
pub use contributor::Contributor;
pub use release::{Release, TerritoryMode};
pub use track::{ExplicitContent, Language, Track};
