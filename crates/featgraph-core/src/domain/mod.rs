pub mod activity;
pub mod artist;
pub mod document;
pub mod genre;
pub mod ids;
pub mod link;
pub mod spell;
pub mod year;

pub use activity::{ActivityRange, ActivityRecord};
pub use artist::{Artist, ClassifiedArtist};
pub use document::{GraphDocument, GraphEdge, GraphMode};
pub use genre::{GenreCategory, GenreParseError};
pub use ids::ArtistId;
pub use link::{ArtistPair, CanonicalEdge, LinkEvent, StaticEdge};
pub use spell::Spell;
pub use year::{MIN_VALID_YEAR, Year, is_valid_year};
