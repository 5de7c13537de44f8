//! Open Library cover image URLs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Public covers endpoint. No authentication required.
pub const OPEN_LIBRARY_COVERS_URL: &str = "https://covers.openlibrary.org/b";

/// Size code accepted by the covers endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoverSize {
    #[serde(rename = "S")]
    Small,
    #[default]
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl CoverSize {
    pub fn code(self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }
}

impl fmt::Display for CoverSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string is not one of `S`, `M`, `L`.
#[derive(Debug, Error)]
#[error("unknown cover size: {0:?}")]
pub struct UnknownCoverSize(pub String);

impl FromStr for CoverSize {
    type Err = UnknownCoverSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Self::Small),
            "M" => Ok(Self::Medium),
            "L" => Ok(Self::Large),
            other => Err(UnknownCoverSize(other.to_owned())),
        }
    }
}

/// `<covers_base>/id/<cover_id>-<size>.jpg`, or an empty string when there is
/// no usable cover id (absent or zero).
pub fn cover_url(covers_base: &str, cover_id: Option<i64>, size: CoverSize) -> String {
    match cover_id {
        Some(id) if id != 0 => format!(
            "{}/id/{}-{}.jpg",
            covers_base.trim_end_matches('/'),
            id,
            size.code()
        ),
        _ => String::new(),
    }
}
